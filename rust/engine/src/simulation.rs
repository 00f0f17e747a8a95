//! Monte Carlo estimation of how often a freshly shuffled deck deals a given hand shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::Hand;

/// Hand shape a simulation counts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Predicate {
    Pair,
    TwoPair,
    Trips,
    FullHouse,
    Quads,
    Flush,
    Straight,
    StraightFlush,
}

impl Predicate {
    pub fn all() -> [Predicate; 8] {
        [
            Predicate::Pair,
            Predicate::TwoPair,
            Predicate::Trips,
            Predicate::FullHouse,
            Predicate::Quads,
            Predicate::Flush,
            Predicate::Straight,
            Predicate::StraightFlush,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Predicate::Pair => "pair",
            Predicate::TwoPair => "two-pair",
            Predicate::Trips => "trips",
            Predicate::FullHouse => "full-house",
            Predicate::Quads => "quads",
            Predicate::Flush => "flush",
            Predicate::Straight => "straight",
            Predicate::StraightFlush => "straight-flush",
        }
    }

    pub fn matches(self, hand: &Hand) -> bool {
        match self {
            Predicate::Pair => hand.is_pair(),
            Predicate::TwoPair => hand.is_two_pair(),
            Predicate::Trips => hand.is_trips(),
            Predicate::FullHouse => hand.is_full_house(),
            Predicate::Quads => hand.is_quads(),
            Predicate::Flush => hand.is_flush(),
            Predicate::Straight => hand.is_straight(),
            Predicate::StraightFlush => hand.is_straight_flush(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Predicate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Predicate::all()
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| EngineError::UnknownPredicate(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Stop once this many matching hands have been dealt.
    pub target_successes: u64,
    pub predicate: Predicate,
    /// Base seed; trial `i` shuffles with `seed + i`. `None` picks one at random.
    pub seed: Option<u64>,
    /// Give up after this many trials even if the target was not reached.
    pub max_trials: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            target_successes: 10,
            predicate: Predicate::Straight,
            seed: None,
            max_trials: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimResult {
    pub predicate: Predicate,
    pub base_seed: u64,
    pub trials: u64,
    pub successes: u64,
    /// Matching hands in the order they were dealt.
    pub observed: Vec<Hand>,
    /// False when `max_trials` stopped the run short of the target.
    pub completed: bool,
}

impl SimResult {
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        100.0 * self.probability()
    }
}

/// Deals hands from fresh shuffled decks until `target_successes` of them satisfy the predicate.
///
/// # Errors
///
/// Propagates [`EngineError::EmptyDeck`] from dealing; a fresh deck never runs short.
///
/// # Examples
///
/// ```
/// use pokerhand_engine::simulation::{run, Predicate, SimConfig};
///
/// let result = run(&SimConfig {
///     target_successes: 3,
///     predicate: Predicate::Pair,
///     seed: Some(7),
///     max_trials: None,
/// })
/// .unwrap();
/// assert_eq!(result.successes, 3);
/// assert!(result.observed.iter().all(|h| h.is_pair()));
/// ```
pub fn run(config: &SimConfig) -> Result<SimResult, EngineError> {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let mut trials = 0u64;
    let mut observed = Vec::new();

    while (observed.len() as u64) < config.target_successes {
        if config.max_trials.is_some_and(|max| trials >= max) {
            warn!(
                predicate = %config.predicate,
                trials,
                successes = observed.len(),
                "trial limit reached before target"
            );
            break;
        }
        let mut deck = Deck::new_with_seed(base_seed.wrapping_add(trials));
        deck.shuffle();
        trials += 1;
        let hand = Hand::deal_from(&mut deck)?;
        if config.predicate.matches(&hand) {
            debug!(trial = trials, hand = %hand, "matching hand");
            observed.push(hand);
        }
    }

    let successes = observed.len() as u64;
    let result = SimResult {
        predicate: config.predicate,
        base_seed,
        trials,
        successes,
        observed,
        completed: successes >= config.target_successes,
    };
    info!(
        predicate = %result.predicate,
        trials = result.trials,
        successes = result.successes,
        probability = result.probability(),
        "simulation finished"
    );
    Ok(result)
}
