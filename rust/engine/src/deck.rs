use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// A standard 52-card deck dealt from the front.
///
/// Cards already dealt are never handed out again; `shuffle` only reorders
/// what is still in the deck.
///
/// # Examples
///
/// ```
/// use pokerhand_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// deck.shuffle();
/// let card = deck.deal().unwrap();
/// assert_eq!(deck.remaining(), 51);
/// assert!(!deck.cards().contains(&card));
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Fresh deck in construction order, shuffling from an entropy-seeded stream.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Uniform Fisher-Yates over the cards not yet dealt.
    pub fn shuffle(&mut self) {
        self.cards[self.position..].shuffle(&mut self.rng);
    }

    pub fn deal(&mut self) -> Result<Card, EngineError> {
        let c = *self
            .cards
            .get(self.position)
            .ok_or(EngineError::EmptyDeck)?;
        self.position += 1;
        Ok(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Cards still in the deck, front first.
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
