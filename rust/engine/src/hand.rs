use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;

pub const HAND_SIZE: usize = 5;

// Ordered same-rank pairs contributed by each shape: k cards of one rank give k * (k - 1).
const PAIR_MATCHES: usize = 2;
const TWO_PAIR_MATCHES: usize = 4;
const TRIPS_MATCHES: usize = 6;
const FULL_HOUSE_MATCHES: usize = 8;
const QUADS_MATCHES: usize = 12;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five cards drawn from a [`Deck`].
///
/// Every predicate recomputes from the cards on each call and none of them
/// reorders the hand.
///
/// ```
/// use pokerhand_engine::hand::Hand;
///
/// let hand: Hand = "2♣ 3♦ 4♥ 5♠ 6♣".parse().unwrap();
/// assert!(hand.is_straight());
/// assert_eq!(hand.number_matches(), 0);
///
/// // Ace is high only, so the wheel is not a straight.
/// let wheel: Hand = "A♣ 2♦ 3♥ 4♠ 5♣".parse().unwrap();
/// assert!(!wheel.is_straight());
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Deals five cards from the front of `deck`.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyDeck`] if the deck runs out before the fifth card.
    pub fn deal_from(deck: &mut Deck) -> Result<Self, EngineError> {
        let cards = [
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
            deck.deal()?,
        ];
        Ok(Self { cards })
    }

    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Copy of the cards in ascending rank order (stable, so equal ranks keep hand order).
    pub fn sorted_cards(&self) -> [Card; HAND_SIZE] {
        let mut sorted = self.cards;
        sorted.sort_by_key(|c| c.rank().index());
        sorted
    }

    /// Number of ordered pairs `(i, j)`, `i != j`, whose cards share a rank.
    ///
    /// | shape      | matches |
    /// |------------|---------|
    /// | no pair    | 0       |
    /// | pair       | 2       |
    /// | two pair   | 4       |
    /// | trips      | 6       |
    /// | full house | 8       |
    /// | quads      | 12      |
    pub fn number_matches(&self) -> usize {
        let mut matches = 0;
        for (i, a) in self.cards.iter().enumerate() {
            for (j, b) in self.cards.iter().enumerate() {
                if i != j && a.same_rank(b) {
                    matches += 1;
                }
            }
        }
        matches
    }

    pub fn is_pair(&self) -> bool {
        self.number_matches() == PAIR_MATCHES
    }

    pub fn is_two_pair(&self) -> bool {
        self.number_matches() == TWO_PAIR_MATCHES
    }

    pub fn is_trips(&self) -> bool {
        self.number_matches() == TRIPS_MATCHES
    }

    pub fn is_full_house(&self) -> bool {
        self.number_matches() == FULL_HOUSE_MATCHES
    }

    pub fn is_quads(&self) -> bool {
        self.number_matches() == QUADS_MATCHES
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards[1..].iter().all(|c| c.suit() == suit)
    }

    /// Five distinct ranks spanning exactly four rank indices.
    ///
    /// A-2-3-4-5 spans twelve indices and is therefore not a straight.
    pub fn is_straight(&self) -> bool {
        let sorted = self.sorted_cards();
        let span = sorted[HAND_SIZE - 1].rank().index() - sorted[0].rank().index();
        self.number_matches() == 0 && span == HAND_SIZE - 1
    }

    pub fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    /// Strongest category whose predicate holds.
    pub fn category(&self) -> Category {
        match self.number_matches() {
            QUADS_MATCHES => Category::FourOfAKind,
            FULL_HOUSE_MATCHES => Category::FullHouse,
            TRIPS_MATCHES => Category::ThreeOfAKind,
            TWO_PAIR_MATCHES => Category::TwoPair,
            PAIR_MATCHES => Category::OnePair,
            _ => match (self.is_straight(), self.is_flush()) {
                (true, true) => Category::StraightFlush,
                (false, true) => Category::Flush,
                (true, false) => Category::Straight,
                (false, false) => Category::HighCard,
            },
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", card)?;
        }
        f.write_str("]")
    }
}

/// Five distinct cards separated by whitespace or commas, e.g. `"A♠ K♠ Q♠ J♠ 10♠"`.
impl FromStr for Hand {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(EngineError::DuplicateCard(dup.to_string()));
        }
        let actual = cards.len();
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| EngineError::WrongCardCount {
            expected: HAND_SIZE,
            actual,
        })?;
        Ok(Self { cards })
    }
}
