use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// One of the four suits of a standard 52-card deck.
/// Suits have no ranking of their own; the declaration order only fixes deck construction order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    /// Last in deck order, so a fresh deck ends with the spades.
    Spades,
}

impl Suit {
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Strict lookup: only the four suit symbols are accepted.
    pub fn from_symbol(s: &str) -> Option<Suit> {
        all_suits().into_iter().find(|suit| suit.symbol() == s)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts a suit symbol or its ASCII letter (`c`, `d`, `h`, `s`, any case).
impl FromStr for Suit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(suit) = Suit::from_symbol(s) {
            return Ok(suit);
        }
        let mut chars = s.chars();
        match (chars.next().map(|c| c.to_ascii_lowercase()), chars.next()) {
            (Some(c), None) => all_suits()
                .into_iter()
                .find(|suit| suit.letter() == c)
                .ok_or_else(|| EngineError::InvalidSuit(s.to_string())),
            _ => Err(EngineError::InvalidSuit(s.to_string())),
        }
    }
}

/// The face value of a card, ordered Two through Ace.
/// Ace is always high; there is no Ace-low ordering anywhere in this crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    // Discriminants equal the pip value; `index()` shifts them to start at zero.
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Position in the fixed rank order: Two is 0, Ace is 12.
    pub fn index(self) -> usize {
        self as usize - 2
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_ranks()
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| EngineError::InvalidRank(s.to_string()))
    }
}

/// A single playing card.
///
/// `==`, `Hash` and `Ord` use the full identity (rank, then suit), so a deck
/// never holds two "equal" cards. The rank-only comparisons the hand
/// evaluator reasons with are the named methods [`Card::same_rank`] and
/// [`Card::outranks`].
///
/// ```
/// use pokerhand_engine::cards::Card;
///
/// let a: Card = "A♣".parse().unwrap();
/// let b: Card = "A♠".parse().unwrap();
/// assert!(a.same_rank(&b));
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from a suit symbol and a rank label (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    ///
    /// The rank is validated before the suit.
    pub fn parse(suit: &str, rank: &str) -> Result<Self, EngineError> {
        let rank: Rank = rank.parse()?;
        let suit =
            Suit::from_symbol(suit).ok_or_else(|| EngineError::InvalidSuit(suit.to_string()))?;
        Ok(Self::new(suit, rank))
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    /// True when this card's rank index is strictly greater; suits never break ties.
    pub fn outranks(&self, other: &Card) -> bool {
        self.rank.index() > other.rank.index()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses the display form (`"A♠"`, `"10♦"`) or its ASCII spelling (`"As"`, `"10d"`).
impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (split, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| EngineError::InvalidRank(String::new()))?;
        let rank: Rank = s[..split].parse()?;
        let suit: Suit = s[split..].parse()?;
        Ok(Self::new(suit, rank))
    }
}

/// Suits in deck construction order.
pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

/// Ranks from lowest to highest.
pub fn all_ranks() -> [Rank; 13] {
    use Rank::*;
    [
        Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
    ]
}

/// The 52 cards of a new deck: every rank of clubs, then diamonds, hearts and spades.
pub fn full_deck() -> Vec<Card> {
    all_suits()
        .into_iter()
        .flat_map(|suit| all_ranks().into_iter().map(move |rank| Card::new(suit, rank)))
        .collect()
}
