use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid rank: {0:?}")]
    InvalidRank(String),
    #[error("Invalid suit: {0:?}")]
    InvalidSuit(String),
    #[error("No cards left in the deck")]
    EmptyDeck,
    #[error("Unknown predicate: {0:?}")]
    UnknownPredicate(String),
    #[error("A hand needs exactly {expected} cards, got {actual}")]
    WrongCardCount { expected: usize, actual: usize },
    #[error("Card {0} appears more than once in the hand")]
    DuplicateCard(String),
}
