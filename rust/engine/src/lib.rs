//! # pokerhand-engine: Five-Card Hand Classification
//!
//! A small card library: a 52-card deck, five-card hands dealt from it, and
//! the predicates that classify those hands. A Monte Carlo driver estimates
//! how often a shuffled deck deals a given shape.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction order
//! - [`deck`] - Shuffling and dealing with a seedable ChaCha20 RNG
//! - [`hand`] - Match counting, straight/flush detection and categories
//! - [`simulation`] - Repeated deal-and-check runs with a result record
//! - [`errors`] - Error types for card, deck and hand operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pokerhand_engine::cards::{Card, Rank, Suit};
//! use pokerhand_engine::hand::{Category, Hand};
//!
//! let hand = Hand::from_cards([
//!     Card::new(Suit::Clubs, Rank::King),
//!     Card::new(Suit::Diamonds, Rank::King),
//!     Card::new(Suit::Hearts, Rank::King),
//!     Card::new(Suit::Spades, Rank::Seven),
//!     Card::new(Suit::Clubs, Rank::Seven),
//! ]);
//!
//! assert_eq!(hand.number_matches(), 8);
//! assert!(hand.is_full_house());
//! assert_eq!(hand.category(), Category::FullHouse);
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use pokerhand_engine::deck::Deck;
//! use pokerhand_engine::hand::Hand;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! deck1.shuffle();
//! deck2.shuffle();
//! assert_eq!(
//!     Hand::deal_from(&mut deck1).unwrap(),
//!     Hand::deal_from(&mut deck2).unwrap()
//! );
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod simulation;
