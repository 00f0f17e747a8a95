//! Card, hand and deck formatters for terminal display.
//!
//! Unicode suit symbols are used wherever the terminal can render them,
//! with an ASCII fallback for legacy Windows consoles.
//!
//! - **Unicode mode**: `A♠`, `10♦`
//! - **ASCII mode**: `As`, `10d`
//!
//! Both spellings parse back into the same [`Card`].
//!
//! ## Example
//!
//! ```rust
//! use pokerhand_engine::cards::{Card, Rank, Suit};
//! use pokerhand_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use pokerhand_engine::cards::{Card, Suit};
use pokerhand_engine::deck::Deck;
use pokerhand_engine::hand::Hand;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Format a Card as rank followed by suit, e.g. "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank(), format_suit(&card.suit()))
}

/// Bracketed, comma-separated list such as "[A♠, K♥]", or "[]" if empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(", "))
}

pub fn format_hand(hand: &Hand) -> String {
    format_cards(hand.cards())
}

/// Remaining deck cards joined by ", " without brackets.
pub fn format_deck(deck: &Deck) -> String {
    let formatted: Vec<String> = deck.cards().iter().map(format_card).collect();
    formatted.join(", ")
}
