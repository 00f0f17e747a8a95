//! Deck command handler: the shuffle-and-deal demonstration.
//!
//! Prints a fresh deck in construction order, the same deck after a shuffle,
//! and the card dealt from its front.

use crate::error::CliError;
use crate::formatters::{format_card, format_deck};
use pokerhand_engine::deck::Deck;
use std::io::Write;
use tracing::debug;

/// Handle the deck command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for a reproducible shuffle
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deck_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    debug!(seed = base_seed, "building demo deck");
    let mut deck = Deck::new_with_seed(base_seed);

    writeln!(out, "Initial deck:")?;
    writeln!(out, "{}", format_deck(&deck))?;

    deck.shuffle();
    writeln!(out, "\nShuffled deck:")?;
    writeln!(out, "{}", format_deck(&deck))?;

    writeln!(out, "\nDealing a card:")?;
    let card = deck.deal()?;
    writeln!(out, "{}", format_card(&card))?;
    Ok(())
}
