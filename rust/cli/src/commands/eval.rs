//! Hand evaluation command.
//!
//! Parses five cards from the command line and reports the match count,
//! every classification predicate and the resulting category.

use crate::error::CliError;
use crate::formatters::format_hand;
use crate::ui;
use pokerhand_engine::hand::Hand;
use pokerhand_engine::simulation::Predicate;
use std::io::Write;

/// Handle the eval command.
///
/// # Arguments
///
/// * `cards` - Five cards, e.g. `"A♠ K♠ Q♠ J♠ 10♠"` or `"As Ks Qs Js 10s"`
/// * `out` - Output stream for the report
/// * `err` - Output stream for parse errors
///
/// # Errors
///
/// `CliError::InvalidInput` when the cards do not form a five-card hand.
pub fn handle_eval_command(
    cards: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hand: Hand = match cards.parse() {
        Ok(h) => h,
        Err(e) => {
            let msg = format!("cannot parse hand {:?}: {}", cards, e);
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    writeln!(out, "Hand: {}", format_hand(&hand))?;
    writeln!(out, "Matches: {}", hand.number_matches())?;
    for predicate in Predicate::all() {
        writeln!(out, "{}: {}", predicate, predicate.matches(&hand))?;
    }
    writeln!(out, "Category: {}", hand.category())?;
    Ok(())
}
