//! Command handler modules for the pokerhand CLI.
//!
//! Each command lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in, never grabbed globally
//! - Errors propagated via `CliError`

mod cfg;
mod deck;
mod eval;
mod sim;

pub use cfg::handle_cfg_command;
pub use deck::handle_deck_command;
pub use eval::handle_eval_command;
pub use sim::handle_sim_command;
