//! # pokerhand CLI Library
//!
//! Command-line front end for the `pokerhand-engine` crate: the deck
//! demonstration, the Monte Carlo hand-shape simulation, single-hand
//! evaluation and configuration display.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokerhand", "sim", "--predicate", "straight", "--target", "10"];
//! let code = pokerhand_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deck`: Print, shuffle and deal from a fresh deck
//! - `sim`: Estimate the probability of a hand shape
//! - `eval`: Classify five given cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, PokerhandCli};
use commands::{
    handle_cfg_command, handle_deck_command, handle_eval_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["deck", "sim", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pokerhand", "deck", "--seed", "42"];
/// let code = pokerhand_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerhandCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: pokerhand <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: pokerhand --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Deck { seed } => handle_deck_command(seed, out),
        Commands::Sim {
            target,
            predicate,
            seed,
            max_trials,
            json,
        } => handle_sim_command(target, predicate, seed, max_trials, json, out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // handlers that validate input have already reported the problem
        Err(CliError::InvalidInput(_) | CliError::Config(_)) => exit_code::ERROR,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_every_subcommand() {
        let commands = vec![
            vec!["pokerhand", "deck"],
            vec!["pokerhand", "deck", "--seed", "1"],
            vec!["pokerhand", "sim"],
            vec![
                "pokerhand",
                "sim",
                "--target",
                "3",
                "--predicate",
                "full-house",
                "--seed",
                "5",
                "--max-trials",
                "100",
                "--json",
            ],
            vec!["pokerhand", "eval", "--cards", "As Ks Qs Js 10s"],
            vec!["pokerhand", "cfg"],
        ];

        for cmd_args in commands {
            let result = PokerhandCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_sim_predicate_parsed_from_str() {
        let cli =
            PokerhandCli::try_parse_from(["pokerhand", "sim", "--predicate", "two-pair"]).unwrap();
        match cli.cmd {
            Commands::Sim { predicate, .. } => {
                assert_eq!(
                    predicate,
                    Some(pokerhand_engine::simulation::Predicate::TwoPair)
                )
            }
            _ => panic!("Expected Commands::Sim variant"),
        }
    }

    #[test]
    fn test_sim_rejects_unknown_predicate_and_zero_target() {
        assert!(PokerhandCli::try_parse_from(["pokerhand", "sim", "--predicate", "royal"]).is_err());
        assert!(PokerhandCli::try_parse_from(["pokerhand", "sim", "--target", "0"]).is_err());
        assert!(PokerhandCli::try_parse_from(["pokerhand", "sim", "--max-trials", "0"]).is_err());
    }

    #[test]
    fn test_eval_requires_cards() {
        assert!(PokerhandCli::try_parse_from(["pokerhand", "eval"]).is_err());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["pokerhand", "shuffle"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        for c in COMMANDS {
            assert!(stderr.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["pokerhand", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("Usage"));
        assert!(err.is_empty());
    }
}
