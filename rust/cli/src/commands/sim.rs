//! Simulation command handler: estimate how often a hand shape is dealt.
//!
//! Flags override the resolved configuration (file and `POKERHAND_*`
//! environment variables), which in turn overrides the built-in defaults of
//! ten straights with no trial limit.
//!
//! # Output
//!
//! Each matching hand is printed as it is found, followed by
//!
//! ```text
//! probability of a straight is 0.4012841091492777%
//! ```
//!
//! With `--json` the whole result record is printed instead.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_hand;
use crate::ui;
use pokerhand_engine::simulation::{self, Predicate, SimConfig};
use std::io::Write;

/// Handle the sim command.
///
/// # Arguments
///
/// * `target` - Number of matching hands to collect before stopping
/// * `predicate` - Hand shape to count
/// * `seed` - Base RNG seed (trial `i` shuffles with `seed + i`)
/// * `max_trials` - Optional cap on dealt hands
/// * `json` - Print the result record as JSON instead of text
/// * `out` - Output stream for results
/// * `err` - Output stream for warnings and errors
///
/// # Errors
///
/// `CliError::Config` when the configuration cannot be resolved,
/// `CliError::InvalidInput` for a zero target or trial cap.
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    target: Option<u64>,
    predicate: Option<Predicate>,
    seed: Option<u64>,
    max_trials: Option<u64>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(e.to_string()));
        }
    };

    let sim_config = SimConfig {
        target_successes: target.unwrap_or(cfg.target),
        predicate: predicate.unwrap_or(cfg.predicate),
        seed: seed.or(cfg.seed),
        max_trials: max_trials.or(cfg.max_trials),
    };
    if sim_config.target_successes == 0 {
        ui::write_error(err, "target must be >= 1")?;
        return Err(CliError::InvalidInput("target must be >= 1".to_string()));
    }
    if sim_config.max_trials == Some(0) {
        ui::write_error(err, "max-trials must be >= 1")?;
        return Err(CliError::InvalidInput("max-trials must be >= 1".to_string()));
    }

    let result = simulation::run(&sim_config)?;

    if !result.completed {
        ui::display_warning(
            err,
            &format!(
                "stopped after {} trials with {} of {} {} hands",
                result.trials, result.successes, sim_config.target_successes, result.predicate
            ),
        )?;
    }

    if json {
        let json_str = serde_json::to_string_pretty(&result).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        return Ok(());
    }

    for hand in &result.observed {
        writeln!(out, "{}", format_hand(hand))?;
    }
    writeln!(
        out,
        "probability of a {} is {}%",
        result.predicate,
        result.percentage()
    )?;
    Ok(())
}
