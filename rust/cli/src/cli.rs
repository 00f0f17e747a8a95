//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use pokerhand_engine::simulation::Predicate;

#[derive(Parser, Debug)]
#[command(
    name = "pokerhand",
    version,
    about = "Deal five-card poker hands and estimate how often each shape appears"
)]
pub struct PokerhandCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a fresh deck, shuffle it, print it again and deal one card
    Deck {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Deal hands from fresh decks until enough of them match a predicate
    Sim {
        /// Matching hands to collect [default: 10]
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        target: Option<u64>,
        /// pair, two-pair, trips, full-house, quads, flush, straight or straight-flush [default: straight]
        #[arg(long)]
        predicate: Option<Predicate>,
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many hands even if the target was not reached
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        max_trials: Option<u64>,
        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify five cards, e.g. --cards "A♠ K♠ Q♠ J♠ 10♠"
    Eval {
        #[arg(long)]
        cards: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
