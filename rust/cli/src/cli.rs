//! Command-line argument definitions.
//!
//! Kept separate from dispatch in `lib.rs` so the parser can be exercised on
//! its own with `try_parse_from`.

use crate::config::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pokerhand",
    version,
    about = "Classify and compare five-card poker hands"
)]
pub struct PokerhandCli {
    /// Language for combination names (overrides config and environment)
    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one or more hands, e.g. `pokerhand classify "AS TS QS JS KS"`
    Classify {
        /// Hands of five space-separated cards (quote each hand)
        #[arg(required = true)]
        hands: Vec<String>,
        /// Emit one JSON object per hand instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compare two hands and report which one wins
    Compare {
        /// First hand
        first: String,
        /// Second hand
        second: String,
    },
    /// Rank hands read one per line, strongest first
    Rank {
        /// Input file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
