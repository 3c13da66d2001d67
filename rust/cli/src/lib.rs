//! # pokerhand CLI Library
//!
//! Command-line front end for the pokerhand engine: classify hands, compare
//! two hands, rank a list of hands and inspect configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["pokerhand", "classify", "AS TS QS JS KS"];
//! let code = pokerhand_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "TS JS QS KS AS: Royal Flush (high card A)\n"
//! );
//! ```
//!
//! ## Available Subcommands
//!
//! - `classify`: Print the combination and high card of each hand
//! - `compare`: Report which of two hands wins
//! - `rank`: Sort hands read from a file or stdin, strongest first
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, PokerhandCli};
use commands::{
    handle_cfg_command, handle_classify_command, handle_compare_command, handle_rank_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["classify", "compare", "rank", "cfg"];

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
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerhandCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    match dispatch(cli, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cli: PokerhandCli, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?.with_locale_override(cli.locale);
    match cli.cmd {
        Commands::Cfg => handle_cfg_command(&resolved, out),
        Commands::Classify { hands, json } => {
            handle_classify_command(&hands, json, &resolved.config, out)
        }
        Commands::Compare { first, second } => {
            handle_compare_command(&first, &second, &resolved.config, out)
        }
        Commands::Rank { input } => match input {
            Some(path) => {
                let file = std::fs::File::open(&path).map_err(|e| {
                    CliError::InvalidInput(format!("cannot open {}: {}", path.display(), e))
                })?;
                let mut reader = std::io::BufReader::new(file);
                handle_rank_command(&mut reader, &resolved.config, out, err)
            }
            None => {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_rank_command(&mut stdin_lock, &resolved.config, out, err)
            }
        },
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Usage: pokerhand <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: pokerhand --help");
            exit_code::ERROR
        }
    }
}
