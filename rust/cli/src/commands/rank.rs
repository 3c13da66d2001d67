//! Rank command handler.
//!
//! Reads one hand per line and prints them strongest first. Hands that tie
//! share a position (`1, 1, 3`). Blank lines are skipped.
//!
//! Every rejected line is reported before the command fails, so a whole file
//! can be fixed in one pass. No ranking is printed if any line is invalid.

use crate::config::Config;
use crate::error::{BatchValidationError, CliError};
use crate::formatters::{format_hand, localized_label};
use crate::ui;
use pokerhand_engine::hand::{PokerHand, rank_hands};
use std::cmp::Ordering;
use std::io::{BufRead, Write};

pub fn handle_rank_command(
    input: &mut dyn BufRead,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut hands = Vec::new();
    let mut errors: Vec<BatchValidationError<String>> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim_end_matches('\r');
        if text.trim().is_empty() {
            continue;
        }
        match PokerHand::new(text) {
            Ok(hand) => hands.push(hand),
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "rejected hand");
                errors.push(BatchValidationError {
                    item_context: format!("line {}", idx + 1),
                    message: e.to_string(),
                });
            }
        }
    }

    if !errors.is_empty() {
        for e in &errors {
            ui::write_error(err, &e.to_string())?;
        }
        return Err(CliError::InvalidInput(format!(
            "{} invalid hand(s) in input",
            errors.len()
        )));
    }
    if hands.is_empty() {
        return Err(CliError::InvalidInput("no hands to rank".into()));
    }

    rank_hands(&mut hands);
    tracing::debug!(count = hands.len(), "ranked hands");

    let mut position = 1;
    for (i, hand) in hands.iter().enumerate() {
        if i > 0 && hand.cmp(&hands[i - 1]) != Ordering::Equal {
            position = i + 1;
        }
        writeln!(
            out,
            "{}. {}: {}",
            position,
            format_hand(hand, config.unicode_suits),
            localized_label(hand.combination(), config.locale)
        )?;
    }
    Ok(())
}
