//! Classify command handler.
//!
//! Parses each hand given on the command line and prints its combination and
//! high card, as text or as one JSON object per line.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_classification, format_hand, localized_label};
use pokerhand_engine::hand::PokerHand;
use std::io::Write;

/// Handle the classify command.
///
/// All hands are validated before anything is printed, so a bad hand in the
/// middle of the list produces no partial output.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for the first hand that fails validation
/// and `CliError::Io` if writing fails.
pub fn handle_classify_command(
    hands: &[String],
    json: bool,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let parsed = hands
        .iter()
        .map(|s| PokerHand::new(s))
        .collect::<Result<Vec<_>, _>>()?;

    for hand in &parsed {
        tracing::debug!(
            hand = %hand,
            combination = ?hand.combination(),
            "classified hand"
        );
        if json {
            let record = serde_json::json!({
                "hand": format_hand(hand, config.unicode_suits),
                "combination": hand.combination(),
                "label": localized_label(hand.combination(), config.locale),
                "strength": hand.combination().strength(),
                "high_card": hand.high_card().symbol().to_string(),
            });
            writeln!(out, "{}", record)?;
        } else {
            writeln!(
                out,
                "{}",
                format_classification(hand, config.locale, config.unicode_suits)
            )?;
        }
    }
    Ok(())
}
