//! Compare command handler.
//!
//! Prints which of two hands wins (`first`, `second` or `equal`) followed by
//! the classification of each.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_classification;
use pokerhand_engine::hand::{PokerHand, compare_hands};
use std::cmp::Ordering;
use std::io::Write;

pub fn handle_compare_command(
    first: &str,
    second: &str,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let a = PokerHand::new(first)?;
    let b = PokerHand::new(second)?;

    let outcome = match compare_hands(&a, &b) {
        Ordering::Greater => "first",
        Ordering::Less => "second",
        Ordering::Equal => "equal",
    };
    tracing::debug!(first = %a, second = %b, outcome, "compared hands");

    writeln!(out, "{}", outcome)?;
    writeln!(
        out,
        "  first:  {}",
        format_classification(&a, config.locale, config.unicode_suits)
    )?;
    writeln!(
        out,
        "  second: {}",
        format_classification(&b, config.locale, config.unicode_suits)
    )?;
    Ok(())
}
