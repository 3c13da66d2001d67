//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (`default`, `file`, `env` or `cli`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "locale": {
//!     "value": "en",
//!     "source": "default"
//!   },
//!   "unicode_suits": {
//!     "value": false,
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "locale": {
            "value": config.locale,
            "source": sources.locale,
        },
        "unicode_suits": {
            "value": config.unicode_suits,
            "source": sources.unicode_suits,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
