//! Command handler modules for the pokerhand CLI.
//!
//! Each command lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and input readers
//!   are passed in, so handlers are tested without a process
//! - Error propagation: all errors propagated via `CliError`

mod cfg;
mod classify;
mod compare;
mod rank;

pub use cfg::handle_cfg_command;
pub use classify::handle_classify_command;
pub use compare::handle_compare_command;
pub use rank::handle_rank_command;
