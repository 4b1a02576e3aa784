//! Command handler modules for the Blackjack CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<_, CliError>`
//! - Dependency injection: input/output streams passed as parameters
//! - Error propagation: all errors returned via `CliError`

mod cfg;
mod deck;
mod play;

pub use cfg::handle_cfg_command;
pub use deck::handle_deck_command;
pub use play::handle_play_command;

use crate::config::Config;

/// Seed for this run: the flag, then configuration, then fresh entropy.
pub(crate) fn resolve_seed(flag: Option<u64>, config: &Config) -> u64 {
    flag.or(config.seed).unwrap_or_else(rand::random)
}
