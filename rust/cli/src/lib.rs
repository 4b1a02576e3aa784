//! # Blackjack CLI Library
//!
//! Console front end for the `blackjack-engine` crate: parses arguments,
//! loads configuration and plays a round over stdin/stdout.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching
//! subcommand; [`run_with_input`] does the same with an explicit input stream.
//!
//! ```
//! use std::io;
//! let args = vec!["blackjack", "deck", "--seed", "42"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play` (default): play one round against the dealer
//! - `deck`: print the shuffled deck for a seed
//! - `cfg`: display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
mod config;
pub mod console;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{handle_cfg_command, handle_deck_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application, reading answers from stdin.
///
/// # Returns
///
/// Exit code: `0` for success (whatever the round's outcome), `2` for
/// errors, `130` when input ends mid-round
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], with the player's answers read from `input`.
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new(b"s\n".to_vec());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = blackjack_cli::run_with_input(
///     ["blackjack", "play", "--seed", "7"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd.unwrap_or_default() {
        Commands::Play { seed, name } => {
            handle_play_command(seed, name, out, err, input).map(|_| ())
        }
        Commands::Deck { seed } => handle_deck_command(seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::warn!(reason = %msg, "round abandoned");
            let _ = writeln!(err);
            let _ = ui::write_error(err, &msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
