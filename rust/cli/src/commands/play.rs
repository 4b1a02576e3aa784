//! # Play Command
//!
//! One interactive round of Blackjack against the dealer.
//!
//! The deck is shuffled once from a seed (flag, configuration, or fresh
//! entropy), the engine plays the round through a [`ConsoleTable`], and the
//! outcome is printed as text. The exit status does not depend on whether the
//! player won.

use super::resolve_seed;
use crate::config::{self, validate_player_name};
use crate::console::ConsoleTable;
use crate::error::CliError;
use crate::ui;
use blackjack_engine::deck::{Deck, SeededShuffler};
use blackjack_engine::game::{EndState, play_round};
use std::io::{BufRead, Write};

/// Handle the play command: one interactive round.
///
/// # Arguments
///
/// * `seed` - RNG seed for reproducibility (default: config, then random)
/// * `name` - Player display name (default: config, then `Player`)
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input and errors
/// * `stdin` - Input stream for hit/stand answers
///
/// # Returns
///
/// * `Ok(EndState)` once the round is decided
/// * `Err(CliError::Interrupted)` if input ends mid-round
/// * `Err(CliError)` for configuration, engine or I/O failures
pub fn handle_play_command(
    seed: Option<u64>,
    name: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<EndState, CliError> {
    let config = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = resolve_seed(seed, &config);
    let name = name.unwrap_or(config.player_name);
    validate_player_name(&name).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    tracing::debug!(seed, player = %name, "starting round");

    let mut shuffler = SeededShuffler::from_seed(seed);
    let mut deck = Deck::shuffled(&mut shuffler);

    let result = {
        let mut table = ConsoleTable::new(stdin, out, err);
        play_round(&mut deck, name.trim(), &mut table)?
    };

    writeln!(out)?;
    writeln!(out, "{}", ui::outcome_message(result.outcome))?;
    Ok(result.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    fn play(seed: u64, input: &str) -> (Result<EndState, CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(Some(seed), None, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    #[serial]
    fn test_play_standing_finishes_round() {
        let (result, out, _) = play(42, "s\n");
        let outcome = result.expect("round should finish");
        assert!(out.starts_with("Welcome to Blackjack!"));
        assert!(out.contains("Dealer draws a card:"));
        assert!(out.contains(ui::outcome_message(outcome)));
    }

    #[test]
    #[serial]
    fn test_play_same_seed_same_transcript() {
        let (_, out1, _) = play(7, "s\n");
        let (_, out2, _) = play(7, "s\n");
        assert_eq!(out1, out2);
    }

    #[test]
    #[serial]
    fn test_play_hitting_repeatedly_busts() {
        // eleven hits bust any opening hand, so input never runs out
        let (result, out, _) = play(3, "h\nh\nh\nh\nh\nh\nh\nh\nh\nh\nh\n");
        match result {
            Ok(outcome) => {
                assert_eq!(outcome, EndState::Loss);
                assert!(out.contains("Bust!"));
            }
            Err(e) => panic!("eleven hits always bust, got {:?}", e),
        }
    }

    #[test]
    #[serial]
    fn test_play_uses_custom_name() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"s\n".to_vec());
        handle_play_command(
            Some(11),
            Some("Alice".into()),
            &mut out,
            &mut err,
            &mut stdin,
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Alice draws a card:"));
    }

    #[test]
    #[serial]
    fn test_play_rejects_blank_name() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(b"s\n".to_vec());
        let result =
            handle_play_command(Some(1), Some("  ".into()), &mut out, &mut err, &mut stdin);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
