//! Deck command handler.
//!
//! Prints the 52 cards in the order a given seed shuffles them, i.e. the
//! order `play --seed` would deal them.

use super::resolve_seed;
use crate::config;
use crate::error::CliError;
use crate::ui;
use blackjack_engine::deck::{Deck, SeededShuffler};
use std::io::Write;

/// Handle the deck command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed (default: config, then random)
/// * `out` - Output stream for the seed line and the card line
pub fn handle_deck_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let config = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = resolve_seed(seed, &config);
    let deck = Deck::shuffled(&mut SeededShuffler::from_seed(seed));

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "{}", ui::format_cards(deck.cards()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_deck_command_prints_52_cards() {
        let mut out = Vec::new();
        handle_deck_command(Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Seed: 42"));
        let cards: Vec<&str> = lines.next().unwrap().split(' ').collect();
        assert_eq!(cards.len(), 52);
        let unique: std::collections::HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    #[serial]
    fn test_deck_command_is_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deck_command(Some(5), &mut out1).unwrap();
        handle_deck_command(Some(5), &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce same output");
    }
}
