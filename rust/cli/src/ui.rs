//! UI helper functions for terminal output formatting.

use blackjack_engine::cards::Card;
use blackjack_engine::game::EndState;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Cards separated by single spaces, e.g. `TD 9H`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closing line printed after a round.
pub fn outcome_message(outcome: EndState) -> &'static str {
    match outcome {
        EndState::Win => "You won!!!",
        EndState::Tie => "A tie!",
        EndState::Loss => "You lost :(",
    }
}
