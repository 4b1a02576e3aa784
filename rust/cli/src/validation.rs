//! Parsing of the player's answer at the hit/stand prompt.

use blackjack_engine::table::Choice;

/// Result of parsing one line typed at the prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Recognized decision
    Choice(Choice),
    /// Anything else, with the message to show before re-prompting
    Invalid(String),
}

/// Parse one prompt line into a [`Choice`].
///
/// Only the first non-whitespace character counts and it must be a lowercase
/// `h` (hit) or `s` (stand), so `hit` is accepted but `H` is not.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_choice, ParseResult};
/// use blackjack_engine::table::Choice;
///
/// assert_eq!(parse_choice("h"), ParseResult::Choice(Choice::Hit));
/// assert_eq!(parse_choice("stand"), ParseResult::Choice(Choice::Stand));
/// assert!(matches!(parse_choice("S"), ParseResult::Invalid(_)));
///
/// match parse_choice("x") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_choice(input: &str) -> ParseResult {
    let Some(first) = input.trim().chars().next() else {
        return ParseResult::Invalid("Empty input. Please enter h or s.".to_string());
    };

    match first {
        'h' => ParseResult::Choice(Choice::Hit),
        's' => ParseResult::Choice(Choice::Stand),
        _ => ParseResult::Invalid(format!(
            "Unrecognized choice '{}'. Please enter h or s.",
            input.trim()
        )),
    }
}
