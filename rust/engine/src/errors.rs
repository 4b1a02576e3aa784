use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted: all {dealt} cards have been dealt")]
    DeckExhausted { dealt: usize },
    #[error("Card {0} appears more than once in a stacked deck")]
    DuplicateCard(Card),
    #[error("Input closed while waiting for a choice")]
    InputClosed,
    #[error("Console failure: {0}")]
    Console(String),
}
