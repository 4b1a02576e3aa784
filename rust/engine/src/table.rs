//! The seam between the game rules and whatever presents them.
//!
//! The engine never touches stdin or stdout. It asks a [`Table`] for the
//! player's decisions and reports everything worth showing as a
//! [`RoundEvent`]; the CLI implements `Table` over a terminal, tests implement
//! it with a script.

use crate::cards::Card;
use crate::errors::GameError;
use crate::participant::Participant;

/// A player's decision at the prompt.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Choice {
    /// Take another card
    Hit,
    /// Keep the current hand
    Stand,
}

/// Something that happened during a round, in the order it happened.
#[derive(Debug, Clone, Copy)]
pub enum RoundEvent<'a> {
    /// The round is about to deal its first card
    Welcome,
    /// `who` was dealt `card`; their hand and score already include it
    CardDrawn { who: &'a Participant, card: Card },
    /// Full hand and score of a participant
    Hand(&'a Participant),
    /// A participant's turn begins
    TurnStarted(&'a Participant),
    /// The dealer finished drawing without going bust
    Stands(&'a Participant),
    /// A participant went over the target score
    Bust(&'a Participant),
}

pub trait Table {
    /// Returns the player's next decision.
    ///
    /// Implementations handle malformed input themselves and only return once
    /// they have a valid [`Choice`].
    ///
    /// # Errors
    ///
    /// [`GameError::InputClosed`] when no more input can arrive.
    fn choose(&mut self, player: &Participant) -> Result<Choice, GameError>;

    fn announce(&mut self, event: RoundEvent<'_>) -> Result<(), GameError>;
}
