use crate::deck::Deck;
use crate::errors::GameError;
use crate::participant::Participant;
use crate::table::{Choice, RoundEvent, Table};

/// Scores above this are bust.
pub const TARGET_SCORE: u32 = 21;

/// How the player's turn ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayerTurn {
    /// The player chose to stop drawing
    Standing,
    /// A hit took the score over [`TARGET_SCORE`]
    Busted,
}

/// Runs the interactive player turn.
///
/// Asks the table for a choice until the player stands or a hit busts them.
/// The opening two cards must already have been dealt and checked for a bust.
///
/// # Errors
///
/// Returns [`GameError`] when the deck runs out or the table fails; a table
/// that cannot produce more input reports [`GameError::InputClosed`].
pub fn player_turn(
    player: &mut Participant,
    deck: &mut Deck,
    table: &mut dyn Table,
) -> Result<PlayerTurn, GameError> {
    table.announce(RoundEvent::TurnStarted(player))?;

    loop {
        match table.choose(player)? {
            Choice::Stand => {
                tracing::debug!(score = player.score(), "player stands");
                return Ok(PlayerTurn::Standing);
            }
            Choice::Hit => {
                player.draw(deck, table)?;
                table.announce(RoundEvent::Hand(player))?;
                if player.is_bust() {
                    return Ok(PlayerTurn::Busted);
                }
            }
        }
    }
}

/// Runs the dealer's fixed policy and returns whether the dealer went bust.
///
/// The dealer draws while its score is below `player_score` and nothing else
/// stops it: a dealer that is already past 21 but still below the player
/// keeps drawing. Bust is only looked at once drawing has stopped.
///
/// # Errors
///
/// Returns [`GameError`] when the deck runs out or the table fails.
pub fn dealer_turn(
    dealer: &mut Participant,
    deck: &mut Deck,
    player_score: u32,
    table: &mut dyn Table,
) -> Result<bool, GameError> {
    table.announce(RoundEvent::TurnStarted(dealer))?;

    while dealer.score() < player_score {
        dealer.draw(deck, table)?;
    }

    let busted = dealer.is_bust();
    if !busted {
        table.announce(RoundEvent::Stands(dealer))?;
    }
    table.announce(RoundEvent::Hand(dealer))?;
    Ok(busted)
}
