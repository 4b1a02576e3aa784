use crate::deck::Deck;
use crate::errors::GameError;
use crate::participant::{Participant, DEALER_NAME};
use crate::rules::{dealer_turn, player_turn, PlayerTurn};
use crate::table::{RoundEvent, Table};

/// Result of a round from the player's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EndState {
    Win,
    Loss,
    Tie,
}

impl EndState {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndState::Win => "win",
            EndState::Loss => "loss",
            EndState::Tie => "tie",
        }
    }
}

/// A finished round: the outcome and both final hands.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub outcome: EndState,
    pub player: Participant,
    pub dealer: Participant,
}

/// Compares two non-bust final scores.
pub fn compare_scores(player_score: u32, dealer_score: u32) -> EndState {
    if player_score > dealer_score {
        EndState::Win
    } else if player_score == dealer_score {
        EndState::Tie
    } else {
        EndState::Loss
    }
}

/// Plays one round from an already shuffled deck.
///
/// The dealer gets one card and the player two. A player who opens bust
/// (two aces) loses immediately without either turn being played; otherwise
/// the player's turn runs, then the dealer's against the player's final
/// score, and the first rule that decides the round wins:
/// player bust, dealer bust, then the score comparison.
///
/// # Errors
///
/// Returns [`GameError`] if the deck runs out, the table fails, or input
/// closes before the player has finished.
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::deck::Deck;
/// use blackjack_engine::errors::GameError;
/// use blackjack_engine::game::{play_round, EndState};
/// use blackjack_engine::participant::Participant;
/// use blackjack_engine::table::{Choice, RoundEvent, Table};
///
/// struct AlwaysStand;
///
/// impl Table for AlwaysStand {
///     fn choose(&mut self, _: &Participant) -> Result<Choice, GameError> {
///         Ok(Choice::Stand)
///     }
///     fn announce(&mut self, _: RoundEvent<'_>) -> Result<(), GameError> {
///         Ok(())
///     }
/// }
///
/// let mut deck = Deck::stacked(&[
///     Card::new(Rank::Ten, Suit::Clubs),
///     Card::new(Rank::Ten, Suit::Hearts),
///     Card::new(Rank::Queen, Suit::Hearts),
/// ])
/// .unwrap();
/// let result = play_round(&mut deck, "Player", &mut AlwaysStand).unwrap();
/// // dealer at 10 draws 2C, 3C, 4C and 5C, stopping bust at 24
/// assert_eq!(result.player.score(), 20);
/// assert_eq!(result.dealer.score(), 24);
/// assert_eq!(result.outcome, EndState::Win);
/// ```
pub fn play_round(
    deck: &mut Deck,
    player_name: &str,
    table: &mut dyn Table,
) -> Result<RoundResult, GameError> {
    let mut dealer = Participant::new(DEALER_NAME);
    let mut player = Participant::new(player_name);

    table.announce(RoundEvent::Welcome)?;

    dealer.draw(deck, table)?;
    player.draw(deck, table)?;
    player.draw(deck, table)?;

    let outcome = if player.is_bust() {
        table.announce(RoundEvent::Bust(&player))?;
        EndState::Loss
    } else {
        table.announce(RoundEvent::Hand(&dealer))?;
        table.announce(RoundEvent::Hand(&player))?;
        decide_after_opening(&mut player, &mut dealer, deck, table)?
    };

    tracing::info!(
        outcome = outcome.as_str(),
        player_score = player.score(),
        dealer_score = dealer.score(),
        cards_dealt = deck.dealt(),
        "round finished"
    );

    Ok(RoundResult {
        outcome,
        player,
        dealer,
    })
}

fn decide_after_opening(
    player: &mut Participant,
    dealer: &mut Participant,
    deck: &mut Deck,
    table: &mut dyn Table,
) -> Result<EndState, GameError> {
    if player_turn(player, deck, table)? == PlayerTurn::Busted {
        table.announce(RoundEvent::Bust(player))?;
        return Ok(EndState::Loss);
    }

    if dealer_turn(dealer, deck, player.score(), table)? {
        table.announce(RoundEvent::Bust(dealer))?;
        return Ok(EndState::Win);
    }

    Ok(compare_scores(player.score(), dealer.score()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_scores_checks_win_then_tie_then_loss() {
        assert_eq!(compare_scores(20, 19), EndState::Win);
        assert_eq!(compare_scores(19, 19), EndState::Tie);
        assert_eq!(compare_scores(18, 19), EndState::Loss);
    }

    #[test]
    fn end_state_labels() {
        assert_eq!(EndState::Win.as_str(), "win");
        assert_eq!(EndState::Loss.as_str(), "loss");
        assert_eq!(EndState::Tie.as_str(), "tie");
    }
}
