use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::rules::TARGET_SCORE;
use crate::table::{RoundEvent, Table};

/// Display name of the house.
pub const DEALER_NAME: &str = "Dealer";

/// Default display name of the human player.
pub const PLAYER_NAME: &str = "Player";

/// Either side of the table: a name, the cards drawn so far and their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    hand: Vec<Card>,
    score: u32,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_bust(&self) -> bool {
        self.score > TARGET_SCORE
    }

    /// Deals the next card to this participant and announces it.
    ///
    /// Returns the value the card added to the score.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::DeckExhausted`] from the deck and any error the
    /// table reports while announcing.
    pub fn draw(&mut self, deck: &mut Deck, table: &mut dyn Table) -> Result<u8, GameError> {
        let card = deck.deal_card()?;
        let value = card.value();
        self.hand.push(card);
        self.score += u32::from(value);
        tracing::debug!(
            participant = %self.name,
            card = %card,
            score = self.score,
            "card drawn"
        );
        table.announce(RoundEvent::CardDrawn { who: &*self, card })?;
        Ok(value)
    }
}
