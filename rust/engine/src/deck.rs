use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Source of random permutations for the deck.
pub trait Shuffler {
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Fisher–Yates shuffle driven by a seeded ChaCha20 stream.
///
/// The same seed always produces the same permutation, which is what makes a
/// round replayable from its seed.
#[derive(Debug)]
pub struct SeededShuffler {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededShuffler {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Shuffler for SeededShuffler {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// The 52 distinct cards in some order, plus a cursor over the ones already dealt.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Unshuffled deck in canonical order.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    pub fn shuffled(shuffler: &mut dyn Shuffler) -> Self {
        let mut deck = Self::new();
        deck.shuffle(shuffler);
        deck
    }

    /// Deck whose first cards are `top` (dealt in that order), followed by the
    /// rest of the 52 in canonical order.
    ///
    /// # Errors
    ///
    /// [`GameError::DuplicateCard`] if `top` names the same card twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackjack_engine::cards::{Card, Rank, Suit};
    /// use blackjack_engine::deck::Deck;
    ///
    /// let seven = Card::new(Rank::Seven, Suit::Clubs);
    /// let mut deck = Deck::stacked(&[seven]).unwrap();
    /// assert_eq!(deck.remaining(), 52);
    /// assert_eq!(deck.deal_card(), Ok(seven));
    /// ```
    pub fn stacked(top: &[Card]) -> Result<Self, GameError> {
        let mut cards = Vec::with_capacity(52);
        for &card in top {
            if cards.contains(&card) {
                return Err(GameError::DuplicateCard(card));
            }
            cards.push(card);
        }
        cards.extend(full_deck().into_iter().filter(|c| !top.contains(c)));
        Ok(Self { cards, position: 0 })
    }

    /// Permutes every card and rewinds the cursor.
    pub fn shuffle(&mut self, shuffler: &mut dyn Shuffler) {
        shuffler.shuffle(&mut self.cards);
        self.position = 0;
    }

    /// Deals the card under the cursor.
    ///
    /// # Errors
    ///
    /// [`GameError::DeckExhausted`] once all 52 cards have been dealt.
    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        let card = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(GameError::DeckExhausted {
                dealt: self.position,
            })?;
        self.position += 1;
        Ok(card)
    }

    pub fn dealt(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
