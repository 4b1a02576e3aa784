//! # blackjack-engine: Blackjack Game Core
//!
//! The rules of a single round of Blackjack against a dealer, with no I/O of
//! its own. Decisions and announcements go through the [`table::Table`]
//! trait, and the deck is shuffled by an injected [`deck::Shuffler`] so that
//! every round can be replayed from a seed.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and card values
//! - [`deck`] - 52-card deck with a dealing cursor and seeded shuffling
//! - [`participant`] - Player and dealer hands with running scores
//! - [`rules`] - Player turn, dealer policy and the target score
//! - [`game`] - Round orchestration and outcome
//! - [`table`] - Console-facing seam (choices and round events)
//! - [`errors`] - Error types for game operations
//!
//! ## House Rules
//!
//! - Aces always count 11, face cards 10.
//! - The dealer draws while below the player's final score.
//! - Two aces on the opening deal lose on the spot.
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use blackjack_engine::deck::{Deck, SeededShuffler};
//!
//! let deck1 = Deck::shuffled(&mut SeededShuffler::from_seed(42));
//! let deck2 = Deck::shuffled(&mut SeededShuffler::from_seed(42));
//! assert_eq!(deck1.cards(), deck2.cards());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod participant;
pub mod rules;
pub mod table;
