use std::collections::HashSet;

use blackjack_engine::cards::{full_deck, Card};
use blackjack_engine::deck::{Deck, SeededShuffler};
use blackjack_engine::errors::GameError;

#[test]
fn fresh_deck_has_52_unique_cards() {
    let deck = Deck::new();
    let set: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(deck.cards().len(), 52);
    assert_eq!(set.len(), 52, "no (rank, suit) pair may repeat");
}

#[test]
fn shuffle_permutes_without_losing_cards() {
    let deck = Deck::shuffled(&mut SeededShuffler::from_seed(2024));
    let mut shuffled = deck.cards().to_vec();
    assert_ne!(shuffled, full_deck(), "seeded shuffle should move cards");
    shuffled.sort();
    let mut canonical = full_deck();
    canonical.sort();
    assert_eq!(shuffled, canonical);
}

#[test]
fn dealing_52_yields_every_card_once_then_fails() {
    let mut deck = Deck::shuffled(&mut SeededShuffler::from_seed(42));
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert_eq!(deck.remaining(), 0);
    assert_eq!(
        deck.deal_card(),
        Err(GameError::DeckExhausted { dealt: 52 }),
        "53rd deal must fail"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::shuffled(&mut SeededShuffler::from_seed(12345));
    let mut d2 = Deck::shuffled(&mut SeededShuffler::from_seed(12345));
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let d1 = Deck::shuffled(&mut SeededShuffler::from_seed(1));
    let d2 = Deck::shuffled(&mut SeededShuffler::from_seed(2));
    assert_ne!(
        d1.cards(),
        d2.cards(),
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffler_remembers_its_seed() {
    assert_eq!(SeededShuffler::from_seed(77).seed(), 77);
}
