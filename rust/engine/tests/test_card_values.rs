use blackjack_engine::cards::{all_ranks, all_suits, full_deck, Card, Rank, Suit};

#[test]
fn every_card_is_worth_between_2_and_11() {
    for card in full_deck() {
        assert!((2..=11).contains(&card.value()), "{card} out of range");
    }
}

#[test]
fn pip_cards_are_worth_their_face_value() {
    let ranks = all_ranks();
    for (index, &rank) in ranks[..8].iter().enumerate() {
        assert_eq!(rank.value() as usize, index + 2, "{:?}", rank);
    }
}

#[test]
fn tens_and_faces_are_worth_10_and_aces_11() {
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(rank.value(), 10);
    }
    for suit in all_suits() {
        assert_eq!(Card::new(Rank::Ace, suit).value(), 11);
    }
}

#[test]
fn value_ignores_suit() {
    for rank in all_ranks() {
        let clubs = Card::new(rank, Suit::Clubs).value();
        assert!(all_suits()
            .iter()
            .all(|&s| Card::new(rank, s).value() == clubs));
    }
}
