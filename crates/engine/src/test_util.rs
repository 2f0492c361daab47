// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards fixtures helpers for tests.
use railbird_cards::{Card, Rank, Suit};

/// Parses a single card code, e.g. "AH" or "TD".
pub(crate) fn card(s: &str) -> Card {
    let mut chars = s.chars();

    let rank = match chars.next().unwrap() {
        '2' => Rank::Deuce,
        '3' => Rank::Trey,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        c => panic!("invalid rank {c}"),
    };

    let suit = match chars.next().unwrap() {
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        'H' => Suit::Hearts,
        'S' => Suit::Spades,
        c => panic!("invalid suit {c}"),
    };

    Card::new(rank, suit)
}

/// Parses a whitespace separated list of card codes.
pub(crate) fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace().map(card).collect()
}
