// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card deal for one hand.
use ahash::HashSet;
use rand::Rng;
use serde::{Deserialize, Serialize};

use railbird_cards::{Card, Deck};
use railbird_eval::Variant;

use crate::EngineError;

/// A betting street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    /// Before any board card.
    Preflop,
    /// First three board cards.
    Flop,
    /// Fourth board card.
    Turn,
    /// Fifth board card.
    River,
}

impl Street {
    /// The streets in betting order.
    pub fn streets() -> impl Iterator<Item = Street> {
        [Street::Preflop, Street::Flop, Street::Turn, Street::River].into_iter()
    }

    /// The number of board cards visible on this street.
    pub fn board_cards(&self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// The street label.
    pub fn label(&self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

/// The cards dealt for one hand.
///
/// The full board is drawn when the deal is created, the streets only
/// reveal prefixes of it, so a hand is fully determined by the deal and
/// the seat actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    variant: Variant,
    holes: Vec<Vec<Card>>,
    board: Vec<Card>,
}

impl Deal {
    /// Deals hole cards and board for the given number of seats.
    ///
    /// Hole cards go around the table one at a time. A Texas Hold'em
    /// deal burns a card before the flop, the turn, and the river, an
    /// Omaha deal draws the board straight off the deck.
    pub fn new<R: Rng>(
        variant: Variant,
        seats: usize,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        check_seats(variant, seats)?;

        let mut deck = Deck::new_and_shuffled(rng);
        let mut holes = vec![Vec::with_capacity(variant.hole_cards()); seats];
        for _ in 0..variant.hole_cards() {
            for hole in holes.iter_mut() {
                hole.push(deck.deal());
            }
        }

        let burns = matches!(variant, Variant::Holdem);
        let mut board = Vec::with_capacity(5);
        for street in [3, 1, 1] {
            if burns {
                deck.deal();
            }
            for _ in 0..street {
                board.push(deck.deal());
            }
        }

        Ok(Self {
            variant,
            holes,
            board,
        })
    }

    /// Builds a deal from explicit cards, for replays and tests.
    pub fn from_parts(
        variant: Variant,
        holes: Vec<Vec<Card>>,
        board: Vec<Card>,
    ) -> Result<Self, EngineError> {
        check_seats(variant, holes.len())?;

        for (seat, hole) in holes.iter().enumerate() {
            if hole.len() != variant.hole_cards() {
                return Err(EngineError::MalformedDeal(format!(
                    "seat {seat} has {} hole cards, {} expects {}",
                    hole.len(),
                    variant.label(),
                    variant.hole_cards()
                )));
            }
        }

        if board.len() != 5 {
            return Err(EngineError::MalformedDeal(format!(
                "board has {} cards instead of 5",
                board.len()
            )));
        }

        let mut seen = HashSet::default();
        for card in holes.iter().flatten().chain(board.iter()) {
            if !seen.insert(*card) {
                return Err(EngineError::MalformedDeal(format!(
                    "duplicate card {card}"
                )));
            }
        }

        Ok(Self {
            variant,
            holes,
            board,
        })
    }

    /// The deal variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// All the hole cards, one entry per seat.
    pub fn holes(&self) -> &[Vec<Card>] {
        &self.holes
    }

    /// The hole cards for a seat.
    pub fn hole(&self, seat: usize) -> &[Card] {
        &self.holes[seat]
    }

    /// The full five cards board.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The board cards visible on the given street.
    pub fn board_at(&self, street: Street) -> &[Card] {
        &self.board[..street.board_cards()]
    }
}

/// The number of seats a variant can deal from one deck.
fn check_seats(variant: Variant, seats: usize) -> Result<(), EngineError> {
    let max = match variant {
        Variant::Holdem => 9,
        Variant::Omaha => 6,
    };

    if !(2..=max).contains(&seats) {
        return Err(EngineError::MalformedDeal(format!(
            "{} deals to 2 to {max} seats, got {seats}",
            variant.label()
        )));
    }

    Ok(())
}
