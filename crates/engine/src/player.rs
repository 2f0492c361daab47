// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per player betting state.
use serde::{Deserialize, Serialize};

use crate::Chips;

/// A player betting state for one hand.
///
/// All chip movements from the stack into the pot go through the single
/// [post](PlayerState::post) primitive so a stack can never go negative
/// and commitments can never be double counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    stack: Chips,
    street_commit: Chips,
    total_commit: Chips,
    in_hand: bool,
    all_in: bool,
}

impl PlayerState {
    /// Creates a fresh state for a hand, players without chips sit out.
    pub fn new(stack: Chips) -> Self {
        Self {
            stack,
            street_commit: Chips::ZERO,
            total_commit: Chips::ZERO,
            in_hand: stack > Chips::ZERO,
            all_in: false,
        }
    }

    /// The chips behind.
    pub fn stack(&self) -> Chips {
        self.stack
    }

    /// The chips committed on the current street.
    pub fn street_commit(&self) -> Chips {
        self.street_commit
    }

    /// The chips committed across the whole hand.
    pub fn total_commit(&self) -> Chips {
        self.total_commit
    }

    /// The player has not folded.
    pub fn is_in_hand(&self) -> bool {
        self.in_hand
    }

    /// The player stack is exhausted.
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    /// The player can still act in a betting round.
    pub fn can_act(&self) -> bool {
        self.in_hand && !self.all_in
    }

    /// Posts chips from the stack into the pot commitments.
    ///
    /// Deducts `min(amount, stack)` from the stack and adds it to both
    /// the street and the hand commitment. A stack reaching exactly
    /// zero marks the player all-in. Returns the amount actually paid.
    pub fn post(&mut self, amount: Chips) -> Chips {
        let pay = amount.min(self.stack);
        self.stack -= pay;
        self.street_commit += pay;
        self.total_commit += pay;

        if self.in_hand && self.stack == Chips::ZERO {
            self.all_in = true;
        }

        pay
    }

    /// Removes the player from the hand.
    pub fn fold(&mut self) {
        self.in_hand = false;
    }

    /// Credits winnings back to the stack.
    pub fn credit(&mut self, amount: Chips) {
        self.stack += amount;
    }

    /// Resets the street commitment at the start of a new street.
    pub fn start_street(&mut self) {
        self.street_commit = Chips::ZERO;
    }
}
