// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player actions and legal action sets.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Chips;

/// A player action for one turn.
///
/// Bet and raise amounts are the total street commitment the player
/// moves to, not the increment over the previous bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Give up the hand.
    Fold,
    /// Pass with nothing owed.
    Check,
    /// Match the current bet.
    Call,
    /// Open the betting to the given street total.
    Bet(Chips),
    /// Raise the current bet to the given street total.
    Raise(Chips),
    /// Commit the whole remaining stack.
    AllIn,
}

impl Action {
    /// The action kind without amounts.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Bet(_) => ActionKind::Bet,
            Action::Raise(_) => ActionKind::Raise,
            Action::AllIn => ActionKind::AllIn,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Bet(amount) => write!(f, "BET {amount}"),
            Action::Raise(amount) => write!(f, "RAISE {amount}"),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

/// An action kind, used in legal action sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Fold action.
    Fold,
    /// Check action.
    Check,
    /// Call action.
    Call,
    /// Bet action.
    Bet,
    /// Raise action.
    Raise,
    /// All-in action.
    AllIn,
}

impl ActionKind {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Fold => "FOLD",
            ActionKind::Check => "CHECK",
            ActionKind::Call => "CALL",
            ActionKind::Bet => "BET",
            ActionKind::Raise => "RAISE",
            ActionKind::AllIn => "ALL-IN",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The legal actions for the seat to act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalActions {
    /// The seat the actions are for.
    pub seat: usize,
    /// The legal action kinds.
    pub actions: Vec<ActionKind>,
    /// The chips owed to call the current bet.
    pub call_amount: Chips,
    /// The minimum street total a bet or raise must reach.
    pub min_raise_to: Chips,
}

impl LegalActions {
    /// Checks if an action kind is legal.
    pub fn allows(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }

    /// Checks if a call action is legal.
    pub fn can_call(&self) -> bool {
        self.allows(ActionKind::Call)
    }

    /// Checks if a check action is legal.
    pub fn can_check(&self) -> bool {
        self.allows(ActionKind::Check)
    }

    /// Checks if a bet or raise action is legal.
    pub fn can_raise(&self) -> bool {
        self.allows(ActionKind::Bet) || self.allows(ActionKind::Raise)
    }
}
