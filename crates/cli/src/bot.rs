// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A randomized betting policy for simulated players.
use rand::Rng;

use railbird_engine::{Action, ActionKind, ActionSource, LegalActions, PlayerState};

/// An action source playing a loose randomized game.
///
/// The bot mostly checks and calls, raises a fraction of the time with
/// a size between the minimum and three times the minimum, and folds or
/// shoves when the stack no longer covers a call. Every action it picks
/// comes from the legal set, so a table of bots always plays a hand to
/// completion.
pub struct BotSource<R> {
    rng: R,
}

impl<R: Rng> BotSource<R> {
    /// Creates a bot policy with its own action randomness.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn raise(&mut self, player: &PlayerState, legal: &LegalActions) -> Action {
        let max = player.street_commit() + player.stack();
        if legal.min_raise_to >= max {
            return Action::AllIn;
        }

        let lo = legal.min_raise_to.amount();
        let hi = (lo * 3).min(max.amount());
        let to = self.rng.random_range(lo..=hi);
        if to == max.amount() {
            Action::AllIn
        } else if legal.allows(ActionKind::Bet) {
            Action::Bet(to.into())
        } else {
            Action::Raise(to.into())
        }
    }
}

impl<R: Rng> ActionSource for BotSource<R> {
    fn act(&mut self, _seat: usize, players: &[PlayerState], legal: &LegalActions) -> Action {
        let player = &players[legal.seat];

        if legal.can_check() {
            if legal.can_raise() && self.rng.random_bool(0.2) {
                self.raise(player, legal)
            } else {
                Action::Check
            }
        } else if legal.can_call() {
            let roll = self.rng.random::<f64>();
            if roll < 0.15 {
                Action::Fold
            } else if roll < 0.25 && legal.can_raise() {
                self.raise(player, legal)
            } else {
                Action::Call
            }
        } else if self.rng.random_bool(0.25) {
            // The stack does not cover the call.
            Action::AllIn
        } else {
            Action::Fold
        }
    }
}
