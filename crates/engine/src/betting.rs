// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per street betting round state machine.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Action, ActionKind, Chips, EngineError, LegalActions, PlayerState, TableConfig};

/// The betting state of one seat within a street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    /// The seat still owes a decision.
    Pending,
    /// The seat has acted and matched the current bet.
    Acted,
    /// The seat has folded.
    Folded,
    /// The seat is all-in and cannot act.
    AllIn,
}

/// The round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// The round waits for an action from the given seat.
    AwaitingAction(usize),
    /// The round is closed.
    Closed,
}

/// The outcome of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// The action was applied, the given seat acts next.
    AwaitingAction(usize),
    /// The street betting is complete.
    StreetClosed,
    /// Everybody else folded, the given seat wins the hand.
    HandOver(usize),
}

/// A betting round for one street.
///
/// The round tracks an explicit [SeatState] per seat, so closure is a
/// pure predicate: the street is closed when no seat is `Pending`. A
/// full bet or raise moves every other seat that can still act back to
/// `Pending`, a check, full call, fold, or short all-in only retires
/// the actor.
///
/// All validation happens before any chips move: an action outside the
/// legal set, an undersized bet or raise, or an amount over the stack
/// is rejected with [EngineError::IllegalAction] and the round state is
/// unchanged, so the host can ask the actor again.
#[derive(Debug)]
pub struct BettingRound {
    seats: Vec<SeatState>,
    to_act: Option<usize>,
    current_bet: Chips,
    last_full_raise: Chips,
    big_blind: Chips,
    raise_cap: u32,
    raises_used: u32,
}

impl BettingRound {
    /// Creates a round for the given seats with `first` to act.
    ///
    /// The current bet starts at the highest street commitment, so a
    /// preflop round picks up the posted blinds, and every seat that
    /// can act is pending, which gives the big blind its option.
    pub fn new(players: &[PlayerState], first: usize, config: &TableConfig) -> Self {
        let seats = players
            .iter()
            .map(|p| {
                if !p.is_in_hand() {
                    SeatState::Folded
                } else if p.is_all_in() {
                    SeatState::AllIn
                } else {
                    SeatState::Pending
                }
            })
            .collect::<Vec<_>>();

        let current_bet = players
            .iter()
            .map(|p| p.street_commit())
            .max()
            .unwrap_or_default();

        let mut round = Self {
            seats,
            to_act: None,
            current_bet,
            last_full_raise: config.big_blind,
            big_blind: config.big_blind,
            raise_cap: config.max_raises_per_street,
            raises_used: 0,
        };
        round.to_act = round.next_pending(first);
        round
    }

    /// The round state.
    pub fn state(&self) -> RoundState {
        match self.to_act {
            Some(seat) => RoundState::AwaitingAction(seat),
            None => RoundState::Closed,
        }
    }

    /// The bet every active seat has to match on this street.
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    /// The per seat betting states.
    pub fn seat_states(&self) -> &[SeatState] {
        &self.seats
    }

    /// The legal actions for the seat to act, `None` when closed.
    pub fn legal_actions(&self, players: &[PlayerState]) -> Option<LegalActions> {
        let seat = self.to_act?;
        let player = &players[seat];
        let owed = self.current_bet - player.street_commit();

        let mut actions = Vec::with_capacity(4);
        if owed == Chips::ZERO {
            actions.push(ActionKind::Check);
            if self.can_raise() && player.stack() > Chips::ZERO {
                if self.current_bet == Chips::ZERO {
                    actions.push(ActionKind::Bet);
                } else {
                    actions.push(ActionKind::Raise);
                }
                actions.push(ActionKind::AllIn);
            }
        } else if player.stack() > owed {
            actions.push(ActionKind::Fold);
            actions.push(ActionKind::Call);
            if self.can_raise() {
                actions.push(ActionKind::Raise);
            }
            actions.push(ActionKind::AllIn);
        } else {
            // The stack covers at most the call, all-in or fold.
            actions.push(ActionKind::Fold);
            actions.push(ActionKind::AllIn);
        }

        Some(LegalActions {
            seat,
            actions,
            call_amount: owed,
            min_raise_to: self.min_raise_to(),
        })
    }

    /// Applies the action of the seat to act.
    pub fn apply(
        &mut self,
        players: &mut [PlayerState],
        action: Action,
    ) -> Result<RoundStatus, EngineError> {
        let legal = match self.legal_actions(players) {
            Some(legal) => legal,
            None => return Err(EngineError::RoundClosed),
        };

        let seat = legal.seat;
        if !legal.allows(action.kind()) {
            return Err(illegal(seat, format!("{action} is not a legal action")));
        }

        match action {
            Action::Fold => {
                players[seat].fold();
                self.seats[seat] = SeatState::Folded;
            }
            Action::Check => {
                self.seats[seat] = SeatState::Acted;
            }
            Action::Call => {
                players[seat].post(legal.call_amount);
                self.seats[seat] = SeatState::Acted;
            }
            Action::Bet(to) | Action::Raise(to) => {
                let player = &players[seat];
                if to < legal.min_raise_to {
                    return Err(illegal(
                        seat,
                        format!("{action} is below the minimum of {}", legal.min_raise_to),
                    ));
                }

                let add = to - player.street_commit();
                if add > player.stack() {
                    return Err(illegal(
                        seat,
                        format!("{action} exceeds the stack of {}", player.stack()),
                    ));
                }

                let raise_size = to - self.current_bet;
                players[seat].post(add);
                self.current_bet = to;
                self.last_full_raise = raise_size;
                self.raises_used += 1;
                self.reopen_action(seat);

                self.seats[seat] = if players[seat].is_all_in() {
                    SeatState::AllIn
                } else {
                    SeatState::Acted
                };
            }
            Action::AllIn => {
                let player = &mut players[seat];
                let target = player.street_commit() + player.stack();
                player.post(target);

                if target > self.current_bet {
                    let raise_size = target - self.current_bet;
                    self.current_bet = target;

                    if raise_size >= self.big_blind.max(self.last_full_raise) {
                        // A full raise reopens the action.
                        self.last_full_raise = raise_size;
                        self.raises_used += 1;
                        self.reopen_action(seat);
                    } else {
                        debug!("seat {seat} short all-in to {target}, action not reopened");
                    }
                }
                // Below the current bet this is a partial call, the
                // original bet still stands for the other seats.

                self.seats[seat] = SeatState::AllIn;
            }
        }

        if matches!(action, Action::Fold) {
            let in_hand = players.iter().filter(|p| p.is_in_hand()).count();
            if in_hand == 1 {
                let winner = players.iter().position(|p| p.is_in_hand()).unwrap();
                self.to_act = None;
                return Ok(RoundStatus::HandOver(winner));
            }
        }

        self.to_act = self.next_pending((seat + 1) % self.seats.len());
        match self.to_act {
            Some(next) => Ok(RoundStatus::AwaitingAction(next)),
            None => Ok(RoundStatus::StreetClosed),
        }
    }

    /// The minimum street total a bet or raise must reach.
    fn min_raise_to(&self) -> Chips {
        if self.current_bet == Chips::ZERO {
            self.big_blind
        } else {
            self.current_bet + self.big_blind.max(self.last_full_raise)
        }
    }

    /// Checks the per street bets and raises cap, zero is unlimited.
    fn can_raise(&self) -> bool {
        self.raise_cap == 0 || self.raises_used < self.raise_cap
    }

    /// Moves seats that already acted back to pending after a full
    /// bet or raise from `except`.
    fn reopen_action(&mut self, except: usize) {
        for (seat, state) in self.seats.iter_mut().enumerate() {
            if seat != except && *state == SeatState::Acted {
                *state = SeatState::Pending;
            }
        }
    }

    /// First pending seat from `from` inclusive, in turn order.
    fn next_pending(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (0..n)
            .map(|k| (from + k) % n)
            .find(|&i| self.seats[i] == SeatState::Pending)
    }
}

fn illegal(seat: usize, reason: String) -> EngineError {
    EngineError::IllegalAction { seat, reason }
}
