// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Railbird Poker betting and pot engine.
//!
//! This crate drives a single table hand from deal to payout: it posts
//! blinds and antes, runs the per street betting state machine, builds
//! side pots from the players commitments, and resolves the showdown
//! with exact odd chips distribution.
//!
//! The engine is synchronous and side effect free at its boundary, the
//! host supplies a [Deal], a [TableConfig], and the players actions
//! through an [ActionSource], and gets back legal action sets while the
//! hand runs and a [HandResult] when it ends.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod action;
mod betting;
mod chips;
mod config;
mod deal;
mod error;
mod hand;
mod player;
mod pot;
mod showdown;
#[cfg(test)]
mod test_util;

pub use action::{Action, ActionKind, LegalActions};
pub use betting::{BettingRound, RoundState, RoundStatus, SeatState};
pub use chips::Chips;
pub use config::TableConfig;
pub use deal::{Deal, Street};
pub use error::EngineError;
pub use hand::{ActionSource, HandResult, play_hand};
pub use player::PlayerState;
pub use pot::{Pot, build_side_pots};
pub use showdown::{PotAward, ShowdownReport, resolve_showdown};

// Reexport cards and evaluator types used at the engine boundary.
pub use railbird_cards::{Card, Deck, Rank, Suit};
pub use railbird_eval::{Category, EvalError, Evaluation, PlayerEval, Score, Variant};
