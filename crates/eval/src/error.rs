// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator error types.
use thiserror::Error;

/// Errors reported by the hand evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Wrong number of cards given to the scorer or selector.
    #[error("invalid number of cards: got {found}, expected {expected}")]
    InvalidInput {
        /// The number of cards the operation accepts.
        expected: &'static str,
        /// The number of cards supplied.
        found: usize,
    },
    /// A player hole cards count does not match the variant.
    #[error("player {player} has {found} hole cards, expected {expected}")]
    InvalidHoleCount {
        /// The player index in the evaluated set.
        player: usize,
        /// The hole cards count the variant deals.
        expected: usize,
        /// The hole cards supplied.
        found: usize,
    },
    /// Not enough board cards for an Omaha evaluation.
    #[error("board has {found} cards, Omaha needs at least 3")]
    InsufficientBoard {
        /// The board cards supplied.
        found: usize,
    },
}
