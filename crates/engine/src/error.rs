// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Engine error types.
use thiserror::Error;

use railbird_eval::EvalError;

/// Errors reported by the betting and pot engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An action outside the legal set, an undersized bet or raise, or
    /// an amount exceeding the available stack.
    ///
    /// The action is rejected before any state mutation so the actor
    /// can be asked again, the engine never corrects an amount on the
    /// actor's behalf.
    #[error("illegal action at seat {seat}: {reason}")]
    IllegalAction {
        /// The seat that sent the action.
        seat: usize,
        /// Why the action was rejected.
        reason: String,
    },
    /// An action was applied to a closed betting round.
    #[error("betting round is closed")]
    RoundClosed,
    /// A deal with duplicate cards or wrong card counts.
    #[error("malformed deal: {0}")]
    MalformedDeal(String),
    /// A street exceeded the action safety limit.
    #[error("betting round exceeded the action safety limit")]
    SafetyLimit,
    /// A hand evaluation failure.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
