// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Railbird Poker hand evaluator.
//!
//! The evaluator classifies exact 5 cards hands into a totally ordered
//! [Score], picks the best 5 cards hand out of 5 to 7 candidate cards,
//! and evaluates Texas Hold'em and Omaha hands for a table of players.
//!
//! To compare two hands score them and use the score order:
//!
//! ```
//! # use railbird_cards::{Card, Rank, Suit};
//! # use railbird_eval::Score;
//! use Rank::*;
//! use Suit::*;
//!
//! let pair = [
//!     Card::new(Ace, Clubs),
//!     Card::new(Ace, Hearts),
//!     Card::new(King, Spades),
//!     Card::new(Nine, Diamonds),
//!     Card::new(Four, Clubs),
//! ];
//! let flush = [
//!     Card::new(Jack, Clubs),
//!     Card::new(Nine, Clubs),
//!     Card::new(Seven, Clubs),
//!     Card::new(Five, Clubs),
//!     Card::new(Deuce, Clubs),
//! ];
//! let s1 = Score::five(&pair)?;
//! let s2 = Score::five(&flush)?;
//! assert!(s2 > s1);
//! # Ok::<(), railbird_eval::EvalError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod best;
mod error;
mod score;
#[cfg(test)]
mod test_util;
mod variant;

pub use best::{BestHand, best_five};
pub use error::EvalError;
pub use score::{Category, Score};
pub use variant::{Evaluation, PlayerEval, Variant};

// Reexport cards types.
pub use railbird_cards::{Card, Combinations, Deck, Rank, Suit};
