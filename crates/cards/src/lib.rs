// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Railbird Poker cards types.
//!
//! This crate defines the card value types:
//!
//! ```
//! # use railbird_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [Deck] type for dealing shuffled cards with a caller supplied
//! random source:
//!
//! ```
//! # use railbird_cards::Deck;
//! # use rand::{rngs::StdRng, SeedableRng};
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let card = deck.deal();
//! assert_eq!(deck.count(), 51);
//! ```
//!
//! and a [Combinations] iterator that enumerates all k-subsets of an
//! index range in lexicographic order:
//!
//! ```
//! # use railbird_cards::Combinations;
//! // All 5 cards subsets of a 7 cards hand.
//! assert_eq!(Combinations::new(7, 5).count(), 21);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod combos;
mod deck;

pub use combos::Combinations;
pub use deck::{Card, Deck, Rank, Suit};
