// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand selection.
use serde::{Deserialize, Serialize};

use railbird_cards::{Card, Combinations};

use crate::{EvalError, Score};

/// The best 5 cards hand found in a set of candidate cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    /// The five cards of the best hand.
    pub cards: [Card; 5],
    /// The best hand score.
    pub score: Score,
}

/// Finds the highest scoring 5 cards subset of 5 to 7 candidate cards.
///
/// Every 5 cards subset is enumerated and scored, and the maximum by
/// score total order is kept. On ties the first subset in enumeration
/// order wins, tied scores are interchangeable for ranking so only the
/// reported five cards may differ.
pub fn best_five(cards: &[Card]) -> Result<BestHand, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::InvalidInput {
            expected: "5 to 7",
            found: cards.len(),
        });
    }

    let mut best: Option<BestHand> = None;
    for combo in Combinations::new(cards.len(), 5) {
        let five = [
            cards[combo[0]],
            cards[combo[1]],
            cards[combo[2]],
            cards[combo[3]],
            cards[combo[4]],
        ];
        let score = Score::five(&five)?;

        if best.is_none_or(|b| score > b.score) {
            best = Some(BestHand { cards: five, score });
        }
    }

    // At least one subset exists as there are 5 or more cards.
    Ok(best.unwrap())
}
