// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game variants evaluation.
use serde::{Deserialize, Serialize};
use std::fmt;

use railbird_cards::{Card, Combinations};

use crate::{BestHand, EvalError, Score, best::best_five};

/// A Poker game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Texas Hold'em, best 5 of 2 hole cards plus the board.
    Holdem,
    /// Omaha high, exactly 2 of 4 hole cards plus 3 board cards.
    Omaha,
}

impl Variant {
    /// The number of hole cards dealt to each player.
    pub fn hole_cards(&self) -> usize {
        match self {
            Variant::Holdem => 2,
            Variant::Omaha => 4,
        }
    }

    /// The variant label.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Holdem => "Texas Hold'em",
            Variant::Omaha => "Omaha",
        }
    }

    /// Evaluates the players hands against the board.
    ///
    /// Each entry in `holes` is one player's hole cards, the returned
    /// results follow the same order. The winners are the players whose
    /// score ties the maximum score found.
    pub fn evaluate(
        &self,
        holes: &[Vec<Card>],
        board: &[Card],
    ) -> Result<Evaluation, EvalError> {
        let mut results = Vec::with_capacity(holes.len());

        for (player, hole) in holes.iter().enumerate() {
            if hole.len() != self.hole_cards() {
                return Err(EvalError::InvalidHoleCount {
                    player,
                    expected: self.hole_cards(),
                    found: hole.len(),
                });
            }

            let best = match self {
                Variant::Holdem => {
                    let mut candidates = hole.clone();
                    candidates.extend_from_slice(board);
                    best_five(&candidates)?
                }
                Variant::Omaha => best_omaha(hole, board)?,
            };

            results.push(PlayerEval {
                player,
                best_five: best.cards,
                score: best.score,
            });
        }

        let winners = match results.iter().map(|r| r.score).max() {
            Some(max) => results
                .iter()
                .filter(|r| r.score == max)
                .map(|r| r.player)
                .collect(),
            None => Vec::default(),
        };

        Ok(Evaluation { results, winners })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A player evaluation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEval {
    /// The player index in the evaluated set.
    pub player: usize,
    /// The five cards making the best hand.
    pub best_five: [Card; 5],
    /// The best hand score.
    pub score: Score,
}

/// The evaluation of a set of players hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Per player results, in the order the hands were given.
    pub results: Vec<PlayerEval>,
    /// The players tied at the maximum score.
    pub winners: Vec<usize>,
}

/// Best Omaha hand, exactly 2 hole cards with exactly 3 board cards.
fn best_omaha(hole: &[Card], board: &[Card]) -> Result<BestHand, EvalError> {
    if board.len() < 3 {
        return Err(EvalError::InsufficientBoard { found: board.len() });
    }

    let mut best: Option<BestHand> = None;
    for pair in Combinations::new(hole.len(), 2) {
        for triple in Combinations::new(board.len(), 3) {
            let five = [
                hole[pair[0]],
                hole[pair[1]],
                board[triple[0]],
                board[triple[1]],
                board[triple[2]],
            ];
            let score = Score::five(&five)?;

            if best.is_none_or(|b| score > b.score) {
                best = Some(BestHand { cards: five, score });
            }
        }
    }

    // 4 hole cards and 3 or more board cards give at least 6 subsets.
    Ok(best.unwrap())
}
