// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact 5 cards hand scoring.
use serde::{Deserialize, Serialize};
use std::fmt;

use railbird_cards::Card;

use crate::EvalError;

/// The 5 cards hand categories, from weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// No pair, highest cards play.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    Trips,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    Quads,
    /// A straight in a single suit.
    StraightFlush,
}

impl Category {
    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::Trips => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::Quads => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A totally ordered 5 cards hand score.
///
/// The score is the hand [Category] followed by up to five rank value
/// tiebreaks, compared left to right. Unused tiebreak slots are zero so
/// they never affect the comparison, and equal scores mean an exact tie.
///
/// For a straight the single tiebreak is the straight high card, with
/// the wheel A-2-3-4-5 reported as a 5 high straight, never as ace
/// high.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Score {
    category: Category,
    tiebreaks: [u8; 5],
}

impl Score {
    /// Scores an exact 5 cards hand.
    ///
    /// The caller guarantees the cards are distinct, any other count of
    /// cards fails with [EvalError::InvalidInput]. This is a pure
    /// function with no randomness or side effects.
    pub fn five(cards: &[Card]) -> Result<Score, EvalError> {
        let cards: &[Card; 5] = cards.try_into().map_err(|_| EvalError::InvalidInput {
            expected: "5",
            found: cards.len(),
        })?;

        let mut vals = cards.map(|c| c.rank().value());
        vals.sort_unstable_by(|a, b| b.cmp(a));

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = straight_high(&vals);

        // Rank groups as (count, value) pairs, biggest group first and
        // higher ranks first within equal counts.
        let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
        for v in vals {
            match groups.iter_mut().find(|g| g.1 == v) {
                Some(g) => g.0 += 1,
                None => groups.push((1, v)),
            }
        }
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let (category, tiebreaks) = match straight {
            Some(high) if flush => (Category::StraightFlush, [high, 0, 0, 0, 0]),
            _ if groups[0].0 == 4 => {
                (Category::Quads, [groups[0].1, groups[1].1, 0, 0, 0])
            }
            _ if groups[0].0 == 3 && groups[1].0 == 2 => {
                (Category::FullHouse, [groups[0].1, groups[1].1, 0, 0, 0])
            }
            _ if flush => (Category::Flush, vals),
            Some(high) => (Category::Straight, [high, 0, 0, 0, 0]),
            _ if groups[0].0 == 3 => (
                Category::Trips,
                [groups[0].1, groups[1].1, groups[2].1, 0, 0],
            ),
            _ if groups[0].0 == 2 && groups[1].0 == 2 => (
                Category::TwoPair,
                [groups[0].1, groups[1].1, groups[2].1, 0, 0],
            ),
            _ if groups[0].0 == 2 => (
                Category::OnePair,
                [groups[0].1, groups[1].1, groups[2].1, groups[3].1, 0],
            ),
            _ => (Category::HighCard, vals),
        };

        Ok(Score {
            category,
            tiebreaks,
        })
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The category tiebreaks, unused slots are zero.
    pub fn tiebreaks(&self) -> &[u8; 5] {
        &self.tiebreaks
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;

        let mut sep = " [";
        for t in self.tiebreaks.iter().filter(|&&t| t > 0) {
            write!(f, "{sep}{t}")?;
            sep = ",";
        }

        if sep == "," {
            write!(f, "]")?;
        }

        Ok(())
    }
}

/// Returns the straight high card for 5 consecutive distinct ranks.
///
/// `vals` must be sorted in descending order. The wheel A-2-3-4-5 is a
/// 5 high straight.
fn straight_high(vals: &[u8; 5]) -> Option<u8> {
    if vals.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }

    if vals[0] - vals[4] == 4 {
        Some(vals[0])
    } else if *vals == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}
