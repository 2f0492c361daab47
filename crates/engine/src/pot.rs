// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Side pot construction from hand commitments.
use serde::{Deserialize, Serialize};

use crate::{Chips, PlayerState};

/// A pot with the seats eligible to win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    /// The pot amount.
    pub amount: Chips,
    /// The seats that can win this pot, in seat order.
    pub eligible: Vec<usize>,
}

/// Builds the main and side pots from the players hand commitments.
///
/// Commitments are sliced at each distinct all-in level in ascending
/// order. Every seat pays into a layer up to its own commitment, and a
/// seat is eligible for a layer when it has not folded and committed at
/// least the layer level. Adjacent layers with the same eligible seats
/// are merged, and chips from layers nobody can win, dead money from
/// folded seats above every live commitment, are folded into the
/// nearest contested pot.
///
/// The amounts always sum to the total committed by all seats.
pub fn build_side_pots(players: &[PlayerState]) -> Vec<Pot> {
    let mut levels = players
        .iter()
        .map(|p| p.total_commit())
        .filter(|&c| c > Chips::ZERO)
        .collect::<Vec<_>>();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<Pot> = Vec::new();
    // Dead chips from layers with no eligible seats.
    let mut carry = Chips::ZERO;
    let mut prev = Chips::ZERO;

    for level in levels {
        let slice = level - prev;
        let mut amount = Chips::ZERO;
        let mut eligible = Vec::new();

        for (seat, player) in players.iter().enumerate() {
            let commit = player.total_commit();
            if commit > prev {
                amount += commit.min(level) - prev;
            }
            if player.is_in_hand() && commit >= level {
                eligible.push(seat);
            }
        }
        debug_assert!(slice > Chips::ZERO);
        prev = level;

        if eligible.is_empty() {
            carry += amount;
            continue;
        }

        amount += carry;
        carry = Chips::ZERO;

        match pots.last_mut() {
            Some(last) if last.eligible == eligible => last.amount += amount,
            _ => pots.push(Pot { amount, eligible }),
        }
    }

    // Dead chips above every live commitment go to the last pot.
    if carry > Chips::ZERO {
        if let Some(last) = pots.last_mut() {
            last.amount += carry;
        }
    }

    pots
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds players from `(commit, folded)` pairs with deep stacks.
    fn committed(seats: &[(u32, bool)]) -> Vec<PlayerState> {
        seats.iter()
            .map(|&(commit, folded)| {
                let mut p = PlayerState::new(Chips::new(commit.max(1) * 10));
                p.post(Chips::new(commit));
                if folded {
                    p.fold();
                }
                p
            })
            .collect()
    }

    fn total(players: &[PlayerState]) -> Chips {
        players.iter().map(|p| p.total_commit()).sum()
    }

    #[test]
    fn equal_commits_make_one_pot() {
        let ps = committed(&[(50, false), (50, false), (50, false)]);
        let pots = build_side_pots(&ps);

        assert_eq!(pots, vec![Pot {
            amount: Chips::new(150),
            eligible: vec![0, 1, 2],
        }]);
    }

    #[test]
    fn short_all_in_splits_main_and_side_pot() {
        // A and B all-in for 30, C covers with 80.
        let mut ps = committed(&[(0, false), (0, false), (0, false)]);
        ps[0] = PlayerState::new(Chips::new(30));
        ps[0].post(Chips::new(30));
        ps[1] = PlayerState::new(Chips::new(30));
        ps[1].post(Chips::new(30));
        ps[2] = PlayerState::new(Chips::new(100));
        ps[2].post(Chips::new(80));

        let pots = build_side_pots(&ps);
        assert_eq!(pots, vec![
            Pot {
                amount: Chips::new(90),
                eligible: vec![0, 1, 2],
            },
            Pot {
                amount: Chips::new(50),
                eligible: vec![2],
            },
        ]);
        assert_eq!(pots.iter().map(|p| p.amount).sum::<Chips>(), total(&ps));
    }

    #[test]
    fn staircase_commits_make_one_pot_per_level() {
        let ps = committed(&[(10, false), (20, false), (30, false), (40, false)]);
        let pots = build_side_pots(&ps);

        assert_eq!(pots, vec![
            Pot {
                amount: Chips::new(40),
                eligible: vec![0, 1, 2, 3],
            },
            Pot {
                amount: Chips::new(30),
                eligible: vec![1, 2, 3],
            },
            Pot {
                amount: Chips::new(20),
                eligible: vec![2, 3],
            },
            Pot {
                amount: Chips::new(10),
                eligible: vec![3],
            },
        ]);
    }

    #[test]
    fn folded_commits_stay_in_the_pots() {
        // Seat 1 folds after committing 20, the chips stay in play but
        // the seat is not eligible anywhere.
        let ps = committed(&[(50, false), (20, true), (50, false)]);
        let pots = build_side_pots(&ps);

        assert_eq!(pots, vec![Pot {
            amount: Chips::new(120),
            eligible: vec![0, 2],
        }]);
    }

    #[test]
    fn dead_money_above_live_commits_joins_the_last_pot() {
        // The folded seat committed more than anyone still in hand.
        let ps = committed(&[(30, false), (60, true), (30, false)]);
        let pots = build_side_pots(&ps);

        assert_eq!(pots, vec![Pot {
            amount: Chips::new(120),
            eligible: vec![0, 2],
        }]);
        assert_eq!(pots.iter().map(|p| p.amount).sum::<Chips>(), total(&ps));
    }

    #[test]
    fn layers_with_same_eligible_seats_merge() {
        // Seat 1 folds at 10 creating a level boundary, but both layers
        // above zero have the same eligible seats and merge.
        let ps = committed(&[(40, false), (10, true), (40, false)]);
        let pots = build_side_pots(&ps);

        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amount, Chips::new(90));
        assert_eq!(pots[0].eligible, vec![0, 2]);
    }

    #[test]
    fn no_commits_no_pots() {
        let ps = committed(&[(0, false), (0, false)]);
        assert!(build_side_pots(&ps).is_empty());
    }
}
