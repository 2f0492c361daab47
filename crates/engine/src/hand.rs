// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Single hand driver from deal to payout.
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use railbird_cards::Card;
use railbird_eval::Variant;

use crate::{
    Action, BettingRound, Chips, Deal, EngineError, LegalActions, PlayerState, Pot, RoundStatus,
    ShowdownReport, Street, TableConfig, build_side_pots, resolve_showdown,
};

/// Upper bound on actions per street, counts rejected actions too.
const MAX_STREET_ACTIONS: usize = 10_000;

/// A source of player actions for the hand driver.
///
/// The driver calls [act](ActionSource::act) each time a seat has a
/// decision to make. An illegal action is rejected and the same seat is
/// asked again, so a source can be a bot policy, a scripted replay, or
/// an interactive prompt.
pub trait ActionSource {
    /// Returns the action for the seat to act.
    fn act(&mut self, seat: usize, players: &[PlayerState], legal: &LegalActions) -> Action;
}

/// The outcome of one completed hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    /// The board cards revealed when the hand ended.
    pub board: Vec<Card>,
    /// The pots the hand was played for.
    pub pots: Vec<Pot>,
    /// Total chips paid to each seat.
    pub payouts: Vec<Chips>,
    /// Per seat stack change over the hand.
    pub deltas: Vec<i64>,
    /// The stacks after the payout.
    pub stacks: Vec<Chips>,
    /// The showdown evaluations, `None` when the hand ended on a fold.
    pub showdown: Option<ShowdownReport>,
}

/// Plays one hand and settles the stacks.
///
/// Posts antes and blinds, runs a betting round per street, and pays
/// the pots either to the last seat in hand or through the showdown.
/// The stacks slice is updated in place with the settled stacks.
///
/// Heads-up the button posts the small blind and acts first preflop,
/// with more seats the blinds sit left of the button and the seat after
/// the big blind opens. Postflop the first seat in hand after the
/// button acts first.
pub fn play_hand<A: ActionSource>(
    variant: Variant,
    config: &TableConfig,
    stacks: &mut [Chips],
    button: usize,
    deal: &Deal,
    actions: &mut A,
) -> Result<HandResult, EngineError> {
    let seats = stacks.len();
    if seats != deal.holes().len() {
        return Err(EngineError::MalformedDeal(format!(
            "{seats} stacks for a deal of {} seats",
            deal.holes().len()
        )));
    }
    if let Some(seat) = stacks.iter().position(|&s| s == Chips::ZERO) {
        return Err(EngineError::MalformedDeal(format!(
            "seat {seat} has no chips"
        )));
    }

    let before = stacks.to_vec();
    let mut players = stacks
        .iter()
        .map(|&s| PlayerState::new(s))
        .collect::<Vec<_>>();

    if config.ante > Chips::ZERO {
        for player in players.iter_mut() {
            player.post(config.ante);
        }
    }

    let (sb, bb) = if seats == 2 {
        (button, (button + 1) % seats)
    } else {
        ((button + 1) % seats, (button + 2) % seats)
    };
    players[sb].post(config.small_blind);
    players[bb].post(config.big_blind);
    debug!(
        "hand start, button {button}, blinds posted by {sb} and {bb}, {}",
        variant.label()
    );

    let mut outcome = None;
    let mut last_street = Street::Preflop;

    for street in Street::streets() {
        last_street = street;
        let first = match street {
            Street::Preflop if seats == 2 => button,
            Street::Preflop => (button + 3) % seats,
            _ => (button + 1) % seats,
        };

        if street != Street::Preflop {
            for player in players.iter_mut() {
                player.start_street();
            }
            info!("{}: {}", street.label(), join(deal.board_at(street)));
        }

        let mut round = BettingRound::new(&players, first, config);

        // With at most one seat able to act and nothing owed there is
        // no decision left on this street, the hand runs out.
        let actors = players.iter().filter(|p| p.can_act()).count();
        if actors < 2 {
            if let Some(legal) = round.legal_actions(&players) {
                if legal.call_amount == Chips::ZERO {
                    continue;
                }
            } else {
                continue;
            }
        }

        let mut turns = 0;
        loop {
            let legal = match round.legal_actions(&players) {
                Some(legal) => legal,
                None => break,
            };

            turns += 1;
            if turns > MAX_STREET_ACTIONS {
                return Err(EngineError::SafetyLimit);
            }

            let action = actions.act(legal.seat, &players, &legal);
            match round.apply(&mut players, action) {
                Ok(RoundStatus::AwaitingAction(_)) => {
                    debug!("seat {} {action}", legal.seat);
                }
                Ok(RoundStatus::StreetClosed) => {
                    debug!("seat {} {action}, street closed", legal.seat);
                    break;
                }
                Ok(RoundStatus::HandOver(winner)) => {
                    debug!("seat {} {action}, hand over", legal.seat);
                    outcome = Some(winner);
                    break;
                }
                Err(err @ EngineError::IllegalAction { .. }) => {
                    // Reject and ask the same seat again.
                    warn!("{err}");
                }
                Err(err) => return Err(err),
            }
        }

        if outcome.is_some() {
            break;
        }
    }

    let mut payouts = vec![Chips::ZERO; seats];
    let (pots, showdown) = match outcome {
        Some(winner) => {
            // Everybody else folded, the winner takes all the pots
            // without showing a hand.
            let pots = build_side_pots(&players);
            let total = pots.iter().map(|p| p.amount).sum::<Chips>();
            players[winner].credit(total);
            payouts[winner] = total;
            info!("seat {winner} wins {total} uncontested");
            (pots, None)
        }
        None => {
            let report = resolve_showdown(
                variant,
                &mut players,
                deal.holes(),
                deal.board(),
                button,
            )?;
            payouts.copy_from_slice(&report.payouts);
            let pots = report.pots.iter().map(|a| a.pot.clone()).collect();
            (pots, Some(report))
        }
    };

    for (stack, player) in stacks.iter_mut().zip(&players) {
        *stack = player.stack();
    }

    let deltas = stacks
        .iter()
        .zip(&before)
        .map(|(&after, &before)| after.amount() as i64 - before.amount() as i64)
        .collect();

    Ok(HandResult {
        board: deal.board_at(last_street).to_vec(),
        pots,
        payouts,
        deltas,
        stacks: stacks.to_vec(),
        showdown,
    })
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::cards;
    use std::collections::VecDeque;

    /// Plays back a fixed action sequence.
    struct Script(VecDeque<Action>);

    impl Script {
        fn new(actions: &[Action]) -> Self {
            Self(actions.iter().copied().collect())
        }
    }

    impl ActionSource for Script {
        fn act(&mut self, _: usize, _: &[PlayerState], _: &LegalActions) -> Action {
            self.0.pop_front().expect("script exhausted")
        }
    }

    fn config() -> TableConfig {
        TableConfig {
            small_blind: Chips::new(1),
            big_blind: Chips::new(2),
            ..TableConfig::default()
        }
    }

    fn holdem_deal(holes: &[&str], board: &str) -> Deal {
        let holes = holes.iter().map(|h| cards(h)).collect();
        Deal::from_parts(Variant::Holdem, holes, cards(board)).unwrap()
    }

    #[test]
    fn heads_up_checked_down_to_showdown() {
        // Seat 0 is the button and wins with a pair of aces.
        let deal = holdem_deal(&["AH AD", "KH KD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(100), Chips::new(100)];

        // Preflop button completes and big blind checks, then both
        // check every street, big blind first.
        let mut script = Script::new(&[
            Action::Call,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
        ]);

        let result =
            play_hand(Variant::Holdem, &config(), &mut stacks, 0, &deal, &mut script).unwrap();

        assert_eq!(result.board.len(), 5);
        assert_eq!(result.payouts, vec![Chips::new(4), Chips::ZERO]);
        assert_eq!(result.deltas, vec![2, -2]);
        assert_eq!(stacks, [Chips::new(102), Chips::new(98)]);
        assert!(result.showdown.is_some());
    }

    #[test]
    fn omaha_hand_checked_down_to_showdown() {
        use railbird_eval::Category;

        // Seat 0 holds four clubs but plays exactly two, with only two
        // clubs on board there is no flush: seat 1 wins with trips.
        let holes = vec![cards("AC KC QC JC"), cards("9H 9S AH KD")];
        let board = cards("9C 8C 7H 2S 3S");
        let deal = Deal::from_parts(Variant::Omaha, holes, board).unwrap();
        let mut stacks = [Chips::new(100), Chips::new(100)];

        let mut script = Script::new(&[
            Action::Call,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
        ]);

        let result =
            play_hand(Variant::Omaha, &config(), &mut stacks, 0, &deal, &mut script).unwrap();

        let report = result.showdown.unwrap();
        assert_eq!(report.pots[0].winners, vec![1]);

        let eval = report.pots[0]
            .results
            .iter()
            .find(|r| r.player == 0)
            .unwrap();
        assert_ne!(eval.score.category(), Category::Flush);

        assert_eq!(result.payouts, vec![Chips::ZERO, Chips::new(4)]);
        assert_eq!(result.deltas, vec![-2, 2]);
        assert_eq!(stacks, [Chips::new(98), Chips::new(102)]);
    }

    #[test]
    fn fold_ends_the_hand_without_showdown() {
        let deal = holdem_deal(&["AH AD", "KH KD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(100), Chips::new(100)];

        // The button folds the best hand preflop.
        let mut script = Script::new(&[Action::Fold]);
        let result =
            play_hand(Variant::Holdem, &config(), &mut stacks, 0, &deal, &mut script).unwrap();

        assert!(result.showdown.is_none());
        assert!(result.board.is_empty());
        assert_eq!(result.deltas, vec![-1, 1]);
        assert_eq!(stacks, [Chips::new(99), Chips::new(101)]);
    }

    #[test]
    fn three_handed_positions_and_payout() {
        // Button 0, blinds at 1 and 2, seat 0 opens the preflop action.
        let deal = holdem_deal(&["AH AD", "KH KD", "QH QD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(100), Chips::new(100), Chips::new(100)];

        let mut script = Script::new(&[
            // Preflop: button raises, blinds fold.
            Action::Raise(Chips::new(6)),
            Action::Fold,
            Action::Fold,
        ]);

        let result =
            play_hand(Variant::Holdem, &config(), &mut stacks, 0, &deal, &mut script).unwrap();

        assert_eq!(result.deltas, vec![3, -1, -2]);
        assert_eq!(stacks[0], Chips::new(103));
    }

    #[test]
    fn all_in_confrontation_runs_out_the_board() {
        // The short stack is all-in preflop with the worse hand and
        // loses the main pot, the rest of the call comes back as the
        // uncontested side layer.
        let deal = holdem_deal(&["KH KD", "AH AD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(30), Chips::new(100)];

        let mut script = Script::new(&[
            Action::AllIn, // Button shoves for 30.
            Action::Call,  // Big blind calls.
        ]);

        let result =
            play_hand(Variant::Holdem, &config(), &mut stacks, 0, &deal, &mut script).unwrap();

        // No action after the call, every street runs out.
        assert_eq!(result.board.len(), 5);
        assert_eq!(result.payouts, vec![Chips::ZERO, Chips::new(60)]);
        assert_eq!(stacks, [Chips::ZERO, Chips::new(130)]);
    }

    #[test]
    fn short_all_in_caller_creates_a_side_pot() {
        // Three players, seat 1 is covered: seats 0 and 2 play on for
        // the side pot on later streets.
        let deal = holdem_deal(&["QH QD", "AH AD", "KH KD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(100), Chips::new(10), Chips::new(100)];

        let mut script = Script::new(&[
            // Preflop: button raises to 10, small blind calls all-in,
            // big blind calls.
            Action::Raise(Chips::new(10)),
            Action::AllIn,
            Action::Call,
            // Flop, turn, river: big blind bets, button calls.
            Action::Bet(Chips::new(5)),
            Action::Call,
            Action::Check,
            Action::Check,
            Action::Check,
            Action::Check,
        ]);

        let result =
            play_hand(Variant::Holdem, &config(), &mut stacks, 0, &deal, &mut script).unwrap();

        // Main pot of 30 to the aces, side pot of 10 to the kings.
        assert_eq!(result.pots.len(), 2);
        assert_eq!(result.payouts, vec![
            Chips::ZERO,
            Chips::new(30),
            Chips::new(10),
        ]);
        assert_eq!(stacks, [Chips::new(85), Chips::new(30), Chips::new(95)]);
    }

    #[test]
    fn antes_grow_the_pot() {
        let deal = holdem_deal(&["AH AD", "KH KD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(100), Chips::new(100)];

        let cfg = TableConfig {
            ante: Chips::new(1),
            ..config()
        };
        let mut script = Script::new(&[Action::Fold]);
        let result = play_hand(Variant::Holdem, &cfg, &mut stacks, 0, &deal, &mut script).unwrap();

        // The winner collects both antes with the small blind.
        assert_eq!(result.deltas, vec![-2, 2]);
    }

    #[test]
    fn illegal_action_is_retried() {
        let deal = holdem_deal(&["AH AD", "KH KD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(100), Chips::new(100)];

        // A check facing the blind is rejected, the seat is asked again
        // and folds.
        let mut script = Script::new(&[Action::Check, Action::Fold]);
        let result =
            play_hand(Variant::Holdem, &config(), &mut stacks, 0, &deal, &mut script).unwrap();
        assert_eq!(result.deltas, vec![-1, 1]);
    }

    #[test]
    fn chips_are_conserved() {
        let deal = holdem_deal(&["QH QD", "AH AD", "KH KD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(60), Chips::new(45), Chips::new(80)];

        let mut script = Script::new(&[
            Action::Raise(Chips::new(20)),
            Action::AllIn,
            Action::AllIn,
            Action::AllIn,
        ]);

        let result =
            play_hand(Variant::Holdem, &config(), &mut stacks, 0, &deal, &mut script).unwrap();

        assert_eq!(result.deltas.iter().sum::<i64>(), 0);
        let total = stacks.iter().copied().sum::<Chips>();
        assert_eq!(total, Chips::new(60 + 45 + 80));
    }

    #[test]
    fn rejects_mismatched_stacks_and_deal() {
        let deal = holdem_deal(&["AH AD", "KH KD"], "9S 8D 5C 2H 3S");
        let mut stacks = [Chips::new(100), Chips::new(100), Chips::new(100)];
        let mut script = Script::new(&[]);

        assert!(matches!(
            play_hand(Variant::Holdem, &config(), &mut stacks, 0, &deal, &mut script),
            Err(EngineError::MalformedDeal(_))
        ));
    }
}
