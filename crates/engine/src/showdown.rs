// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution and pot awards.
use log::debug;
use serde::{Deserialize, Serialize};

use railbird_cards::Card;
use railbird_eval::{PlayerEval, Variant};

use crate::{Chips, EngineError, PlayerState, Pot, build_side_pots};

/// The award of one pot at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotAward {
    /// The pot being awarded.
    pub pot: Pot,
    /// The evaluations of the eligible seats, player set to the seat.
    pub results: Vec<PlayerEval>,
    /// The winning seats.
    pub winners: Vec<usize>,
    /// The chips paid to each winning seat.
    pub payouts: Vec<(usize, Chips)>,
}

/// The full showdown resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownReport {
    /// One award per pot, main pot first.
    pub pots: Vec<PotAward>,
    /// Total chips paid to each seat.
    pub payouts: Vec<Chips>,
}

/// Resolves a showdown and credits the winnings to the stacks.
///
/// Builds the side pots from the hand commitments and evaluates each
/// pot among its eligible seats only, so a short all-in can win the
/// main pot while a covering seat takes the side pot. A pot split among
/// n winners pays `amount / n` to each, any remainder goes one chip at
/// a time to the winners closest to the left of the button.
pub fn resolve_showdown(
    variant: Variant,
    players: &mut [PlayerState],
    holes: &[Vec<Card>],
    board: &[Card],
    button: usize,
) -> Result<ShowdownReport, EngineError> {
    let seats = players.len();
    let mut payouts = vec![Chips::ZERO; seats];
    let mut pots = Vec::new();

    for pot in build_side_pots(players) {
        let pot_holes = pot
            .eligible
            .iter()
            .map(|&seat| holes[seat].clone())
            .collect::<Vec<_>>();

        let eval = variant.evaluate(&pot_holes, board)?;
        let results = eval
            .results
            .into_iter()
            .map(|mut r| {
                r.player = pot.eligible[r.player];
                r
            })
            .collect::<Vec<_>>();

        let mut winners = eval
            .winners
            .iter()
            .map(|&w| pot.eligible[w])
            .collect::<Vec<_>>();

        // Order the winners clockwise from the left of the button so
        // the odd chips go to the seats that acted earliest.
        winners.sort_unstable_by_key(|&seat| (seat + seats - button - 1) % seats);

        let count = winners.len() as u32;
        let each = pot.amount / count;
        let remainder = (pot.amount % count).amount() as usize;

        let mut pot_payouts = Vec::with_capacity(winners.len());
        for (pos, &seat) in winners.iter().enumerate() {
            let extra = if pos < remainder { Chips::new(1) } else { Chips::ZERO };
            let won = each + extra;
            players[seat].credit(won);
            payouts[seat] += won;
            pot_payouts.push((seat, won));
            debug!("seat {seat} wins {won} from pot of {}", pot.amount);
        }

        winners.sort_unstable();
        pot_payouts.sort_unstable_by_key(|&(seat, _)| seat);

        pots.push(PotAward {
            pot,
            results,
            winners,
            payouts: pot_payouts,
        });
    }

    Ok(ShowdownReport { pots, payouts })
}
