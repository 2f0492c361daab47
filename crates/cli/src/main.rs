// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Railbird Poker table simulator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use railbird_engine::{Chips, Deal, HandResult, TableConfig, Variant, play_hand};

mod bot;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    /// Texas Hold'em.
    Holdem,
    /// Omaha high.
    Omaha,
}

impl From<Game> for Variant {
    fn from(game: Game) -> Self {
        match game {
            Game::Holdem => Variant::Holdem,
            Game::Omaha => Variant::Omaha,
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// The game variant.
    #[clap(long, short, value_enum, default_value_t = Game::Holdem)]
    game: Game,
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=9))]
    players: u8,
    /// Number of hands to play.
    #[clap(long, short = 'n', default_value_t = 100)]
    hands: u32,
    /// The buy-in stack for each player.
    #[clap(long, default_value_t = 200)]
    buy_in: u32,
    /// The small blind.
    #[clap(long, default_value_t = 1)]
    small_blind: u32,
    /// The big blind.
    #[clap(long, default_value_t = 2)]
    big_blind: u32,
    /// The ante posted by every player, 0 for no ante.
    #[clap(long, default_value_t = 0)]
    ante: u32,
    /// Maximum bets and raises per street, 0 for unlimited.
    #[clap(long, default_value_t = 0)]
    raise_cap: u32,
    /// Seed for reproducible runs.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let variant = Variant::from(cli.game);
    if variant == Variant::Omaha && cli.players > 6 {
        bail!("{} deals to at most 6 players", variant.label());
    }
    if cli.big_blind == 0 {
        bail!("the big blind must be at least 1");
    }

    let config = TableConfig {
        small_blind: Chips::new(cli.small_blind),
        big_blind: Chips::new(cli.big_blind),
        ante: Chips::new(cli.ante),
        max_raises_per_street: cli.raise_cap,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut bots = bot::BotSource::new(StdRng::from_rng(&mut rng));

    info!(
        "{} with {} players, blinds {}/{}, buy-in {}",
        variant.label(),
        cli.players,
        config.small_blind,
        config.big_blind,
        cli.buy_in
    );

    let mut stacks = vec![Chips::new(cli.buy_in); cli.players as usize];
    let mut button = 0;
    let mut played = 0;

    for hand in 1..=cli.hands {
        // Busted players leave the table, the hand is dealt among the
        // seats with chips.
        let seats = stacks
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s > Chips::ZERO)
            .map(|(seat, _)| seat)
            .collect::<Vec<_>>();
        if seats.len() < 2 {
            info!("player {} has all the chips", seats[0] + 1);
            break;
        }

        let deal = Deal::new(variant, seats.len(), &mut rng)?;
        let mut table = seats.iter().map(|&s| stacks[s]).collect::<Vec<_>>();
        let result = play_hand(
            variant,
            &config,
            &mut table,
            button % seats.len(),
            &deal,
            &mut bots,
        )?;

        for (&seat, &stack) in seats.iter().zip(&table) {
            stacks[seat] = stack;
        }
        log_hand(hand, &seats, &result);

        button += 1;
        played += 1;
    }

    info!("standings after {played} hands");
    let mut standings = stacks.iter().enumerate().collect::<Vec<_>>();
    standings.sort_by_key(|&(_, &stack)| std::cmp::Reverse(stack));
    for (seat, stack) in standings {
        info!("  player {}: {stack}", seat + 1);
    }

    Ok(())
}

/// Logs the board, the showdown hands, and the winners of one hand.
fn log_hand(hand: u32, seats: &[usize], result: &HandResult) {
    let board = result
        .board
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    info!("hand {hand}: board [{board}]");

    if let Some(report) = &result.showdown {
        for award in &report.pots {
            for eval in &award.results {
                if award.winners.contains(&eval.player) {
                    info!(
                        "  player {} wins {} with {}",
                        seats[eval.player] + 1,
                        award
                            .payouts
                            .iter()
                            .find(|(seat, _)| *seat == eval.player)
                            .map(|(_, won)| *won)
                            .unwrap_or_default(),
                        eval.score
                    );
                }
            }
        }
    } else {
        for (pos, &payout) in result.payouts.iter().enumerate() {
            if payout > Chips::ZERO {
                info!("  player {} wins {payout} uncontested", seats[pos] + 1);
            }
        }
    }
}
