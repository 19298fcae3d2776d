// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, value_parser};
use log::{info, warn};
use rand::prelude::*;
use std::path::PathBuf;

use oddsmith_equity::{Round, SimConfig, Simulator};
use oddsmith_eval::{Card, Deck, Outcome, RankedHand, compare, evaluate, fixture, parse_cards};

mod render;

#[derive(Debug, Parser)]
#[command(name = "oddsmith", about = "Poker hands evaluation and equity.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand of 5 to 7 cards.
    Eval {
        /// The hand cards, e.g. "AS KD 7H 7C 2S".
        cards: String,
        /// Print the ranked hand as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Compares two hands.
    Compare {
        /// The first hand cards.
        first: String,
        /// The second hand cards.
        second: String,
    },
    /// Estimates the equity of hole cards against random opponents.
    Equity {
        /// The hole cards, e.g. "AS KS", random if not given.
        #[clap(long, short)]
        cards: Option<String>,
        /// Number of players including the hole cards owner.
        #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(2..=23))]
        players: u8,
        /// Number of simulations.
        #[clap(long, short, default_value_t = 10_000)]
        runs: usize,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// Seed for reproducible simulations.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Print the equity as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Deals a round and shows the showdown.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 3, value_parser = value_parser!(u8).range(2..=23))]
        players: u8,
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Records or verifies evaluation fixtures.
    Fixtures {
        #[command(subcommand)]
        command: FixturesCommand,
    },
}

#[derive(Debug, Subcommand)]
enum FixturesCommand {
    /// Evaluates random hands and saves them with their results.
    Record {
        /// The fixtures JSON file.
        path: PathBuf,
        /// Number of random hands.
        #[clap(long, default_value_t = 1_000)]
        hands: usize,
        /// Seed for the random hands.
        #[clap(long, default_value_t = 42)]
        seed: u64,
    },
    /// Checks the current evaluator against saved fixtures.
    Verify {
        /// The fixtures JSON file.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match Cli::parse().command {
        Command::Eval { cards, json } => eval(&cards, json),
        Command::Compare { first, second } => compare_hands(&first, &second),
        Command::Equity {
            cards,
            players,
            runs,
            tasks,
            seed,
            json,
        } => {
            let config = SimConfig {
                players: players as usize,
                runs,
                tasks: tasks as usize,
                seed,
            };

            equity(cards.as_deref(), config, json)
        }
        Command::Deal { players, seed } => deal(players as usize, seed),
        Command::Fixtures { command } => match command {
            FixturesCommand::Record { path, hands, seed } => record(path, hands, seed),
            FixturesCommand::Verify { path } => verify(path),
        },
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    seed.map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_os_rng)
}

fn print_hand(hand: &RankedHand) {
    println!("{}", render::cards_row(hand.cards()));
    println!("{}\n", hand.category());
}

fn eval(cards: &str, json: bool) -> Result<()> {
    let hand = evaluate(&parse_cards(cards)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hand)?);
    } else {
        print_hand(&hand);
    }

    Ok(())
}

fn compare_hands(first: &str, second: &str) -> Result<()> {
    let h1 = evaluate(&parse_cards(first)?)?;
    let h2 = evaluate(&parse_cards(second)?)?;

    print_hand(&h1);
    print_hand(&h2);

    match Outcome::from(compare(&h1, &h2)) {
        Outcome::Win => println!("The first hand wins"),
        Outcome::Loss => println!("The second hand wins"),
        Outcome::Tie => println!("The hands tie"),
    }

    Ok(())
}

fn parse_hole_cards(cards: &str) -> Result<[Card; 2]> {
    match <[Card; 2]>::try_from(parse_cards(cards)?) {
        Ok(pair) => Ok(pair),
        Err(cards) => bail!("expected 2 hole cards, got {}", cards.len()),
    }
}

fn equity(cards: Option<&str>, config: SimConfig, json: bool) -> Result<()> {
    let subject = cards.map(parse_hole_cards).transpose()?;
    let equity = Simulator::new(config)?.run(subject)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&equity)?);
    } else {
        println!("{}", render::cards_row(&equity.subject()));
        println!("{equity}");
        println!("Equity {:.2}%", equity.equity() * 100.0);
    }

    Ok(())
}

fn deal(players: usize, seed: Option<u64>) -> Result<()> {
    let mut round = Round::new(players, &mut rng(seed))?;
    let hole_cards = round.hole_cards()?.to_vec();

    let flop = round.flop()?;
    println!("Flop\n{}\n", render::cards_row(&flop));

    let turn = round.turn()?;
    println!("Turn\n{}\n", render::cards_row(&[turn]));

    let river = round.river()?;
    println!("River\n{}\n", render::cards_row(&[river]));

    let board = round.board();
    let hands = hole_cards
        .iter()
        .map(|cards| {
            let mut hand = cards.to_vec();
            hand.extend_from_slice(&board);
            evaluate(&hand)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (player, (cards, hand)) in hole_cards.iter().zip(&hands).enumerate() {
        println!("Player {}\n{}", player + 1, render::cards_row(cards));
        print_hand(hand);
    }

    let Some(best) = hands.iter().max_by(|h1, h2| compare(h1, h2)) else {
        bail!("no players in the round");
    };

    let winners = hands
        .iter()
        .enumerate()
        .filter(|(_, hand)| compare(hand, best).is_eq())
        .map(|(player, _)| (player + 1).to_string())
        .collect::<Vec<_>>();

    println!("Winners: {} with {}", winners.join(", "), best.category());
    Ok(())
}

fn record(path: PathBuf, hands: usize, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let hands = (0..hands)
        .map(|_| {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let n = rng.random_range(5..=7);
            deck.deal_cards(n)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let fixtures = fixture::record(hands)?;
    fixture::save(&path, &fixtures)?;

    info!("Saved {} fixtures to {}", fixtures.len(), path.display());
    Ok(())
}

fn verify(path: PathBuf) -> Result<()> {
    let fixtures = fixture::load(&path)?;
    let mismatches = fixture::verify(&fixtures)?;

    for m in &mismatches {
        warn!(
            "Hand {:?} expected {} {:?} got {} {:?}",
            m.fixture.hand,
            m.fixture.result.category(),
            m.fixture.result.cards(),
            m.actual.category(),
            m.actual.cards()
        );
    }

    if !mismatches.is_empty() {
        bail!("{} of {} fixtures failed", mismatches.len(), fixtures.len());
    }

    info!("Verified {} fixtures from {}", fixtures.len(), path.display());
    Ok(())
}
