// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the equity of all starting hands, suited hands below the diagonal
// and offsuit hands above it:
//
// ```bash
// $ cargo r --release --example chart -- --players 3
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use oddsmith_equity::*;
use oddsmith_eval::{Card, Rank, Suit};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players including the starting hand owner.
    #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(2..=9))]
    players: u8,
    /// Number of simulations for each starting hand.
    #[clap(long, short, default_value_t = 20_000)]
    runs: usize,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4)]
    tasks: usize,
    /// Seed for a reproducible chart.
    #[clap(long, short)]
    seed: Option<u64>,
}

/// The starting hand at a chart cell.
fn starting_hand(row: Rank, col: Rank) -> [Card; 2] {
    if row < col {
        [Card::new(col, Suit::Hearts), Card::new(row, Suit::Hearts)]
    } else {
        [Card::new(row, Suit::Hearts), Card::new(col, Suit::Spades)]
    }
}

fn main() -> Result<(), SimError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let sim = Simulator::new(SimConfig {
        players: cli.players as usize,
        runs: cli.runs,
        tasks: cli.tasks,
        seed: cli.seed,
    })?;

    let now = Instant::now();

    print!("   ");
    for col in Rank::ranks().rev() {
        print!("{:>5}", col.to_string());
    }
    println!();

    for row in Rank::ranks().rev() {
        print!("{:>3}", row.to_string());

        for col in Rank::ranks().rev() {
            let equity = sim.run(Some(starting_hand(row, col)))?;
            print!("{:>5.1}", equity.equity() * 100.0);
        }

        println!();
    }

    println!(
        "\n{} players, {} runs per hand, elapsed {:.3}s",
        cli.players,
        cli.runs,
        now.elapsed().as_secs_f64()
    );

    Ok(())
}
