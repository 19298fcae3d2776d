// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_sample -- --hands 1000000
// ...
// Total hands      1000000
// Elapsed:         1.730s
// Hands/sec:       578034
//
// High Card:       17.41%
// Pair:            43.82%
// ...
// ```
use clap::Parser;
use rand::prelude::*;
use std::time::Instant;

use oddsmith_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of random 7 cards hands to evaluate.
    #[clap(long, default_value_t = 1_000_000)]
    hands: usize,
    /// Seed for the random generator.
    #[clap(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut counts = [0usize; 9];

    let now = Instant::now();

    for _ in 0..cli.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let Ok(hand) = deck.deal_cards(7) else {
            unreachable!("a full deck has 7 cards");
        };

        let category = best_five(&hand).category();
        counts[category as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::categories() {
        let label = format!("{category}:");
        let freq = counts[category as usize] as f64 / total.max(1) as f64;
        println!("{label:<17}{:.2}%", freq * 100.0);
    }
}
