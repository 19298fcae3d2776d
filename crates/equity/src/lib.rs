// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker rounds and equity simulation.
//!
//! A [Round] deals one hand of play in stages, hole cards first and then the
//! flop, turn, and river. The [Simulator] estimates the probability that a
//! pair of hole cards wins, ties, or loses against a number of opponents by
//! repeatedly dealing the unknown cards from a fresh deck:
//!
//! ```
//! # use oddsmith_equity::*;
//! # use oddsmith_eval::{Outcome, parse_cards};
//! let subject = parse_cards("AS AH").unwrap().try_into().unwrap();
//! let config = SimConfig {
//!     players: 2,
//!     runs: 500,
//!     tasks: 2,
//!     seed: Some(7),
//! };
//!
//! let equity = Simulator::new(config).unwrap().run(Some(subject)).unwrap();
//! assert_eq!(equity.runs(), 500);
//! assert!(equity.probability(Outcome::Win) > equity.probability(Outcome::Loss));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod round;
pub use round::{BlindOutcome, Round, RoundError, RoundState, Stage, aggregate, blind_trial};

pub mod sim;
pub use sim::{Equity, SimConfig, SimError, Simulator};
