// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker hand evaluator.
//!
//! Evaluates 5, 6 and 7 cards hands by classifying the cards into the best
//! five cards [RankedHand] and compares ranked hands to decide a showdown.
//!
//! To use the evaluator call [evaluate] on a set of cards and [compare] the
//! resulting hands:
//!
//! ```
//! # use oddsmith_eval::*;
//! let h1 = evaluate(&parse_cards("AD 4D AH 8D KD 4S 2D").unwrap()).unwrap();
//! assert_eq!(h1.category(), Category::Flush);
//!
//! let h2 = evaluate(&parse_cards("3S 4S AH 5D 6H 4C 7D").unwrap()).unwrap();
//! assert_eq!(h2.category(), Category::Straight);
//!
//! assert_eq!(compare(&h1, &h2), std::cmp::Ordering::Greater);
//! assert_eq!(Outcome::from(h2.strength_cmp(&h1)), Outcome::Loss);
//! ```
//!
//! The [fixture] module records evaluation results to JSON files that can be
//! verified later against the current evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{CategoryIndex, EvalError, best_five, detect, evaluate};

pub mod fixture;

mod hand;
pub use hand::{Category, Outcome, RankedHand, compare};

// Reexport cards types.
pub use oddsmith_cards::{
    Card, CardError, Deck, DeckError, Rank, Suit, parse_cards, validate_cards,
};
