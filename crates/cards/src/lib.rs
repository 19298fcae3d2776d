// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Oddsmith Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use oddsmith_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert_eq!(td, Card::from_code('D', 10).unwrap());
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards without replacement:
//!
//! ```
//! # use oddsmith_cards::{Card, Deck, Rank, Suit};
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(7);
//! let hole = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades)];
//!
//! let mut deck = Deck::shuffled_without(&mut rng, &hole);
//! assert_eq!(deck.count(), Deck::SIZE - 2);
//!
//! let board = deck.deal_cards(5).unwrap();
//! assert_eq!(board.len(), 5);
//! assert_eq!(deck.count(), Deck::SIZE - 7);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, Rank, Suit, parse_cards, validate_cards};

mod deck;
pub use deck::Deck;

mod error;
pub use error::{CardError, DeckError};
