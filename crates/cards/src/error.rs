// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Malformed card input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The suit symbol is not one of S, H, D, C.
    #[error("invalid suit symbol '{0}'")]
    InvalidSuit(char),
    /// The rank value is outside 2..=14.
    #[error("invalid rank {0}, expected a value in 2..=14")]
    InvalidRank(u8),
    /// The text is not a card.
    #[error("cannot parse card from '{0}'")]
    Parse(String),
    /// The same card appears more than once in a set.
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

/// Deck dealing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More cards were requested than the deck holds.
    #[error("cannot deal {requested} cards from a deck with {remaining} cards")]
    Exhausted {
        /// Number of requested cards.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}
