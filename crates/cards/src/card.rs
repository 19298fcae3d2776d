// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is a rank and suit pair, its external encoding is the tuple
/// `(suit-symbol, rank-value)` where the suit symbol is one of `S`, `H`, `D`,
/// `C` and the rank value is in 2..=14 with 14 for the Ace. Serialization
/// uses the same encoding, for example `["D", 14]` for the ace of diamonds.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "(char, u8)", try_from = "(char, u8)")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Create a card from its external encoding.
    pub fn from_code(suit: char, rank: u8) -> Result<Card, CardError> {
        Ok(Card::new(Rank::try_from(rank)?, Suit::try_from(suit)?))
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the external encoding for this card.
    pub fn code(&self) -> (char, u8) {
        (self.suit.symbol(), self.rank.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl From<Card> for (char, u8) {
    fn from(card: Card) -> Self {
        card.code()
    }
}

impl TryFrom<(char, u8)> for Card {
    type Error = CardError;

    fn try_from((suit, rank): (char, u8)) -> Result<Self, Self::Error> {
        Card::from_code(suit, rank)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card from its display form, `AS`, `TD` or `10D`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || CardError::Parse(s.to_string());

        let mut chars = s.chars();
        let suit = chars.next_back().ok_or_else(invalid)?;
        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            r if r.len() == 1 => {
                let value = r.parse::<u8>().map_err(|_| invalid())?;
                Rank::try_from(value)?
            }
            _ => return Err(invalid()),
        };

        Ok(Card::new(rank, Suit::try_from(suit)?))
    }
}

/// Checks that a set of cards has no duplicates.
pub fn validate_cards(cards: &[Card]) -> Result<(), CardError> {
    for (idx, card) in cards.iter().enumerate() {
        if cards[idx + 1..].contains(card) {
            return Err(CardError::Duplicate(*card));
        }
    }

    Ok(())
}

/// Parses a whitespace or comma separated list of cards.
///
/// The returned cards are validated to contain no duplicates.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardError> {
    let cards = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<Card>, _>>()?;

    validate_cards(&cards)?;
    Ok(cards)
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .nth(usize::from(value).wrapping_sub(2))
            .ok_or(CardError::InvalidRank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// Suits have no value in poker, the ordering is only used to make choices
/// between equally ranked cards deterministic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(symbol)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
