// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Ranked hands and their ordering.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, Rank};

/// A poker hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Five unrelated cards.
    HighCard,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfKind,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind with a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfKind,
    /// A straight of the same suit.
    StraightFlush,
}

impl Category {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfKind,
            Straight,
            Flush,
            FullHouse,
            FourOfKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The best five cards out of a hand and their category.
///
/// The cards are ordered from the least to the most significant, so two hands
/// in the same category compare by their ranks starting from the last card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedHand {
    category: Category,
    cards: [Card; 5],
}

impl RankedHand {
    /// Creates a ranked hand, cards must be ordered by significance.
    pub fn new(category: Category, cards: [Card; 5]) -> Self {
        Self { category, cards }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The five cards ordered from the least to the most significant.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The cards rank values used for comparing hands in the same category.
    ///
    /// An ace that starts a straight is a five-high straight ace and counts
    /// as 1.
    pub fn rank_values(&self) -> [u8; 5] {
        let is_straight = matches!(
            self.category,
            Category::Straight | Category::StraightFlush
        );

        let mut values = self.cards.map(|c| c.rank().value());
        if is_straight && self.cards[0].rank() == Rank::Ace {
            values[0] = 1;
        }

        values
    }

    /// Compares the strength of this hand with another hand.
    ///
    /// Suits never affect the result, two hands with the same category and
    /// ranks are equal.
    pub fn strength_cmp(&self, other: &RankedHand) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        self.category.cmp(&other.category).then_with(|| {
            let (lhs, rhs) = (self.rank_values(), other.rank_values());
            lhs.iter().rev().cmp(rhs.iter().rev())
        })
    }
}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for card in &self.cards {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

/// Compares two ranked hands.
pub fn compare(lhs: &RankedHand, rhs: &RankedHand) -> Ordering {
    lhs.strength_cmp(rhs)
}

/// The result of a showdown for the subject hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The subject hand is beaten.
    Loss = -1,
    /// The hands have the same strength.
    Tie = 0,
    /// The subject hand wins.
    Win = 1,
}

impl Outcome {
    /// Returns all outcomes.
    pub fn outcomes() -> impl DoubleEndedIterator<Item = Outcome> {
        [Outcome::Loss, Outcome::Tie, Outcome::Win].into_iter()
    }

    /// The outcome integer value, -1 for a loss, 0 for a tie and 1 for a win.
    pub fn value(&self) -> i8 {
        *self as i8
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Outcome::Loss,
            Ordering::Equal => Outcome::Tie,
            Ordering::Greater => Outcome::Win,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
            Outcome::Win => "win",
        };

        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;

    fn hand(category: Category, cards: &str) -> RankedHand {
        let cards = parse_cards(cards).unwrap();
        RankedHand::new(category, cards.try_into().unwrap())
    }

    #[test]
    fn full_house_triple_dominates() {
        let tens_full = hand(Category::FullHouse, "KS KC TS TC TD");
        let kings_full = hand(Category::FullHouse, "TS TC KD KS KC");
        assert_eq!(compare(&tens_full, &kings_full), Ordering::Less);
        assert_eq!(compare(&kings_full, &tens_full), Ordering::Greater);
    }

    #[test]
    fn category_dominates() {
        let straight = hand(Category::Straight, "TS JC QD KS AC");
        let pair = hand(Category::Pair, "8D JS AC TS TC");
        assert_eq!(compare(&straight, &pair), Ordering::Greater);
        assert_eq!(compare(&pair, &straight), Ordering::Less);
    }

    #[test]
    fn same_category_by_ranks() {
        let ace_high = hand(Category::Straight, "TS JC QD KS AC");
        let king_high = hand(Category::Straight, "9S TS JC QD KS");
        assert_eq!(compare(&ace_high, &king_high), Ordering::Greater);
        assert_eq!(compare(&ace_high, &ace_high), Ordering::Equal);
    }

    #[test]
    fn suits_do_not_matter() {
        let h1 = hand(Category::HighCard, "2S JC QD KS AC");
        let h2 = hand(Category::HighCard, "2H JS QS KH AD");
        assert_ne!(h1, h2);
        assert_eq!(compare(&h1, &h2), Ordering::Equal);
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = hand(Category::Straight, "AS 2C 3D 4S 5C");
        assert_eq!(wheel.rank_values(), [1, 2, 3, 4, 5]);

        let six_high = hand(Category::Straight, "2C 3D 4S 5C 6H");
        assert_eq!(compare(&wheel, &six_high), Ordering::Less);

        let wheel_flush = hand(Category::StraightFlush, "AH 2H 3H 4H 5H");
        let six_flush = hand(Category::StraightFlush, "2S 3S 4S 5S 6S");
        assert_eq!(compare(&wheel_flush, &six_flush), Ordering::Less);

        // An ace in a flush is always high.
        let flush = hand(Category::Flush, "AH 2H 3H 4H 6H");
        assert_eq!(flush.rank_values(), [14, 2, 3, 4, 6]);
    }

    #[test]
    fn outcome_values() {
        assert_eq!(Outcome::from(Ordering::Less).value(), -1);
        assert_eq!(Outcome::from(Ordering::Equal).value(), 0);
        assert_eq!(Outcome::from(Ordering::Greater).value(), 1);
        assert!(Outcome::Loss < Outcome::Tie && Outcome::Tie < Outcome::Win);
    }
}
