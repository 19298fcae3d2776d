// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator indexes the cards by suit and rank with a [CategoryIndex] and
//! runs the [detect] functions from the strongest to the weakest category,
//! the first detector that finds its pattern gives the hand category and its
//! best five cards.
//!
//! It provides an [evaluate] function that checks its input, useful for cards
//! coming from users, and [best_five] that skips the checks for cards dealt
//! from a [Deck](crate::Deck).
use thiserror::Error;

use crate::{Card, CardError, Category, RankedHand, validate_cards};

mod categorize;
pub use categorize::CategoryIndex;

pub mod detect;

/// Invalid evaluator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand doesn't have 5, 6, or 7 cards.
    #[error("a hand must have 5 to 7 cards, got {0}")]
    HandSize(usize),
    /// A malformed card set.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Evaluates a hand of 5, 6, or 7 distinct cards.
pub fn evaluate(cards: &[Card]) -> Result<RankedHand, EvalError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EvalError::HandSize(cards.len()));
    }

    validate_cards(cards)?;
    Ok(best_five(cards))
}

/// Returns the best five cards hand out of the given cards.
///
/// The cards are not checked for duplicates.
///
/// Panics if there are less than 5 cards.
pub fn best_five(cards: &[Card]) -> RankedHand {
    assert!(cards.len() >= 5, "at least 5 cards, got {}", cards.len());

    let index = CategoryIndex::new(cards);

    // A straight flush is the only category stronger than a flush that can
    // coexist with one.
    if let Some(flush) = detect::flush(&index) {
        if let Some(hand) = detect::straight_flush(&flush) {
            return RankedHand::new(Category::StraightFlush, hand);
        }

        let top = flush.len() - 5;
        if let Ok(hand) = flush[top..].try_into() {
            return RankedHand::new(Category::Flush, hand);
        }
    }

    if let Some(hand) = detect::four_of_a_kind(&index) {
        return RankedHand::new(Category::FourOfKind, hand);
    }

    if let Some(hand) = detect::full_house(&index) {
        return RankedHand::new(Category::FullHouse, hand);
    }

    if let Some(run) = detect::straight(cards) {
        let top = run.len() - 5;
        if let Ok(hand) = run[top..].try_into() {
            return RankedHand::new(Category::Straight, hand);
        }
    }

    if let Some(hand) = detect::three_of_a_kind(&index) {
        return RankedHand::new(Category::ThreeOfKind, hand);
    }

    if let Some(hand) = detect::two_pair(&index) {
        return RankedHand::new(Category::TwoPair, hand);
    }

    if let Some(hand) = detect::pair(&index) {
        return RankedHand::new(Category::Pair, hand);
    }

    match detect::high_card(cards) {
        Some(hand) => RankedHand::new(Category::HighCard, hand),
        None => unreachable!("a hand with 5 or more cards has a high card"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, compare, parse_cards};
    use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
    use std::cmp::Ordering;

    fn eval(s: &str) -> RankedHand {
        evaluate(&parse_cards(s).unwrap()).unwrap()
    }

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn eval_flush() {
        let hand = eval("AD 4D AH 8D KD 4S 2D");
        assert_eq!(hand.category(), Category::Flush);
        assert_eq!(hand.cards().to_vec(), cards("2D 4D 8D KD AD"));

        // Only the top five cards of a longer flush.
        let hand = eval("AD 4D AH 8D KD 3D 2D");
        assert_eq!(hand.category(), Category::Flush);
        assert_eq!(hand.cards().to_vec(), cards("3D 4D 8D KD AD"));
    }

    #[test]
    fn eval_straight_with_repeated_rank() {
        // The same four of spades twice, only evaluated with the unchecked
        // evaluator.
        let hand = best_five(&[
            Card::from_code('S', 3).unwrap(),
            Card::from_code('S', 4).unwrap(),
            Card::from_code('H', 14).unwrap(),
            Card::from_code('D', 5).unwrap(),
            Card::from_code('H', 6).unwrap(),
            Card::from_code('S', 4).unwrap(),
            Card::from_code('D', 7).unwrap(),
        ]);
        assert_eq!(hand.category(), Category::Straight);
        assert_eq!(hand.cards().to_vec(), cards("3S 4S 5D 6H 7D"));
    }

    #[test]
    fn eval_ace_low_straight() {
        let hand = eval("3S 4H 2D 5C AS");
        assert_eq!(hand.category(), Category::Straight);
        assert_eq!(hand.cards().to_vec(), cards("AS 2D 3S 4H 5C"));
        assert_eq!(hand.rank_values(), [1, 2, 3, 4, 5]);

        // The longer run keeps its five highest cards.
        let hand = eval("3S 4H 2D 5C AS 6D KC");
        assert_eq!(hand.category(), Category::Straight);
        assert_eq!(hand.cards().to_vec(), cards("2D 3S 4H 5C 6D"));

        // An ace doesn't fill a gap at the deuce.
        let hand = eval("3S 4H 5D 6C AS");
        assert_eq!(hand.category(), Category::HighCard);
    }

    #[test]
    fn eval_straight_flush_below_flush_top() {
        // The flush top five cards are not a straight but lower cards are.
        let hand = eval("5H 6H 7H 8H 9H KH 2C");
        assert_eq!(hand.category(), Category::StraightFlush);
        assert_eq!(hand.cards().to_vec(), cards("5H 6H 7H 8H 9H"));

        let hand = eval("AC 2C 3C 4C 5C 9D 9S");
        assert_eq!(hand.category(), Category::StraightFlush);
        assert_eq!(hand.rank_values(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn eval_precedence() {
        let quads = eval("7S 7D 7H 7C 8D 8C 8S");
        assert_eq!(quads.category(), Category::FourOfKind);
        assert_eq!(quads.cards().to_vec(), cards("8S 7S 7H 7D 7C"));

        // A straight beats three of a kind and two pair in the same cards.
        let straight = eval("5S 5D 5H 6C 7D 8C 9S");
        assert_eq!(straight.category(), Category::Straight);
        assert_eq!(straight.cards().to_vec(), cards("5S 6C 7D 8C 9S"));

        let straight = eval("5S 5D 6H 6C 7D 8C 9S");
        assert_eq!(straight.category(), Category::Straight);

        let full = eval("5S 5D 5H 6C 6D 7C 8S");
        assert_eq!(full.category(), Category::FullHouse);

        let trips = eval("5S 5D 5H 2C 9D KC 8S");
        assert_eq!(trips.category(), Category::ThreeOfKind);

        let two_pair = eval("5S 5D 2H 2C 9D KC 8S");
        assert_eq!(two_pair.category(), Category::TwoPair);

        let pair = eval("5S 5D 3H 2C 9D KC 8S");
        assert_eq!(pair.category(), Category::Pair);

        let high = eval("5S 4D 3H QC 9D KC 8S");
        assert_eq!(high.category(), Category::HighCard);
        assert_eq!(high.cards().to_vec(), cards("5S 8S 9D QC KC"));
    }

    #[test]
    fn category_ladder() {
        let ladder = [
            "2S 4D 6H 8C TS QD 3C",
            "2S 2D 6H 8C TS QD 3C",
            "2S 2D 6H 6C TS QD 3C",
            "2S 2D 2H 8C TS QD 3C",
            "2S 3D 4H 5C 6S QD KC",
            "2S 4S 6S 8S TS QD 3C",
            "2S 2D 2H 8C 8S QD 3C",
            "2S 2D 2H 2C TS QD 3C",
            "2S 3S 4S 5S 6S QD KC",
        ];

        let hands = ladder.iter().map(|h| eval(h)).collect::<Vec<_>>();
        for (hand, category) in hands.iter().zip(Category::categories()) {
            assert_eq!(hand.category(), category);
        }

        for pair in hands.windows(2) {
            assert_eq!(compare(&pair[1], &pair[0]), Ordering::Greater);
            assert_eq!(compare(&pair[0], &pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn category_is_order_independent() {
        let mut rng = StdRng::seed_from_u64(101);

        for _ in 0..500 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let n = rng.random_range(5..=7);
            let mut hand = deck.deal_cards(n).unwrap();
            let expected = best_five(&hand);

            for _ in 0..4 {
                hand.shuffle(&mut rng);
                let shuffled = best_five(&hand);
                assert_eq!(shuffled.category(), expected.category());
                assert_eq!(compare(&shuffled, &expected), Ordering::Equal);
            }
        }
    }

    #[test]
    fn invalid_input() {
        assert_eq!(
            evaluate(&cards("AS KS QS JS")),
            Err(EvalError::HandSize(4))
        );
        assert_eq!(
            evaluate(&cards("AS KS QS JS TS 9S 8S 7S")),
            Err(EvalError::HandSize(8))
        );

        let mut hand = cards("AS KS QS JS");
        hand.push(hand[0]);
        assert_eq!(
            evaluate(&hand),
            Err(EvalError::Card(CardError::Duplicate(hand[0])))
        );
    }
}
