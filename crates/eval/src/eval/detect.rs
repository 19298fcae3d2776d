// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand pattern detectors.
//!
//! Each detector looks for one hand category and returns the matching cards
//! ordered from the least to the most significant, or `None` if the category
//! is not present. Detectors don't check for stronger categories, the
//! [evaluator](super::best_five) calls them in order of strength.
use std::cmp::Reverse;

use super::CategoryIndex;
use crate::{Card, Rank};

/// Looks for five or more cards of the same suit.
///
/// Returns all the cards of the flush suit sorted by rank, not only the top
/// five, so that a straight flush with lower cards can still be found. When
/// more than one suit qualifies the suit with the highest cards wins, ties
/// are broken by suit order.
pub fn flush(index: &CategoryIndex) -> Option<Vec<Card>> {
    index
        .suits()
        .filter(|(_, ranks)| ranks.len() >= 5)
        .map(|(suit, ranks)| {
            let mut ranks = ranks.to_vec();
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            (ranks, Reverse(suit))
        })
        .max()
        .map(|(ranks, Reverse(suit))| {
            ranks
                .into_iter()
                .rev()
                .map(|r| Card::new(r, suit))
                .collect()
        })
}

/// Looks for five or more cards of consecutive rank.
///
/// An ace also counts as a one for a five-high straight, in that case the ace
/// is the first card of the returned run. The run can be longer than five
/// cards and it is the first run found scanning ranks from the lowest, cards
/// with repeated ranks are skipped.
pub fn straight(cards: &[Card]) -> Option<Vec<Card>> {
    let mut ordered = cards
        .iter()
        .map(|c| (c.rank().value(), *c))
        .collect::<Vec<_>>();
    ordered.sort_by_key(|(value, _)| *value);

    let &(top, ace) = ordered.last()?;
    if top == Rank::Ace.value() {
        ordered.insert(0, (1, ace));
    }

    let mut run = vec![ordered[0].1];
    let mut previous = ordered[0].0;

    for &(value, card) in &ordered[1..] {
        if value == previous {
            continue;
        }

        if value != previous + 1 {
            if run.len() >= 5 {
                break;
            }

            run.clear();
        }

        run.push(card);
        previous = value;
    }

    (run.len() >= 5).then_some(run)
}

/// Looks for a straight in the cards of a flush.
///
/// Returns the five highest cards of the straight.
pub fn straight_flush(flush: &[Card]) -> Option<[Card; 5]> {
    straight(flush).and_then(|run| top_five(&run))
}

/// Looks for four cards of the same rank.
///
/// The hand is ordered `[kicker, quad x 4]`.
pub fn four_of_a_kind(index: &CategoryIndex) -> Option<[Card; 5]> {
    let rank = *index.ranks_with_count(4).first()?;
    let quad = index.cards_of(rank);
    complete(index, &quad, 1)
}

/// Looks for a triple and a pair.
///
/// The triple and the pair are the highest by rank, a second triple can
/// supply the pair, unlike a pair rule that only takes ranks held in exactly
/// two suits. The hand is ordered `[pair x 2, triple x 3]`.
pub fn full_house(index: &CategoryIndex) -> Option<[Card; 5]> {
    let triples = index.ranks_with_count(3);
    let &triple = triples.first()?;

    let pair = index
        .ranks_with_count(2)
        .into_iter()
        .chain(triples.iter().skip(1).copied())
        .max()?;

    let mut hand = index.cards_of(pair);
    hand.truncate(2);
    hand.extend(index.cards_of(triple));
    hand.try_into().ok()
}

/// Looks for three cards of the same rank.
///
/// The hand is ordered `[kicker, kicker, triple x 3]`.
pub fn three_of_a_kind(index: &CategoryIndex) -> Option<[Card; 5]> {
    let rank = *index.ranks_with_count(3).first()?;
    let triple = index.cards_of(rank);
    complete(index, &triple, 2)
}

/// Looks for two pairs.
///
/// The hand is ordered `[kicker, lower pair x 2, higher pair x 2]`.
pub fn two_pair(index: &CategoryIndex) -> Option<[Card; 5]> {
    let pairs = index.ranks_with_count(2);
    let (&high, &low) = (pairs.first()?, pairs.get(1)?);

    let mut pairs = index.cards_of(low);
    pairs.extend(index.cards_of(high));
    complete(index, &pairs, 1)
}

/// Looks for two cards of the same rank.
///
/// The hand is ordered `[kicker x 3, pair x 2]`.
pub fn pair(index: &CategoryIndex) -> Option<[Card; 5]> {
    let rank = *index.ranks_with_count(2).first()?;
    let pair = index.cards_of(rank);
    complete(index, &pair, 3)
}

/// The five highest cards in ascending order.
pub fn high_card(cards: &[Card]) -> Option<[Card; 5]> {
    let hand = highest_others(cards, &[], 5);
    if hand.len() < 5 {
        return None;
    }

    hand.try_into().ok()
}

/// The `n` highest cards not in `excluded`, in ascending order.
///
/// Cards with the same rank are ordered by suit.
fn highest_others(cards: &[Card], excluded: &[Card], n: usize) -> Vec<Card> {
    let mut others = cards
        .iter()
        .filter(|c| !excluded.contains(c))
        .copied()
        .collect::<Vec<_>>();
    others.sort_unstable_by_key(|c| (c.rank(), Reverse(c.suit())));

    let skip = others.len().saturating_sub(n);
    others.split_off(skip)
}

/// Prepends the `n` highest kickers to a pattern.
fn complete(index: &CategoryIndex, pattern: &[Card], n: usize) -> Option<[Card; 5]> {
    let mut hand = highest_others(&index.cards_by_rank(), pattern, n);
    if hand.len() < n {
        return None;
    }

    hand.extend_from_slice(pattern);
    hand.try_into().ok()
}

/// The last five cards of a run.
fn top_five(run: &[Card]) -> Option<[Card; 5]> {
    let start = run.len().checked_sub(5)?;
    run[start..].try_into().ok()
}
