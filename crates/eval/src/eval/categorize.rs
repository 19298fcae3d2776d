// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Suit and rank indices of a set of cards.
use ahash::AHashMap;

use crate::{Card, Rank, Suit};

/// Indexes a set of cards by suit and by rank.
///
/// Both indices hold the same cards, so the original set can be rebuilt from
/// either one of them. An index is built once per evaluation and never
/// changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_suit: AHashMap<Suit, Vec<Rank>>,
    by_rank: AHashMap<Rank, Vec<Suit>>,
    len: usize,
}

impl CategoryIndex {
    /// Builds the indices in a single pass over the cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut by_suit = AHashMap::<Suit, Vec<Rank>>::with_capacity(4);
        let mut by_rank = AHashMap::<Rank, Vec<Suit>>::with_capacity(cards.len());

        for card in cards {
            by_suit.entry(card.suit()).or_default().push(card.rank());
            by_rank.entry(card.rank()).or_default().push(card.suit());
        }

        Self {
            by_suit,
            by_rank,
            len: cards.len(),
        }
    }

    /// Number of indexed cards.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if there are no indexed cards.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The ranks of the cards with the given suit.
    pub fn ranks_of(&self, suit: Suit) -> &[Rank] {
        self.by_suit.get(&suit).map(Vec::as_slice).unwrap_or_default()
    }

    /// The suits of the cards with the given rank.
    pub fn suits_of(&self, rank: Rank) -> &[Suit] {
        self.by_rank.get(&rank).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates the suit index.
    pub fn suits(&self) -> impl Iterator<Item = (Suit, &[Rank])> {
        self.by_suit.iter().map(|(s, ranks)| (*s, ranks.as_slice()))
    }

    /// Iterates the rank index.
    pub fn ranks(&self) -> impl Iterator<Item = (Rank, &[Suit])> {
        self.by_rank.iter().map(|(r, suits)| (*r, suits.as_slice()))
    }

    /// The ranks held by exactly `count` suits, from the highest to the lowest.
    pub fn ranks_with_count(&self, count: usize) -> Vec<Rank> {
        let mut ranks = self
            .ranks()
            .filter(|(_, suits)| suits.len() == count)
            .map(|(rank, _)| rank)
            .collect::<Vec<_>>();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks
    }

    /// The cards with the given rank sorted by suit.
    pub fn cards_of(&self, rank: Rank) -> Vec<Card> {
        let mut suits = self.suits_of(rank).to_vec();
        suits.sort_unstable();
        suits.into_iter().map(|s| Card::new(rank, s)).collect()
    }

    /// Rebuilds the cards from the suit index.
    pub fn cards_by_suit(&self) -> Vec<Card> {
        self.suits()
            .flat_map(|(suit, ranks)| ranks.iter().map(move |&r| Card::new(r, suit)))
            .collect()
    }

    /// Rebuilds the cards from the rank index.
    pub fn cards_by_rank(&self) -> Vec<Card> {
        self.ranks()
            .flat_map(|(rank, suits)| suits.iter().map(move |&s| Card::new(rank, s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;
    use ahash::HashSet;

    fn sorted(mut cards: Vec<Card>) -> Vec<Card> {
        cards.sort_unstable_by_key(|c| (c.rank(), c.suit()));
        cards
    }

    #[test]
    fn index_cards() {
        let cards = parse_cards("AD 4D AH 8D KD 4S 2D").unwrap();
        let index = CategoryIndex::new(&cards);
        assert_eq!(index.len(), 7);

        use Rank::*;
        assert_eq!(index.ranks_of(Suit::Diamonds), &[Ace, Four, Eight, King, Deuce]);
        assert_eq!(index.ranks_of(Suit::Hearts), &[Ace]);
        assert_eq!(index.ranks_of(Suit::Spades), &[Four]);
        assert!(index.ranks_of(Suit::Clubs).is_empty());

        assert_eq!(index.suits_of(Ace), &[Suit::Diamonds, Suit::Hearts]);
        assert_eq!(index.suits_of(Four), &[Suit::Diamonds, Suit::Spades]);
        assert_eq!(index.suits_of(Eight), &[Suit::Diamonds]);
        assert!(index.suits_of(Ten).is_empty());

        assert_eq!(index.ranks_with_count(2), vec![Ace, Four]);
        assert_eq!(index.ranks_with_count(1), vec![King, Eight, Deuce]);
        assert!(index.ranks_with_count(3).is_empty());
    }

    #[test]
    fn rebuild_cards() {
        let cards = parse_cards("AD 4D AH 8D KD 4S 2D").unwrap();
        let index = CategoryIndex::new(&cards);

        let expected = sorted(cards.clone());
        assert_eq!(sorted(index.cards_by_suit()), expected);
        assert_eq!(sorted(index.cards_by_rank()), expected);

        let set = index.cards_by_rank().into_iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), cards.len());
    }

    #[test]
    fn cards_of_rank_by_suit() {
        let cards = parse_cards("7C 7S 2D 7H").unwrap();
        let index = CategoryIndex::new(&cards);
        assert_eq!(index.cards_of(Rank::Seven), parse_cards("7S 7H 7C").unwrap());
    }
}
