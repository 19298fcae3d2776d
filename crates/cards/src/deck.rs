// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards dealt without replacement.
use rand::prelude::*;

use crate::{Card, DeckError, Rank, Suit};

/// A cards Deck
///
/// The deck holds the cards not yet dealt, it only shrinks as cards are
/// dealt from the top (the end of the cards vector).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::shuffled_without(rng, &[])
    }

    /// Creates a new shuffled deck without the `excluded` cards.
    pub fn shuffled_without<R: Rng + ?Sized>(rng: &mut R, excluded: &[Card]) -> Self {
        let mut deck = Self::default();
        deck.cards.retain(|c| !excluded.contains(c));
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    }

    /// Deals `n` cards from the deck.
    ///
    /// If the deck has less than `n` cards it returns an error and the deck is
    /// left untouched.
    pub fn deal_cards(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::Exhausted {
                requested: n,
                remaining,
            });
        }

        Ok(self.cards.drain(remaining - n..).rev().collect())
    }

    /// Deals two hole cards.
    pub fn deal_pair(&mut self) -> Result<[Card; 2], DeckError> {
        if self.cards.len() < 2 {
            return Err(DeckError::Exhausted {
                requested: 2,
                remaining: self.cards.len(),
            });
        }

        Ok([self.deal()?, self.deal()?])
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn deck_uniqueness() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            cards.insert(deck.deal().unwrap());
        }

        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.deal().is_err());
    }

    #[test]
    fn deal_shrinks_deck() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut deck = Deck::new_and_shuffled(&mut rng);

        let hand = deck.deal_cards(7).unwrap();
        assert_eq!(hand.len(), 7);
        assert_eq!(deck.count(), Deck::SIZE - 7);
        assert!(hand.iter().all(|&c| !deck.contains(c)));

        let [c1, c2] = deck.deal_pair().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(deck.count(), Deck::SIZE - 9);
    }

    #[test]
    fn deal_too_many() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        deck.deal_cards(50).unwrap();

        let err = deck.deal_cards(3).unwrap_err();
        assert_eq!(
            err,
            DeckError::Exhausted {
                requested: 3,
                remaining: 2
            }
        );

        // A failed deal leaves the deck as it was.
        assert_eq!(deck.count(), 2);
        assert_eq!(deck.deal_cards(2).unwrap().len(), 2);
        assert!(deck.deal_pair().is_err());
    }

    #[test]
    fn deck_without_cards() {
        let excluded = [
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::King, Suit::Diamonds),
        ];

        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::shuffled_without(&mut rng, &excluded);
        assert_eq!(deck.count(), Deck::SIZE - 2);
        assert!(excluded.iter().all(|&c| !deck.contains(c)));

        let mut deck = Deck::default();
        deck.remove(excluded[0]);
        assert_eq!(deck.count(), Deck::SIZE - 1);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(8));

        let d1 = d1.into_iter().collect::<Vec<_>>();
        assert_eq!(d1, d2.into_iter().collect::<Vec<_>>());
        assert_ne!(d1, d3.into_iter().collect::<Vec<_>>());
        assert_ne!(d1, Deck::default().into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_keeps_cards() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = Deck::new_and_shuffled(&mut rng);
        deck.deal_cards(10).unwrap();

        let before = deck.clone().into_iter().collect::<HashSet<_>>();
        deck.shuffle(&mut rng);
        assert_eq!(deck.count(), Deck::SIZE - 10);
        assert_eq!(deck.into_iter().collect::<HashSet<_>>(), before);
    }
}
