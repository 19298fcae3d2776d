// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A hand of play and blind simulation.
use rand::prelude::*;
use std::fmt;
use thiserror::Error;

use oddsmith_eval::{
    Card, CardError, Deck, DeckError, Outcome, RankedHand, best_five, validate_cards,
};

/// The dealing stages of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// The players hole cards.
    Hole,
    /// The first three community cards.
    Flop,
    /// The fourth community card.
    Turn,
    /// The fifth community card.
    River,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Stage::Hole => "hole cards",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
        };

        write!(f, "{stage}")
    }
}

/// Round errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The number of players is not supported.
    #[error("a round needs 2 to {max} players, got {0}", max = Round::MAX_PLAYERS)]
    Players(usize),
    /// A stage was dealt before the stage it depends on.
    #[error("cannot deal the {stage} before the {requires}")]
    OutOfOrder {
        /// The requested stage.
        stage: Stage,
        /// The stage that must be dealt first.
        requires: Stage,
    },
    /// Invalid subject cards.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The deck ran out of cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// The round state, each state includes the cards dealt in the previous ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RoundState {
    /// Nothing has been dealt.
    Init,
    /// The players hole cards have been dealt.
    HoleDealt,
    /// The flop has been dealt.
    FlopDealt,
    /// The turn has been dealt.
    TurnDealt,
    /// The river has been dealt.
    RiverDealt,
}

/// One hand of play for a number of players.
///
/// Cards are dealt lazily from the round deck the first time they are
/// requested and the same cards are returned after that. Community cards must
/// be dealt in order, the flop after the hole cards, the turn after the flop,
/// and the river after the turn.
#[derive(Debug)]
pub struct Round {
    players: usize,
    deck: Deck,
    state: RoundState,
    hole_cards: Vec<[Card; 2]>,
    flop: Option<[Card; 3]>,
    turn: Option<Card>,
    river: Option<Card>,
}

impl Round {
    /// The maximum number of players one deck can serve.
    pub const MAX_PLAYERS: usize = (Deck::SIZE - 5) / 2;

    /// Creates a round with a shuffled deck.
    pub fn new<R: Rng + ?Sized>(players: usize, rng: &mut R) -> Result<Self, RoundError> {
        check_players(players)?;

        Ok(Self {
            players,
            deck: Deck::new_and_shuffled(rng),
            state: RoundState::Init,
            hole_cards: Vec::with_capacity(players),
            flop: None,
            turn: None,
            river: None,
        })
    }

    /// The number of players.
    pub fn players(&self) -> usize {
        self.players
    }

    /// The round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Number of cards left in the round deck.
    pub fn deck_count(&self) -> usize {
        self.deck.count()
    }

    /// The players hole cards, dealt together on the first call.
    pub fn hole_cards(&mut self) -> Result<&[[Card; 2]], RoundError> {
        if self.state == RoundState::Init {
            let hole_cards = (0..self.players)
                .map(|_| self.deck.deal_pair())
                .collect::<Result<Vec<_>, _>>()?;

            self.hole_cards = hole_cards;
            self.state = RoundState::HoleDealt;
        }

        Ok(&self.hole_cards)
    }

    /// The flop, requires the hole cards.
    pub fn flop(&mut self) -> Result<[Card; 3], RoundError> {
        if let Some(flop) = self.flop {
            return Ok(flop);
        }

        self.require(Stage::Flop, RoundState::HoleDealt, Stage::Hole)?;

        let cards = self.deck.deal_cards(3)?;
        let flop = [cards[0], cards[1], cards[2]];
        self.flop = Some(flop);
        self.state = RoundState::FlopDealt;

        Ok(flop)
    }

    /// The turn, requires the flop.
    pub fn turn(&mut self) -> Result<Card, RoundError> {
        if let Some(turn) = self.turn {
            return Ok(turn);
        }

        self.require(Stage::Turn, RoundState::FlopDealt, Stage::Flop)?;

        let turn = self.deck.deal()?;
        self.turn = Some(turn);
        self.state = RoundState::TurnDealt;

        Ok(turn)
    }

    /// The river, requires the turn.
    pub fn river(&mut self) -> Result<Card, RoundError> {
        if let Some(river) = self.river {
            return Ok(river);
        }

        self.require(Stage::River, RoundState::TurnDealt, Stage::Turn)?;

        let river = self.deck.deal()?;
        self.river = Some(river);
        self.state = RoundState::RiverDealt;

        Ok(river)
    }

    /// The community cards dealt so far.
    pub fn board(&self) -> Vec<Card> {
        self.flop
            .iter()
            .flatten()
            .chain(self.turn.iter())
            .chain(self.river.iter())
            .copied()
            .collect()
    }

    /// Samples `n` cards from the cards left in the round deck.
    ///
    /// The round deck is not consumed, so repeated samples can draw the same
    /// cards and later stages are dealt as if no sample was taken.
    pub fn sample_remaining<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<Vec<Card>, RoundError> {
        let mut deck = self.deck.clone();
        deck.shuffle(rng);
        Ok(deck.deal_cards(n)?)
    }

    /// Simulates a possible outcome for the subject hole cards.
    ///
    /// The other players cards and the board are unknown to the subject, so
    /// they are dealt from a fresh deck without the subject cards, ignoring
    /// this round deck and board. If `subject` is `None` the first player
    /// hole cards are used.
    pub fn simulate_blindly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        subject: Option<[Card; 2]>,
    ) -> Result<BlindOutcome, RoundError> {
        let subject = match subject {
            Some(cards) => cards,
            None => self.hole_cards()?[0],
        };

        blind_trial(rng, subject, self.players)
    }

    fn require(&self, stage: Stage, state: RoundState, requires: Stage) -> Result<(), RoundError> {
        if self.state < state {
            Err(RoundError::OutOfOrder { stage, requires })
        } else {
            Ok(())
        }
    }
}

/// The result of one blind simulation.
#[derive(Debug, Clone)]
pub struct BlindOutcome {
    /// The subject best hand.
    pub subject: RankedHand,
    /// The opponents best hands.
    pub opponents: Vec<RankedHand>,
    /// The subject hand compared to each opponent hand.
    pub results: Vec<Outcome>,
}

impl BlindOutcome {
    /// The subject outcome against all opponents.
    pub fn outcome(&self) -> Outcome {
        aggregate(&self.results)
    }
}

/// Combines the subject results against each opponent.
///
/// The subject loses if any opponent has a better hand and ties only if it
/// ties with every opponent. Otherwise it beats at least one opponent and
/// no opponent beats it, which counts as a win.
pub fn aggregate(results: &[Outcome]) -> Outcome {
    if results.contains(&Outcome::Loss) {
        Outcome::Loss
    } else if results.iter().all(|r| *r == Outcome::Tie) {
        Outcome::Tie
    } else {
        Outcome::Win
    }
}

/// Runs one blind simulation with a fresh deck.
///
/// Deals two cards to each of the `players - 1` opponents and five community
/// cards from a deck without the subject cards, then compares the subject best
/// hand with each opponent best hand.
pub fn blind_trial<R: Rng + ?Sized>(
    rng: &mut R,
    subject: [Card; 2],
    players: usize,
) -> Result<BlindOutcome, RoundError> {
    check_players(players)?;
    validate_cards(&subject)?;

    let mut deck = Deck::shuffled_without(rng, &subject);
    let opponents = (1..players)
        .map(|_| deck.deal_pair())
        .collect::<Result<Vec<_>, _>>()?;
    let board = deck.deal_cards(5)?;

    let mut hand = [subject[0]; 7];
    hand[2..].copy_from_slice(&board);

    hand[..2].copy_from_slice(&subject);
    let subject = best_five(&hand);

    let opponents = opponents
        .into_iter()
        .map(|cards| {
            hand[..2].copy_from_slice(&cards);
            best_five(&hand)
        })
        .collect::<Vec<_>>();

    let results = opponents
        .iter()
        .map(|opponent| Outcome::from(subject.strength_cmp(opponent)))
        .collect();

    Ok(BlindOutcome {
        subject,
        opponents,
        results,
    })
}

/// Checks the number of players.
pub(crate) fn check_players(players: usize) -> Result<(), RoundError> {
    if (2..=Round::MAX_PLAYERS).contains(&players) {
        Ok(())
    } else {
        Err(RoundError::Players(players))
    }
}
