//! Dealing cards.
//!
//! A Nepal Kings table plays with two full 52-card decks shuffled together,
//! so every card exists twice. That is what makes figures and spells that
//! need the same card twice (e.g. two Eights of Hearts) reachable.

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of full decks in a standard game.
pub const STANDARD_DECK_COPIES: usize = 2;

/// A pile of cards to deal from. The top of the deck is the end of the vec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an unshuffled deck made of `copies` full decks.
    #[must_use]
    pub fn new(copies: usize) -> Self {
        let mut cards = Vec::with_capacity(copies * 52);
        for _ in 0..copies {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        Self { cards }
    }

    /// Two full decks, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_DECK_COPIES)
    }

    /// Create a deck from explicit cards (last card on top).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw up to `n` cards from the top.
    ///
    /// Returns fewer cards if the deck runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut drawn = self.cards.split_off(keep);
        drawn.reverse();
        drawn
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
