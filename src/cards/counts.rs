//! Card multisets for hand matching.
//!
//! Matching compares how many copies of each (rank, suit) are present, not
//! just which ones. A figure needing two Eights of Hearts is not buildable
//! from a hand holding one, and a candidate holding an extra copy is not an
//! exact match.

use rustc_hash::FxHashMap;

use super::card::Card;

/// Count of each distinct card in a collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardCounts {
    counts: FxHashMap<Card, usize>,
    total: usize,
}

impl CardCounts {
    /// Create an empty multiset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the cards in a slice.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = Self::new();
        for &card in cards {
            counts.add(card);
        }
        counts
    }

    /// Add one copy of a card.
    pub fn add(&mut self, card: Card) {
        *self.counts.entry(card).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of copies of `card`.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.counts.get(&card).copied().unwrap_or(0)
    }

    /// Total number of cards, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// True if every card in `required` is present here at least as often.
    #[must_use]
    pub fn covers(&self, required: &CardCounts) -> bool {
        required.total <= self.total
            && required
                .counts
                .iter()
                .all(|(card, &needed)| self.count(*card) >= needed)
    }
}

impl FromIterator<Card> for CardCounts {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut counts = Self::new();
        for card in iter {
            counts.add(card);
        }
        counts
    }
}
