//! Cards: the value type, multisets for matching, and dealing.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: card identity
//! - `Card`: immutable (rank, suit) with a table-derived value
//! - `CardCounts`: multiset used by exact and "can afford" matching
//! - `Deck`: seeded dealing from two full decks

pub mod card;
pub mod counts;
pub mod deck;

use smallvec::SmallVec;

pub use card::{Card, Rank, Suit};
pub use counts::CardCounts;
pub use deck::{Deck, STANDARD_DECK_COPIES};

/// Card list for figure and spell requirements.
///
/// Requirements rarely exceed four cards, so they stay inline.
pub type CardList = SmallVec<[Card; 4]>;

/// Sum of card values.
#[must_use]
pub fn total_value(cards: &[Card]) -> u32 {
    cards.iter().map(|c| u32::from(c.value())).sum()
}
