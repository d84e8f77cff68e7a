//! Playing cards - the raw material figures and spells are built from.
//!
//! A `Card` is an immutable value: a rank, a suit, and the numeric value
//! the rank maps to. Two cards of the same rank and suit are
//! interchangeable, so equality and hashing use (rank, suit). Ordering is
//! by value first, which is what comparisons in battle resolution care
//! about, with rank and suit as tie-breakers to stay consistent with `Eq`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::CatalogError;

/// Card rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ranks that parameterize figure variants (one figure per rank).
    pub const NUMBER_CARDS: [Rank; 4] = [Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten];

    /// Numeric value of the rank.
    ///
    /// Number cards are worth their face. Court cards are cheap on their
    /// own; their strength comes from the figures they complete.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 1,
            Rank::Queen => 2,
            Rank::King => 4,
            Rank::Ace => 3,
        }
    }

    /// Short symbol as printed on the card ("7", "K", ...).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parse a rank symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.symbol() == symbol)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Suits played by the offensive side.
    pub const OFFENSIVE: [Suit; 2] = [Suit::Hearts, Suit::Diamonds];

    /// Suits played by the defensive side.
    pub const DEFENSIVE: [Suit; 2] = [Suit::Clubs, Suit::Spades];

    /// Suit name as used in persisted data.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use nepal_kings::cards::{Card, Rank, Suit};
///
/// let king = Card::new(Rank::King, Suit::Hearts);
/// assert_eq!(king.value(), 4);
/// assert_eq!(king.to_tuple(), (Rank::King, Suit::Hearts, 4));
///
/// // Ordering compares values first.
/// assert!(Card::new(Rank::Seven, Suit::Clubs) > king);
/// ```
///
/// `Ord` breaks value ties by rank and then suit so that it agrees with
/// `Eq`. The Two and the Queen of Spades are both worth 2, yet
/// `two < queen` holds. Use [`Card::value_cmp`] or [`Card::same_value`]
/// for comparisons by value alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRecord", into = "CardRecord")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card. The value always follows from the rank.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Create a card from a (rank, suit, value) triple.
    ///
    /// Fails if `value` is not the value of `rank`.
    pub fn with_value(rank: Rank, suit: Suit, value: u8) -> Result<Self, CatalogError> {
        if rank.value() != value {
            return Err(CatalogError::InvalidCard(format!(
                "{rank} of {suit} has value {}, got {value}",
                rank.value()
            )));
        }
        Ok(Self::new(rank, suit))
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Numeric value of the card.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Full identity as a (rank, suit, value) tuple.
    #[must_use]
    pub const fn to_tuple(self) -> (Rank, Suit, u8) {
        (self.rank, self.suit, self.value())
    }

    /// Compare by value only, ignoring rank and suit.
    #[must_use]
    pub fn same_value(self, other: Card) -> bool {
        self.value() == other.value()
    }

    /// Order by value only. Cards of equal value compare `Equal`.
    #[must_use]
    pub fn value_cmp(self, other: Card) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value()
            .cmp(&other.value())
            .then(self.rank.cmp(&other.rank))
            .then(self.suit.cmp(&other.suit))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Wire shape of a card: `{rank, suit, value}`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct CardRecord {
    rank: Rank,
    suit: Suit,
    value: u8,
}

impl From<Card> for CardRecord {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank,
            suit: card.suit,
            value: card.value(),
        }
    }
}

impl TryFrom<CardRecord> for Card {
    type Error = CatalogError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        Card::with_value(record.rank, record.suit, record.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Seven.value(), 7);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 4);
        assert_eq!(Rank::Jack.value(), 1);
    }

    #[test]
    fn test_rank_symbols() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_symbol(rank.symbol()), Some(rank));
        }
        assert_eq!(Rank::from_symbol("1"), None);
    }

    #[test]
    fn test_identity_equality() {
        let a = Card::new(Rank::Eight, Suit::Hearts);
        let b = Card::new(Rank::Eight, Suit::Hearts);
        let c = Card::new(Rank::Eight, Suit::Clubs);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.same_value(c));
    }

    #[test]
    fn test_ordering_by_value() {
        let queen = Card::new(Rank::Queen, Suit::Spades);
        let two = Card::new(Rank::Two, Suit::Spades);
        let ten = Card::new(Rank::Ten, Suit::Hearts);

        // Queen and Two share value 2; rank breaks the tie.
        assert!(two < queen);
        assert!(queen < ten);

        let mut cards = vec![ten, queen, two];
        cards.sort();
        assert_eq!(cards, vec![two, queen, ten]);
    }

    #[test]
    fn test_value_cmp_ignores_rank() {
        let queen = Card::new(Rank::Queen, Suit::Spades);
        let two = Card::new(Rank::Two, Suit::Hearts);
        let ten = Card::new(Rank::Ten, Suit::Hearts);

        assert_eq!(two.value_cmp(queen), Ordering::Equal);
        assert_eq!(queen.value_cmp(two), Ordering::Equal);
        assert_eq!(queen.value_cmp(ten), Ordering::Less);
        assert_eq!(ten.value_cmp(two), Ordering::Greater);
    }

    #[test]
    fn test_with_value_rejects_mismatch() {
        assert!(Card::with_value(Rank::King, Suit::Hearts, 4).is_ok());
        assert!(matches!(
            Card::with_value(Rank::King, Suit::Hearts, 13),
            Err(CatalogError::InvalidCard(_))
        ));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Rank::Ten, Suit::Diamonds);
        let json = serde_json::to_value(card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rank": "10", "suit": "Diamonds", "value": 10})
        );

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_card_deserialization_checks_value() {
        let bad = serde_json::json!({"rank": "A", "suit": "Spades", "value": 11});
        assert!(serde_json::from_value::<Card>(bad).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "A of Clubs");
    }
}
