//! Figures - game pieces built from cards.
//!
//! A `Figure` is one concrete buildable piece: a family, a suit, the key
//! cards every variant needs, and optionally the number card that picks
//! the variant. Castles, villages and military units share this one type;
//! the `Field` tag selects the value and battle bonus rules.

use serde::{Deserialize, Serialize};

use crate::cards::{total_value, Card, CardCounts, CardList, Suit};

use super::resources::Resources;

/// Fixed value of every castle figure.
pub const CASTLE_VALUE: u32 = 15;

/// Battle bonus of a Maharaja castle.
pub const MAHARAJA_BONUS: u32 = 5;

/// Battle bonus of any other castle.
pub const CASTLE_BONUS: u32 = 4;

/// Identifier of a figure within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FigureId(pub u32);

impl FigureId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FigureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Figure({})", self.0)
    }
}

/// Board area a figure occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Castle,
    Village,
    Military,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Castle => "castle",
            Field::Village => "village",
            Field::Military => "military",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side a figure family plays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Offensive,
    Defensive,
}

/// Combat behavior flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureFlags {
    pub cannot_attack: bool,
    pub must_be_attacked: bool,
    pub rest_after_attack: bool,
    pub distance_attack: bool,
    pub buffs_allies: bool,
    pub blocks_bonus: bool,
}

impl FigureFlags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cannot_attack(mut self) -> Self {
        self.cannot_attack = true;
        self
    }

    #[must_use]
    pub fn must_be_attacked(mut self) -> Self {
        self.must_be_attacked = true;
        self
    }

    #[must_use]
    pub fn rest_after_attack(mut self) -> Self {
        self.rest_after_attack = true;
        self
    }

    #[must_use]
    pub fn distance_attack(mut self) -> Self {
        self.distance_attack = true;
        self
    }

    #[must_use]
    pub fn buffs_allies(mut self) -> Self {
        self.buffs_allies = true;
        self
    }

    #[must_use]
    pub fn blocks_bonus(mut self) -> Self {
        self.blocks_bonus = true;
        self
    }
}

/// A concrete buildable figure.
///
/// Built with `Figure::new` plus the `with_*` methods; the derived card
/// lists and value are recomputed whenever the cards change. `upgrade_to`
/// and `attachable_to` are filled in by the manager's linking pass.
///
/// ## Example
///
/// ```
/// use nepal_kings::cards::{Card, Rank, Suit};
/// use nepal_kings::figures::{Color, Field, Figure, FigureId};
///
/// let king = Figure::new(
///     FigureId::new(0),
///     "King",
///     "King",
///     Field::Castle,
///     Color::Defensive,
///     Suit::Hearts,
///     [Card::new(Rank::King, Suit::Hearts)],
/// );
///
/// assert_eq!(king.value(), 15);
/// assert_eq!(king.battle_bonus(), 4);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct Figure {
    pub id: FigureId,
    pub name: String,
    pub family_name: String,
    pub field: Field,
    pub color: Color,
    pub suit: Suit,
    pub key_cards: CardList,
    pub number_card: Option<Card>,
    pub upgrade_card: Option<Card>,
    pub upgrade_family_name: Option<String>,
    pub flags: FigureFlags,
    pub produces: Resources,
    pub requires: Resources,

    cards: CardList,
    cards_including_upgrade: CardList,
    value: u32,
    #[serde(skip)]
    counts: CardCounts,
    upgrade_to: Vec<FigureId>,
    attachable_to: Vec<FigureId>,
}

impl Figure {
    /// Create a figure from its key cards.
    #[must_use]
    pub fn new(
        id: FigureId,
        name: impl Into<String>,
        family_name: impl Into<String>,
        field: Field,
        color: Color,
        suit: Suit,
        key_cards: impl IntoIterator<Item = Card>,
    ) -> Self {
        let mut figure = Self {
            id,
            name: name.into(),
            family_name: family_name.into(),
            field,
            color,
            suit,
            key_cards: key_cards.into_iter().collect(),
            number_card: None,
            upgrade_card: None,
            upgrade_family_name: None,
            flags: FigureFlags::default(),
            produces: Resources::default(),
            requires: Resources::default(),
            cards: CardList::new(),
            cards_including_upgrade: CardList::new(),
            value: 0,
            counts: CardCounts::new(),
            upgrade_to: Vec::new(),
            attachable_to: Vec::new(),
        };
        figure.derive_cards();
        figure
    }

    /// Set the variant's number card.
    #[must_use]
    pub fn with_number_card(mut self, card: Card) -> Self {
        self.number_card = Some(card);
        self.derive_cards();
        self
    }

    /// Set the card and family this figure upgrades into.
    #[must_use]
    pub fn with_upgrade(mut self, card: Card, family_name: impl Into<String>) -> Self {
        self.upgrade_card = Some(card);
        self.upgrade_family_name = Some(family_name.into());
        self.derive_cards();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: FigureFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_produces(mut self, produces: Resources) -> Self {
        self.produces = produces;
        self
    }

    #[must_use]
    pub fn with_requires(mut self, requires: Resources) -> Self {
        self.requires = requires;
        self
    }

    fn derive_cards(&mut self) {
        self.cards = self.key_cards.clone();
        self.cards.extend(self.number_card);

        self.cards_including_upgrade = self.cards.clone();
        self.cards_including_upgrade.extend(self.upgrade_card);

        self.value = match self.field {
            Field::Castle => CASTLE_VALUE,
            Field::Village | Field::Military => total_value(&self.cards),
        };
        self.counts = CardCounts::from_cards(&self.cards);
    }

    /// Cards needed to build the figure: key cards plus the number card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// `cards` plus the upgrade card, if any.
    #[must_use]
    pub fn cards_including_upgrade(&self) -> &[Card] {
        &self.cards_including_upgrade
    }

    /// Required cards as a multiset.
    #[must_use]
    pub fn card_counts(&self) -> &CardCounts {
        &self.counts
    }

    /// Figure value.
    ///
    /// Castles are always worth `CASTLE_VALUE`; other figures are worth the
    /// sum of their cards (the upgrade card does not count).
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Bonus this figure grants in battle.
    ///
    /// Military figures grant nothing. Castles grant a fixed bonus, higher
    /// for Maharajas, regardless of which cards built them. Everything else
    /// grants the value of its key cards.
    #[must_use]
    pub fn battle_bonus(&self) -> u32 {
        match self.field {
            Field::Military => 0,
            Field::Castle if self.name.contains("Maharaja") => MAHARAJA_BONUS,
            Field::Castle => CASTLE_BONUS,
            Field::Village => total_value(&self.key_cards),
        }
    }

    /// True if the figure can be built from `cards`.
    ///
    /// Permissive: extra cards are fine, but each required card must be
    /// present as many times as the figure needs it.
    #[must_use]
    pub fn is_match(&self, cards: &[Card]) -> bool {
        CardCounts::from_cards(cards).covers(&self.counts)
    }

    /// True if `counts` holds exactly this figure's cards.
    #[must_use]
    pub fn matches_exactly(&self, counts: &CardCounts) -> bool {
        self.counts == *counts
    }

    /// True if `available` resources cover what this figure requires.
    #[must_use]
    pub fn requirements_met(&self, available: &Resources) -> bool {
        available.covers(&self.requires)
    }

    /// Figures this one can be upgraded into (same suit).
    #[must_use]
    pub fn upgrade_to(&self) -> &[FigureId] {
        &self.upgrade_to
    }

    /// Figures this one can be attached to (same suit).
    #[must_use]
    pub fn attachable_to(&self) -> &[FigureId] {
        &self.attachable_to
    }

    pub(crate) fn set_links(&mut self, upgrade_to: Vec<FigureId>, attachable_to: Vec<FigureId>) {
        self.upgrade_to = upgrade_to;
        self.attachable_to = attachable_to;
    }

    pub(crate) fn set_id(&mut self, id: FigureId) {
        self.id = id;
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.suit)?;
        if let Some(card) = self.number_card {
            write!(f, " [{}]", card.rank())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    fn fortress(number: Rank) -> Figure {
        Figure::new(
            FigureId::new(0),
            "Fortress I",
            "Fortress I",
            Field::Military,
            Color::Defensive,
            Suit::Spades,
            [card(Rank::Jack), card(Rank::Queen)],
        )
        .with_number_card(card(number))
        .with_upgrade(card(Rank::Ace), "Fortress II")
    }

    fn castle(name: &str, key: &[Rank]) -> Figure {
        Figure::new(
            FigureId::new(1),
            name,
            name,
            Field::Castle,
            Color::Defensive,
            Suit::Spades,
            key.iter().map(|&r| card(r)),
        )
    }

    #[test]
    fn test_derived_cards() {
        let figure = fortress(Rank::Nine);

        assert_eq!(
            figure.cards(),
            &[card(Rank::Jack), card(Rank::Queen), card(Rank::Nine)]
        );
        assert_eq!(figure.cards_including_upgrade().len(), 4);
        assert_eq!(figure.cards_including_upgrade()[3], card(Rank::Ace));
    }

    #[test]
    fn test_value_sums_cards_without_upgrade() {
        // J(1) + Q(2) + 9
        assert_eq!(fortress(Rank::Nine).value(), 12);
    }

    #[test]
    fn test_castle_value_is_fixed() {
        assert_eq!(castle("King", &[Rank::King]).value(), CASTLE_VALUE);
        assert_eq!(castle("Maharaja", &[Rank::King, Rank::Ace]).value(), CASTLE_VALUE);
        assert_eq!(castle("Odd Castle", &[Rank::Ten, Rank::Ten]).value(), CASTLE_VALUE);
    }

    #[test]
    fn test_battle_bonus_by_field() {
        assert_eq!(fortress(Rank::Ten).battle_bonus(), 0);
        assert_eq!(castle("Himalaya Maharaja", &[Rank::King, Rank::Ace]).battle_bonus(), 5);
        assert_eq!(castle("Himalaya King", &[Rank::King]).battle_bonus(), 4);

        let village = Figure::new(
            FigureId::new(2),
            "Rice Field",
            "Rice Field",
            Field::Village,
            Color::Offensive,
            Suit::Spades,
            [card(Rank::Two), card(Rank::Three)],
        )
        .with_number_card(card(Rank::Seven));
        // Key cards only: 2 + 3.
        assert_eq!(village.battle_bonus(), 5);
        assert_eq!(village.value(), 12);
    }

    #[test]
    fn test_is_match_is_permissive() {
        let figure = fortress(Rank::Seven);

        let exact = [card(Rank::Jack), card(Rank::Queen), card(Rank::Seven)];
        let extra = [
            card(Rank::Seven),
            card(Rank::Two),
            card(Rank::Queen),
            card(Rank::Jack),
        ];
        let missing = [card(Rank::Jack), card(Rank::Queen)];

        assert!(figure.is_match(&exact));
        assert!(figure.is_match(&extra));
        assert!(!figure.is_match(&missing));
    }

    #[test]
    fn test_matches_exactly() {
        let figure = fortress(Rank::Eight);
        let exact = CardCounts::from_cards(&[card(Rank::Eight), card(Rank::Queen), card(Rank::Jack)]);
        let doubled = CardCounts::from_cards(&[
            card(Rank::Eight),
            card(Rank::Eight),
            card(Rank::Queen),
            card(Rank::Jack),
        ]);

        assert!(figure.matches_exactly(&exact));
        assert!(!figure.matches_exactly(&doubled));
    }

    #[test]
    fn test_requirements_met() {
        let figure = fortress(Rank::Seven).with_requires(Resources::new().with("wood", 2));

        assert!(figure.requirements_met(&Resources::new().with("wood", 3)));
        assert!(!figure.requirements_met(&Resources::new().with("wood", 1)));
    }

    #[test]
    fn test_flags_builder() {
        let flags = FigureFlags::new().cannot_attack().blocks_bonus();
        assert!(flags.cannot_attack);
        assert!(flags.blocks_bonus);
        assert!(!flags.distance_attack);
    }

    #[test]
    fn test_display() {
        assert_eq!(fortress(Rank::Ten).to_string(), "Fortress I (Spades) [10]");
    }
}
