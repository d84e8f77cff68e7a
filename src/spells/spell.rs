//! Spells - castable effects paid for with cards.
//!
//! Catalog spells are templates. Casting one produces a `CastSpell`, a live
//! instance carrying the template data plus who cast it, in which game and
//! round, and what it targets. `CastSpell` is also the dictionary contract
//! used to persist and transmit spells across the network boundary.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::cards::{Card, CardCounts, CardList, Suit};
use crate::error::{CatalogError, Result};

/// Identifier of a spell template within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpellId(pub u32);

impl SpellId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Spell category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellType {
    /// Card economy: draw, swap, dump.
    Greed,
    /// Lasting effect on a figure.
    Enchantment,
    /// Changes the flow of the round.
    Tactics,
}

/// What a targeted spell may be cast on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    OwnFigure,
    EnemyFigure,
    AnyFigure,
}

/// A castable spell template.
#[derive(Clone, Debug, Serialize)]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    pub family_name: String,
    #[serde(rename = "type")]
    pub spell_type: SpellType,
    pub suit: Suit,
    pub key_cards: CardList,
    pub number_card: Option<Card>,
    pub upgrade_card: Option<Card>,
    pub requires_target: bool,
    pub target_type: Option<TargetType>,
    pub counterable: bool,
    pub possible_during_ceasefire: bool,
    /// Rounds the effect lasts once cast; 0 for instant spells.
    pub duration: u32,

    cards: CardList,
    #[serde(skip)]
    counts: CardCounts,
}

impl Spell {
    /// Create an untargeted, uncounterable, instant spell.
    #[must_use]
    pub fn new(
        id: SpellId,
        name: impl Into<String>,
        family_name: impl Into<String>,
        spell_type: SpellType,
        suit: Suit,
        key_cards: impl IntoIterator<Item = Card>,
    ) -> Self {
        let mut spell = Self {
            id,
            name: name.into(),
            family_name: family_name.into(),
            spell_type,
            suit,
            key_cards: key_cards.into_iter().collect(),
            number_card: None,
            upgrade_card: None,
            requires_target: false,
            target_type: None,
            counterable: false,
            possible_during_ceasefire: false,
            duration: 0,
            cards: CardList::new(),
            counts: CardCounts::new(),
        };
        spell.derive_cards();
        spell
    }

    #[must_use]
    pub fn with_number_card(mut self, card: Card) -> Self {
        self.number_card = Some(card);
        self.derive_cards();
        self
    }

    #[must_use]
    pub fn with_upgrade_card(mut self, card: Card) -> Self {
        self.upgrade_card = Some(card);
        self
    }

    /// Require a target of the given kind.
    #[must_use]
    pub fn with_target(mut self, target_type: TargetType) -> Self {
        self.requires_target = true;
        self.target_type = Some(target_type);
        self
    }

    #[must_use]
    pub fn counterable(mut self) -> Self {
        self.counterable = true;
        self
    }

    #[must_use]
    pub fn during_ceasefire(mut self) -> Self {
        self.possible_during_ceasefire = true;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, rounds: u32) -> Self {
        self.duration = rounds;
        self
    }

    fn derive_cards(&mut self) {
        self.cards = self.key_cards.clone();
        self.cards.extend(self.number_card);
        self.counts = CardCounts::from_cards(&self.cards);
    }

    /// Cards paid to cast the spell.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Required cards as a multiset.
    #[must_use]
    pub fn card_counts(&self) -> &CardCounts {
        &self.counts
    }

    /// True if `counts` holds exactly this spell's cards.
    #[must_use]
    pub fn matches_exactly(&self, counts: &CardCounts) -> bool {
        self.counts == *counts
    }

    /// True if a hand with these counts can pay for the spell.
    #[must_use]
    pub fn is_castable_with(&self, hand: &CardCounts) -> bool {
        hand.covers(&self.counts)
    }

    /// Create a live instance of this template.
    #[must_use]
    pub fn cast(&self, context: CastContext) -> CastSpell {
        CastSpell {
            id: context.id,
            name: self.name.clone(),
            family_name: self.family_name.clone(),
            spell_type: self.spell_type,
            suit: self.suit,
            cards: self.cards.to_vec(),
            key_cards: self.key_cards.to_vec(),
            number_card: self.number_card,
            upgrade_card: self.upgrade_card,
            requires_target: self.requires_target,
            target_type: self.target_type,
            target_figure_id: context.target_figure_id,
            is_active: true,
            cast_round: context.cast_round,
            duration: self.duration,
            player_id: context.player_id,
            game_id: context.game_id,
        }
    }
}

/// Runtime data supplied when a spell is cast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastContext {
    /// Persisted id, if the instance has been stored already.
    pub id: Option<u64>,
    pub player_id: u64,
    pub game_id: u64,
    pub target_figure_id: Option<u64>,
    pub cast_round: u32,
}

impl CastContext {
    #[must_use]
    pub fn new(player_id: u64, game_id: u64, cast_round: u32) -> Self {
        Self {
            player_id,
            game_id,
            cast_round,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_target(mut self, figure_id: u64) -> Self {
        self.target_figure_id = Some(figure_id);
        self
    }
}

/// A cast spell instance.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CastSpell {
    pub id: Option<u64>,
    pub name: String,
    pub family_name: String,
    #[serde(rename = "type")]
    pub spell_type: SpellType,
    pub suit: Suit,
    pub cards: Vec<Card>,
    pub key_cards: Vec<Card>,
    pub number_card: Option<Card>,
    pub upgrade_card: Option<Card>,
    pub requires_target: bool,
    pub target_type: Option<TargetType>,
    pub target_figure_id: Option<u64>,
    pub is_active: bool,
    pub cast_round: u32,
    pub duration: u32,
    pub player_id: u64,
    pub game_id: u64,
}

impl CastSpell {
    /// Dictionary form of the instance.
    #[must_use]
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "family_name": self.family_name,
            "type": self.spell_type,
            "suit": self.suit,
            "cards": self.cards,
            "key_cards": self.key_cards,
            "number_card": self.number_card,
            "upgrade_card": self.upgrade_card,
            "requires_target": self.requires_target,
            "target_type": self.target_type,
            "target_figure_id": self.target_figure_id,
            "is_active": self.is_active,
            "cast_round": self.cast_round,
            "duration": self.duration,
            "player_id": self.player_id,
            "game_id": self.game_id,
        })
    }

    /// Rebuild an instance from its dictionary form.
    ///
    /// Fails on missing or mistyped fields, cards whose value disagrees
    /// with their rank, and `cards` that are not `key_cards` plus
    /// `number_card`.
    pub fn from_dict(dict: &Value) -> Result<Self> {
        let spell = CastSpell::deserialize(dict)?;

        let mut expected = spell.key_cards.clone();
        expected.extend(spell.number_card);
        if CardCounts::from_cards(&expected) != CardCounts::from_cards(&spell.cards) {
            return Err(CatalogError::InvalidSpell(format!(
                "{}: cards do not equal key cards plus number card",
                spell.name
            )));
        }
        if spell.requires_target && spell.target_type.is_none() {
            return Err(CatalogError::InvalidSpell(format!(
                "{}: requires a target but has no target type",
                spell.name
            )));
        }
        Ok(spell)
    }

    /// Rounds left before the effect expires, as of `round`.
    ///
    /// Instant spells (duration 0) have no rounds left.
    #[must_use]
    pub fn rounds_remaining(&self, round: u32) -> u32 {
        self.cast_round
            .saturating_add(self.duration)
            .saturating_sub(round)
    }
}
