//! Spell families: spells grouped by name and type across suits.

use serde::{Deserialize, Serialize};

use crate::cards::Suit;
use crate::catalog::AssetIds;

use super::spell::{SpellId, SpellType};

/// Identifier of a spell family within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellFamilyId(pub u32);

impl SpellFamilyId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SpellFamily {
    pub id: SpellFamilyId,
    pub name: String,
    #[serde(rename = "type")]
    pub spell_type: SpellType,
    pub suits: Vec<Suit>,
    pub description: String,
    pub assets: AssetIds,
    pub spells: Vec<SpellId>,
}

impl SpellFamily {
    #[must_use]
    pub fn new(id: SpellFamilyId, name: impl Into<String>, spell_type: SpellType) -> Self {
        Self {
            id,
            name: name.into(),
            spell_type,
            suits: Vec::new(),
            description: String::new(),
            assets: AssetIds::default(),
            spells: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_suits(mut self, suits: impl IntoIterator<Item = Suit>) -> Self {
        self.suits = suits.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_assets(mut self, assets: AssetIds) -> Self {
        self.assets = assets;
        self
    }
}
