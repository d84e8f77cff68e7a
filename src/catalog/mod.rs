//! The catalog: every buildable figure and castable spell.
//!
//! A `Catalog` is built once from a `CatalogConfig` and never mutated
//! afterwards. It is `Send + Sync`, so a server can share one instance
//! across games behind an `Arc`; per-game state lives with the caller.
//!
//! ## Key Types
//!
//! - `CatalogConfig` and friends: declarative family/variant records
//! - `CatalogBuilder`: expansion, registration and the linking pass
//! - `Catalog`: the frozen figure and spell managers

pub mod builder;
pub mod config;
pub mod standard;

pub use builder::{expand_family, expand_spell_family, CatalogBuilder};
pub use config::{
    AssetIds, CatalogConfig, FamilyConfig, FigureConfig, SpellConfig, SpellFamilyConfig,
    UpgradeConfig,
};

use crate::cards::Card;
use crate::error::Result;
use crate::figures::{Figure, FigureManager};
use crate::spells::{Spell, SpellManager};

/// Immutable figure and spell catalog.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub(crate) figures: FigureManager,
    pub(crate) spells: SpellManager,
}

impl Catalog {
    /// Build a catalog from a configuration.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let mut builder = CatalogBuilder::new();
        builder.add_config(config)?;
        Ok(builder.build())
    }

    /// The standard Nepal Kings catalog.
    pub fn standard() -> Result<Self> {
        Self::from_config(&standard::standard_config())
    }

    #[must_use]
    pub fn figures(&self) -> &FigureManager {
        &self.figures
    }

    #[must_use]
    pub fn spells(&self) -> &SpellManager {
        &self.spells
    }

    /// Find the figure built from exactly `cards`.
    #[must_use]
    pub fn match_figure(&self, cards: &[Card]) -> Option<&Figure> {
        self.figures.match_figure(cards)
    }

    /// Find the spell paid for with exactly `cards`.
    #[must_use]
    pub fn match_spell(&self, cards: &[Card]) -> Option<&Spell> {
        self.spells.match_spell(cards)
    }
}
