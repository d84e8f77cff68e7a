//! # nepal-kings
//!
//! Figure and spell engine for the Nepal Kings card strategy game.
//!
//! Playing cards combine into figures (castles, villages, military units)
//! and spells. This crate holds the catalog of everything buildable, the
//! matching of hands against it, and the derived values figures bring to
//! battle. Rendering, networking and persistence live elsewhere and call
//! in through the types re-exported here.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Catalog**: Families are declarative records expanded by
//!    a fixed algorithm. No code lives in configuration.
//!
//! 2. **Build Once, Read Forever**: A `Catalog` is frozen after the linking
//!    pass and passed explicitly to whoever needs it.
//!
//! 3. **Counts Matter**: Matching compares card multisets, so cards needed
//!    twice must be held twice.
//!
//! ## Modules
//!
//! - `cards`: Ranks, suits, cards, multisets and dealing
//! - `core`: Deterministic RNG
//! - `figures`: Figures, families, resources and the figure manager
//! - `spells`: Spell templates, cast instances and the spell manager
//! - `catalog`: Configuration, builder and the standard catalog
//! - `error`: Error type

pub mod cards;
pub mod catalog;
pub mod core;
pub mod error;
pub mod figures;
pub mod spells;

// Re-export commonly used types
pub use crate::cards::{Card, CardCounts, CardList, Deck, Rank, Suit};

pub use crate::core::GameRng;

pub use crate::catalog::{
    AssetIds, Catalog, CatalogBuilder, CatalogConfig, FamilyConfig, FigureConfig, SpellConfig,
    SpellFamilyConfig, UpgradeConfig,
};

pub use crate::figures::{
    net_resources, Color, FamilyId, Field, Figure, FigureFamily, FigureFlags, FigureId,
    FigureManager, Resources,
};

pub use crate::spells::{
    CastContext, CastSpell, Spell, SpellFamily, SpellFamilyId, SpellId, SpellManager, SpellType,
    TargetType,
};

pub use crate::error::{CatalogError, Result};
