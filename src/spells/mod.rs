//! Spells: castable card effects, their catalog index and wire format.
//!
//! ## Key Types
//!
//! - `Spell`: catalog template (cards, targeting, counterability)
//! - `SpellFamily`: spells grouped by name and `SpellType`
//! - `CastSpell`: live instance and its dictionary contract
//! - `SpellManager`: lookup indices and hand matching

pub mod family;
pub mod manager;
pub mod spell;

pub use family::{SpellFamily, SpellFamilyId};
pub use manager::SpellManager;
pub use spell::{CastContext, CastSpell, Spell, SpellId, SpellType, TargetType};
