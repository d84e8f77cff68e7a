//! Figures: buildable game pieces and their catalog index.
//!
//! ## Key Types
//!
//! - `Figure`: one buildable piece (family, suit, cards, flags, resources)
//! - `FigureFamily`: figures sharing field, color and allowed suits
//! - `Field`, `Color`, `FigureFlags`: classification and combat behavior
//! - `Resources`: production and requirement maps
//! - `FigureManager`: lookup indices, linking pass and hand matching

pub mod family;
pub mod figure;
pub mod manager;
pub mod resources;

pub use family::{FamilyId, FigureFamily};
pub use figure::{
    Color, Field, Figure, FigureFlags, FigureId, CASTLE_BONUS, CASTLE_VALUE, MAHARAJA_BONUS,
};
pub use manager::FigureManager;
pub use resources::{net_resources, Resources};
