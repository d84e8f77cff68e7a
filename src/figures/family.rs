//! Figure families.
//!
//! A family is a named category of figures that share a field, a color and
//! a set of allowed suits. It owns the list of figures expanded from its
//! configuration, one or more per suit.

use serde::{Deserialize, Serialize};

use crate::cards::Suit;
use crate::catalog::AssetIds;

use super::figure::{Color, Field, FigureId};

/// Identifier of a family within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyId(pub u32);

impl FamilyId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named group of figures.
#[derive(Clone, Debug, Serialize)]
pub struct FigureFamily {
    pub id: FamilyId,
    pub name: String,
    pub color: Color,
    pub field: Field,
    pub suits: Vec<Suit>,
    pub description: String,
    /// Rendering identifiers; not interpreted by the engine.
    pub assets: AssetIds,
    /// Family whose figures this family's figures attach to.
    pub attach_to: Option<String>,
    pub figures: Vec<FigureId>,
}

impl FigureFamily {
    /// Create a family shell without figures.
    #[must_use]
    pub fn new(id: FamilyId, name: impl Into<String>, color: Color, field: Field) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            field,
            suits: Vec::new(),
            description: String::new(),
            assets: AssetIds::default(),
            attach_to: None,
            figures: Vec::new(),
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

    #[must_use]
    pub fn with_attach_to(mut self, family_name: impl Into<String>) -> Self {
        self.attach_to = Some(family_name.into());
        self
    }

    /// True if figures of this family may be built in `suit`.
    #[must_use]
    pub fn allows_suit(&self, suit: Suit) -> bool {
        self.suits.contains(&suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_builder() {
        let family = FigureFamily::new(FamilyId::new(3), "Palisade", Color::Defensive, Field::Military)
            .with_suits(Suit::DEFENSIVE)
            .with_description("A wall of sharpened stakes.")
            .with_attach_to("Fortress I");

        assert_eq!(family.id.index(), 3);
        assert!(family.allows_suit(Suit::Clubs));
        assert!(!family.allows_suit(Suit::Hearts));
        assert_eq!(family.attach_to.as_deref(), Some("Fortress I"));
        assert!(family.figures.is_empty());
    }
}
