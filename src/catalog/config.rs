//! Declarative catalog configuration.
//!
//! A catalog is described entirely by data: families with their allowed
//! suits, and per family a list of variant records. The builder expands
//! each record with a fixed algorithm (one figure per suit, times one per
//! number rank if the record lists any), so configuration never carries
//! executable code.
//!
//! Configurations are built in code with the `with_*` methods or loaded
//! from JSON:
//!
//! ```
//! use nepal_kings::catalog::CatalogConfig;
//!
//! let config = CatalogConfig::from_json(r#"{
//!     "families": [{
//!         "name": "King",
//!         "color": "defensive",
//!         "field": "castle",
//!         "suits": ["Hearts"],
//!         "figures": [{"key_ranks": ["K"]}]
//!     }]
//! }"#).unwrap();
//!
//! assert_eq!(config.families.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};
use crate::error::{CatalogError, Result};
use crate::figures::{Color, Field, FigureFlags, Resources};
use crate::spells::{SpellType, TargetType};

/// Static asset identifiers consumed by rendering; opaque to the engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetIds {
    pub icon: Option<String>,
    pub frame: Option<String>,
    pub image: Option<String>,
}

impl AssetIds {
    /// Derive conventional asset names from a family name.
    #[must_use]
    pub fn for_family(name: &str) -> Self {
        let stem = name.to_lowercase().replace(' ', "_");
        Self {
            icon: Some(format!("{stem}_icon.png")),
            frame: Some(format!("{stem}_frame.png")),
            image: Some(format!("{stem}.png")),
        }
    }
}

/// Card and family a figure upgrades into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeConfig {
    pub rank: Rank,
    pub family: String,
}

/// One variant record of a figure family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureConfig {
    /// Figure name; defaults to the family name.
    #[serde(default)]
    pub name: Option<String>,
    pub key_ranks: Vec<Rank>,
    /// One figure is produced per rank; none means a single figure
    /// without a number card.
    #[serde(default)]
    pub number_ranks: Vec<Rank>,
    #[serde(default)]
    pub upgrade: Option<UpgradeConfig>,
    #[serde(default)]
    pub flags: FigureFlags,
    #[serde(default)]
    pub produces: Resources,
    #[serde(default)]
    pub requires: Resources,
}

impl FigureConfig {
    #[must_use]
    pub fn new(key_ranks: impl IntoIterator<Item = Rank>) -> Self {
        Self {
            name: None,
            key_ranks: key_ranks.into_iter().collect(),
            number_ranks: Vec::new(),
            upgrade: None,
            flags: FigureFlags::default(),
            produces: Resources::default(),
            requires: Resources::default(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_number_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.number_ranks = ranks.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_upgrade(mut self, rank: Rank, family: impl Into<String>) -> Self {
        self.upgrade = Some(UpgradeConfig {
            rank,
            family: family.into(),
        });
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
}

/// Configuration of a figure family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyConfig {
    pub name: String,
    pub color: Color,
    pub field: Field,
    pub suits: Vec<Suit>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assets: AssetIds,
    pub figures: Vec<FigureConfig>,
    /// Family whose figures this family's figures attach to.
    #[serde(default)]
    pub attach_to: Option<String>,
}

impl FamilyConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, color: Color, field: Field) -> Self {
        let name = name.into();
        Self {
            assets: AssetIds::for_family(&name),
            name,
            color,
            field,
            suits: Vec::new(),
            description: String::new(),
            figures: Vec::new(),
            attach_to: None,
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
    pub fn with_figure(mut self, figure: FigureConfig) -> Self {
        self.figures.push(figure);
        self
    }

    #[must_use]
    pub fn with_attach_to(mut self, family: impl Into<String>) -> Self {
        self.attach_to = Some(family.into());
        self
    }
}

/// One variant record of a spell family.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Spell name; defaults to the family name.
    pub name: Option<String>,
    pub key_ranks: Vec<Rank>,
    pub number_ranks: Vec<Rank>,
    pub upgrade_rank: Option<Rank>,
    /// Present for spells that must be cast on a figure.
    pub target: Option<TargetType>,
    pub counterable: bool,
    pub possible_during_ceasefire: bool,
    pub duration: u32,
}

impl SpellConfig {
    #[must_use]
    pub fn new(key_ranks: impl IntoIterator<Item = Rank>) -> Self {
        Self {
            key_ranks: key_ranks.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_number_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.number_ranks = ranks.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_upgrade_rank(mut self, rank: Rank) -> Self {
        self.upgrade_rank = Some(rank);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetType) -> Self {
        self.target = Some(target);
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
}

/// Configuration of a spell family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellFamilyConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub spell_type: SpellType,
    pub suits: Vec<Suit>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assets: AssetIds,
    pub spells: Vec<SpellConfig>,
}

impl SpellFamilyConfig {
    #[must_use]
    pub fn new(name: impl Into<String>, spell_type: SpellType) -> Self {
        let name = name.into();
        Self {
            assets: AssetIds::for_family(&name),
            name,
            spell_type,
            suits: Vec::new(),
            description: String::new(),
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
    pub fn with_spell(mut self, spell: SpellConfig) -> Self {
        self.spells.push(spell);
        self
    }
}

/// Complete catalog configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub families: Vec<FamilyConfig>,
    pub spell_families: Vec<SpellFamilyConfig>,
}

impl CatalogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_family(mut self, family: FamilyConfig) -> Self {
        self.families.push(family);
        self
    }

    #[must_use]
    pub fn with_spell_family(mut self, family: SpellFamilyConfig) -> Self {
        self.spell_families.push(family);
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::InvalidConfig(e.to_string()))
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::InvalidConfig(e.to_string()))
    }
}
