//! Catalog construction.
//!
//! `CatalogBuilder` turns family configurations into registered figures
//! and spells, then runs the linking pass and hands out an immutable
//! `Catalog`. Expansion is a pure function of (family, suit, number rank),
//! so the same configuration always yields the same catalog.

use crate::cards::{Card, Suit};
use crate::error::{CatalogError, Result};
use crate::figures::{FamilyId, Figure, FigureFamily, FigureId, FigureManager};
use crate::spells::{Spell, SpellFamily, SpellFamilyId, SpellId, SpellManager};

use super::config::{CatalogConfig, FamilyConfig, FigureConfig, SpellConfig, SpellFamilyConfig};
use super::Catalog;

/// Incremental catalog builder.
///
/// ## Example
///
/// ```
/// use nepal_kings::cards::{Rank, Suit};
/// use nepal_kings::catalog::{CatalogBuilder, FamilyConfig, FigureConfig};
/// use nepal_kings::figures::{Color, Field};
///
/// let mut builder = CatalogBuilder::new();
/// builder
///     .add_family(
///         &FamilyConfig::new("King", Color::Defensive, Field::Castle)
///             .with_suits([Suit::Hearts])
///             .with_figure(FigureConfig::new([Rank::King])),
///     )
///     .unwrap();
/// let catalog = builder.build();
///
/// let king = &catalog.figures().get_figures_by_name("King")[0];
/// assert_eq!(king.value(), 15);
/// assert_eq!(king.battle_bonus(), 4);
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    figures: FigureManager,
    spells: SpellManager,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every family of a configuration.
    pub fn add_config(&mut self, config: &CatalogConfig) -> Result<&mut Self> {
        for family in &config.families {
            self.add_family(family)?;
        }
        for family in &config.spell_families {
            self.add_spell_family(family)?;
        }
        Ok(self)
    }

    /// Register a figure family and all figures expanded from it.
    pub fn add_family(&mut self, config: &FamilyConfig) -> Result<FamilyId> {
        validate_family(config)?;

        let mut family = FigureFamily::new(FamilyId::new(0), &config.name, config.color, config.field)
            .with_suits(config.suits.iter().copied())
            .with_description(&config.description)
            .with_assets(config.assets.clone());
        if let Some(target) = &config.attach_to {
            family = family.with_attach_to(target);
        }
        let id = self.figures.register_family(family)?;

        let mut count = 0usize;
        for &suit in &config.suits {
            for figure in expand_family(config, suit) {
                self.figures.register_figure(figure)?;
                count += 1;
            }
        }
        tracing::debug!("Expanded family {} into {} figures", config.name, count);
        Ok(id)
    }

    /// Register a spell family and all spells expanded from it.
    pub fn add_spell_family(&mut self, config: &SpellFamilyConfig) -> Result<SpellFamilyId> {
        validate_spell_family(config)?;

        let family = SpellFamily::new(SpellFamilyId::new(0), &config.name, config.spell_type)
            .with_suits(config.suits.iter().copied())
            .with_description(&config.description)
            .with_assets(config.assets.clone());
        let id = self.spells.register_family(family)?;

        let mut count = 0usize;
        for &suit in &config.suits {
            for spell in expand_spell_family(config, suit) {
                self.spells.register_spell(spell)?;
                count += 1;
            }
        }
        tracing::debug!("Expanded spell family {} into {} spells", config.name, count);
        Ok(id)
    }

    /// Run the linking pass and freeze the catalog.
    #[must_use]
    pub fn build(mut self) -> Catalog {
        self.figures.link_figures();
        tracing::info!(
            "Catalog built: {} figure families, {} figures, {} spell families, {} spells",
            self.figures.family_count(),
            self.figures.len(),
            self.spells.family_count(),
            self.spells.len()
        );
        Catalog {
            figures: self.figures,
            spells: self.spells,
        }
    }
}

fn validate_family(config: &FamilyConfig) -> Result<()> {
    if config.suits.is_empty() {
        return Err(CatalogError::InvalidConfig(format!(
            "family {} allows no suits",
            config.name
        )));
    }
    if config.figures.iter().any(|f| f.key_ranks.is_empty()) {
        return Err(CatalogError::InvalidConfig(format!(
            "family {} has a figure without key cards",
            config.name
        )));
    }
    Ok(())
}

fn validate_spell_family(config: &SpellFamilyConfig) -> Result<()> {
    if config.suits.is_empty() {
        return Err(CatalogError::InvalidConfig(format!(
            "spell family {} allows no suits",
            config.name
        )));
    }
    if config.spells.iter().any(|s| s.key_ranks.is_empty()) {
        return Err(CatalogError::InvalidConfig(format!(
            "spell family {} has a spell without key cards",
            config.name
        )));
    }
    Ok(())
}

/// Expand a family's variant records for one suit.
///
/// Each record yields one figure per number rank, or a single figure when
/// it lists none. Every card takes the given suit.
#[must_use]
pub fn expand_family(config: &FamilyConfig, suit: Suit) -> Vec<Figure> {
    config
        .figures
        .iter()
        .flat_map(|record| expand_figure(config, record, suit))
        .collect()
}

fn expand_figure(family: &FamilyConfig, record: &FigureConfig, suit: Suit) -> Vec<Figure> {
    let base = || {
        let mut figure = Figure::new(
            FigureId::new(0),
            record.name.as_deref().unwrap_or(&family.name),
            &family.name,
            family.field,
            family.color,
            suit,
            record.key_ranks.iter().map(|&rank| Card::new(rank, suit)),
        )
        .with_flags(record.flags)
        .with_produces(record.produces.clone())
        .with_requires(record.requires.clone());
        if let Some(upgrade) = &record.upgrade {
            figure = figure.with_upgrade(Card::new(upgrade.rank, suit), &upgrade.family);
        }
        figure
    };

    if record.number_ranks.is_empty() {
        return vec![base()];
    }
    record
        .number_ranks
        .iter()
        .map(|&rank| base().with_number_card(Card::new(rank, suit)))
        .collect()
}

/// Expand a spell family's variant records for one suit.
#[must_use]
pub fn expand_spell_family(config: &SpellFamilyConfig, suit: Suit) -> Vec<Spell> {
    config
        .spells
        .iter()
        .flat_map(|record| expand_spell(config, record, suit))
        .collect()
}

fn expand_spell(family: &SpellFamilyConfig, record: &SpellConfig, suit: Suit) -> Vec<Spell> {
    let base = || {
        let mut spell = Spell::new(
            SpellId::new(0),
            record.name.as_deref().unwrap_or(&family.name),
            &family.name,
            family.spell_type,
            suit,
            record.key_ranks.iter().map(|&rank| Card::new(rank, suit)),
        )
        .with_duration(record.duration);
        if let Some(rank) = record.upgrade_rank {
            spell = spell.with_upgrade_card(Card::new(rank, suit));
        }
        if let Some(target) = record.target {
            spell = spell.with_target(target);
        }
        if record.counterable {
            spell = spell.counterable();
        }
        if record.possible_during_ceasefire {
            spell = spell.during_ceasefire();
        }
        spell
    };

    if record.number_ranks.is_empty() {
        return vec![base()];
    }
    record
        .number_ranks
        .iter()
        .map(|&rank| base().with_number_card(Card::new(rank, suit)))
        .collect()
}
