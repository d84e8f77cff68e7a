//! Spell manager: catalog index and hand matcher for spells.
//!
//! Mirrors `FigureManager`, except that the main question asked of it is
//! "which spells can this hand pay for", answered by comparing card counts.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardCounts, Suit};
use crate::error::{CatalogError, Result};

use super::family::{SpellFamily, SpellFamilyId};
use super::spell::{Spell, SpellId, SpellType};

/// Index of spell templates and spell families.
#[derive(Clone, Debug, Default)]
pub struct SpellManager {
    spells: Vec<Spell>,
    families: Vec<SpellFamily>,
    family_by_name: FxHashMap<String, SpellFamilyId>,
    by_type: FxHashMap<SpellType, Vec<SpellId>>,
    by_suit: FxHashMap<Suit, Vec<SpellId>>,
    by_name: FxHashMap<String, Vec<SpellId>>,
}

impl SpellManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family shell. Fails on a duplicate name.
    pub fn register_family(&mut self, mut family: SpellFamily) -> Result<SpellFamilyId> {
        if self.family_by_name.contains_key(&family.name) {
            return Err(CatalogError::DuplicateSpellFamily(family.name));
        }

        let id = SpellFamilyId::new(self.families.len() as u32);
        family.id = id;
        family.spells.clear();
        self.family_by_name.insert(family.name.clone(), id);
        self.families.push(family);
        Ok(id)
    }

    /// Register a spell template with its family and every index.
    ///
    /// Fails if the family is unknown or another spell is already paid
    /// for with the same cards.
    pub fn register_spell(&mut self, mut spell: Spell) -> Result<SpellId> {
        let family_id = self
            .family_by_name
            .get(&spell.family_name)
            .copied()
            .ok_or_else(|| {
                CatalogError::InvalidConfig(format!(
                    "spell {} names unknown family {}",
                    spell.name, spell.family_name
                ))
            })?;
        if let Some(existing) = self
            .spells
            .iter()
            .find(|s| s.matches_exactly(spell.card_counts()))
        {
            return Err(CatalogError::InvalidConfig(format!(
                "spell {} ({}) uses the same cards as {} ({})",
                spell.name, spell.suit, existing.name, existing.suit
            )));
        }

        let id = SpellId::new(self.spells.len() as u32);
        spell.id = id;

        self.by_type.entry(spell.spell_type).or_default().push(id);
        self.by_suit.entry(spell.suit).or_default().push(id);
        self.by_name.entry(spell.name.clone()).or_default().push(id);

        self.families[family_id.index()].spells.push(id);
        self.spells.push(spell);
        Ok(id)
    }

    /// Find the spell paid for with exactly `cards`.
    #[must_use]
    pub fn match_spell(&self, cards: &[Card]) -> Option<&Spell> {
        let counts = CardCounts::from_cards(cards);
        self.spells.iter().find(|s| s.matches_exactly(&counts))
    }

    /// Every spell the hand can pay for.
    ///
    /// Each required card must be in the hand at least as many times as the
    /// spell needs it.
    #[must_use]
    pub fn find_castable_spells(&self, hand: &[Card]) -> Vec<&Spell> {
        let counts = CardCounts::from_cards(hand);
        self.spells
            .iter()
            .filter(|s| s.is_castable_with(&counts))
            .collect()
    }

    /// Distinct families of the castable spells, in catalog order.
    #[must_use]
    pub fn get_families_with_castable_spells(&self, hand: &[Card]) -> Vec<&SpellFamily> {
        let mut seen = vec![false; self.families.len()];
        for spell in self.find_castable_spells(hand) {
            if let Some(id) = self.family_by_name.get(&spell.family_name) {
                seen[id.index()] = true;
            }
        }
        self.families
            .iter()
            .filter(|family| seen[family.id.index()])
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: SpellId) -> Option<&Spell> {
        self.spells.get(id.index())
    }

    #[must_use]
    pub fn get_spells_by_type(&self, spell_type: SpellType) -> Vec<&Spell> {
        self.lookup(self.by_type.get(&spell_type))
    }

    #[must_use]
    pub fn get_spells_by_suit(&self, suit: Suit) -> Vec<&Spell> {
        self.lookup(self.by_suit.get(&suit))
    }

    #[must_use]
    pub fn get_spells_by_name(&self, name: &str) -> Vec<&Spell> {
        self.lookup(self.by_name.get(name))
    }

    #[must_use]
    pub fn get_family_by_name(&self, name: &str) -> Option<&SpellFamily> {
        self.family_by_name
            .get(name)
            .and_then(|id| self.families.get(id.index()))
    }

    /// Spells belonging to `family`.
    #[must_use]
    pub fn spells_of(&self, family: &SpellFamily) -> Vec<&Spell> {
        family.spells.iter().filter_map(|&id| self.get(id)).collect()
    }

    fn lookup(&self, ids: Option<&Vec<SpellId>>) -> Vec<&Spell> {
        ids.map(|ids| ids.iter().filter_map(|&id| self.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn spells(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }

    pub fn families(&self) -> impl Iterator<Item = &SpellFamily> {
        self.families.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}
