//! Figure manager: catalog index and hand matcher.
//!
//! The manager owns every figure and family of a catalog and keeps
//! secondary indices (field, suit, name, number card, family name) that
//! are filled in as figures are registered. Upgrade and attachment links
//! are resolved by `link_figures` once registration is complete, since a
//! family may name another family that is defined later.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardCounts, Suit};
use crate::error::{CatalogError, Result};

use super::family::{FamilyId, FigureFamily};
use super::figure::{Field, Figure, FigureId};

/// Index of figures and families.
///
/// ## Example
///
/// ```
/// use nepal_kings::cards::{Card, Rank, Suit};
/// use nepal_kings::figures::{Color, FamilyId, Field, Figure, FigureFamily, FigureId, FigureManager};
///
/// let mut manager = FigureManager::new();
/// manager
///     .register_family(
///         FigureFamily::new(FamilyId::new(0), "King", Color::Defensive, Field::Castle)
///             .with_suits([Suit::Hearts]),
///     )
///     .unwrap();
/// manager
///     .register_figure(Figure::new(
///         FigureId::new(0),
///         "King",
///         "King",
///         Field::Castle,
///         Color::Defensive,
///         Suit::Hearts,
///         [Card::new(Rank::King, Suit::Hearts)],
///     ))
///     .unwrap();
/// manager.link_figures();
///
/// let found = manager.match_figure(&[Card::new(Rank::King, Suit::Hearts)]).unwrap();
/// assert_eq!(found.name, "King");
/// ```
#[derive(Clone, Debug, Default)]
pub struct FigureManager {
    figures: Vec<Figure>,
    families: Vec<FigureFamily>,
    family_by_name: FxHashMap<String, FamilyId>,
    by_field: FxHashMap<Field, Vec<FigureId>>,
    by_suit: FxHashMap<Suit, Vec<FigureId>>,
    by_name: FxHashMap<String, Vec<FigureId>>,
    by_number_card: FxHashMap<Card, Vec<FigureId>>,
}

impl FigureManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family shell. Its id is reassigned to its catalog slot.
    ///
    /// Fails if a family with the same name already exists.
    pub fn register_family(&mut self, mut family: FigureFamily) -> Result<FamilyId> {
        if self.family_by_name.contains_key(&family.name) {
            return Err(CatalogError::DuplicateFamily(family.name));
        }

        let id = FamilyId::new(self.families.len() as u32);
        family.id = id;
        family.figures.clear();
        self.family_by_name.insert(family.name.clone(), id);
        self.families.push(family);
        Ok(id)
    }

    /// Register a figure with its family and every index.
    ///
    /// The figure's id is reassigned to its catalog slot. Fails if the
    /// figure's family has not been registered, if the figure's field,
    /// color or suit disagree with that family, or if another figure is
    /// already made of the same cards.
    pub fn register_figure(&mut self, mut figure: Figure) -> Result<FigureId> {
        let family_id = self
            .family_by_name
            .get(&figure.family_name)
            .copied()
            .ok_or_else(|| {
                CatalogError::InvalidConfig(format!(
                    "figure {} names unknown family {}",
                    figure.name, figure.family_name
                ))
            })?;

        let family = &self.families[family_id.index()];
        if figure.field != family.field || figure.color != family.color {
            return Err(CatalogError::InvalidConfig(format!(
                "figure {} is {:?}/{:?} but family {} is {:?}/{:?}",
                figure.name, figure.field, figure.color, family.name, family.field, family.color
            )));
        }
        if !family.allows_suit(figure.suit) {
            return Err(CatalogError::InvalidConfig(format!(
                "figure {} has suit {:?} not allowed by family {}",
                figure.name, figure.suit, family.name
            )));
        }
        if let Some(existing) = self
            .figures
            .iter()
            .find(|f| f.matches_exactly(figure.card_counts()))
        {
            return Err(CatalogError::InvalidConfig(format!(
                "figure {} uses the same cards as {}",
                figure, existing
            )));
        }

        let id = FigureId::new(self.figures.len() as u32);
        figure.set_id(id);

        self.by_field.entry(figure.field).or_default().push(id);
        self.by_suit.entry(figure.suit).or_default().push(id);
        self.by_name.entry(figure.name.clone()).or_default().push(id);
        if let Some(card) = figure.number_card {
            self.by_number_card.entry(card).or_default().push(id);
        }

        self.families[family_id.index()].figures.push(id);
        self.figures.push(figure);
        Ok(id)
    }

    /// Resolve upgrade and attachment links.
    ///
    /// Must run after every figure is registered. A figure's `upgrade_to`
    /// becomes the figures of its upgrade family sharing its suit, and its
    /// `attachable_to` the figures of its family's `attach_to` family
    /// sharing its suit. Unknown family names leave the list empty.
    pub fn link_figures(&mut self) {
        let links: Vec<(Vec<FigureId>, Vec<FigureId>)> = self
            .figures
            .iter()
            .map(|figure| {
                let upgrades = figure
                    .upgrade_family_name
                    .as_deref()
                    .map(|target| self.related(figure, target, "upgrade"))
                    .unwrap_or_default();

                let attach_target = self
                    .get_family_by_name(&figure.family_name)
                    .and_then(|family| family.attach_to.as_deref());
                let attachments = attach_target
                    .map(|target| self.related(figure, target, "attachment"))
                    .unwrap_or_default();

                (upgrades, attachments)
            })
            .collect();

        let mut linked = 0usize;
        for (figure, (upgrades, attachments)) in self.figures.iter_mut().zip(links) {
            if !upgrades.is_empty() || !attachments.is_empty() {
                linked += 1;
            }
            figure.set_links(upgrades, attachments);
        }
        tracing::debug!("Linked {} of {} figures", linked, self.figures.len());
    }

    /// Figures of family `target` that share `figure`'s suit.
    fn related(&self, figure: &Figure, target: &str, relation: &str) -> Vec<FigureId> {
        match self.get_family_by_name(target) {
            Some(family) => family
                .figures
                .iter()
                .copied()
                .filter(|id| self.figures[id.index()].suit == figure.suit)
                .collect(),
            None => {
                tracing::warn!(
                    "{} of {} names unknown {} family {}",
                    figure.name,
                    figure.suit,
                    relation,
                    target
                );
                Vec::new()
            }
        }
    }

    /// Find the figure built from exactly `cards`.
    ///
    /// Card counts must match: a candidate holding a card twice does not
    /// match a figure needing it once.
    #[must_use]
    pub fn match_figure(&self, cards: &[Card]) -> Option<&Figure> {
        let counts = CardCounts::from_cards(cards);
        self.figures.iter().find(|f| f.matches_exactly(&counts))
    }

    /// Every figure that can be built from cards in `hand`.
    #[must_use]
    pub fn find_buildable_figures(&self, hand: &[Card]) -> Vec<&Figure> {
        let counts = CardCounts::from_cards(hand);
        self.figures
            .iter()
            .filter(|f| counts.covers(f.card_counts()))
            .collect()
    }

    /// Distinct families of the buildable figures, in catalog order.
    #[must_use]
    pub fn get_families_with_buildable_figures(&self, hand: &[Card]) -> Vec<&FigureFamily> {
        let mut seen = vec![false; self.families.len()];
        for figure in self.find_buildable_figures(hand) {
            if let Some(id) = self.family_by_name.get(&figure.family_name) {
                seen[id.index()] = true;
            }
        }
        self.families
            .iter()
            .filter(|family| seen[family.id.index()])
            .collect()
    }

    /// Upgrade targets of `figure` reachable with `hand`.
    ///
    /// Empty unless the hand holds the figure's upgrade card.
    #[must_use]
    pub fn find_upgrades(&self, figure: &Figure, hand: &[Card]) -> Vec<&Figure> {
        match figure.upgrade_card {
            Some(card) if hand.contains(&card) => self.upgrades_of(figure),
            _ => Vec::new(),
        }
    }

    /// Figures `figure` can be upgraded into.
    #[must_use]
    pub fn upgrades_of(&self, figure: &Figure) -> Vec<&Figure> {
        self.resolve(figure.upgrade_to())
    }

    /// Figures `figure` can be attached to.
    #[must_use]
    pub fn attachment_targets(&self, figure: &Figure) -> Vec<&Figure> {
        self.resolve(figure.attachable_to())
    }

    fn resolve(&self, ids: &[FigureId]) -> Vec<&Figure> {
        ids.iter().filter_map(|&id| self.get(id)).collect()
    }

    /// Get a figure by id.
    #[must_use]
    pub fn get(&self, id: FigureId) -> Option<&Figure> {
        self.figures.get(id.index())
    }

    #[must_use]
    pub fn get_figures_by_field(&self, field: Field) -> Vec<&Figure> {
        self.lookup(self.by_field.get(&field))
    }

    #[must_use]
    pub fn get_figures_by_suit(&self, suit: Suit) -> Vec<&Figure> {
        self.lookup(self.by_suit.get(&suit))
    }

    #[must_use]
    pub fn get_figures_by_name(&self, name: &str) -> Vec<&Figure> {
        self.lookup(self.by_name.get(name))
    }

    /// Figures whose variant is selected by `card`.
    #[must_use]
    pub fn get_figure_from_number_card(&self, card: Card) -> Vec<&Figure> {
        self.lookup(self.by_number_card.get(&card))
    }

    #[must_use]
    pub fn get_family_by_name(&self, name: &str) -> Option<&FigureFamily> {
        self.family_by_name
            .get(name)
            .and_then(|id| self.families.get(id.index()))
    }

    /// Figures belonging to `family`.
    #[must_use]
    pub fn figures_of(&self, family: &FigureFamily) -> Vec<&Figure> {
        self.resolve(&family.figures)
    }

    fn lookup(&self, ids: Option<&Vec<FigureId>>) -> Vec<&Figure> {
        ids.map(|ids| self.resolve(ids)).unwrap_or_default()
    }

    /// All figures in registration order.
    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        self.figures.iter()
    }

    /// All families in registration order.
    pub fn families(&self) -> impl Iterator<Item = &FigureFamily> {
        self.families.iter()
    }

    /// Number of figures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Number of families.
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }
}
