//! Standard catalog integration tests.
//!
//! These tests verify the properties every catalog must hold:
//! - Every figure and spell can be found again from its own cards
//! - Castle and military special cases for value and battle bonus
//! - Number-card variants and the upgrade/attachment linking pass

use nepal_kings::cards::{Card, CardCounts, Rank, Suit};
use nepal_kings::catalog::{Catalog, CatalogBuilder, CatalogConfig, FamilyConfig, FigureConfig};
use nepal_kings::figures::{Color, Field};
use nepal_kings::CatalogError;

fn standard() -> Catalog {
    Catalog::standard().expect("standard catalog builds")
}

// =============================================================================
// Self-matching
// =============================================================================

/// Every figure is found again from its own cards, and it is that figure.
#[test]
fn test_every_figure_self_matches() {
    let catalog = standard();
    assert!(!catalog.figures().is_empty());

    for figure in catalog.figures().figures() {
        let found = catalog
            .match_figure(figure.cards())
            .unwrap_or_else(|| panic!("{} does not match itself", figure));
        assert_eq!(found.id, figure.id, "{} matched {}", figure, found);
        assert_eq!(
            CardCounts::from_cards(found.cards()),
            CardCounts::from_cards(figure.cards())
        );
    }
}

/// Every spell is found again from its own cards, and it is that spell.
#[test]
fn test_every_spell_self_matches() {
    let catalog = standard();
    assert!(!catalog.spells().is_empty());

    for spell in catalog.spells().spells() {
        let found = catalog.match_spell(spell.cards()).expect("spell matches itself");
        assert_eq!(found.id, spell.id, "{} matched {}", spell.name, found.name);
    }
}

/// Card order does not matter for exact matching.
#[test]
fn test_match_ignores_order() {
    let catalog = standard();
    let cards = [
        Card::new(Rank::Nine, Suit::Clubs),
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Jack, Suit::Clubs),
    ];

    let found = catalog.match_figure(&cards).unwrap();
    assert_eq!(found.name, "Fortress II");
    assert_eq!(found.number_card, Some(Card::new(Rank::Nine, Suit::Clubs)));
}

/// A duplicate card the figure needs once breaks the exact match.
#[test]
fn test_duplicate_card_does_not_match() {
    let catalog = standard();
    let king = Card::new(Rank::King, Suit::Hearts);

    assert!(catalog.match_figure(&[king]).is_some());
    assert!(catalog.match_figure(&[king, king]).is_none());
}

/// Cards of mixed suits never form a figure.
#[test]
fn test_mixed_suits_do_not_match() {
    let catalog = standard();
    let cards = [
        Card::new(Rank::Jack, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Seven, Suit::Clubs),
    ];
    assert!(catalog.match_figure(&cards).is_none());
}

// =============================================================================
// Values and bonuses
// =============================================================================

#[test]
fn test_castle_values_fixed() {
    let catalog = standard();
    let castles = catalog.figures().get_figures_by_field(Field::Castle);
    assert_eq!(castles.len(), 8);

    for castle in castles {
        assert_eq!(castle.value(), 15, "{}", castle);
        let expected = if castle.name.contains("Maharaja") { 5 } else { 4 };
        assert_eq!(castle.battle_bonus(), expected, "{}", castle);
    }
}

#[test]
fn test_military_bonus_zero() {
    let catalog = standard();
    for figure in catalog.figures().get_figures_by_field(Field::Military) {
        assert_eq!(figure.battle_bonus(), 0, "{}", figure);
    }
}

#[test]
fn test_village_bonus_from_key_cards() {
    let catalog = standard();
    let temple = catalog
        .match_figure(&[
            Card::new(Rank::Queen, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Diamonds),
        ])
        .unwrap();

    assert_eq!(temple.name, "Temple");
    assert_eq!(temple.field, Field::Village);
    assert_eq!(temple.battle_bonus(), 3);
    assert_eq!(temple.value(), 3);
}

/// Value ignores the upgrade card.
#[test]
fn test_value_excludes_upgrade_card() {
    let catalog = standard();
    let fortress = catalog
        .match_figure(&[
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Ten, Suit::Spades),
        ])
        .unwrap();

    assert_eq!(fortress.value(), 13);
    assert_eq!(fortress.cards_including_upgrade().len(), 4);
}

/// The single-King catalog from the game rules.
#[test]
fn test_single_king_catalog() {
    let config = CatalogConfig::new().with_family(
        FamilyConfig::new("King", Color::Defensive, Field::Castle)
            .with_suits([Suit::Hearts])
            .with_figure(FigureConfig::new([Rank::King])),
    );
    let catalog = Catalog::from_config(&config).unwrap();
    let king = catalog
        .match_figure(&[Card::new(Rank::King, Suit::Hearts)])
        .unwrap();

    assert_eq!(king.value(), 15);
    assert_eq!(king.battle_bonus(), 4);
}

// =============================================================================
// Variants and linking
// =============================================================================

#[test]
fn test_fortress_variants_per_suit() {
    let catalog = standard();
    let family = catalog.figures().get_family_by_name("Fortress I").unwrap();

    for suit in [Suit::Clubs, Suit::Spades] {
        let variants: Vec<_> = catalog
            .figures()
            .figures_of(family)
            .into_iter()
            .filter(|f| f.suit == suit)
            .collect();
        assert_eq!(variants.len(), 4);

        let mut ranks: Vec<_> = variants
            .iter()
            .map(|f| f.number_card.expect("fortress has a number card").rank())
            .collect();
        ranks.sort();
        assert_eq!(ranks, Rank::NUMBER_CARDS.to_vec());

        for f in &variants {
            assert_eq!(f.key_cards.as_slice(), variants[0].key_cards.as_slice());
        }
    }
}

#[test]
fn test_upgrade_links_same_suit() {
    let catalog = standard();

    for fortress in catalog.figures().get_figures_by_name("Fortress I") {
        assert_eq!(fortress.upgrade_family_name.as_deref(), Some("Fortress II"));
        let upgrades = catalog.figures().upgrades_of(fortress);
        assert_eq!(upgrades.len(), 4);
        assert!(upgrades.iter().all(|u| u.suit == fortress.suit));
        assert!(upgrades.iter().all(|u| u.name == "Fortress II"));
    }

    for king in catalog.figures().get_figures_by_name("Djungle King") {
        let upgrades = catalog.figures().upgrades_of(king);
        assert_eq!(upgrades.len(), 1);
        assert_eq!(upgrades[0].name, "Djungle Maharaja");
        // King plus Ace is exactly the Maharaja.
        assert_eq!(
            catalog.match_figure(king.cards_including_upgrade()).map(|f| f.id),
            Some(upgrades[0].id)
        );
    }
}

#[test]
fn test_attachment_links() {
    let catalog = standard();

    for palisade in catalog.figures().get_figures_by_name("Palisade") {
        let targets = catalog.figures().attachment_targets(palisade);
        assert_eq!(targets.len(), 4);
        assert!(targets
            .iter()
            .all(|t| t.name == "Fortress I" && t.suit == palisade.suit));
    }
}

#[test]
fn test_unregistered_upgrade_family() {
    let mut builder = CatalogBuilder::new();
    builder
        .add_family(
            &FamilyConfig::new("Fortress I", Color::Defensive, Field::Military)
                .with_suits([Suit::Clubs])
                .with_figure(
                    FigureConfig::new([Rank::Jack, Rank::Queen])
                        .with_number_ranks(Rank::NUMBER_CARDS)
                        .with_upgrade(Rank::Ace, "Fortress II"),
                ),
        )
        .unwrap();
    let catalog = builder.build();

    assert_eq!(catalog.figures().len(), 4);
    for f in catalog.figures().figures() {
        assert!(f.upgrade_to().is_empty());
    }
}

#[test]
fn test_duplicate_family_names_rejected() {
    let family = FamilyConfig::new("Temple", Color::Defensive, Field::Village)
        .with_suits([Suit::Clubs])
        .with_figure(FigureConfig::new([Rank::Queen, Rank::Jack]));
    let config = CatalogConfig::new()
        .with_family(family.clone())
        .with_family(family);

    let err = Catalog::from_config(&config).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateFamily(ref name) if name == "Temple"));
    assert_eq!(err.to_string(), "Duplicate figure family: Temple");
}

#[test]
fn test_families_sharing_cards_rejected() {
    let config = CatalogConfig::new()
        .with_family(
            FamilyConfig::new("Shrine", Color::Defensive, Field::Village)
                .with_suits([Suit::Clubs])
                .with_figure(FigureConfig::new([Rank::Queen, Rank::Jack])),
        )
        .with_family(
            FamilyConfig::new("Monastery", Color::Defensive, Field::Village)
                .with_suits([Suit::Spades, Suit::Clubs])
                .with_figure(FigureConfig::new([Rank::Jack, Rank::Queen])),
        );

    let err = Catalog::from_config(&config).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidConfig(_)));
    assert!(err.to_string().contains("same cards"));
}

// =============================================================================
// Index lookups
// =============================================================================

#[test]
fn test_lookups() {
    let catalog = standard();
    let figures = catalog.figures();

    assert!(figures.get_figures_by_name("Dragon").is_empty());
    assert!(figures.get_family_by_name("Dragon").is_none());
    assert_eq!(figures.get_figures_by_name("Temple").len(), 4);

    let hearts = figures.get_figures_by_suit(Suit::Hearts);
    assert!(hearts.iter().all(|f| f.suit == Suit::Hearts));
    assert!(hearts.iter().any(|f| f.name == "Temple"));
    assert!(!hearts.iter().any(|f| f.name == "Lumber Camp"));

    let sevens = figures.get_figure_from_number_card(Card::new(Rank::Seven, Suit::Hearts));
    let names: Vec<_> = sevens.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Elephant Riders"]);

    let family = figures.get_family_by_name("Archers").unwrap();
    assert_eq!(family.color, Color::Offensive);
    assert_eq!(family.field, Field::Military);
    assert_eq!(family.figures.len(), 10);
}

/// All figures of a family share its field and color.
#[test]
fn test_family_consistency() {
    let catalog = standard();
    for family in catalog.figures().families() {
        for figure in catalog.figures().figures_of(family) {
            assert_eq!(figure.field, family.field);
            assert_eq!(figure.color, family.color);
            assert_eq!(figure.family_name, family.name);
            assert!(family.allows_suit(figure.suit));
        }
    }
}
