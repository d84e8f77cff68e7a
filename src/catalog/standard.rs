//! The standard Nepal Kings catalog.
//!
//! Offensive families (Djungle) play Hearts and Diamonds, defensive
//! families (Himalaya) play Clubs and Spades. Every figure and spell here
//! has a distinct card multiset within its catalog, so exact matching is
//! unambiguous.

use crate::cards::{Rank, Suit};
use crate::figures::{Color, Field, FigureFlags, Resources};
use crate::spells::{SpellType, TargetType};

use super::config::{CatalogConfig, FamilyConfig, FigureConfig, SpellConfig, SpellFamilyConfig};

/// Ranks selecting the Archers variant.
const ARCHER_RANKS: [Rank; 5] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six];

/// Standard configuration: castles, villages, military and spells.
#[must_use]
pub fn standard_config() -> CatalogConfig {
    let mut config = CatalogConfig::new();
    for family in castle_families()
        .into_iter()
        .chain(village_families())
        .chain(military_families())
    {
        config = config.with_family(family);
    }
    for family in spell_families() {
        config = config.with_spell_family(family);
    }
    config
}

fn castle_families() -> Vec<FamilyConfig> {
    vec![
        FamilyConfig::new("Djungle King", Color::Offensive, Field::Castle)
            .with_suits(Suit::OFFENSIVE)
            .with_description("Rules the lowland jungle. Crowned with an Ace he becomes Maharaja.")
            .with_figure(FigureConfig::new([Rank::King]).with_upgrade(Rank::Ace, "Djungle Maharaja")),
        FamilyConfig::new("Djungle Maharaja", Color::Offensive, Field::Castle)
            .with_suits(Suit::OFFENSIVE)
            .with_description("The great ruler of the jungle.")
            .with_figure(FigureConfig::new([Rank::King, Rank::Ace])),
        FamilyConfig::new("Himalaya King", Color::Defensive, Field::Castle)
            .with_suits(Suit::DEFENSIVE)
            .with_description("Rules the mountain passes. Crowned with an Ace he becomes Maharaja.")
            .with_figure(FigureConfig::new([Rank::King]).with_upgrade(Rank::Ace, "Himalaya Maharaja")),
        FamilyConfig::new("Himalaya Maharaja", Color::Defensive, Field::Castle)
            .with_suits(Suit::DEFENSIVE)
            .with_description("The great ruler of the mountains.")
            .with_figure(FigureConfig::new([Rank::King, Rank::Ace])),
    ]
}

fn village_families() -> Vec<FamilyConfig> {
    vec![
        FamilyConfig::new("Rice Field", Color::Offensive, Field::Village)
            .with_suits(Suit::OFFENSIVE)
            .with_description("Feeds the army.")
            .with_figure(
                FigureConfig::new([Rank::Two, Rank::Three])
                    .with_produces(Resources::new().with("rice", 1)),
            ),
        FamilyConfig::new("Lumber Camp", Color::Defensive, Field::Village)
            .with_suits(Suit::DEFENSIVE)
            .with_description("Supplies timber for fortifications.")
            .with_figure(
                FigureConfig::new([Rank::Two, Rank::Three])
                    .with_produces(Resources::new().with("wood", 1)),
            ),
        FamilyConfig::new("Temple", Color::Defensive, Field::Village)
            .with_suits(Suit::ALL)
            .with_description("Blesses nearby troops.")
            .with_figure(
                FigureConfig::new([Rank::Queen, Rank::Jack])
                    .with_flags(FigureFlags::new().cannot_attack().buffs_allies())
                    .with_requires(Resources::new().with("rice", 1)),
            ),
    ]
}

fn military_families() -> Vec<FamilyConfig> {
    vec![
        FamilyConfig::new("Fortress I", Color::Defensive, Field::Military)
            .with_suits(Suit::DEFENSIVE)
            .with_description("A wooden fort. Add an Ace to raise its stone walls.")
            .with_figure(
                FigureConfig::new([Rank::Jack, Rank::Queen])
                    .with_number_ranks(Rank::NUMBER_CARDS)
                    .with_upgrade(Rank::Ace, "Fortress II")
                    .with_flags(FigureFlags::new().must_be_attacked())
                    .with_requires(Resources::new().with("wood", 1)),
            ),
        FamilyConfig::new("Fortress II", Color::Defensive, Field::Military)
            .with_suits(Suit::DEFENSIVE)
            .with_description("A stone fortress.")
            .with_figure(
                FigureConfig::new([Rank::Jack, Rank::Queen, Rank::Ace])
                    .with_number_ranks(Rank::NUMBER_CARDS)
                    .with_flags(FigureFlags::new().must_be_attacked())
                    .with_requires(Resources::new().with("wood", 2)),
            ),
        FamilyConfig::new("Palisade", Color::Defensive, Field::Military)
            .with_suits(Suit::DEFENSIVE)
            .with_description("Sharpened stakes around a fortress.")
            .with_attach_to("Fortress I")
            .with_figure(
                FigureConfig::new([Rank::Eight, Rank::Eight])
                    .with_flags(FigureFlags::new().cannot_attack().blocks_bonus()),
            ),
        FamilyConfig::new("Archers", Color::Offensive, Field::Military)
            .with_suits(Suit::OFFENSIVE)
            .with_description("Strike from afar, then rest.")
            .with_figure(
                FigureConfig::new([Rank::Jack])
                    .with_number_ranks(ARCHER_RANKS)
                    .with_flags(FigureFlags::new().distance_attack().rest_after_attack())
                    .with_requires(Resources::new().with("rice", 1)),
            ),
        FamilyConfig::new("Elephant Riders", Color::Offensive, Field::Military)
            .with_suits(Suit::OFFENSIVE)
            .with_description("Heavy cavalry of the jungle.")
            .with_figure(
                FigureConfig::new([Rank::King, Rank::Queen])
                    .with_number_ranks(Rank::NUMBER_CARDS)
                    .with_flags(FigureFlags::new().rest_after_attack())
                    .with_requires(Resources::new().with("rice", 2)),
            ),
        FamilyConfig::new("Shaman", Color::Offensive, Field::Military)
            .with_suits(Suit::OFFENSIVE)
            .with_description("Calls the spirits to aid nearby warriors.")
            .with_figure(
                FigureConfig::new([Rank::Queen, Rank::Queen])
                    .with_flags(FigureFlags::new().buffs_allies()),
            ),
    ]
}

fn spell_families() -> Vec<SpellFamilyConfig> {
    vec![
        SpellFamilyConfig::new("Double Harvest", SpellType::Greed)
            .with_suits(Suit::ALL)
            .with_description("Draw two main cards.")
            .with_spell(SpellConfig::new([Rank::Eight, Rank::Eight]).during_ceasefire()),
        SpellFamilyConfig::new("Dump Cards", SpellType::Greed)
            .with_suits(Suit::ALL)
            .with_description("Discard up to three cards and draw as many.")
            .with_spell(SpellConfig::new([Rank::Three, Rank::Three]).during_ceasefire()),
        SpellFamilyConfig::new("Poison", SpellType::Enchantment)
            .with_suits(Suit::OFFENSIVE)
            .with_description("Weakens an enemy figure for three rounds.")
            .with_spell(
                SpellConfig::new([Rank::Jack])
                    .with_number_ranks([Rank::Five, Rank::Six])
                    .with_target(TargetType::EnemyFigure)
                    .counterable()
                    .with_duration(3),
            ),
        SpellFamilyConfig::new("Health Boost", SpellType::Enchantment)
            .with_suits(Suit::DEFENSIVE)
            .with_description("Strengthens an own figure for three rounds.")
            .with_spell(
                SpellConfig::new([Rank::Queen])
                    .with_number_ranks([Rank::Five, Rank::Six])
                    .with_target(TargetType::OwnFigure)
                    .with_duration(3),
            ),
        SpellFamilyConfig::new("Explosion", SpellType::Tactics)
            .with_suits(Suit::OFFENSIVE)
            .with_description("Destroys an enemy figure.")
            .with_spell(
                SpellConfig::new([Rank::Ten])
                    .with_number_ranks([Rank::Two, Rank::Three, Rank::Four])
                    .with_target(TargetType::EnemyFigure)
                    .counterable(),
            ),
        SpellFamilyConfig::new("Ceasefire", SpellType::Tactics)
            .with_suits(Suit::ALL)
            .with_description("No battles for three rounds.")
            .with_spell(SpellConfig::new([Rank::Ace, Rank::Two]).counterable().with_duration(3)),
        SpellFamilyConfig::new("Blitzkrieg", SpellType::Tactics)
            .with_suits(Suit::OFFENSIVE)
            .with_description("Attack twice this round.")
            .with_spell(SpellConfig::new([Rank::Ace, Rank::Four]).counterable()),
        SpellFamilyConfig::new("All Seeing Eye", SpellType::Tactics)
            .with_suits(Suit::DEFENSIVE)
            .with_description("Reveal the opponent's hand.")
            .with_spell(SpellConfig::new([Rank::Ace, Rank::Four]).during_ceasefire()),
    ]
}
