//! Property tests for matching over arbitrary hands.

use nepal_kings::cards::{Card, CardCounts, Rank, Suit};
use nepal_kings::catalog::Catalog;
use proptest::prelude::*;
use proptest::sample::select;

fn card_strategy() -> impl Strategy<Value = Card> {
    (select(Rank::ALL.to_vec()), select(Suit::ALL.to_vec()))
        .prop_map(|(rank, suit)| Card::new(rank, suit))
}

fn hand_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 0..12)
}

proptest! {
    #[test]
    fn prop_match_figure_is_exact(hand in hand_strategy()) {
        let catalog = Catalog::standard().unwrap();
        if let Some(figure) = catalog.match_figure(&hand) {
            prop_assert_eq!(figure.card_counts(), &CardCounts::from_cards(&hand));
        }
    }

    #[test]
    fn prop_castable_spells_are_affordable(hand in hand_strategy()) {
        let catalog = Catalog::standard().unwrap();
        let counts = CardCounts::from_cards(&hand);

        let castable = catalog.spells().find_castable_spells(&hand);
        for spell in catalog.spells().spells() {
            let affordable = spell
                .card_counts()
                .len() <= counts.len()
                && spell.cards().iter().all(|&c| {
                    counts.count(c) >= spell.cards().iter().filter(|&&o| o == c).count()
                });
            prop_assert_eq!(castable.iter().any(|s| s.id == spell.id), affordable);
        }
    }

    #[test]
    fn prop_buildable_figures_match_hand(hand in hand_strategy()) {
        let catalog = Catalog::standard().unwrap();
        for figure in catalog.figures().find_buildable_figures(&hand) {
            prop_assert!(figure.is_match(&hand));
        }
    }

    #[test]
    fn prop_card_order_follows_value(a in card_strategy(), b in card_strategy()) {
        if a.value() < b.value() {
            prop_assert!(a < b);
        }
        prop_assert_eq!(a == b, a.to_tuple() == b.to_tuple());
    }

    #[test]
    fn prop_adding_cards_keeps_castable(hand in hand_strategy(), extra in card_strategy()) {
        let catalog = Catalog::standard().unwrap();
        let before: Vec<_> = catalog.spells().find_castable_spells(&hand).iter().map(|s| s.id).collect();

        let mut bigger = hand.clone();
        bigger.push(extra);
        let after: Vec<_> = catalog.spells().find_castable_spells(&bigger).iter().map(|s| s.id).collect();

        for id in before {
            prop_assert!(after.contains(&id));
        }
    }
}
