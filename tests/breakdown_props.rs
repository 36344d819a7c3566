//! Property tests over generated boards.
//!
//! The breakdown reporter is the audit seam: on any state the sum of its
//! deltas plus the base must reproduce the resolver exactly, and the cost
//! resolver must respect its monotonicity and clamping contract.

use proptest::prelude::*;

use snap_core::{
    cost_breakdown, power_breakdown, resolve_cost, resolve_power, AbilityEffect, AbilityKind,
    AbilityType, BoostTarget, Card, GameState, Location, LocationEffect, Side,
};

fn arb_ability() -> impl Strategy<Value = (AbilityType, Option<AbilityEffect>)> {
    prop_oneof![
        Just((AbilityType::None, None)),
        (arb_ability_kind(), 0i64..=3).prop_map(|(kind, value)| {
            let target = (kind == AbilityKind::PowerBoost).then_some(BoostTarget::OtherCards);
            (
                AbilityType::Ongoing,
                Some(AbilityEffect { kind, value, target }),
            )
        }),
    ]
}

fn arb_ability_kind() -> impl Strategy<Value = AbilityKind> {
    prop_oneof![
        Just(AbilityKind::PowerBoost),
        Just(AbilityKind::ReduceOpponentPower),
        Just(AbilityKind::ReduceAllPower),
        Just(AbilityKind::WhenAlone),
        Just(AbilityKind::Unknown),
    ]
}

prop_compose! {
    fn arb_card()(
        power in 0i64..=12,
        cost in 0i64..=6,
        (ability_type, ability_effect) in arb_ability(),
    ) -> Card {
        Card {
            ability_type,
            ability_effect,
            ..Card::vanilla("generated", power, cost)
        }
    }
}

fn arb_location_effect() -> impl Strategy<Value = LocationEffect> {
    prop_oneof![
        Just(LocationEffect::None),
        Just(LocationEffect::CostReduction),
        Just(LocationEffect::PowerBoost),
        Just(LocationEffect::SingleCardBonus),
        Just(LocationEffect::ReduceAllPower),
        Just(LocationEffect::Unknown),
    ]
}

prop_compose! {
    fn arb_location()(
        effect_type in arb_location_effect(),
        effect_value in 0i64..=5,
        player_cards in prop::collection::vec(arb_card(), 0..=4),
        opponent_cards in prop::collection::vec(arb_card(), 0..=4),
    ) -> Location {
        let mut location = Location::plain("generated");
        location.effect_type = effect_type;
        location.effect_value = effect_value;
        location.player_cards = player_cards.into();
        location.opponent_cards = opponent_cards.into();
        location
    }
}

prop_compose! {
    fn arb_state()(
        locations in prop::collection::vec(arb_location(), 3),
        player_hand in prop::collection::vec(arb_card(), 0..=5),
        player_energy in 0i64..=6,
        player_hand_cost_increase in 0i64..=3,
        turn in 1u32..=6,
    ) -> GameState {
        GameState {
            locations,
            player_hand,
            player_energy,
            player_hand_cost_increase,
            turn,
            max_turns: 6,
            game_over: false,
            winner: None,
        }
    }
}

proptest! {
    /// base + sum of power breakdown deltas == resolver output, for every
    /// card on the board.
    #[test]
    fn prop_power_breakdown_sums_to_resolver(state in arb_state()) {
        for (index, location) in state.locations.iter().enumerate() {
            for side in [Side::Player, Side::Opponent] {
                for card in location.cards(side) {
                    let total = resolve_power(card, index, side, &state);
                    let breakdown = power_breakdown(card, index, side, &state);
                    let sum: i64 = breakdown.entries.iter().map(|entry| entry.delta).sum();
                    prop_assert_eq!(breakdown.base + sum, total);
                    prop_assert_eq!(breakdown.total, total);
                    // Zero-valued steps never appear.
                    prop_assert!(breakdown.entries.iter().all(|entry| entry.delta != 0));
                }
            }
        }
    }

    /// base + sum of cost breakdown deltas == resolver output, for every
    /// hand card, clamp included.
    #[test]
    fn prop_cost_breakdown_sums_to_resolver(state in arb_state()) {
        for card in &state.player_hand {
            let total = resolve_cost(card, &state, None);
            prop_assert!(total >= 0);
            let breakdown = cost_breakdown(card, &state);
            let sum: i64 = breakdown.entries.iter().map(|entry| entry.delta).sum();
            prop_assert_eq!(breakdown.base + sum, total);
            prop_assert_eq!(breakdown.total, total);
        }
    }

    /// Cost never decreases as the hand-wide surcharge grows.
    #[test]
    fn prop_cost_monotone_in_surcharge(state in arb_state(), bump in 1i64..=4) {
        let mut dearer = state.clone();
        dearer.player_hand_cost_increase += bump;
        for card in &state.player_hand {
            prop_assert!(
                resolve_cost(card, &dearer, None) >= resolve_cost(card, &state, None)
            );
        }
    }

    /// Cost never increases as another reducing location appears.
    #[test]
    fn prop_cost_antitone_in_reduction(state in arb_state(), value in 1i64..=4) {
        let mut cheaper = state.clone();
        let mut extra = Location::plain("extra");
        extra.effect_type = LocationEffect::CostReduction;
        extra.effect_value = value;
        cheaper.locations.push(extra);
        for card in &state.player_hand {
            prop_assert!(
                resolve_cost(card, &cheaper, None) <= resolve_cost(card, &state, None)
            );
        }
    }

    /// Stripping every effect from a board leaves base power and the bare
    /// cost formula.
    #[test]
    fn prop_no_effects_means_base_values(state in arb_state()) {
        let mut inert = state.clone();
        for location in &mut inert.locations {
            location.effect_type = LocationEffect::None;
            for card in location.player_cards.iter_mut().chain(location.opponent_cards.iter_mut()) {
                card.ability_type = AbilityType::None;
            }
        }

        for (index, location) in inert.locations.iter().enumerate() {
            for side in [Side::Player, Side::Opponent] {
                for card in location.cards(side) {
                    prop_assert_eq!(resolve_power(card, index, side, &inert), card.power);
                }
            }
        }
        for card in &inert.player_hand {
            let expected = (card.cost + inert.player_hand_cost_increase).max(0);
            prop_assert_eq!(resolve_cost(card, &inert, None), expected);
        }
    }

    /// Resolution is a pure function: same arguments, same answer.
    #[test]
    fn prop_resolution_is_deterministic(state in arb_state()) {
        for (index, location) in state.locations.iter().enumerate() {
            for card in location.cards(Side::Player) {
                let first = resolve_power(card, index, Side::Player, &state);
                let second = resolve_power(card, index, Side::Player, &state);
                prop_assert_eq!(first, second);
            }
        }
    }
}
