//! Power resolution: base power plus every applicable modifier.

use super::breakdown::Entry;
use super::catalog::{AbilityKind, LocationEffect};
use crate::cards::Card;
use crate::state::{GameState, Side};

/// How the presentation layer should render an effective power.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerDisplay {
    /// No modifiers applied; show the printed value.
    Base,
    /// Modified but still non-negative.
    Modified,
    /// Below zero. Never clamped; rendered distinctly.
    Negative,
}

impl PowerDisplay {
    /// Classify an effective power against its base.
    #[must_use]
    pub fn classify(base: i64, effective: i64) -> Self {
        if effective < 0 {
            PowerDisplay::Negative
        } else if effective != base {
            PowerDisplay::Modified
        } else {
            PowerDisplay::Base
        }
    }
}

/// Effective power of `card` at a location, on one side of the board.
///
/// Pure function of the arguments: same card, same snapshot, same answer.
/// The result is a plain sum and is never floored — negative power stands.
/// An out-of-range `location_index` means no location modifiers apply.
#[must_use]
pub fn resolve_power(card: &Card, location_index: usize, side: Side, state: &GameState) -> i64 {
    card.power
        + power_modifiers(card, location_index, side, state)
            .iter()
            .map(|entry| entry.delta)
            .sum::<i64>()
}

/// Every non-zero power modifier for `card`, in the fixed narrative order:
/// location effect, same-side boosts, opposing reductions, everyone
/// reductions (inspected side first), when-alone bonus. The arithmetic does
/// not care about the order; the breakdown display and the tests do.
pub(crate) fn power_modifiers(
    card: &Card,
    location_index: usize,
    side: Side,
    state: &GameState,
) -> Vec<Entry> {
    let mut entries = Vec::new();
    let Some(location) = state.location(location_index) else {
        return entries;
    };

    let own_count = location.count(side);

    // 1. The location's own effect.
    let location_delta = match location.effect_type {
        LocationEffect::PowerBoost => location.effect_value,
        LocationEffect::SingleCardBonus if own_count == 1 => location.effect_value,
        LocationEffect::ReduceAllPower => -location.effect_value,
        _ => 0,
    };
    if location_delta != 0 {
        entries.push(Entry::sourced(
            "Location Effect",
            location_delta,
            &location.name,
        ));
    }

    // 2. Boosts from the same side's other cards. Identity is by reference:
    //    a card never boosts itself, even if another copy shares its name.
    for other in location.cards(side) {
        if std::ptr::eq(other, card) {
            continue;
        }
        if let Some(effect) = other.ongoing_effect() {
            if effect.boosts_other_cards() && effect.value != 0 {
                entries.push(Entry::sourced("Ally Boost", effect.value, &other.name));
            }
        }
    }

    // 3. Reductions from the opposing side.
    for enemy in location.cards(side.opposite()) {
        if let Some(effect) = enemy.ongoing_effect() {
            if effect.kind == AbilityKind::ReduceOpponentPower && effect.value != 0 {
                entries.push(Entry::sourced("Enemy Reduction", -effect.value, &enemy.name));
            }
        }
    }

    // 4. Reductions that hit everyone at the location. The source card's own
    //    reduction applies to itself as well; no exclusion.
    for reducer in location
        .cards(side)
        .iter()
        .chain(location.cards(side.opposite()))
    {
        if let Some(effect) = reducer.ongoing_effect() {
            if effect.kind == AbilityKind::ReduceAllPower && effect.value != 0 {
                entries.push(Entry::sourced("Power Reduction", -effect.value, &reducer.name));
            }
        }
    }

    // 5. The inspected card's own when-alone bonus.
    if own_count == 1 {
        if let Some(effect) = card.ongoing_effect() {
            if effect.kind == AbilityKind::WhenAlone && effect.value != 0 {
                entries.push(Entry::bare("When Alone Bonus", effect.value));
            }
        }
    }

    entries
}
