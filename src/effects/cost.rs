//! Cost resolution: what a hand card actually costs to play.

use super::breakdown::Entry;
use super::catalog::LocationEffect;
use crate::cards::Card;
use crate::state::GameState;

/// Effective cost of a hand card, never negative.
///
/// Two modes:
///
/// - **Precomputed**: when `location_index` is given and the server attached
///   `location_costs[location_index]` to the card, that value is returned
///   verbatim. The server's fuller model can make costs location-specific;
///   its number wins.
/// - **Generic**: otherwise,
///   `max(0, base + hand surcharge − Σ cost_reduction over all locations)`.
///   Cost reductions pool across the whole board, not just the target
///   location.
///
/// Both modes agree whenever no precomputed value is attached; the generic
/// formula is the reference semantics.
#[must_use]
pub fn resolve_cost(card: &Card, state: &GameState, location_index: Option<usize>) -> i64 {
    if let Some(index) = location_index {
        if let Some(precomputed) = card.precomputed_cost(index) {
            return precomputed;
        }
    }

    let reduction: i64 = state
        .locations
        .iter()
        .filter(|loc| loc.effect_type == LocationEffect::CostReduction)
        .map(|loc| loc.effect_value)
        .sum();

    (card.cost + state.player_hand_cost_increase - reduction).max(0)
}

/// Every non-zero cost modifier in the generic formula, in fixed order:
/// hand-wide surcharge first, then one entry per reducing location, then a
/// floor adjustment if the raw sum fell below zero. The floor entry keeps
/// `base + Σ deltas == total` true even when the clamp engages.
pub(crate) fn cost_modifiers(card: &Card, state: &GameState) -> Vec<Entry> {
    let mut entries = Vec::new();

    if state.player_hand_cost_increase != 0 {
        entries.push(Entry::bare(
            "Hand Cost Increase",
            state.player_hand_cost_increase,
        ));
    }

    for location in &state.locations {
        if location.effect_type == LocationEffect::CostReduction && location.effect_value != 0 {
            entries.push(Entry::sourced(
                "Cost Reduction",
                -location.effect_value,
                &location.name,
            ));
        }
    }

    let raw = card.cost + entries.iter().map(|entry| entry.delta).sum::<i64>();
    if raw < 0 {
        entries.push(Entry::bare("Minimum Cost", -raw));
    }

    entries
}
