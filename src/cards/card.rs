//! The card as it appears in server snapshots.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ability::{AbilityEffect, AbilityType};

/// A card in a hand or at a location.
///
/// `power` and `cost` are the printed base values and never change; the
/// resolvers derive effective values from board state on demand. Card
/// identity is positional — two cards may share a name, so the resolvers
/// compare by reference, never by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,

    /// Printed base power.
    pub power: i64,

    /// Printed base cost, never negative.
    pub cost: i64,

    /// Display text for the ability. Not interpreted.
    #[serde(default)]
    pub ability: String,

    #[serde(default)]
    pub ability_type: AbilityType,

    /// Present iff the ability is machine-readable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_effect: Option<AbilityEffect>,

    /// Server-precomputed effective cost per location index, attached to
    /// hand cards when location effects are location-specific in the
    /// server's fuller model. Authoritative where present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_costs: Option<FxHashMap<usize, i64>>,
}

impl Card {
    /// A plain card with no ability.
    #[must_use]
    pub fn vanilla(name: impl Into<String>, power: i64, cost: i64) -> Self {
        Self {
            name: name.into(),
            power,
            cost,
            ability: String::new(),
            ability_type: AbilityType::None,
            ability_effect: None,
            location_costs: None,
        }
    }

    /// The ability effect, but only while it is ongoing.
    ///
    /// Resolution keys off this: a machine-readable effect attached to a
    /// non-ongoing ability (or an ability with no effect at all) does not
    /// participate.
    #[must_use]
    pub fn ongoing_effect(&self) -> Option<&AbilityEffect> {
        if self.ability_type == AbilityType::Ongoing {
            self.ability_effect.as_ref()
        } else {
            None
        }
    }

    /// Server-precomputed cost for a location, if attached.
    #[must_use]
    pub fn precomputed_cost(&self, location_index: usize) -> Option<i64> {
        self.location_costs
            .as_ref()
            .and_then(|costs| costs.get(&location_index).copied())
    }
}
