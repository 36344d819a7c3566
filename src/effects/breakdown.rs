//! Breakdown reporting: the audit trail behind an effective number.
//!
//! The detail view a player opens on a card lists every contributing
//! modifier and where it came from. The same list is the seam the tests
//! lean on: base plus the sum of deltas must equal what the resolver
//! returns, entry for entry, in the resolver's fixed order.

use serde::Serialize;

use super::cost::{cost_modifiers, resolve_cost};
use super::power::{power_modifiers, resolve_power};
use crate::cards::Card;
use crate::state::{GameState, Side};

/// One contributing modifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Fixed vocabulary: "Location Effect", "Ally Boost", and so on.
    pub label: &'static str,
    /// Signed contribution. Zero-valued steps are never emitted.
    pub delta: i64,
    /// Name of the card or location responsible, where there is one.
    pub source: Option<String>,
}

impl Entry {
    pub(crate) fn bare(label: &'static str, delta: i64) -> Self {
        Self {
            label,
            delta,
            source: None,
        }
    }

    pub(crate) fn sourced(label: &'static str, delta: i64, source: &str) -> Self {
        Self {
            label,
            delta,
            source: Some(source.to_string()),
        }
    }
}

/// An ordered audit of one resolution.
///
/// Invariant: `base + entries.iter().map(delta).sum() == total`, and `total`
/// is exactly what the matching resolver returns for the same arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    /// Label for the opening line: "Base Power" or "Base Cost".
    pub base_label: &'static str,
    pub base: i64,
    /// Contributing modifiers in resolution order, zero steps omitted.
    pub entries: Vec<Entry>,
    pub total: i64,
}

impl Breakdown {
    /// The display sequence: the base line, each modifier, and a closing
    /// "Total" line only when the total differs from the base.
    #[must_use]
    pub fn lines(&self) -> Vec<Entry> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(Entry::bare(self.base_label, self.base));
        lines.extend(self.entries.iter().cloned());
        if self.total != self.base {
            lines.push(Entry::bare("Total", self.total));
        }
        lines
    }
}

/// Audit of `resolve_power` for a card at a location.
#[must_use]
pub fn power_breakdown(
    card: &Card,
    location_index: usize,
    side: Side,
    state: &GameState,
) -> Breakdown {
    Breakdown {
        base_label: "Base Power",
        base: card.power,
        entries: power_modifiers(card, location_index, side, state),
        total: resolve_power(card, location_index, side, state),
    }
}

/// Audit of `resolve_cost` in generic mode (the hand-wide default display).
#[must_use]
pub fn cost_breakdown(card: &Card, state: &GameState) -> Breakdown {
    Breakdown {
        base_label: "Base Cost",
        base: card.cost,
        entries: cost_modifiers(card, state),
        total: resolve_cost(card, state, None),
    }
}
