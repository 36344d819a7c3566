//! Card abilities as the server describes them.

use serde::{Deserialize, Serialize};

use crate::effects::{AbilityKind, BoostTarget};

/// How a card's ability behaves over time.
///
/// Only `Ongoing` abilities participate in effect resolution; anything else
/// (including trigger timings this client has never heard of) is display
/// text only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityType {
    #[default]
    None,
    /// Applies continuously while the card is in play.
    Ongoing,
    /// Trigger timing the resolvers do not model (e.g. on-reveal draws,
    /// which the server resolves before the snapshot reaches us).
    #[serde(other)]
    Other,
}

/// The machine-readable half of a card ability.
///
/// `value` is a non-negative magnitude; whether it adds or subtracts is a
/// property of the kind (see the effect catalog). `target` is only
/// meaningful for `power_boost`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffect {
    #[serde(rename = "type")]
    pub kind: AbilityKind,
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<BoostTarget>,
}

impl AbilityEffect {
    /// Does this effect boost the same side's *other* cards?
    #[must_use]
    pub fn boosts_other_cards(&self) -> bool {
        self.kind == AbilityKind::PowerBoost && self.target == Some(BoostTarget::OtherCards)
    }
}
