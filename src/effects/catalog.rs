//! Effect catalog: the closed set of effect kinds the resolvers understand.
//!
//! Location effects and ongoing card abilities arrive from the server as
//! string tags. Each tag maps to a variant here; tags the catalog does not
//! recognize decode to the `Unknown` variant, which contributes zero to every
//! resolution and never appears in a breakdown. The server is free to ship
//! new effect kinds before the client learns them.
//!
//! Every recognized kind declares which resolver consumes it, the scope of
//! cards it touches, and whether it is a reduction (its sign flips in the
//! breakdown).

use serde::{Deserialize, Serialize};

/// Which resolver an effect kind feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolver {
    Power,
    Cost,
}

/// The set of cards an effect kind applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Only the inspected (or source) card itself.
    SelfCard,
    /// Every other card on the same side at the source's location.
    SameSide,
    /// Every card on the opposing side at the source's location.
    OppositeSide,
    /// Every card at the source's location, both sides.
    BothSides,
    /// Every card in the hand, pooled across all locations.
    HandWide,
}

/// A location's passive effect kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationEffect {
    #[default]
    None,
    /// Hand cards cost less; pooled across all such locations.
    CostReduction,
    /// Cards at this location get a flat power bonus, either side.
    PowerBoost,
    /// Power bonus only while a side has exactly one card here.
    SingleCardBonus,
    /// Every card at this location loses power, both sides.
    ReduceAllPower,
    /// Server-side kind this client does not know. Contributes nothing.
    #[serde(other)]
    Unknown,
}

impl LocationEffect {
    /// Which resolver this kind feeds, if any.
    #[must_use]
    pub fn resolver(self) -> Option<Resolver> {
        match self {
            LocationEffect::CostReduction => Some(Resolver::Cost),
            LocationEffect::PowerBoost
            | LocationEffect::SingleCardBonus
            | LocationEffect::ReduceAllPower => Some(Resolver::Power),
            LocationEffect::None | LocationEffect::Unknown => None,
        }
    }

    /// Scope of cards this kind touches, if it does anything.
    #[must_use]
    pub fn scope(self) -> Option<Scope> {
        match self {
            LocationEffect::CostReduction => Some(Scope::HandWide),
            LocationEffect::PowerBoost | LocationEffect::SingleCardBonus => Some(Scope::SelfCard),
            LocationEffect::ReduceAllPower => Some(Scope::BothSides),
            LocationEffect::None | LocationEffect::Unknown => None,
        }
    }

    /// Does the sign flip (value subtracts rather than adds)?
    #[must_use]
    pub fn is_reduction(self) -> bool {
        matches!(
            self,
            LocationEffect::CostReduction | LocationEffect::ReduceAllPower
        )
    }
}

/// An ongoing card ability's effect kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    /// Boost cards named by `target` (only `other_cards` is recognized).
    PowerBoost,
    /// Reduce every opposing card at the source's location.
    ReduceOpponentPower,
    /// Reduce every card at the source's location, the source included.
    ReduceAllPower,
    /// Bonus to the source while it is alone on its side here.
    WhenAlone,
    /// Server-side kind this client does not know. Contributes nothing.
    #[serde(other)]
    Unknown,
}

impl AbilityKind {
    /// Which resolver this kind feeds, if any. Every known ability kind is
    /// a power modifier; cost abilities surface through the snapshot's
    /// hand-wide surcharge instead.
    #[must_use]
    pub fn resolver(self) -> Option<Resolver> {
        match self {
            AbilityKind::PowerBoost
            | AbilityKind::ReduceOpponentPower
            | AbilityKind::ReduceAllPower
            | AbilityKind::WhenAlone => Some(Resolver::Power),
            AbilityKind::Unknown => None,
        }
    }

    /// Scope of cards this kind touches, if it does anything.
    #[must_use]
    pub fn scope(self) -> Option<Scope> {
        match self {
            AbilityKind::PowerBoost => Some(Scope::SameSide),
            AbilityKind::ReduceOpponentPower => Some(Scope::OppositeSide),
            AbilityKind::ReduceAllPower => Some(Scope::BothSides),
            AbilityKind::WhenAlone => Some(Scope::SelfCard),
            AbilityKind::Unknown => None,
        }
    }

    /// Does the sign flip (value subtracts rather than adds)?
    #[must_use]
    pub fn is_reduction(self) -> bool {
        matches!(
            self,
            AbilityKind::ReduceOpponentPower | AbilityKind::ReduceAllPower
        )
    }
}

/// Target selector for `AbilityKind::PowerBoost`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostTarget {
    /// Every other card on the same side at the source's location.
    OtherCards,
    /// Unrecognized selector; the boost applies to nothing.
    #[serde(other)]
    Unknown,
}
