//! Effect resolution engine.
//!
//! The one piece every rendering surface must agree on: turning a card's
//! printed power and cost plus the board's open set of location effects and
//! ongoing abilities into the effective numbers the player sees.
//!
//! ## Key Types
//!
//! - `catalog`: the closed enumeration of recognized effect kinds, each with
//!   its resolver, scope, and sign; unknown kinds are explicit no-ops
//! - `resolve_power` / `resolve_cost`: pure functions over a snapshot
//! - `power_breakdown` / `cost_breakdown`: the ordered audit trail the
//!   detail view renders
//!
//! Nothing in here touches the DOM, the network, or any mutable state; the
//! resolvers are total functions of `(card, location, side, snapshot)`.

pub mod breakdown;
pub mod catalog;
pub mod cost;
pub mod power;

pub use breakdown::{cost_breakdown, power_breakdown, Breakdown, Entry};
pub use catalog::{AbilityKind, BoostTarget, LocationEffect, Resolver, Scope};
pub use cost::resolve_cost;
pub use power::{resolve_power, PowerDisplay};
