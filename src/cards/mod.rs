//! Card data model.
//!
//! ## Key Types
//!
//! - `Card`: immutable base values plus an optional machine-readable ability
//! - `AbilityType`: whether the ability applies continuously
//! - `AbilityEffect`: the tagged effect an ongoing ability carries
//!
//! All of it deserializes straight from server snapshots. Tags the client
//! does not recognize decode to explicit unknown variants instead of
//! failing, so server-added card kinds render with base values.

pub mod ability;
pub mod card;

pub use ability::{AbilityEffect, AbilityType};
pub use card::Card;
