//! # snap-core
//!
//! Client-side core for a Snap-style turn-based card game. The remote Game
//! Server owns the canonical state and pushes full snapshots; this crate
//! holds everything the rendering surfaces must agree on and nothing they
//! should each reinvent.
//!
//! ## Design Principles
//!
//! 1. **One resolver, many surfaces**: effective power and cost are computed
//!    in exactly one place. Rendering consumes the resolved numbers and the
//!    breakdown audit; it never re-derives arithmetic.
//!
//! 2. **Snapshots are immutable**: the latest server snapshot is replaced
//!    wholesale, never patched. Base power and cost never mutate; only
//!    derived values change as the board changes.
//!
//! 3. **Unknown means no-op**: effect tags the catalog does not recognize
//!    decode to explicit unknown variants that contribute zero. A server
//!    shipping new kinds must not crash an older client.
//!
//! ## Modules
//!
//! - `cards`: card data model (base values, abilities)
//! - `state`: locations, sides, and the snapshot
//! - `effects`: effect catalog, power/cost resolvers, breakdown reporter
//! - `protocol`: Game Server commands, envelopes, and push events
//! - `session`: latest-snapshot holder, selection state, playability gate
//! - `score`: location totals and winner projection

pub mod cards;
pub mod effects;
pub mod protocol;
pub mod score;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use crate::cards::{AbilityEffect, AbilityType, Card};

pub use crate::state::{GameState, Location, Side, SideCards, Winner, SIDE_CAPACITY};

pub use crate::effects::{
    cost_breakdown, power_breakdown, resolve_cost, resolve_power, AbilityKind, BoostTarget,
    Breakdown, Entry, LocationEffect, PowerDisplay, Resolver, Scope,
};

pub use crate::protocol::{Command, CommandResponse, ServerEvent, GAME_STATE_PATH};

pub use crate::session::{ClientError, Session};

pub use crate::score::{location_power, project_winner};
