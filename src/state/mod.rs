//! Board and snapshot model.
//!
//! ## Key Types
//!
//! - `Side`: player or opponent, with `opposite()`
//! - `Location`: a board zone, its passive effect, and both sides' cards
//! - `GameState`: the full immutable snapshot the server delivers
//! - `Winner`: terminal outcome
//!
//! Snapshots are replaced wholesale on every server response. Base values
//! on cards never mutate; everything derived is recomputed from the latest
//! snapshot by the resolvers.

pub mod location;
pub mod snapshot;

pub use location::{Location, Side, SideCards, SIDE_CAPACITY};
pub use snapshot::{GameState, Winner};
