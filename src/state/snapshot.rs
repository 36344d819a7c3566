//! The full game-state snapshot as the server delivers it.

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::cards::Card;

/// Outcome of a finished game, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Opponent,
    Tie,
}

/// A complete, immutable snapshot of the game at one instant.
///
/// The server owns the canonical state; the client never patches a snapshot
/// in place, it replaces the whole thing when the next one arrives. Unknown
/// fields in the server payload are ignored, so the client tolerates a
/// server that knows more than it does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed board zones, in server order (three in observed play).
    pub locations: Vec<Location>,

    /// The player's hand, in server order.
    #[serde(default)]
    pub player_hand: Vec<Card>,

    #[serde(default)]
    pub player_energy: i64,

    /// Hand-wide cost surcharge applied to every hand card (e.g. an
    /// Ares-style effect). Never negative.
    #[serde(default)]
    pub player_hand_cost_increase: i64,

    pub turn: u32,
    pub max_turns: u32,

    #[serde(default)]
    pub game_over: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
}

impl GameState {
    /// A location by index. The resolvers treat an out-of-range index as
    /// "no location effects apply" rather than an error.
    #[must_use]
    pub fn location(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    /// A hand card by index.
    #[must_use]
    pub fn hand_card(&self, index: usize) -> Option<&Card> {
        self.player_hand.get(index)
    }

    /// Iterate over `(index, location)` pairs.
    pub fn locations_indexed(&self) -> impl Iterator<Item = (usize, &Location)> {
        self.locations.iter().enumerate()
    }
}
