//! Location totals and winner projection.
//!
//! Display projections over the latest snapshot: per-side power totals at
//! each location and the winner the board currently implies. The server
//! stays authoritative for the real outcome; these exist so every surface
//! shows the same numbers it will eventually confirm.

use crate::effects::resolve_power;
use crate::state::{GameState, Side, Winner};

/// Total effective power one side has at a location: the sum of
/// `resolve_power` over that side's cards there. Out-of-range index is an
/// empty location.
#[must_use]
pub fn location_power(state: &GameState, location_index: usize, side: Side) -> i64 {
    let Some(location) = state.location(location_index) else {
        return 0;
    };
    location
        .cards(side)
        .iter()
        .map(|card| resolve_power(card, location_index, side, state))
        .sum()
}

/// The winner the current board implies: most locations won by strict
/// power comparison. A tied location counts for neither side; equal
/// location counts tie the game.
#[must_use]
pub fn project_winner(state: &GameState) -> Winner {
    let mut player_locations = 0u32;
    let mut opponent_locations = 0u32;

    for (index, _) in state.locations_indexed() {
        let player = location_power(state, index, Side::Player);
        let opponent = location_power(state, index, Side::Opponent);
        if player > opponent {
            player_locations += 1;
        } else if opponent > player {
            opponent_locations += 1;
        }
    }

    if player_locations > opponent_locations {
        Winner::Player
    } else if opponent_locations > player_locations {
        Winner::Opponent
    } else {
        Winner::Tie
    }
}
