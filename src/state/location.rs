//! Board locations and the cards played to them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::effects::LocationEffect;

/// Maximum cards one side may have at a location.
pub const SIDE_CAPACITY: usize = 4;

/// Which side of the board a card (or power total) belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Cards played to one side of a location, in play order.
///
/// Play order is irrelevant to the arithmetic; only the count matters, and
/// only for the exactly-one-card bonuses.
pub type SideCards = SmallVec<[Card; SIDE_CAPACITY]>;

/// One of the fixed board zones, with its passive effect and the cards
/// both sides have played there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,

    /// Display text for the effect. Not interpreted.
    #[serde(default)]
    pub effect: String,

    #[serde(default)]
    pub effect_type: LocationEffect,

    /// Non-negative magnitude; the catalog decides the sign.
    #[serde(default)]
    pub effect_value: i64,

    #[serde(default)]
    pub player_cards: SideCards,

    #[serde(default)]
    pub opponent_cards: SideCards,
}

impl Location {
    /// A location with no effect and no cards, for building states.
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effect: String::new(),
            effect_type: LocationEffect::None,
            effect_value: 0,
            player_cards: SideCards::new(),
            opponent_cards: SideCards::new(),
        }
    }

    /// Cards one side has played here, in play order.
    #[must_use]
    pub fn cards(&self, side: Side) -> &[Card] {
        match side {
            Side::Player => &self.player_cards,
            Side::Opponent => &self.opponent_cards,
        }
    }

    /// Number of cards one side has played here.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cards(side).len()
    }

    /// Whether one side is at capacity here.
    #[must_use]
    pub fn is_full(&self, side: Side) -> bool {
        self.count(side) >= SIDE_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Player);
    }

    #[test]
    fn test_location_wire_shape() {
        let json = r#"{
            "name": "Asgard",
            "effect": "All cards cost 1 less.",
            "effect_type": "cost_reduction",
            "effect_value": 1,
            "player_cards": [{"name": "Wasp", "power": 1, "cost": 0}],
            "opponent_cards": []
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.effect_type, LocationEffect::CostReduction);
        assert_eq!(location.count(Side::Player), 1);
        assert_eq!(location.count(Side::Opponent), 0);
    }

    #[test]
    fn test_capacity() {
        let mut location = Location::plain("Wakanda");
        for i in 0..SIDE_CAPACITY {
            assert!(!location.is_full(Side::Player));
            location.player_cards.push(Card::vanilla(format!("c{i}"), 1, 1));
        }
        assert!(location.is_full(Side::Player));
        assert!(!location.is_full(Side::Opponent));
    }
}
