//! Push-channel events from the multiplayer collaborator.
//!
//! The socket delivers `(event name, JSON payload)` pairs. Every event is a
//! full snapshot or a terminal notification, never a delta.

use serde::Deserialize;
use serde_json::Value;

use crate::state::{GameState, Winner};

/// A push event, decoded from its name and payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerEvent {
    /// Matchmaking succeeded; a game room is ready.
    GameFound { game_id: String },
    /// A complete replacement snapshot.
    GameStateUpdate(GameState),
    /// Terminal notification with the outcome.
    GameOver { winner: Option<Winner> },
    /// Server-side rejection or failure, user-displayable.
    GameError { message: String },
    /// Informational: a card was played.
    CardPlayed { message: Option<String> },
    /// Informational: the turn advanced.
    TurnEnded { message: Option<String> },
    /// Event name this client does not know. Dropped after logging.
    Unknown { name: String },
}

#[derive(Deserialize)]
struct GameFoundPayload {
    game_id: String,
}

#[derive(Deserialize)]
struct GameOverPayload {
    #[serde(default)]
    winner: Option<Winner>,
}

#[derive(Deserialize)]
struct MessagePayload {
    #[serde(default)]
    message: Option<String>,
}

impl ServerEvent {
    /// Decode an event from its wire name and payload.
    ///
    /// Unknown names decode to `Unknown`; a payload that does not match its
    /// known name is a malformed frame and errors (the caller surfaces it
    /// as a transport failure, keeping the prior snapshot).
    pub fn decode(name: &str, payload: Value) -> Result<Self, serde_json::Error> {
        Ok(match name {
            "game_found" => {
                let data: GameFoundPayload = serde_json::from_value(payload)?;
                ServerEvent::GameFound {
                    game_id: data.game_id,
                }
            }
            "game_state_update" => ServerEvent::GameStateUpdate(serde_json::from_value(payload)?),
            "game_over" => {
                let data: GameOverPayload = serde_json::from_value(payload)?;
                ServerEvent::GameOver {
                    winner: data.winner,
                }
            }
            "game_error" => {
                let data: MessagePayload = serde_json::from_value(payload)?;
                ServerEvent::GameError {
                    message: data.message.unwrap_or_default(),
                }
            }
            "card_played" => {
                let data: MessagePayload = serde_json::from_value(payload)?;
                ServerEvent::CardPlayed {
                    message: data.message,
                }
            }
            "turn_ended" => {
                let data: MessagePayload = serde_json::from_value(payload)?;
                ServerEvent::TurnEnded {
                    message: data.message,
                }
            }
            other => ServerEvent::Unknown {
                name: other.to_string(),
            },
        })
    }
}
