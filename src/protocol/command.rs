//! Commands the client sends and the envelope the server answers with.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::state::GameState;

/// Path for fetching the current snapshot (plain GET, no envelope).
pub const GAME_STATE_PATH: &str = "/api/game-state";

/// A mutating command for the Game Server.
///
/// The `Ai*` variants drive the single-player collaborator's opponent; the
/// server picks the move, the client only sequences the requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PlayCard {
        card_index: usize,
        location_index: usize,
    },
    EndTurn,
    NewGame,
    AiPlayCard,
    AiEndTurn,
}

impl Command {
    /// The endpoint this command POSTs to.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Command::PlayCard { .. } => "/api/play-card",
            Command::EndTurn => "/api/end-turn",
            Command::NewGame => "/api/new-game",
            Command::AiPlayCard => "/api/ai-play-card",
            Command::AiEndTurn => "/api/ai-end-turn",
        }
    }

    /// The JSON request body. Everything but `PlayCard` sends an empty
    /// object.
    #[must_use]
    pub fn payload(self) -> Value {
        match self {
            Command::PlayCard {
                card_index,
                location_index,
            } => json!({
                "card_index": card_index,
                "location_index": location_index,
            }),
            _ => json!({}),
        }
    }
}

/// The envelope every mutating endpoint answers with.
///
/// `success == false` means the command was rejected and no state changed;
/// `message` is user-displayable either way. A fresh full snapshot rides
/// along when the server has one to give.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_state: Option<GameState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_card_payload() {
        let command = Command::PlayCard {
            card_index: 2,
            location_index: 1,
        };
        assert_eq!(command.path(), "/api/play-card");
        assert_eq!(
            command.payload(),
            serde_json::json!({"card_index": 2, "location_index": 1})
        );
    }

    #[test]
    fn test_bodyless_commands_send_empty_object() {
        for command in [
            Command::EndTurn,
            Command::NewGame,
            Command::AiPlayCard,
            Command::AiEndTurn,
        ] {
            assert_eq!(command.payload(), serde_json::json!({}));
        }
        assert_eq!(Command::EndTurn.path(), "/api/end-turn");
    }

    #[test]
    fn test_rejection_envelope() {
        let json = r#"{"success": false, "message": "Not enough energy"}"#;
        let response: CommandResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Not enough energy"));
        assert!(response.game_state.is_none());
    }
}
