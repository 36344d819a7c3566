//! Client session: the latest snapshot plus local selection state.
//!
//! The client is single-threaded and event-driven. User interactions and
//! network responses arrive as discrete events against the one latest
//! snapshot, which is replaced atomically and never patched. Selection
//! (which hand card is picked up or dragged) is purely presentational and
//! never leaks into the resolvers.
//!
//! No error here is fatal: a rejected command or a dead socket leaves the
//! prior snapshot in place and the session interactive.

use std::fmt;

use log::{debug, warn};

use crate::effects::resolve_cost;
use crate::protocol::{CommandResponse, ServerEvent};
use crate::state::{GameState, Side};

/// Non-fatal session failures, per taxonomy: a rejection means the server
/// refused the command and nothing changed; a transport failure means the
/// network or a payload broke and the prior snapshot is retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientError {
    /// Server rejected a command (insufficient energy, location full, not
    /// your turn). The message is user-displayable.
    Rejected(String),
    /// Network or parse failure. Retry-prompting, state unchanged.
    Transport(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Rejected(message) => write!(f, "move rejected: {message}"),
            ClientError::Transport(message) => write!(f, "transport failure: {message}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Holder of the latest known-good snapshot and the selected hand card.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: Option<GameState>,
    selected: Option<usize>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest snapshot, if any has arrived.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Index of the selected hand card, if the selection is still valid
    /// against the current snapshot.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        let index = self.selected?;
        let state = self.state.as_ref()?;
        (index < state.player_hand.len()).then_some(index)
    }

    /// Select a hand card. Out-of-range indices clear the selection.
    pub fn select(&mut self, card_index: usize) {
        let valid = self
            .state
            .as_ref()
            .is_some_and(|state| card_index < state.player_hand.len());
        self.selected = valid.then_some(card_index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Install a replacement snapshot. The selection survives only if it
    /// still points at a hand card.
    pub fn install(&mut self, state: GameState) {
        debug!(
            "snapshot installed: turn {}/{}, {} hand cards",
            state.turn,
            state.max_turns,
            state.player_hand.len()
        );
        if let Some(index) = self.selected {
            if index >= state.player_hand.len() {
                self.selected = None;
            }
        }
        self.state = Some(state);
    }

    /// Discard the snapshot and selection (leaving a game).
    pub fn clear(&mut self) {
        self.state = None;
        self.selected = None;
    }

    /// Apply a command envelope.
    ///
    /// Success installs the fresh snapshot when one rides along; failure
    /// surfaces the server's message and leaves the prior snapshot alone.
    pub fn apply_response(&mut self, response: CommandResponse) -> Result<(), ClientError> {
        if response.success {
            if let Some(state) = response.game_state {
                self.install(state);
            }
            Ok(())
        } else {
            let message = response
                .message
                .unwrap_or_else(|| "move rejected".to_string());
            debug!("command rejected: {message}");
            Err(ClientError::Rejected(message))
        }
    }

    /// Apply a push event.
    ///
    /// Snapshot updates install; `game_error` surfaces as a rejection;
    /// notifications pass through untouched; unknown events are logged and
    /// dropped.
    pub fn apply_event(&mut self, event: ServerEvent) -> Result<(), ClientError> {
        match event {
            ServerEvent::GameStateUpdate(state) => {
                self.install(state);
                Ok(())
            }
            ServerEvent::GameError { message } => Err(ClientError::Rejected(message)),
            ServerEvent::GameFound { game_id } => {
                debug!("game found: {game_id}");
                Ok(())
            }
            ServerEvent::GameOver { winner } => {
                debug!("game over: {winner:?}");
                Ok(())
            }
            ServerEvent::CardPlayed { .. } | ServerEvent::TurnEnded { .. } => Ok(()),
            ServerEvent::Unknown { name } => {
                warn!("ignoring unknown server event: {name}");
                Ok(())
            }
        }
    }

    /// Client-side playability gate: effective cost within energy, own side
    /// of the location not full, game still running. The server remains the
    /// arbiter; this only decides what the UI offers.
    #[must_use]
    pub fn playable(&self, card_index: usize, location_index: usize) -> bool {
        let Some(state) = self.state.as_ref() else {
            return false;
        };
        if state.game_over {
            return false;
        }
        let Some(card) = state.hand_card(card_index) else {
            return false;
        };
        let Some(location) = state.location(location_index) else {
            return false;
        };
        if location.is_full(Side::Player) {
            return false;
        }
        resolve_cost(card, state, Some(location_index)) <= state.player_energy
    }
}
