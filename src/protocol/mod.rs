//! Game Server contract: request, envelope, and push-event shapes.
//!
//! Transport mechanics live outside this crate. What lives here is the
//! shape of the conversation: which endpoint a command hits, what rides in
//! its body, and how responses and socket events decode into typed values
//! a session can apply.

pub mod command;
pub mod event;

pub use command::{Command, CommandResponse, GAME_STATE_PATH};
pub use event::ServerEvent;
