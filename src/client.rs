#![cfg(feature = "std")]

use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
};
use thiserror::Error;

use crate::config::{
    MAX_GRID_DIMENSION, MOVE_FORWARD_PATH, RESET_PATH, STATE_PATH, TURN_RIGHT_PATH,
};
use crate::domain::StateSnapshot;
use crate::transport::{Reply, Request, Transport};

/// Commands the user can issue. Each maps to one fixed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    Rotate,
    Reset,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Advance, Action::Rotate, Action::Reset];

    pub const fn path(self) -> &'static str {
        match self {
            Action::Advance => MOVE_FORWARD_PATH,
            Action::Rotate => TURN_RIGHT_PATH,
            Action::Reset => RESET_PATH,
        }
    }

    pub const fn request(self) -> Request {
        Request::post(self.path())
    }

    /// Message shown to the user when the action fails.
    pub const fn failure_message(self) -> &'static str {
        match self {
            Action::Advance => "Error moving forward",
            Action::Rotate => "Error turning right",
            Action::Reset => "Error resetting game",
        }
    }
}

/// Why a command produced no new state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The request never completed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status. The body is ignored.
    #[error("Server returned status {0}")]
    Status(u16),

    /// The body is not the expected JSON shape.
    #[error("Malformed response: {0}")]
    Parse(String),
}

#[async_trait::async_trait]
pub trait CommandApi: Send + Sync {
    /// Issue `action` and return the server's new authoritative state.
    async fn send_action(&self, action: Action) -> Result<StateSnapshot, CommandError>;

    /// Read the current state without changing it.
    async fn fetch_state(&self) -> Result<StateSnapshot, CommandError>;
}

/// [`CommandApi`] over any [`Transport`]. One request per call, no retries.
pub struct CommandClient<T: Transport> {
    transport: T,
}

impl<T: Transport> CommandClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn exchange(&self, request: Request) -> Result<StateSnapshot, CommandError> {
        let reply = self
            .transport
            .send(request)
            .await
            .map_err(|e| CommandError::Transport(e.to_string()))?;
        decode(reply)
    }
}

/// Turn a completed exchange into a snapshot. Status is checked before the
/// body is looked at, and grids too large to draw are rejected.
pub fn decode(reply: Reply) -> Result<StateSnapshot, CommandError> {
    if !reply.is_success() {
        return Err(CommandError::Status(reply.status));
    }
    let snapshot: StateSnapshot =
        serde_json::from_str(&reply.body).map_err(|e| CommandError::Parse(e.to_string()))?;
    if !snapshot.grid.dimensions_in_range() {
        return Err(CommandError::Parse(format!(
            "grid {}x{} exceeds {}x{}",
            snapshot.grid.width, snapshot.grid.height, MAX_GRID_DIMENSION, MAX_GRID_DIMENSION
        )));
    }
    Ok(snapshot)
}

#[async_trait::async_trait]
impl<T: Transport> CommandApi for CommandClient<T> {
    async fn send_action(&self, action: Action) -> Result<StateSnapshot, CommandError> {
        self.exchange(action.request()).await
    }

    async fn fetch_state(&self) -> Result<StateSnapshot, CommandError> {
        self.exchange(Request::get(STATE_PATH)).await
    }
}
