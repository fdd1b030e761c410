use crate::domain::{Position, RobotState};
use crate::heading::Heading;

/// Server the terminal front end talks to when `--url` is not given.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub const MOVE_FORWARD_PATH: &str = "/api/move-forward";
pub const TURN_RIGHT_PATH: &str = "/api/turn-right";
pub const RESET_PATH: &str = "/api/reset";
pub const STATE_PATH: &str = "/api/state";

/// Grid size the server uses out of the box. Only used to build a surface
/// before any grid has been received.
pub const DEFAULT_GRID_WIDTH: u32 = 10;
pub const DEFAULT_GRID_HEIGHT: u32 = 10;

/// Largest grid side accepted from the server.
pub const MAX_GRID_DIMENSION: u32 = 1024;

/// State the server starts in and returns to after a reset.
pub const START_STATE: RobotState = RobotState {
    position: Position { x: 1, y: 1 },
    heading: Heading::North,
};

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "ROBOT_MOVER_LOG";

/// Runtime settings for the HTTP client.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: std::string::String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<std::time::Duration>,
}

#[cfg(feature = "std")]
impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: None,
        }
    }
}
