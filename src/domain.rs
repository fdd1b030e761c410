use alloc::{collections::BTreeSet, format, string::String, vec::Vec};

use crate::config::MAX_GRID_DIMENSION;
use crate::heading::Heading;

/// Grid coordinates as reported by the server. Not bounds checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Identifier of the surface cell at this position.
    pub fn cell_id(&self) -> String {
        cell_id(self.x, self.y)
    }
}

pub fn cell_id(x: i32, y: i32) -> String {
    format!("cell-{}-{}", x, y)
}

/// Robot snapshot received from the server. Wire shape is
/// `{"x": 2, "y": 3, "direction": "EAST"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotState {
    #[cfg_attr(feature = "std", serde(flatten))]
    pub position: Position,
    #[cfg_attr(feature = "std", serde(rename = "direction"))]
    pub heading: Heading,
}

impl RobotState {
    pub const fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: Position { x, y },
            heading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "std", serde(rename = "isWall", default))]
    pub is_wall: bool,
}

/// Server-owned grid. Rows are stored top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub width: u32,
    pub height: u32,
    #[cfg_attr(feature = "std", serde(default))]
    pub cells: Vec<Vec<GridCell>>,
}

impl GridState {
    /// Grid with no wall information.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: Vec::new(),
        }
    }

    /// Both dimensions are at most [`MAX_GRID_DIMENSION`].
    pub fn dimensions_in_range(&self) -> bool {
        self.width <= MAX_GRID_DIMENSION && self.height <= MAX_GRID_DIMENSION
    }

    /// Looks up the row-major slot first and only scans when the server sent
    /// the cells in some other order.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        let slot = usize::try_from(y)
            .ok()
            .zip(usize::try_from(x).ok())
            .and_then(|(row, col)| self.cells.get(row)?.get(col));
        match slot {
            Some(cell) if cell.x == x && cell.y == y => cell.is_wall,
            _ => self
                .cells
                .iter()
                .flatten()
                .any(|c| c.x == x && c.y == y && c.is_wall),
        }
    }

    /// Coordinates of every wall cell.
    pub fn walls(&self) -> BTreeSet<(i32, i32)> {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_wall)
            .map(|c| (c.x, c.y))
            .collect()
    }
}

/// One complete server response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct StateSnapshot {
    #[cfg_attr(feature = "std", serde(rename = "roomba"))]
    pub robot: RobotState,
    pub grid: GridState,
}
