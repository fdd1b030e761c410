//! Render surface abstraction and an in-memory implementation.
//!
//! A surface is a fixed set of cells addressed by `cell-{x}-{y}` plus three
//! text readouts. It owns no robot logic; [`crate::ViewSync`] decides what to
//! mark.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::config::MAX_GRID_DIMENSION;
use crate::domain::{cell_id, GridState};

/// Text readouts shown next to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Readout {
    PosX,
    PosY,
    Heading,
}

pub trait RenderSurface {
    /// Ids of every cell currently flagged as holding the robot.
    fn active_cells(&self) -> Vec<String>;

    /// Remove the active flag and any marker content from `id`. Unknown ids
    /// are ignored.
    fn clear_marker(&mut self, id: &str);

    /// Flag `id` active and attach `glyph`. Returns `false` if no such cell
    /// exists.
    fn place_marker(&mut self, id: &str, glyph: char) -> bool;

    fn set_readout(&mut self, slot: Readout, text: &str);
}

/// State of one cell in a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellNode {
    pub x: i32,
    pub y: i32,
    pub wall: bool,
    pub active: bool,
    pub marker: Option<char>,
}

impl CellNode {
    fn new(x: i32, y: i32, wall: bool) -> Self {
        Self {
            x,
            y,
            wall,
            active: false,
            marker: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    width: u32,
    height: u32,
    cells: BTreeMap<String, CellNode>,
    readouts: BTreeMap<Readout, String>,
}

impl MemorySurface {
    /// Surface with a `width` x `height` block of plain cells.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self::from_grid(&GridState::open(width, height))
    }

    /// Surface mirroring the server grid, walls included. Dimensions are
    /// clamped to [`MAX_GRID_DIMENSION`].
    pub fn from_grid(grid: &GridState) -> Self {
        let width = grid.width.min(MAX_GRID_DIMENSION);
        let height = grid.height.min(MAX_GRID_DIMENSION);
        let walls = grid.walls();
        let mut cells = BTreeMap::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let wall = walls.contains(&(x, y));
                cells.insert(cell_id(x, y), CellNode::new(x, y, wall));
            }
        }
        Self {
            width,
            height,
            cells,
            readouts: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell(&self, id: &str) -> Option<&CellNode> {
        self.cells.get(id)
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Option<&CellNode> {
        self.cells.get(&cell_id(x, y))
    }

    /// Empty string until the readout has been written once.
    pub fn readout(&self, slot: Readout) -> &str {
        self.readouts.get(&slot).map(String::as_str).unwrap_or("")
    }
}

impl RenderSurface for MemorySurface {
    fn active_cells(&self) -> Vec<String> {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.active)
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn clear_marker(&mut self, id: &str) {
        if let Some(cell) = self.cells.get_mut(id) {
            cell.active = false;
            cell.marker = None;
        }
    }

    fn place_marker(&mut self, id: &str, glyph: char) -> bool {
        match self.cells.get_mut(id) {
            Some(cell) => {
                cell.active = true;
                cell.marker = Some(glyph);
                true
            }
            None => false,
        }
    }

    fn set_readout(&mut self, slot: Readout, text: &str) {
        self.readouts.insert(slot, text.into());
    }
}
