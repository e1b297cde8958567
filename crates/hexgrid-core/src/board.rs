//! Board snapshots as delivered by the simulation server, and the view that
//! turns them into per-cell visuals.
//!
//! This module contains:
//! - `BoardSnapshot`: rectangular array of cells, indexed `[column][row]`
//! - `UnitOverlay`: the unit currently dropping, with its pivot
//! - `BoardView`: the cell lookup used by the renderer
//!
//! Field names match the JSON payload (`Width`, `Cells`, `Filled`, ...).

use crate::error::HexGridError;
use crate::layout::{CellAddress, GridOrigin, HexLayout};
use crate::render::draw_hex_grid;
use crate::surface::DrawingSurface;
use crate::visual::{CellState, CellVisual, VisualStyle};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Deserialize a list that may be sent as `null`
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A cell position in board coordinates (`X` = column, `Y` = row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Position> for CellAddress {
    fn from(p: Position) -> Self {
        CellAddress::new(p.x, p.y)
    }
}

impl From<CellAddress> for Position {
    fn from(a: CellAddress) -> Self {
        Position::new(a.column, a.row)
    }
}

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct BoardCell {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub filled: bool,
}

impl BoardCell {
    pub const fn new(x: i32, y: i32, filled: bool) -> Self {
        Self { x, y, filled }
    }

    pub fn address(&self) -> CellAddress {
        CellAddress::new(self.x, self.y)
    }
}

/// The unit currently in play, overlaid on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UnitOverlay {
    #[serde(default, deserialize_with = "nullable_vec")]
    pub members: Vec<Position>,
    #[serde(default)]
    pub pivot: Option<Position>,
}

impl UnitOverlay {
    pub fn new(members: Vec<Position>, pivot: Option<Position>) -> Self {
        Self { members, pivot }
    }

    pub fn occupies(&self, address: CellAddress) -> bool {
        self.members.iter().any(|m| CellAddress::from(*m) == address)
    }

    pub fn is_pivot(&self, address: CellAddress) -> bool {
        self.pivot.map(CellAddress::from) == Some(address)
    }
}

/// Rectangular board, stored column-major: `cells[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<Vec<BoardCell>>,
}

impl BoardSnapshot {
    /// An empty `width` x `height` board
    pub fn new(width: i32, height: i32) -> Result<Self, HexGridError> {
        if width <= 0 || height <= 0 {
            return Err(HexGridError::InvalidGrid {
                columns: width,
                rows: height,
            });
        }

        let cells = (0..width)
            .map(|x| (0..height).map(|y| BoardCell::new(x, y, false)).collect())
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// A board with the given cells marked filled. Positions off the board
    /// are ignored.
    pub fn with_filled(width: i32, height: i32, filled: &[CellAddress]) -> Result<Self, HexGridError> {
        let mut board = Self::new(width, height)?;
        for address in filled {
            board.set_filled(*address, true);
        }
        Ok(board)
    }

    pub fn cell(&self, address: CellAddress) -> Option<&BoardCell> {
        if !address.in_bounds(self.width, self.height) {
            return None;
        }
        self.cells
            .get(address.column as usize)?
            .get(address.row as usize)
    }

    fn cell_mut(&mut self, address: CellAddress) -> Option<&mut BoardCell> {
        if !address.in_bounds(self.width, self.height) {
            return None;
        }
        self.cells
            .get_mut(address.column as usize)?
            .get_mut(address.row as usize)
    }

    pub fn contains(&self, address: CellAddress) -> bool {
        self.cell(address).is_some()
    }

    pub fn is_filled(&self, address: CellAddress) -> bool {
        self.cell(address).is_some_and(|c| c.filled)
    }

    /// Returns false if the address is not on the board
    pub fn set_filled(&mut self, address: CellAddress, filled: bool) -> bool {
        match self.cell_mut(address) {
            Some(cell) => {
                cell.filled = filled;
                true
            }
            None => false,
        }
    }

    /// Replace the addressed cells with the given ones. Returns how many
    /// deltas landed on the board.
    pub fn apply_deltas(&mut self, deltas: &[BoardCell]) -> usize {
        let mut applied = 0;
        for delta in deltas {
            match self.cell_mut(delta.address()) {
                Some(cell) => {
                    *cell = *delta;
                    applied += 1;
                }
                None => warn!(x = delta.x, y = delta.y, "board delta outside the board"),
            }
        }
        applied
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.filled).count()
    }
}

/// A board plus optional unit overlay, resolved through a style table.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a BoardSnapshot,
    unit: Option<&'a UnitOverlay>,
    style: &'a VisualStyle,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a BoardSnapshot, style: &'a VisualStyle) -> Self {
        Self {
            board,
            unit: None,
            style,
        }
    }

    pub fn with_unit(mut self, unit: &'a UnitOverlay) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn board(&self) -> &BoardSnapshot {
        self.board
    }

    pub fn state(&self, address: CellAddress) -> Option<CellState> {
        if !self.board.contains(address) {
            return None;
        }

        if self.unit.is_some_and(|u| u.occupies(address)) {
            Some(CellState::Dropping)
        } else if self.board.is_filled(address) {
            Some(CellState::Filled)
        } else {
            Some(CellState::Empty)
        }
    }

    /// Visual for one cell; `None` off the board.
    ///
    /// The pivot marker is an overlay on whatever visual the cell already has.
    pub fn visual(&self, address: CellAddress) -> Option<CellVisual> {
        let visual = self.style.visual(self.state(address)?).clone();

        if self.unit.is_some_and(|u| u.is_pivot(address)) {
            Some(visual.with_marker(self.style.pivot_marker.clone()))
        } else {
            Some(visual)
        }
    }

    /// Render the whole board in one pass.
    pub fn draw<S>(&self, layout: &HexLayout, surface: &mut S, origin: GridOrigin) -> Result<(), HexGridError>
    where
        S: DrawingSurface + ?Sized,
    {
        let default_visual: &CellVisual = &self.style.empty;
        draw_hex_grid(
            layout,
            surface,
            origin,
            self.board.width,
            self.board.height,
            |address| self.visual(address),
            default_visual,
        )
    }
}
