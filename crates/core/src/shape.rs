//! Shape module - the four falling shape kinds and their rotation geometry
//!
//! Each kind carries its own hand-authored per-rotation-state offset table
//! and its own rotation validity predicate. The tables are genuinely
//! distinct; there is no shared rotation formula and no wall kicks.
//!
//! Rotation validity is checked against the *current* (pre-rotation)
//! footprint: because each table entry is a fixed translation of the
//! footprint along known axes, a rotation is safe exactly when the matching
//! left/right/down moves are.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Cell, Direction, ShapeColor, ShapeKind, CELL_SIZE, SPAWN_X};

/// Per-cell translation in grid units.
type CellDelta = (i32, i32);

/// One rotation step: a delta for each of the shape's 4 cells.
type RotationStep = [CellDelta; 4];

/// Spawn offsets in grid units from the spawn anchor (column 6, row 0).
///
/// Cell order is fixed per kind and the rotation tables below index into it.
const SQUARE_SPAWN: [CellDelta; 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];
/// [top, middle, bottom-left, bottom-right]
const L_SPAWN: [CellDelta; 4] = [(0, 0), (0, 1), (0, 2), (1, 2)];
/// [top, upper, lower, bottom] - the top cell starts one row off-screen
const LINE_SPAWN: [CellDelta; 4] = [(0, -1), (0, 0), (0, 1), (0, 2)];
/// [mid-top, left, mid-bottom, right]
const T_SPAWN: [CellDelta; 4] = [(0, 0), (-1, 1), (0, 1), (1, 1)];

/// L rotation deltas indexed by rotation state. The middle cell is the pivot.
///
/// ```text
/// state 0         state 1         state 2         state 3
/// [ ][X][ ]       [ ][ ][X]       [X][X][ ]       [ ][ ][ ]
/// [ ][X][ ]  -->  [X][X][X]  -->  [ ][X][ ]  -->  [X][X][X]  --> state 0
/// [ ][X][X]       [ ][ ][ ]       [ ][X][ ]       [X][ ][ ]
/// ```
const L_ROTATIONS: [RotationStep; 4] = [
    [(-1, 1), (0, 0), (1, -1), (0, -2)],
    [(1, 1), (0, 0), (-1, -1), (-2, 0)],
    [(1, -1), (0, 0), (-1, 1), (0, 2)],
    [(-1, -1), (0, 0), (1, 1), (2, 0)],
];

/// T rotation deltas indexed by rotation state. The mid-bottom cell is the
/// pivot.
///
/// ```text
/// state 0         state 1         state 2         state 3
/// [ ][X][ ]       [ ][X][ ]       [ ][ ][ ]       [ ][X][ ]
/// [X][X][X]  -->  [X][X][ ]  -->  [X][X][X]  -->  [ ][X][X]  --> state 0
/// [ ][ ][ ]       [ ][X][ ]       [ ][X][ ]       [ ][X][ ]
/// ```
const T_ROTATIONS: [RotationStep; 4] = [
    [(-1, 1), (1, 1), (0, 0), (-1, -1)],
    [(1, 1), (1, -1), (0, 0), (-1, 1)],
    [(1, -1), (-1, -1), (0, 0), (1, 1)],
    [(-1, -1), (-1, 1), (0, 0), (1, -1)],
];

/// Line rotation deltas. State 0 is vertical, state 1 horizontal; the lower
/// cell is the pivot.
///
/// ```text
/// [ ][X][ ][ ]     [ ][ ][ ][ ]
/// [ ][X][ ][ ] --> [ ][ ][ ][ ]
/// [ ][X][ ][ ] <-- [X][X][X][X]
/// [ ][X][ ][ ]     [ ][ ][ ][ ]
/// ```
const LINE_ROTATIONS: [RotationStep; 2] = [
    [(2, 2), (1, 1), (0, 0), (-1, -1)],
    [(-2, -2), (-1, -1), (0, 0), (1, 1)],
];

/// A falling shape: four cells, a color, and kind-specific rotation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    color: ShapeColor,
    cells: [Cell; 4],
    rotation_state: u8,
    active: bool,
}

impl Shape {
    /// Spawn a shape of the given kind at the top-center spawn point.
    pub fn spawn(kind: ShapeKind, color: ShapeColor) -> Self {
        let offsets = match kind {
            ShapeKind::Square => SQUARE_SPAWN,
            ShapeKind::L => L_SPAWN,
            ShapeKind::Line => LINE_SPAWN,
            ShapeKind::T => T_SPAWN,
        };
        let cells = offsets.map(|(dx, dy)| {
            Cell::new(color, SPAWN_X + dx * CELL_SIZE, dy * CELL_SIZE, false, true)
        });
        Self {
            kind,
            color,
            cells,
            rotation_state: 0,
            active: true,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> ShapeColor {
        self.color
    }

    /// The shape's 4 cells (renderer query).
    pub fn cells(&self) -> &[Cell; 4] {
        &self.cells
    }

    pub fn rotation_state(&self) -> u8 {
        self.rotation_state
    }

    /// Whether the shape is still under player control.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Move the whole shape by whole cells.
    pub fn translate(&mut self, dx_cells: i32, dy_cells: i32) {
        for cell in &mut self.cells {
            cell.translate(dx_cells, dy_cells);
        }
    }

    /// Apply this kind's offset table for the current rotation state and
    /// advance the state counter (wrapping). The square does not rotate.
    pub fn rotate(&mut self) {
        let step = match self.kind {
            ShapeKind::Square => return,
            ShapeKind::L => L_ROTATIONS[self.rotation_state as usize],
            ShapeKind::Line => LINE_ROTATIONS[self.rotation_state as usize],
            ShapeKind::T => T_ROTATIONS[self.rotation_state as usize],
        };
        for (cell, (dx, dy)) in self.cells.iter_mut().zip(step) {
            cell.translate(dx, dy);
        }
        self.rotation_state = (self.rotation_state + 1) % self.kind.rotation_states();
    }

    /// Whether the footprint after the next `rotate()` would stay clear,
    /// expressed per kind and state as a composite of the board's
    /// left/right/down checks on the current footprint.
    pub fn is_rotation_valid(&self, board: &Board) -> bool {
        let left = || board.is_valid_move(self, Direction::Left);
        let right = || board.is_valid_move(self, Direction::Right);
        let down = || board.is_valid_move(self, Direction::Down);

        match (self.kind, self.rotation_state) {
            (ShapeKind::Square, _) => true,
            (ShapeKind::L, 0) => left() && down() && right(),
            (ShapeKind::L, 1) => left() && down(),
            (ShapeKind::L, 2) => right() && down(),
            (ShapeKind::L, _) => true,
            (ShapeKind::T, 0) => down(),
            (ShapeKind::T, 1) => right(),
            (ShapeKind::T, 2) => true,
            (ShapeKind::T, _) => left(),
            (ShapeKind::Line, 0) => {
                // Going flat needs two clear columns to the right.
                if !right() {
                    return false;
                }
                let mut probe = self.clone();
                probe.translate(1, 0);
                board.is_valid_move(&probe, Direction::Right)
            }
            (ShapeKind::Line, _) => down(),
        }
    }

    /// Mark the shape and all its cells as settled board material.
    pub fn deactivate(&mut self) {
        for cell in &mut self.cells {
            cell.locked = true;
        }
        self.active = false;
    }

    /// Smallest occupied column.
    pub fn min_grid_x(&self) -> i32 {
        self.cells.iter().map(|c| c.grid_x()).fold(i32::MAX, i32::min)
    }

    /// Largest occupied column.
    pub fn max_grid_x(&self) -> i32 {
        self.cells.iter().map(|c| c.grid_x()).fold(i32::MIN, i32::max)
    }

    /// Smallest occupied row.
    pub fn min_grid_y(&self) -> i32 {
        self.cells.iter().map(|c| c.grid_y()).fold(i32::MAX, i32::min)
    }

    /// Largest occupied row.
    pub fn max_grid_y(&self) -> i32 {
        self.cells.iter().map(|c| c.grid_y()).fold(i32::MIN, i32::max)
    }

    /// Cells with no other shape cell below them in the same column.
    /// Ties are all included.
    pub fn bottom_cells(&self) -> ArrayVec<&Cell, 4> {
        self.cells
            .iter()
            .filter(|c| {
                self.cells
                    .iter()
                    .all(|o| o.grid_x() != c.grid_x() || o.grid_y() <= c.grid_y())
            })
            .collect()
    }

    /// Cells with no other shape cell to their left in the same row.
    pub fn left_cells(&self) -> ArrayVec<&Cell, 4> {
        self.cells
            .iter()
            .filter(|c| {
                self.cells
                    .iter()
                    .all(|o| o.grid_y() != c.grid_y() || o.grid_x() >= c.grid_x())
            })
            .collect()
    }

    /// Cells with no other shape cell to their right in the same row.
    pub fn right_cells(&self) -> ArrayVec<&Cell, 4> {
        self.cells
            .iter()
            .filter(|c| {
                self.cells
                    .iter()
                    .all(|o| o.grid_y() != c.grid_y() || o.grid_x() <= c.grid_x())
            })
            .collect()
    }
}
