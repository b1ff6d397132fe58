// crates/bishop-core/src/grid/board.rs

use crate::grid::pos::Position;
use crate::grid::{COLS, ROWS};

/// Visit counters, row-major. Counters only grow until the grid is cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[u32; COLS]; ROWS],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[0; COLS]; ROWS],
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cells = [[0; COLS]; ROWS];
    }

    #[inline]
    pub fn visit(&mut self, p: Position) {
        self.cells[p.row()][p.col()] += 1;
    }

    #[inline]
    pub fn count(&self, p: Position) -> u32 {
        self.cells[p.row()][p.col()]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32; COLS]> {
        self.cells.iter()
    }

    pub fn total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }

    pub fn max_count(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
