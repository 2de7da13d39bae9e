//! The rectangular cell grid
//!
//! Every row has identical length at all times. Row/column insertion and
//! removal preserve that invariant by operating on every row in the same
//! call, and removal refuses to drop below one row or one column.

use crate::cell::Cell;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular grid of cells
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with the default dimensions
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a grid of default cells with the given dimensions.
    ///
    /// Dimensions are clamped to at least 1x1 so the grid is never empty.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows: (0..rows)
                .map(|_| (0..cols).map(|_| Cell::default()).collect())
                .collect(),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn col_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Get a cell by row and column indices
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a mutable cell by row and column indices
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Iterate over rows as cell slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Append a row of default cells matching the current width
    pub fn insert_row(&mut self) {
        let cols = self.col_count();
        self.rows.push((0..cols).map(|_| Cell::default()).collect());
    }

    /// Remove the last row.
    ///
    /// Refuses (returns `false`) if only one row remains.
    pub fn remove_row(&mut self) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        self.rows.pop();
        true
    }

    /// Append a default cell to every row
    pub fn insert_column(&mut self) {
        for row in &mut self.rows {
            row.push(Cell::default());
        }
    }

    /// Remove the last column from every row.
    ///
    /// Refuses (returns `false`) if only one column remains.
    pub fn remove_column(&mut self) -> bool {
        if self.col_count() <= 1 {
            return false;
        }
        for row in &mut self.rows {
            row.pop();
        }
        true
    }

    /// Grow the grid to at least the given dimensions, never shrinking.
    ///
    /// All newly added cells are defaults.
    pub fn ensure_size(&mut self, rows: usize, cols: usize) {
        let cols = cols.max(self.col_count());
        if cols > self.col_count() {
            for row in &mut self.rows {
                while row.len() < cols {
                    row.push(Cell::default());
                }
            }
        }
        while self.rows.len() < rows {
            self.rows.push((0..cols).map(|_| Cell::default()).collect());
        }
    }

    /// Snapshot of every cell's raw input, row by row.
    ///
    /// This is what gets pushed to the formula engine as sheet content.
    pub fn raw_inputs(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.input.clone()).collect())
            .collect()
    }

    /// Check that every row has the same, non-zero length.
    ///
    /// Holds by construction for grids built through this API; deserialized
    /// grids are checked against it before use.
    pub fn is_rectangular(&self) -> bool {
        let cols = self.col_count();
        cols > 0 && self.rows.iter().all(|r| r.len() == cols)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
