//! Sheet type

use crate::cell::Cell;
use crate::grid::Grid;
use crate::named_range::NamedRangeCollection;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single named sheet: a rectangular grid plus its named ranges
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    name: String,
    grid: Grid,
    names: NamedRangeCollection,
}

impl Sheet {
    /// Create a new sheet with a default-sized empty grid
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grid: Grid::new(),
            names: NamedRangeCollection::new(),
        }
    }

    /// Create a sheet with an existing grid
    pub fn with_grid(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
            names: NamedRangeCollection::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the grid mutably
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Get a cell by row and column indices
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.cell(row, col)
    }

    /// Get a mutable cell by row and column indices
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.grid.cell_mut(row, col)
    }

    /// Get the named range collection
    pub fn names(&self) -> &NamedRangeCollection {
        &self.names
    }

    /// Get the named range collection mutably
    pub fn names_mut(&mut self) -> &mut NamedRangeCollection {
        &mut self.names
    }
}
