//! # gridbook-core
//!
//! Core data structures for the gridbook spreadsheet library.
//!
//! This crate provides the fundamental types used throughout gridbook:
//! - [`CellAddress`] - A1-style cell addressing
//! - [`Cell`], [`Grid`] - the rectangular cell grid
//! - [`ValidationRule`] - per-cell input validation
//! - [`NamedRange`] - sheet-scoped named references
//! - [`Workbook`], [`Sheet`] - the main document structures
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::Workbook;
//!
//! let mut wb = Workbook::new();
//! let sheet = wb.active_sheet_mut();
//! if let Some(cell) = sheet.grid_mut().cell_mut(0, 0) {
//!     cell.input = "=SUM(A2:A10)".into();
//! }
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod grid;
pub mod named_range;
pub mod sheet;
pub mod validation;
pub mod workbook;

// Re-exports for convenience
pub use address::CellAddress;
pub use cell::{Align, Cell, CellFormat, FormatKind, FormatPatch};
pub use error::{Error, Result};
pub use grid::Grid;
pub use named_range::{NamedRange, NamedRangeCollection};
pub use sheet::Sheet;
pub use validation::{is_acceptable, ValidationRule};
pub use workbook::Workbook;

/// Default number of rows in a freshly created grid
pub const DEFAULT_ROWS: usize = 30;

/// Default number of columns in a freshly created grid
pub const DEFAULT_COLS: usize = 12;
