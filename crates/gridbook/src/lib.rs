//! # gridbook
//!
//! An in-memory, multi-sheet spreadsheet data model that keeps user-entered
//! cell content synchronized with an external formula-evaluation engine.
//!
//! Every mutation flows through a single gateway ([`Spreadsheet`]): the
//! model is updated, the engine's view of every sheet is fully rebuilt,
//! the active sheet's display values are re-derived, and a snapshot of the
//! workbook is persisted. Named ranges, per-cell validation, column
//! filters, CSV interchange and pivot aggregation are layered on top of
//! the same synchronized state.
//!
//! ## Example
//!
//! ```rust
//! use gridbook::prelude::*;
//!
//! let mut sheet = Spreadsheet::open(LiteralEngine::new(), MemoryStore::new());
//!
//! sheet.edit_cell(0, 0, "1234.5");
//! sheet.set_format(0, 0, &FormatPatch::kind(FormatKind::Number));
//!
//! let cell = sheet.workbook().active_sheet().cell(0, 0).unwrap();
//! assert_eq!(cell.computed, "1,234.5");
//! ```

pub mod controller;
pub mod filter;
pub mod pivot;
pub mod prelude;
pub mod recompute;
pub mod store;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_engine;

pub use controller::{EditOutcome, RejectionNotice, Spreadsheet};
pub use filter::visible_rows;
pub use pivot::{build_pivot, Aggregation, PivotError, PivotGroup, PivotSpec};
pub use recompute::refresh_sheet;
pub use store::{MemoryStore, SnapshotStore};
pub use sync::resync;

// Re-export the model and engine boundary
pub use gridbook_core::{
    Align, Cell, CellAddress, CellFormat, FormatKind, FormatPatch, Grid, NamedRange,
    NamedRangeCollection, Sheet, ValidationRule, Workbook, DEFAULT_COLS, DEFAULT_ROWS,
};
pub use gridbook_engine::{EngineValue, FormulaEngine, LiteralEngine, SheetId};

pub use gridbook_csv::{CsvError, CsvResult};
