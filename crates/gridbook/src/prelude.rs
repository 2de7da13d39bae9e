//! Commonly used types, importable in one line
//!
//! ```rust
//! use gridbook::prelude::*;
//! ```

pub use crate::controller::{EditOutcome, RejectionNotice, Spreadsheet};
pub use crate::pivot::{Aggregation, PivotGroup, PivotSpec};
pub use crate::store::{MemoryStore, SnapshotStore};

pub use gridbook_core::{
    Align, Cell, CellAddress, CellFormat, FormatKind, FormatPatch, Grid, NamedRange, Sheet,
    ValidationRule, Workbook,
};
pub use gridbook_engine::{EngineValue, FormulaEngine, LiteralEngine, SheetId};
