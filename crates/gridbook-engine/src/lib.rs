//! # gridbook-engine
//!
//! The formula-engine boundary for gridbook.
//!
//! The evaluation engine itself (dependency resolution, recalculation
//! order, function library, cycle detection) is an external collaborator;
//! gridbook consumes it through the [`FormulaEngine`] trait as a
//! synchronous call-and-response black box. [`LiteralEngine`] is a minimal
//! built-in implementation that echoes literal content without evaluating
//! anything, suitable for tests and formula-free workbooks.

mod error;
mod literal;
mod value;

pub use error::NamedExpressionError;
pub use literal::LiteralEngine;
pub use value::EngineValue;

/// Opaque engine-side sheet identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(pub usize);

/// The formula evaluation engine, consumed as a black box.
///
/// The synchronization layer materializes the whole workbook through this
/// interface after every mutation: sheets are looked up or created by name,
/// content is pushed as a full overwrite of raw input strings, and named
/// expressions are registered best-effort.
pub trait FormulaEngine {
    /// Look up a sheet by name, creating it if absent
    fn create_or_get_sheet(&mut self, name: &str) -> SheetId;

    /// Replace a sheet's entire content with a grid of raw input strings
    fn set_sheet_content(&mut self, sheet: SheetId, rows: Vec<Vec<String>>);

    /// Register a named expression scoped to a sheet.
    ///
    /// Callers treat failures (duplicate name, malformed reference) as
    /// best-effort: the local registry stays authoritative and
    /// registration is re-attempted on the next full resynchronization.
    fn add_named_expression(
        &mut self,
        name: &str,
        reference: &str,
        sheet: SheetId,
    ) -> Result<(), NamedExpressionError>;

    /// Read the computed value at a cell position.
    ///
    /// Positions outside the pushed content read as [`EngineValue::Empty`].
    fn computed_value(&self, sheet: SheetId, row: usize, col: usize) -> EngineValue;
}
