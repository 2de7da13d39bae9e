//! The mutation gateway
//!
//! Every state change to the workbook goes through [`Spreadsheet`], which
//! runs the same pipeline after each committed mutation: resynchronize the
//! engine with the whole workbook, re-derive the active sheet's display
//! values, persist a snapshot. Rejected or refused mutations leave all
//! state untouched and skip the pipeline.

use gridbook_core::{
    is_acceptable, FormatPatch, NamedRange, ValidationRule, Workbook,
};
use gridbook_csv::CsvResult;
use gridbook_engine::{FormulaEngine, SheetId};

use crate::pivot::{self, PivotError, PivotGroup, PivotSpec};
use crate::store::{self, SnapshotStore};
use crate::{filter, recompute, sync};

/// What became of an attempted cell edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The input was committed and the pipeline ran
    Committed,
    /// The input failed validation or addressed no cell; nothing changed
    Rejected,
}

/// Details of a rejected cell edit, delivered to rejection listeners
#[derive(Debug, Clone, PartialEq)]
pub struct RejectionNotice {
    pub row: usize,
    pub col: usize,
    /// The input as proposed, never committed
    pub input: String,
}

/// The spreadsheet session: workbook, engine and snapshot store in one.
///
/// Generic over the engine and the store so tests can script both.
pub struct Spreadsheet<E: FormulaEngine, S: SnapshotStore> {
    workbook: Workbook,
    engine: E,
    store: S,
    sheet_ids: Vec<SheetId>,
    rejection_listeners: Vec<Box<dyn FnMut(&RejectionNotice)>>,
}

impl<E: FormulaEngine, S: SnapshotStore> Spreadsheet<E, S> {
    /// Open a session, restoring the store's snapshot if it has a valid
    /// one and starting from a fresh workbook otherwise.
    pub fn open(engine: E, store: S) -> Self {
        let workbook = store
            .load()
            .and_then(|snapshot| store::decode(&snapshot))
            .unwrap_or_default();

        let mut session = Self {
            workbook,
            engine,
            store,
            sheet_ids: Vec::new(),
            rejection_listeners: Vec::new(),
        };
        session.refresh();
        session
    }

    /// Read access to the workbook
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// Register a callback invoked whenever a cell edit is rejected
    pub fn on_rejection(&mut self, listener: impl FnMut(&RejectionNotice) + 'static) {
        self.rejection_listeners.push(Box::new(listener));
    }

    /// Commit an input into a cell of the active sheet.
    ///
    /// The input is checked against the cell's validation rule before
    /// anything is written; a rejection notifies listeners and leaves the
    /// cell (and the engine, and the store) exactly as they were. Editing
    /// a position outside the grid is likewise a rejection.
    pub fn edit_cell(&mut self, row: usize, col: usize, input: &str) -> EditOutcome {
        let acceptable = match self.workbook.active_sheet().cell(row, col) {
            Some(cell) => is_acceptable(input, cell.validation.as_ref()),
            None => false,
        };

        if !acceptable {
            let notice = RejectionNotice {
                row,
                col,
                input: input.to_string(),
            };
            for listener in &mut self.rejection_listeners {
                listener(&notice);
            }
            return EditOutcome::Rejected;
        }

        if let Some(cell) = self.workbook.active_sheet_mut().cell_mut(row, col) {
            cell.input = input.to_string();
        }
        self.refresh();
        EditOutcome::Committed
    }

    /// Apply a format patch to a cell of the active sheet.
    ///
    /// Unset patch fields leave the corresponding attributes alone.
    pub fn set_format(&mut self, row: usize, col: usize, patch: &FormatPatch) -> bool {
        match self.workbook.active_sheet_mut().cell_mut(row, col) {
            Some(cell) => {
                cell.format.apply(patch);
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Attach or clear a cell's validation rule.
    ///
    /// The existing input is not re-checked; the rule gates future edits.
    pub fn set_validation(
        &mut self,
        row: usize,
        col: usize,
        rule: Option<ValidationRule>,
    ) -> bool {
        match self.workbook.active_sheet_mut().cell_mut(row, col) {
            Some(cell) => {
                cell.validation = rule;
                self.refresh();
                true
            }
            None => false,
        }
    }

    /// Append a row to the active sheet's grid
    pub fn insert_row(&mut self) {
        self.workbook.active_sheet_mut().grid_mut().insert_row();
        self.refresh();
    }

    /// Remove the active sheet's last row; refused at one row
    pub fn remove_row(&mut self) -> bool {
        let removed = self.workbook.active_sheet_mut().grid_mut().remove_row();
        if removed {
            self.refresh();
        }
        removed
    }

    /// Append a column to the active sheet's grid
    pub fn insert_column(&mut self) {
        self.workbook.active_sheet_mut().grid_mut().insert_column();
        self.refresh();
    }

    /// Remove the active sheet's last column; refused at one column
    pub fn remove_column(&mut self) -> bool {
        let removed = self.workbook.active_sheet_mut().grid_mut().remove_column();
        if removed {
            self.refresh();
        }
        removed
    }

    /// Add a new empty sheet with a generated name and activate it
    pub fn add_sheet(&mut self) -> usize {
        let index = self.workbook.add_sheet();
        self.refresh();
        index
    }

    /// Add a new empty sheet with the given name and activate it.
    ///
    /// Fails on an empty or duplicate name, leaving the workbook unchanged.
    pub fn add_sheet_with_name(&mut self, name: &str) -> gridbook_core::Result<usize> {
        let index = self.workbook.add_sheet_with_name(name)?;
        self.refresh();
        Ok(index)
    }

    /// Delete a sheet; refused for the last remaining sheet
    pub fn delete_sheet(&mut self, index: usize) -> bool {
        let deleted = self.workbook.delete_sheet(index);
        if deleted {
            self.refresh();
        }
        deleted
    }

    /// Rename a sheet
    pub fn rename_sheet(&mut self, index: usize, name: &str) -> bool {
        let renamed = self.workbook.rename_sheet(index, name);
        if renamed {
            self.refresh();
        }
        renamed
    }

    /// Switch the active sheet
    pub fn set_active_sheet(&mut self, index: usize) -> bool {
        let switched = self.workbook.set_active_sheet(index);
        if switched {
            self.refresh();
        }
        switched
    }

    /// Define (or redefine) a named range on the active sheet
    pub fn define_name(&mut self, name: &str, refers_to: &str) {
        self.workbook
            .active_sheet_mut()
            .names_mut()
            .define(NamedRange::new(name, refers_to));
        self.refresh();
    }

    /// Export the active sheet's raw inputs as CSV text
    pub fn export_csv(&self) -> CsvResult<String> {
        gridbook_csv::write_grid(self.workbook.active_sheet().grid())
    }

    /// Import CSV text into the active sheet, overwriting raw inputs from
    /// the top-left and growing the grid as needed.
    pub fn import_csv(&mut self, text: &str) -> CsvResult<()> {
        let rows = gridbook_csv::parse(text)?;
        gridbook_csv::apply_rows(self.workbook.active_sheet_mut().grid_mut(), &rows);
        self.refresh();
        Ok(())
    }

    /// Build a pivot table over the active sheet's computed values
    pub fn pivot(&self, spec: &PivotSpec) -> Result<Vec<PivotGroup>, PivotError> {
        let id = self
            .sheet_ids
            .get(self.workbook.active_index())
            .copied()
            .unwrap_or(SheetId(0));
        pivot::build_pivot(&self.engine, id, spec)
    }

    /// Rows of the active sheet that survive the given per-column filters
    pub fn visible_rows(&self, filters: &[String]) -> Vec<usize> {
        filter::visible_rows(self.workbook.active_sheet(), filters)
    }

    /// Run the post-mutation pipeline: resync, recompute, persist.
    fn refresh(&mut self) {
        self.sheet_ids = sync::resync(&mut self.engine, &self.workbook);

        let active = self.workbook.active_index();
        if let Some(&id) = self.sheet_ids.get(active) {
            if let Some(sheet) = self.workbook.sheet_mut(active) {
                recompute::refresh_sheet(&self.engine, sheet, id);
            }
        }

        if let Some(snapshot) = store::encode(&self.workbook) {
            self.store.save(&snapshot);
        }
    }
}
