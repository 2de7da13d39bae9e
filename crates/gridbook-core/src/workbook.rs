//! Workbook type - the main document structure

use crate::error::{Error, Result};
use crate::sheet::Sheet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A workbook: an ordered sequence of sheets plus the active-sheet index.
///
/// Invariants: at least one sheet exists at all times, and the active index
/// is always within bounds. Deleting the last remaining sheet is refused.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Workbook {
    sheets: Vec<Sheet>,
    active: usize,
}

impl Workbook {
    /// Create a new workbook with one empty sheet
    pub fn new() -> Self {
        Self {
            sheets: vec![Sheet::new("Sheet1")],
            active: 0,
        }
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get the index of a sheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.name() == name)
    }

    /// Iterate over all sheets
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Get the active sheet index
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Get the active sheet
    pub fn active_sheet(&self) -> &Sheet {
        // The active index is kept in bounds by every mutation.
        &self.sheets[self.active]
    }

    /// Get the active sheet mutably
    pub fn active_sheet_mut(&mut self) -> &mut Sheet {
        &mut self.sheets[self.active]
    }

    /// Set the active sheet index.
    ///
    /// Returns `false` (no state change) if the index is out of bounds.
    pub fn set_active_sheet(&mut self, index: usize) -> bool {
        if index >= self.sheets.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Add a new empty sheet with a generated unique name and activate it.
    ///
    /// Returns the new sheet's index.
    pub fn add_sheet(&mut self) -> usize {
        let name = self.generate_sheet_name();
        let index = self.sheets.len();
        self.sheets.push(Sheet::new(name));
        self.active = index;
        index
    }

    /// Add a new empty sheet with the given name and activate it
    pub fn add_sheet_with_name(&mut self, name: &str) -> Result<usize> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if self.sheets.iter().any(|s| s.name() == name) {
            return Err(Error::DuplicateSheetName(name.into()));
        }
        let index = self.sheets.len();
        self.sheets.push(Sheet::new(name));
        self.active = index;
        Ok(index)
    }

    /// Rename a sheet.
    ///
    /// Returns `false` (no state change) if the index is out of bounds.
    pub fn rename_sheet(&mut self, index: usize, name: &str) -> bool {
        match self.sheets.get_mut(index) {
            Some(sheet) => {
                sheet.set_name(name);
                true
            }
            None => false,
        }
    }

    /// Delete a sheet.
    ///
    /// Refused (returns `false`, no state change) if it is the only sheet
    /// or the index is out of bounds. The active index is clamped back
    /// into range afterwards.
    pub fn delete_sheet(&mut self, index: usize) -> bool {
        if self.sheets.len() <= 1 || index >= self.sheets.len() {
            return false;
        }
        self.sheets.remove(index);
        self.active = self.active.min(self.sheets.len() - 1);
        true
    }

    /// Check the structural invariants.
    ///
    /// Holds by construction for workbooks built through this API; used to
    /// vet deserialized snapshots before trusting them.
    pub fn is_well_formed(&self) -> bool {
        !self.sheets.is_empty()
            && self.active < self.sheets.len()
            && self.sheets.iter().all(|s| s.grid().is_rectangular())
    }

    /// Generate a unique sheet name
    fn generate_sheet_name(&self) -> String {
        let mut n = self.sheets.len() + 1;
        loop {
            let name = format!("Sheet{}", n);
            if self.sheet_index(&name).is_none() {
                return name;
            }
            n += 1;
        }
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.active_sheet().name(), "Sheet1");
        assert!(wb.is_well_formed());
    }

    #[test]
    fn test_add_sheet_activates() {
        let mut wb = Workbook::new();
        let idx = wb.add_sheet();
        assert_eq!(idx, 1);
        assert_eq!(wb.active_index(), 1);
        assert_eq!(wb.active_sheet().name(), "Sheet2");
    }

    #[test]
    fn test_generated_names_are_unique() {
        let mut wb = Workbook::new();
        wb.add_sheet();
        wb.add_sheet();
        assert!(wb.delete_sheet(1)); // remove "Sheet2"
        wb.add_sheet();

        let names: Vec<_> = wb.sheets().map(|s| s.name().to_string()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), 3);
        assert_eq!(names, deduped);
    }

    #[test]
    fn test_add_sheet_with_name() {
        let mut wb = Workbook::new();
        assert!(wb.add_sheet_with_name("Data").is_ok());
        assert!(wb.add_sheet_with_name("Data").is_err());
        assert!(wb.add_sheet_with_name("").is_err());
    }

    #[test]
    fn test_delete_last_sheet_refused() {
        let mut wb = Workbook::new();
        assert!(!wb.delete_sheet(0));
        assert_eq!(wb.sheet_count(), 1);
    }

    #[test]
    fn test_delete_clamps_active() {
        let mut wb = Workbook::new();
        wb.add_sheet();
        wb.add_sheet();
        assert_eq!(wb.active_index(), 2);

        // Deleting the active (last) sheet clamps the index back into range
        assert!(wb.delete_sheet(2));
        assert_eq!(wb.active_index(), 1);
        assert!(wb.is_well_formed());
    }

    #[test]
    fn test_set_active_out_of_bounds() {
        let mut wb = Workbook::new();
        assert!(!wb.set_active_sheet(5));
        assert_eq!(wb.active_index(), 0);
    }

    #[test]
    fn test_rename_sheet() {
        let mut wb = Workbook::new();
        assert!(wb.rename_sheet(0, "Budget"));
        assert_eq!(wb.active_sheet().name(), "Budget");
        assert!(!wb.rename_sheet(4, "Nope"));
    }
}
