//! Sheet-scoped named ranges
//!
//! A named range binds an identifier to a reference string (an A1 range or
//! a formula expression). Entries are forwarded verbatim to the formula
//! engine on every resynchronization; the collection here is the source of
//! truth and is what gets persisted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named range definition
///
/// `refers_to` can be:
/// - a single cell: `B1`
/// - a range of cells: `A1:D10`
/// - a formula expression: `=SUM(A1:A10)`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedRange {
    /// The identifier (e.g., "Sales", "TaxRate")
    pub name: String,
    /// The reference string, forwarded verbatim to the engine
    pub refers_to: String,
}

impl NamedRange {
    /// Create a new named range
    pub fn new(name: impl Into<String>, refers_to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            refers_to: refers_to.into(),
        }
    }

    /// Check if the reference is a formula (starts with `=`)
    pub fn is_formula(&self) -> bool {
        self.refers_to.starts_with('=')
    }
}

/// Per-sheet collection of named ranges, in definition order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedRangeCollection {
    entries: Vec<NamedRange>,
}

impl NamedRangeCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a named range, replacing any existing entry with the same name
    pub fn define(&mut self, range: NamedRange) {
        match self.entries.iter_mut().find(|e| e.name == range.name) {
            Some(existing) => *existing = range,
            None => self.entries.push(range),
        }
    }

    /// Look up a reference by name
    pub fn get(&self, name: &str) -> Option<&NamedRange> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Remove a named range by name
    pub fn remove(&mut self, name: &str) -> Option<NamedRange> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx))
    }

    /// Iterate over entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = &NamedRange> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut names = NamedRangeCollection::new();
        names.define(NamedRange::new("Sales", "A1:B10"));

        assert_eq!(names.len(), 1);
        assert_eq!(names.get("Sales").unwrap().refers_to, "A1:B10");
        assert!(names.get("sales").is_none()); // names are case-sensitive
    }

    #[test]
    fn test_define_replaces() {
        let mut names = NamedRangeCollection::new();
        names.define(NamedRange::new("Rate", "0.05"));
        names.define(NamedRange::new("Total", "=SUM(A1:A10)"));
        names.define(NamedRange::new("Rate", "B1"));

        assert_eq!(names.len(), 2);
        assert_eq!(names.get("Rate").unwrap().refers_to, "B1");

        // Definition order is preserved across replacement
        let order: Vec<_> = names.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["Rate", "Total"]);
    }

    #[test]
    fn test_is_formula() {
        assert!(NamedRange::new("Total", "=SUM(A1:A10)").is_formula());
        assert!(!NamedRange::new("Sales", "A1:B10").is_formula());
    }

    #[test]
    fn test_remove() {
        let mut names = NamedRangeCollection::new();
        names.define(NamedRange::new("Rate", "0.05"));

        assert!(names.remove("Rate").is_some());
        assert!(names.remove("Rate").is_none());
        assert!(names.is_empty());
    }
}
