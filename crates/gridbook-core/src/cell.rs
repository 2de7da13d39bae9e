//! Cell type and formatting

use crate::validation::ValidationRule;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single grid cell.
///
/// `input` is the raw string as typed by the user (formulas start with `=`)
/// and is the only field a mutation ever writes directly. `computed` is the
/// derived display string: it is a cache owned by the recompute pipeline and
/// can be rebuilt at any time from `input`, engine state and `format`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    /// Raw user input (literal value or `=`-prefixed formula)
    pub input: String,
    /// Formatted display value derived from the engine's computed value
    pub computed: String,
    /// Display formatting
    pub format: CellFormat,
    /// Optional validation rule gating edits to this cell
    pub validation: Option<ValidationRule>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            input: String::new(),
            computed: String::new(),
            format: CellFormat::default(),
            validation: None,
        }
    }
}

impl Cell {
    /// Check if the input is a formula (starts with `=`)
    pub fn is_formula(&self) -> bool {
        self.input.starts_with('=')
    }
}

/// Cell display formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellFormat {
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Horizontal alignment
    pub align: Align,
    /// Value rendering type
    pub kind: FormatKind,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            align: Align::Left,
            kind: FormatKind::Text,
        }
    }
}

impl CellFormat {
    /// Apply a partial update, leaving unset fields untouched
    pub fn apply(&mut self, patch: &FormatPatch) {
        if let Some(bold) = patch.bold {
            self.bold = bold;
        }
        if let Some(italic) = patch.italic {
            self.italic = italic;
        }
        if let Some(align) = patch.align {
            self.align = align;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}

/// Horizontal cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    Left,
    Center,
    Right,
}

/// How the recompute pipeline renders a cell's computed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormatKind {
    /// Pass the computed value through unchanged
    Text,
    /// Thousands-grouped number, when numerically parseable
    Number,
    /// Fixed-denomination currency, when numerically parseable
    Currency,
    /// `value * 100` with two decimals and a trailing `%`
    Percent,
}

/// A partial [`CellFormat`] update
///
/// Each `Some` field overwrites the corresponding format field; `None`
/// fields are left as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatPatch {
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub align: Option<Align>,
    pub kind: Option<FormatKind>,
}

impl FormatPatch {
    /// Patch setting only the bold flag
    pub fn bold(bold: bool) -> Self {
        Self {
            bold: Some(bold),
            ..Self::default()
        }
    }

    /// Patch setting only the italic flag
    pub fn italic(italic: bool) -> Self {
        Self {
            italic: Some(italic),
            ..Self::default()
        }
    }

    /// Patch setting only the alignment
    pub fn align(align: Align) -> Self {
        Self {
            align: Some(align),
            ..Self::default()
        }
    }

    /// Patch setting only the rendering type
    pub fn kind(kind: FormatKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell() {
        let cell = Cell::default();
        assert_eq!(cell.input, "");
        assert_eq!(cell.computed, "");
        assert!(!cell.format.bold);
        assert!(!cell.format.italic);
        assert_eq!(cell.format.align, Align::Left);
        assert_eq!(cell.format.kind, FormatKind::Text);
        assert!(cell.validation.is_none());
    }

    #[test]
    fn test_is_formula() {
        let mut cell = Cell::default();
        assert!(!cell.is_formula());
        cell.input = "=A1+1".into();
        assert!(cell.is_formula());
    }

    #[test]
    fn test_format_patch() {
        let mut fmt = CellFormat::default();
        fmt.apply(&FormatPatch::bold(true));
        fmt.apply(&FormatPatch::kind(FormatKind::Percent));
        assert!(fmt.bold);
        assert!(!fmt.italic);
        assert_eq!(fmt.kind, FormatKind::Percent);

        // Patching one field leaves the others alone
        fmt.apply(&FormatPatch::align(Align::Right));
        assert!(fmt.bold);
        assert_eq!(fmt.kind, FormatKind::Percent);
        assert_eq!(fmt.align, Align::Right);
    }
}
