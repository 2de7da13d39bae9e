//! Minimal literal-only engine implementation

use std::collections::HashSet;

use crate::error::NamedExpressionError;
use crate::value::EngineValue;
use crate::{FormulaEngine, SheetId};

/// A [`FormulaEngine`] that stores pushed content verbatim and evaluates
/// nothing.
///
/// Literals read back as typed scalars (numbers, TRUE/FALSE booleans, text);
/// formula inputs read back as their raw text. Useful for tests and for
/// driving the library without a real evaluation engine attached.
#[derive(Debug, Default)]
pub struct LiteralEngine {
    sheets: Vec<SheetData>,
}

#[derive(Debug, Default)]
struct SheetData {
    name: String,
    rows: Vec<Vec<String>>,
    names: HashSet<String>,
}

impl LiteralEngine {
    /// Create an empty engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of engine-side sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}

impl FormulaEngine for LiteralEngine {
    fn create_or_get_sheet(&mut self, name: &str) -> SheetId {
        if let Some(idx) = self.sheets.iter().position(|s| s.name == name) {
            return SheetId(idx);
        }
        self.sheets.push(SheetData {
            name: name.to_string(),
            ..SheetData::default()
        });
        SheetId(self.sheets.len() - 1)
    }

    fn set_sheet_content(&mut self, sheet: SheetId, rows: Vec<Vec<String>>) {
        if let Some(data) = self.sheets.get_mut(sheet.0) {
            data.rows = rows;
        }
    }

    fn add_named_expression(
        &mut self,
        name: &str,
        reference: &str,
        sheet: SheetId,
    ) -> Result<(), NamedExpressionError> {
        if name.is_empty() || reference.is_empty() {
            return Err(NamedExpressionError::InvalidExpression {
                name: name.to_string(),
                reason: "name and reference must be non-empty".into(),
            });
        }
        let Some(data) = self.sheets.get_mut(sheet.0) else {
            return Err(NamedExpressionError::InvalidExpression {
                name: name.to_string(),
                reason: "no such sheet".into(),
            });
        };
        if !data.names.insert(name.to_string()) {
            return Err(NamedExpressionError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn computed_value(&self, sheet: SheetId, row: usize, col: usize) -> EngineValue {
        let raw = self
            .sheets
            .get(sheet.0)
            .and_then(|s| s.rows.get(row))
            .and_then(|r| r.get(col));

        let Some(raw) = raw else {
            return EngineValue::Empty;
        };

        if raw.is_empty() {
            EngineValue::Empty
        } else if let Ok(n) = raw.trim().parse::<f64>() {
            EngineValue::Number(n)
        } else if raw.eq_ignore_ascii_case("true") {
            EngineValue::Bool(true)
        } else if raw.eq_ignore_ascii_case("false") {
            EngineValue::Bool(false)
        } else {
            EngineValue::Text(raw.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_or_get_is_idempotent() {
        let mut engine = LiteralEngine::new();
        let a = engine.create_or_get_sheet("Sheet1");
        let b = engine.create_or_get_sheet("Sheet2");
        let a2 = engine.create_or_get_sheet("Sheet1");

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(engine.sheet_count(), 2);
    }

    #[test]
    fn test_literal_values() {
        let mut engine = LiteralEngine::new();
        let id = engine.create_or_get_sheet("Sheet1");
        engine.set_sheet_content(
            id,
            vec![vec![
                "12.5".to_string(),
                "hello".to_string(),
                "TRUE".to_string(),
                "".to_string(),
            ]],
        );

        assert_eq!(engine.computed_value(id, 0, 0), EngineValue::Number(12.5));
        assert_eq!(
            engine.computed_value(id, 0, 1),
            EngineValue::Text("hello".into())
        );
        assert_eq!(engine.computed_value(id, 0, 2), EngineValue::Bool(true));
        assert_eq!(engine.computed_value(id, 0, 3), EngineValue::Empty);
        // Out of range reads are empty, not errors
        assert_eq!(engine.computed_value(id, 9, 9), EngineValue::Empty);
    }

    #[test]
    fn test_duplicate_named_expression() {
        let mut engine = LiteralEngine::new();
        let id = engine.create_or_get_sheet("Sheet1");

        assert!(engine.add_named_expression("Sales", "A1:A10", id).is_ok());
        assert!(engine.add_named_expression("Sales", "B1:B10", id).is_err());
        assert!(engine.add_named_expression("", "A1", id).is_err());
    }
}
