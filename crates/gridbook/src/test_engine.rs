//! A scriptable engine stub for tests.
//!
//! Records every call made through the boundary and lets tests plant
//! arbitrary computed values (arrays, errors) at specific positions,
//! which the literal engine cannot produce.

use std::collections::HashMap;

use gridbook_engine::{EngineValue, FormulaEngine, NamedExpressionError, SheetId};

#[derive(Debug, Default)]
pub struct StubEngine {
    sheets: Vec<String>,
    pub content: HashMap<usize, Vec<Vec<String>>>,
    overrides: HashMap<(usize, usize, usize), EngineValue>,
    pub named: Vec<(String, String, usize)>,
    pub content_pushes: usize,
    pub reject_named: bool,
}

impl StubEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Plant a computed value that shadows whatever content holds
    pub fn set_value(&mut self, sheet: SheetId, row: usize, col: usize, value: EngineValue) {
        self.overrides.insert((sheet.0, row, col), value);
    }
}

impl FormulaEngine for StubEngine {
    fn create_or_get_sheet(&mut self, name: &str) -> SheetId {
        if let Some(idx) = self.sheets.iter().position(|s| s == name) {
            return SheetId(idx);
        }
        self.sheets.push(name.to_string());
        SheetId(self.sheets.len() - 1)
    }

    fn set_sheet_content(&mut self, sheet: SheetId, rows: Vec<Vec<String>>) {
        self.content_pushes += 1;
        self.content.insert(sheet.0, rows);
    }

    fn add_named_expression(
        &mut self,
        name: &str,
        reference: &str,
        sheet: SheetId,
    ) -> Result<(), NamedExpressionError> {
        if self.reject_named {
            return Err(NamedExpressionError::DuplicateName(name.to_string()));
        }
        self.named
            .push((name.to_string(), reference.to_string(), sheet.0));
        Ok(())
    }

    fn computed_value(&self, sheet: SheetId, row: usize, col: usize) -> EngineValue {
        if let Some(value) = self.overrides.get(&(sheet.0, row, col)) {
            return value.clone();
        }
        let raw = self
            .content
            .get(&sheet.0)
            .and_then(|rows| rows.get(row))
            .and_then(|r| r.get(col));
        match raw {
            None => EngineValue::Empty,
            Some(s) if s.is_empty() => EngineValue::Empty,
            Some(s) => match s.trim().parse::<f64>() {
                Ok(n) => EngineValue::Number(n),
                Err(_) => EngineValue::Text(s.clone()),
            },
        }
    }
}
