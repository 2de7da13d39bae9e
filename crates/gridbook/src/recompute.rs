//! Recompute and formatting pipeline
//!
//! After synchronization, the active sheet's display values are re-derived
//! by reading back the engine's computed value at every position and
//! applying the cell's format type. The pass is a pure function of engine
//! state and grid formats: re-running it without an intervening mutation
//! yields identical display strings.

use gridbook_core::{FormatKind, Sheet};
use gridbook_engine::{EngineValue, FormulaEngine, SheetId};

/// Re-derive every cell's display value from the engine.
///
/// Only `computed` is written; raw inputs, formats and validation rules
/// are never touched here.
pub fn refresh_sheet<E: FormulaEngine>(engine: &E, sheet: &mut Sheet, id: SheetId) {
    let rows = sheet.grid().row_count();
    let cols = sheet.grid().col_count();

    for row in 0..rows {
        for col in 0..cols {
            let value = engine.computed_value(id, row, col);
            if let Some(cell) = sheet.grid_mut().cell_mut(row, col) {
                cell.computed = display_value(&value, cell.format.kind);
            }
        }
    }
}

/// Derive the display string for one engine value under a format type.
///
/// Composite results and errors render as fixed sentinels; scalars that
/// fail to parse numerically pass through unchanged under the numeric
/// format types.
pub fn display_value(value: &EngineValue, kind: FormatKind) -> String {
    match value {
        EngineValue::Array => "#ARRAY".to_string(),
        EngineValue::Error(_) => "#ERR".to_string(),
        scalar => {
            let raw = scalar.display_text();
            match kind {
                FormatKind::Text => raw,
                FormatKind::Number => match scalar.as_number() {
                    Some(n) => group_thousands(n),
                    None => raw,
                },
                FormatKind::Currency => match scalar.as_number() {
                    Some(n) => format!("\u{20B9}{}", grouped(n, Some(2))),
                    None => raw,
                },
                FormatKind::Percent => match scalar.as_number() {
                    Some(n) => format!("{:.2}%", n * 100.0),
                    None => raw,
                },
            }
        }
    }
}

/// Locale-style thousands grouping with at most three fraction digits
pub fn group_thousands(n: f64) -> String {
    grouped(n, None)
}

/// Format a number with comma thousands grouping.
///
/// `decimals` fixes the fraction width; `None` rounds to three digits and
/// trims trailing zeros.
fn grouped(n: f64, decimals: Option<usize>) -> String {
    let negative = n < 0.0;
    let abs = n.abs();

    let body = match decimals {
        Some(d) => format!("{:.*}", d, abs),
        None => {
            let rounded = format!("{:.3}", abs);
            rounded
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        }
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (body, None),
    };

    let mut out = String::new();
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(&frac);
    }

    if negative {
        format!("-{}", out)
    } else {
        out
    }
}
