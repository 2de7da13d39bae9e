//! Pivot aggregation
//!
//! Groups the rows of an A1 rectangle by the computed value of one column
//! and aggregates another. Both counts and sums are accumulated in a
//! single pass so a built table can answer either question; groups are
//! reported in first-encounter order, scanning the rectangle top to
//! bottom.

use gridbook_core::CellAddress;
use gridbook_engine::{EngineValue, FormulaEngine, SheetId};
use thiserror::Error;

/// How the value column is aggregated per group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Number of rows in the group, regardless of value content
    Count,
    /// Sum of the numerically parseable values in the group
    Sum,
}

/// A pivot request over one rectangular region
#[derive(Debug, Clone, PartialEq)]
pub struct PivotSpec {
    /// Source rectangle as an A1 range, e.g. `"A1:C50"`
    pub range: String,
    /// Key column, as an offset from the rectangle's left edge
    pub key_col: usize,
    /// Value column, as an offset from the rectangle's left edge
    pub value_col: usize,
    /// Aggregation applied to the value column
    pub agg: Aggregation,
}

/// One output group of a pivot
#[derive(Debug, Clone, PartialEq)]
pub struct PivotGroup {
    /// The group key (a computed display value, possibly empty)
    pub key: String,
    /// Rows that fell into this group
    pub count: u64,
    /// Sum of the group's numeric values
    pub sum: f64,
}

impl PivotGroup {
    /// The aggregate this group reports under the given mode
    pub fn value(&self, agg: Aggregation) -> f64 {
        match agg {
            Aggregation::Count => self.count as f64,
            Aggregation::Sum => self.sum,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PivotError {
    /// The range string is not two valid A1 addresses joined by a colon
    #[error("invalid pivot range {0:?}: expected a range like A1:C50")]
    InvalidRange(String),
}

/// Build a pivot table from the engine's computed values.
///
/// The rectangle is normalized so either corner order works. Column
/// offsets that land outside the rectangle or the sheet read as empty,
/// producing an empty-keyed group rather than an error. Non-numeric
/// values count toward `count` but contribute nothing to `sum`;
/// composite and error results are treated as empty.
pub fn build_pivot<E: FormulaEngine>(
    engine: &E,
    sheet: SheetId,
    spec: &PivotSpec,
) -> Result<Vec<PivotGroup>, PivotError> {
    let invalid = || PivotError::InvalidRange(spec.range.clone());

    let (start, end) = spec.range.split_once(':').ok_or_else(invalid)?;
    let start = CellAddress::parse(start).ok_or_else(invalid)?;
    let end = CellAddress::parse(end).ok_or_else(invalid)?;

    let top = start.row.min(end.row);
    let bottom = start.row.max(end.row);
    let left = start.col.min(end.col);
    let right = start.col.max(end.col);

    let mut groups: Vec<PivotGroup> = Vec::new();

    for row in top..=bottom {
        let key = scalar_text(rect_read(engine, sheet, row, left, right, spec.key_col));
        let value = rect_read(engine, sheet, row, left, right, spec.value_col);

        let idx = match groups.iter().position(|g| g.key == key) {
            Some(idx) => idx,
            None => {
                groups.push(PivotGroup {
                    key,
                    count: 0,
                    sum: 0.0,
                });
                groups.len() - 1
            }
        };

        groups[idx].count += 1;
        if let Some(n) = value.as_number() {
            groups[idx].sum += n;
        }
    }

    Ok(groups)
}

/// Read one cell of the rectangle by column offset.
///
/// Offsets past the rectangle's right edge never touch the sheet; they
/// read as empty, same as positions beyond the sheet itself.
fn rect_read<E: FormulaEngine>(
    engine: &E,
    sheet: SheetId,
    row: usize,
    left: usize,
    right: usize,
    offset: usize,
) -> EngineValue {
    match left.checked_add(offset) {
        Some(col) if col <= right => engine.computed_value(sheet, row, col),
        _ => EngineValue::Empty,
    }
}

fn scalar_text(value: EngineValue) -> String {
    match value {
        EngineValue::Array | EngineValue::Error(_) => String::new(),
        scalar => scalar.display_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_engine::StubEngine;
    use pretty_assertions::assert_eq;

    fn engine_with(rows: Vec<Vec<&str>>) -> (StubEngine, SheetId) {
        let mut engine = StubEngine::new();
        let id = engine.create_or_get_sheet("Sheet1");
        engine.set_sheet_content(
            id,
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        );
        (engine, id)
    }

    #[test]
    fn test_count_and_sum_per_group() {
        let (engine, id) = engine_with(vec![
            vec!["x", "10"],
            vec!["y", "5"],
            vec!["x", "7"],
        ]);

        let spec = PivotSpec {
            range: "A1:B3".into(),
            key_col: 0,
            value_col: 1,
            agg: Aggregation::Sum,
        };
        let groups = build_pivot(&engine, id, &spec).unwrap();

        assert_eq!(
            groups,
            vec![
                PivotGroup { key: "x".into(), count: 2, sum: 17.0 },
                PivotGroup { key: "y".into(), count: 1, sum: 5.0 },
            ]
        );
        assert_eq!(groups[0].value(Aggregation::Count), 2.0);
        assert_eq!(groups[0].value(Aggregation::Sum), 17.0);
    }

    #[test]
    fn test_groups_in_first_encounter_order() {
        let (engine, id) = engine_with(vec![
            vec!["b", "1"],
            vec!["a", "1"],
            vec!["b", "1"],
            vec!["c", "1"],
        ]);

        let spec = PivotSpec {
            range: "A1:B4".into(),
            key_col: 0,
            value_col: 1,
            agg: Aggregation::Count,
        };
        let groups = build_pivot(&engine, id, &spec).unwrap();
        let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reversed_corners_normalize() {
        let (engine, id) = engine_with(vec![vec!["x", "10"], vec!["x", "7"]]);

        let spec = PivotSpec {
            range: "B2:A1".into(),
            key_col: 0,
            value_col: 1,
            agg: Aggregation::Sum,
        };
        let groups = build_pivot(&engine, id, &spec).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sum, 17.0);
    }

    #[test]
    fn test_non_numeric_values_count_but_do_not_sum() {
        let (engine, id) = engine_with(vec![vec!["x", "10"], vec!["x", "n/a"]]);

        let spec = PivotSpec {
            range: "A1:B2".into(),
            key_col: 0,
            value_col: 1,
            agg: Aggregation::Sum,
        };
        let groups = build_pivot(&engine, id, &spec).unwrap();
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].sum, 10.0);
    }

    #[test]
    fn test_offsets_outside_rectangle_never_read_the_sheet() {
        // Column B holds data the A1:A2 rectangle excludes
        let (engine, id) = engine_with(vec![vec!["x", "100"], vec!["x", "200"]]);

        let spec = PivotSpec {
            range: "A1:A2".into(),
            key_col: 0,
            value_col: 1,
            agg: Aggregation::Sum,
        };
        let groups = build_pivot(&engine, id, &spec).unwrap();
        assert_eq!(groups, vec![PivotGroup { key: "x".into(), count: 2, sum: 0.0 }]);

        // Same for the key column: B's values must not become group keys
        let spec = PivotSpec {
            range: "A1:A2".into(),
            key_col: 1,
            value_col: 0,
            agg: Aggregation::Count,
        };
        let groups = build_pivot(&engine, id, &spec).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "");
    }

    #[test]
    fn test_out_of_range_columns_read_empty() {
        let (engine, id) = engine_with(vec![vec!["x", "10"]]);

        let spec = PivotSpec {
            range: "A1:B1".into(),
            key_col: 9,
            value_col: 9,
            agg: Aggregation::Count,
        };
        let groups = build_pivot(&engine, id, &spec).unwrap();
        assert_eq!(groups, vec![PivotGroup { key: "".into(), count: 1, sum: 0.0 }]);
    }

    #[test]
    fn test_composite_keys_group_as_empty() {
        let (mut engine, id) = engine_with(vec![vec!["", "1"], vec!["", "2"]]);
        engine.set_value(id, 0, 0, EngineValue::Array);
        engine.set_value(id, 1, 0, EngineValue::Error("#DIV/0!".into()));

        let spec = PivotSpec {
            range: "A1:B2".into(),
            key_col: 0,
            value_col: 1,
            agg: Aggregation::Sum,
        };
        let groups = build_pivot(&engine, id, &spec).unwrap();
        assert_eq!(groups, vec![PivotGroup { key: "".into(), count: 2, sum: 3.0 }]);
    }

    #[test]
    fn test_invalid_ranges() {
        let engine = StubEngine::new();
        for range in ["", "A1", "A1:", ":B2", "1A:B2", "A1:B2:C3"] {
            let spec = PivotSpec {
                range: range.into(),
                key_col: 0,
                value_col: 0,
                agg: Aggregation::Count,
            };
            assert_eq!(
                build_pivot(&engine, SheetId(0), &spec),
                Err(PivotError::InvalidRange(range.into())),
                "range {:?} should be rejected",
                range
            );
        }
    }
}
