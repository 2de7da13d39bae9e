//! CSV reader

use crate::error::CsvResult;
use gridbook_core::Grid;

/// Parse CSV text into rows of fields.
///
/// Line endings are normalized first (`\r\n` and bare `\r` become `\n`),
/// then the text is parsed with a quote-aware tokenizer: inside a quoted
/// field a doubled quote is a literal quote, and quoted fields may span
/// lines. Rows may have differing lengths.
///
/// Fully blank lines are skipped rather than producing a one-empty-field
/// row; an empty row survives a round trip as `""` since export quotes
/// every field.
pub fn parse(text: &str) -> CsvResult<Vec<Vec<String>>> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(normalized.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Write parsed rows into a grid's raw inputs.
///
/// The grid is expanded (never shrunk) so that it covers the imported row
/// count and the widest imported row; newly added cells are defaults.
/// Values land in `input` only — cells outside the imported range and all
/// formats and validation rules are left untouched.
pub fn apply_rows(grid: &mut Grid, rows: &[Vec<String>]) {
    let want_rows = rows.len();
    let want_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    grid.ensure_size(want_rows, want_cols);

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if let Some(cell) = grid.cell_mut(r, c) {
                cell.input = value.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_grid;
    use gridbook_core::{FormatKind, ValidationRule};

    #[test]
    fn test_simple_parse() {
        let rows = parse("a,b\n1,2").unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["1".to_string(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn test_quoted_fields() {
        let rows = parse("\"a,b\",\"say \"\"hi\"\"\"").unwrap();
        assert_eq!(rows, vec![vec!["a,b".to_string(), "say \"hi\"".to_string()]]);
    }

    #[test]
    fn test_line_ending_normalization() {
        let rows = parse("a\r\nb\rc").unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string()],
                vec!["b".to_string()],
                vec!["c".to_string()],
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let rows = parse("a\n\nb").unwrap();
        assert_eq!(rows, vec![vec!["a".to_string()], vec!["b".to_string()]]);

        // A quoted empty field is a row, not a blank line
        let rows = parse("a\n\"\"\nb").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["".to_string()]);
    }

    #[test]
    fn test_ragged_rows() {
        let rows = parse("a,b,c\nd").unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn test_apply_expands_never_shrinks() {
        let mut grid = Grid::with_size(2, 2);
        grid.cell_mut(1, 1).unwrap().input = "keep".into();

        apply_rows(
            &mut grid,
            &[vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
            ]],
        );

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.cell(0, 2).unwrap().input, "c");
        // Cells outside the imported range are untouched
        assert_eq!(grid.cell(1, 1).unwrap().input, "keep");
    }

    #[test]
    fn test_apply_preserves_formats_and_validation() {
        let mut grid = Grid::with_size(1, 1);
        let cell = grid.cell_mut(0, 0).unwrap();
        cell.format.kind = FormatKind::Percent;
        cell.validation = Some(ValidationRule::list(["a", "b"]));

        apply_rows(&mut grid, &[vec!["0.5".to_string()]]);

        let cell = grid.cell(0, 0).unwrap();
        assert_eq!(cell.input, "0.5");
        assert_eq!(cell.format.kind, FormatKind::Percent);
        assert!(cell.validation.is_some());
        assert_eq!(cell.computed, "");
    }

    #[test]
    fn test_round_trip() {
        let mut grid = Grid::with_size(2, 3);
        grid.cell_mut(0, 0).unwrap().input = "plain".into();
        grid.cell_mut(0, 1).unwrap().input = "with,comma".into();
        grid.cell_mut(0, 2).unwrap().input = "with \"quotes\"".into();
        grid.cell_mut(1, 0).unwrap().input = "two\nlines".into();
        grid.cell_mut(1, 1).unwrap().input = "=SUM(A1:A2)".into();

        let text = write_grid(&grid).unwrap();
        let mut restored = Grid::with_size(2, 3);
        apply_rows(&mut restored, &parse(&text).unwrap());

        assert_eq!(restored.raw_inputs(), grid.raw_inputs());
    }
}
