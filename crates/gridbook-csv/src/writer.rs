//! CSV writer

use crate::error::CsvResult;
use gridbook_core::Grid;

/// Serialize rows of raw field values to CSV text.
///
/// Every field is quote-wrapped with internal quotes doubled, rows are
/// joined by LF with no trailing newline.
pub fn write_rows(rows: &[Vec<String>]) -> CsvResult<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buf);

        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }

    let mut text = String::from_utf8_lossy(&buf).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Serialize a grid's raw inputs to CSV text.
///
/// Computed values are never exported.
pub fn write_grid(grid: &Grid) -> CsvResult<String> {
    write_rows(&grid.raw_inputs())
}
