//! # gridbook-csv
//!
//! CSV reader and writer for gridbook.
//!
//! Both directions work on raw cell inputs only: export never evaluates
//! formulas, and import writes into `input` exclusively, leaving computed
//! values, formats and validation rules untouched.

mod error;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use reader::{apply_rows, parse};
pub use writer::{write_grid, write_rows};
