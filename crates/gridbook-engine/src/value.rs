//! Engine value variants

/// A value read back from the formula engine.
///
/// The formatting pipeline matches exhaustively over these variants:
/// composite results render as `"#ARRAY"`, errors as `"#ERR"`, and scalars
/// go through the cell's format type.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineValue {
    /// Empty cell
    Empty,
    /// Numeric scalar
    Number(f64),
    /// Text scalar
    Text(String),
    /// Boolean scalar
    Bool(bool),
    /// Composite/array result (e.g., a spilled range)
    Array,
    /// Evaluation error, carrying the engine's error code or message
    Error(String),
}

impl EngineValue {
    /// The plain text form of a scalar value.
    ///
    /// `Empty`, `Array` and `Error` render as the empty string; sentinel
    /// substitution for the latter two is the formatting pipeline's job.
    pub fn display_text(&self) -> String {
        match self {
            Self::Empty | Self::Array | Self::Error(_) => String::new(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
            Self::Bool(true) => "TRUE".into(),
            Self::Bool(false) => "FALSE".into(),
        }
    }

    /// The numeric form of a scalar value, if it has one.
    ///
    /// Text parses leniently (trimmed); booleans coerce to 1 and 0.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(true) => Some(1.0),
            Self::Bool(false) => Some(0.0),
            Self::Empty | Self::Array | Self::Error(_) => None,
        }
    }
}

/// Render a number without a trailing `.0` for whole values
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
