//! A1-style cell addressing

use std::fmt;

/// A cell address (e.g., "A1", "AB12")
///
/// Column letters use the standard bijective base-26 spreadsheet numbering
/// (A=0, Z=25, AA=26, ...). Rows are 0-based internally and 1-based in
/// display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: usize,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation.
    ///
    /// Accepts one or more letters followed by one or more digits,
    /// case-insensitive. Returns `None` on malformed input rather than an
    /// error, so callers can treat unparseable references as absent.
    ///
    /// # Examples
    /// ```
    /// use gridbook_core::CellAddress;
    ///
    /// assert_eq!(CellAddress::parse("A1"), Some(CellAddress::new(0, 0)));
    /// assert_eq!(CellAddress::parse("b2"), Some(CellAddress::new(1, 1)));
    /// assert_eq!(CellAddress::parse("A0"), None);
    /// assert_eq!(CellAddress::parse("12"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        let mut pos = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        // Need at least one letter and at least one digit, nothing else.
        if pos == 0 || pos == bytes.len() {
            return None;
        }
        if !bytes[pos..].iter().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let col = Self::letters_to_column(&s[..pos])?;
        let row: usize = s[pos..].parse().ok()?;
        if row == 0 {
            return None;
        }

        Some(Self::new(row - 1, col))
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    ///
    /// Returns `None` for empty or non-alphabetic input.
    pub fn letters_to_column(letters: &str) -> Option<usize> {
        if letters.is_empty() {
            return None;
        }

        let mut col: usize = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let digit = (c.to_ascii_uppercase() as usize) - ('A' as usize) + 1;
            col = col.checked_mul(26)?.checked_add(digit)?;
        }

        Some(col - 1)
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}
