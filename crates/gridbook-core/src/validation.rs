//! Per-cell input validation
//!
//! A validation rule gates what may be committed into a cell's `input`.
//! Formulas (inputs starting with `=`) always pass, since their computed
//! value is not known at commit time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell validation rule
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ValidationRule {
    /// Input must be one of the allowed values (or a formula)
    List {
        /// Allowed literal values, in display order
        allowed: Vec<String>,
    },
}

impl ValidationRule {
    /// Create a list rule from allowed values
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            allowed: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a proposed input passes this rule
    pub fn accepts(&self, input: &str) -> bool {
        if input.starts_with('=') {
            return true;
        }
        match self {
            Self::List { allowed } => allowed.iter().any(|v| v == input),
        }
    }
}

/// Check a proposed input against an optional rule.
///
/// An absent rule accepts everything.
pub fn is_acceptable(input: &str, rule: Option<&ValidationRule>) -> bool {
    match rule {
        Some(rule) => rule.accepts(input),
        None => true,
    }
}
