//! Single code/label pair.

use serde::Serialize;
use std::fmt;

/// One row of a label table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CodeLabelEntry {
    /// Short uppercase identifier, e.g. `ASACLAS`
    pub code: &'static str,
    /// Human-readable description
    pub label: &'static str,
}

impl CodeLabelEntry {
    #[must_use]
    pub const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}

impl From<(&'static str, &'static str)> for CodeLabelEntry {
    fn from((code, label): (&'static str, &'static str)) -> Self {
        Self::new(code, label)
    }
}

impl fmt::Display for CodeLabelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.code, self.label)
    }
}
