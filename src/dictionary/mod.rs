//! Immutable code to label dictionary
//!
//! The dictionary maps short clinical variable codes (e.g. `PRBUN`) to
//! descriptive labels. It is built once and only read afterwards, so a single
//! instance can be shared by any number of threads without locking.

pub mod entry;
pub mod table;

use std::sync::LazyLock;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{LabelError, Result};
pub use entry::CodeLabelEntry;
pub use table::CLINICAL_LABELS;

static GLOBAL: LazyLock<CodeLabelDictionary> = LazyLock::new(|| {
    CodeLabelDictionary::from_entries(CLINICAL_LABELS.iter().copied())
        .unwrap_or_else(|e| panic!("built-in label table is malformed: {e}"))
});

/// Read-only mapping from codes to labels
#[derive(Debug, Clone, Default)]
pub struct CodeLabelDictionary {
    labels: FxHashMap<&'static str, &'static str>,
}

impl CodeLabelDictionary {
    /// The process-wide dictionary built from [`CLINICAL_LABELS`]
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Build a dictionary from code/label pairs
    ///
    /// Rejects empty codes, codes that are not uppercase alphanumeric, empty
    /// labels and duplicate codes.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let entries = entries.into_iter();
        let mut labels = FxHashMap::default();
        labels.reserve(entries.size_hint().0);

        for (code, label) in entries {
            if code.is_empty() {
                return Err(LabelError::EmptyCode);
            }
            if !is_valid_code(code) {
                return Err(LabelError::InvalidCode(code.to_string()));
            }
            if label.trim().is_empty() {
                return Err(LabelError::EmptyLabel(code.to_string()));
            }
            if labels.insert(code, label).is_some() {
                return Err(LabelError::DuplicateCode(code.to_string()));
            }
        }

        Ok(Self { labels })
    }

    /// Look up the label for `code`
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.labels.get(code).copied()
    }

    /// Look up the label for `code`, treating a miss as an error
    pub fn require(&self, code: &str) -> Result<&'static str> {
        self.get(code)
            .ok_or_else(|| LabelError::UnknownCode(code.to_string()))
    }

    /// Label for `code`, or the code itself when it has none
    #[must_use]
    pub fn label_or_code<'a>(&self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.labels.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// All defined codes, each once, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.labels.keys().copied()
    }

    /// All code/label pairs, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = CodeLabelEntry> + '_ {
        self.labels
            .iter()
            .map(|(&code, &label)| CodeLabelEntry::new(code, label))
    }

    /// All entries ordered by code
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<CodeLabelEntry> {
        self.entries().sorted_by_key(|entry| entry.code).collect()
    }
}

fn is_valid_code(code: &str) -> bool {
    code.bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}
