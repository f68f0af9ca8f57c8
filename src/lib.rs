//! A Rust library exposing clinical variable codes and their human-readable
//! labels as a process-wide, read-only dictionary.

pub mod annotate;
pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;

// Re-export the most common types for easier use
pub use annotate::{AnnotatedCode, annotate, annotate_with, unknown_codes};
pub use config::LabelDisplayConfig;
pub use dictionary::{CLINICAL_LABELS, CodeLabelDictionary, CodeLabelEntry};
pub use error::{LabelError, Result};

/// Look up a label in the global dictionary
#[must_use]
pub fn label(code: &str) -> Option<&'static str> {
    CodeLabelDictionary::global().get(code)
}
