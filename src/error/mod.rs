//! Error handling for the code label dictionary.

/// Errors raised when building or strictly querying a dictionary
///
/// A plain lookup miss is not an error: `CodeLabelDictionary::get` returns
/// `None`. These variants cover the strict lookup path and malformed tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// Requested code is not present in the table
    #[error("Unknown code: {0}")]
    UnknownCode(String),

    /// The same code appears more than once in a table literal
    #[error("Duplicate code in label table: {0}")]
    DuplicateCode(String),

    /// A table entry has an empty code
    #[error("Empty code in label table")]
    EmptyCode,

    /// A table entry has a code that is not uppercase alphanumeric
    #[error("Invalid code in label table: {0:?}")]
    InvalidCode(String),

    /// A table entry has an empty label
    #[error("Empty label for code: {0}")]
    EmptyLabel(String),
}

/// Result type for dictionary operations
pub type Result<T> = std::result::Result<T, LabelError>;
