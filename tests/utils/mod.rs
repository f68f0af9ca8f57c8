use clinical_labels::CodeLabelDictionary;
use rustc_hash::FxHashSet;

/// Codes every consumer of the clinical table relies on
pub const REQUIRED_CODES: &[&str] = &["ASACLAS", "SEX", "ETOH"];

/// Codes that must never resolve
pub const UNKNOWN_CODES: &[&str] = &["NONEXISTENT_CODE", "", "age", "PRBUN ", "BMI"];

/// Number of times `code` appears in the dictionary's keys
#[must_use]
pub fn key_count(dictionary: &CodeLabelDictionary, code: &str) -> usize {
    dictionary.keys().filter(|key| *key == code).count()
}

/// Distinct keys of a dictionary
#[must_use]
pub fn distinct_keys(dictionary: &CodeLabelDictionary) -> FxHashSet<&'static str> {
    dictionary.keys().collect()
}
