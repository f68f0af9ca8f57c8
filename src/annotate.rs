//! Annotating raw codes with their labels
//!
//! Consumers that render forms or enrich exported data usually hold raw codes
//! and want display text. Unknown codes are kept and shown as-is.

use log::debug;
use rustc_hash::FxHashSet;

use crate::config::LabelDisplayConfig;
use crate::dictionary::CodeLabelDictionary;

/// A code paired with its label, if the dictionary knows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedCode {
    pub code: String,
    pub label: Option<&'static str>,
}

impl AnnotatedCode {
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.label.is_some()
    }

    /// Render this code for display
    #[must_use]
    pub fn display(&self, config: &LabelDisplayConfig) -> String {
        match (self.label, config.include_code) {
            (Some(label), true) => format!("{}{}{}", self.code, config.separator, label),
            (Some(label), false) => label.to_string(),
            (None, _) if config.fallback_to_code => self.code.clone(),
            (None, _) => String::new(),
        }
    }
}

/// Annotate codes against the global dictionary with default settings
pub fn annotate<I, S>(codes: I) -> Vec<AnnotatedCode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    annotate_with(
        CodeLabelDictionary::global(),
        codes,
        &LabelDisplayConfig::default(),
    )
}

/// Annotate codes against a specific dictionary
pub fn annotate_with<I, S>(
    dictionary: &CodeLabelDictionary,
    codes: I,
    config: &LabelDisplayConfig,
) -> Vec<AnnotatedCode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let annotated: Vec<AnnotatedCode> = codes
        .into_iter()
        .map(|raw| {
            let code = config.normalize(raw.as_ref());
            let label = dictionary.get(&code);
            AnnotatedCode { code, label }
        })
        .collect();

    let unknown = annotated.iter().filter(|a| !a.is_known()).count();
    if unknown > 0 {
        debug!("{} of {} codes have no label", unknown, annotated.len());
    }

    annotated
}

/// Distinct codes without a label, in first-seen order
pub fn unknown_codes<I, S>(
    dictionary: &CodeLabelDictionary,
    codes: I,
    config: &LabelDisplayConfig,
) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = FxHashSet::default();
    let unknown: Vec<String> = codes
        .into_iter()
        .map(|raw| config.normalize(raw.as_ref()))
        .filter(|code| !dictionary.contains(code))
        .filter(|code| seen.insert(code.clone()))
        .collect();

    if !unknown.is_empty() {
        debug!("Unknown codes: {}", unknown.join(", "));
    }

    unknown
}
