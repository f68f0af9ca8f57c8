//! Display configuration for annotated codes.

/// Configuration for turning codes into display strings
#[derive(Debug, Clone)]
pub struct LabelDisplayConfig {
    /// Trim whitespace and uppercase codes before lookup
    pub normalize_codes: bool,
    /// Prefix the label with the code itself (e.g. `AGE: Age`)
    pub include_code: bool,
    /// Show the raw code when no label exists; otherwise show an empty string
    pub fallback_to_code: bool,
    /// Separator placed between code and label when `include_code` is set
    pub separator: String,
}

impl Default for LabelDisplayConfig {
    fn default() -> Self {
        Self {
            normalize_codes: true,
            include_code: false,
            fallback_to_code: true,
            separator: ": ".to_string(),
        }
    }
}

impl LabelDisplayConfig {
    /// Config that renders `CODE<sep>label` pairs
    #[must_use]
    pub fn with_code(separator: impl Into<String>) -> Self {
        Self {
            include_code: true,
            separator: separator.into(),
            ..Default::default()
        }
    }

    /// Normalize a raw code according to this config
    #[must_use]
    pub fn normalize(&self, code: &str) -> String {
        if self.normalize_codes {
            code.trim().to_uppercase()
        } else {
            code.to_string()
        }
    }
}
