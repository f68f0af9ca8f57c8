//! Built-in clinical variable labels.

/// Pre-operative risk variables and their display labels
///
/// Order carries no meaning; lookups go through `CodeLabelDictionary`.
pub const CLINICAL_LABELS: &[(&str, &str)] = &[
    ("ANESTHES", "Principal Anesthesia Technique"),
    ("PRPTT", "Pre-Operative PTT (partial thromboplastin time)"),
    ("PRINR", "Pre-Operative INR (international normalized ratio)"),
    ("AGE", "Age"),
    ("PRCREAT", "Pre-Operative Serum Creatinine"),
    ("FNSTATUS2", "Functional Status Prior to Surgery"),
    ("PRALBUM", "Pre-Operative Serum Albumin"),
    ("PRSGOT", "Pre-Operative SGOT (AST)"),
    ("BLEEDDIS", "Bleeding Disorders"),
    ("SEX", "Sex"),
    ("PRHCT", "Pre-Operative Hematocrit"),
    ("ASACLAS", "ASA Class (American Society of Anesthesiologists)"),
    ("PRBUN", "Pre-Operative BUN (blood urea nitrogen)"),
    ("DIABETES", "Diabetes (taking oral agents or insulin)"),
    ("WEIGHT", "Weight"),
    ("ETOH", ">2 Drinks/Day (alcohol use)"),
];
