use clinical_labels::{
    CodeLabelDictionary, LabelDisplayConfig, annotate, annotate_with, unknown_codes,
};

#[test]
fn test_unknown_code_falls_back_to_raw_code() {
    let config = LabelDisplayConfig::default();
    let rendered: Vec<String> = annotate(["DIABETES", "NONEXISTENT_CODE"])
        .iter()
        .map(|a| a.display(&config))
        .collect();

    assert_eq!(
        rendered,
        vec![
            "Diabetes (taking oral agents or insulin)".to_string(),
            "NONEXISTENT_CODE".to_string(),
        ]
    );
}

#[test]
fn test_annotate_against_custom_dictionary() {
    let dictionary =
        CodeLabelDictionary::from_entries([("HGT", "Height"), ("BMI", "Body Mass Index")])
            .unwrap();
    let config = LabelDisplayConfig::with_code("=");

    let rendered: Vec<String> = annotate_with(&dictionary, ["hgt", "AGE"], &config)
        .iter()
        .map(|a| a.display(&config))
        .collect();

    assert_eq!(rendered, vec!["HGT=Height".to_string(), "AGE".to_string()]);
}

#[test]
fn test_unknown_codes_report() {
    let dictionary = CodeLabelDictionary::global();
    let config = LabelDisplayConfig::default();
    let codes = vec!["SEX".to_string(), "XX".to_string(), "xx".to_string()];
    assert_eq!(
        unknown_codes(dictionary, &codes, &config),
        vec!["XX".to_string()]
    );
}
