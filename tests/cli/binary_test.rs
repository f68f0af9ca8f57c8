use std::process::{Command, Output};

fn clinical_labels(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clinical-labels"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

#[test]
fn test_binary_labels_codes() {
    let output = clinical_labels(&["PRBUN", "XYZ"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "PRBUN\tPre-Operative BUN (blood urea nitrogen)\nXYZ\tXYZ\n"
    );
}

#[test]
fn test_binary_strict_exits_non_zero() {
    let output = clinical_labels(&["--strict", "AGE", "XYZ"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No label for 'XYZ'"));
}

#[test]
fn test_binary_json_dump() {
    let output = clinical_labels(&["--json"]);
    assert!(output.status.success());

    let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.len(), 16);
    assert!(
        entries
            .iter()
            .any(|e| e["code"] == "ETOH" && e["label"] == ">2 Drinks/Day (alcohol use)")
    );
}

#[test]
fn test_binary_rejects_unknown_flag() {
    let output = clinical_labels(&["--jsn", "AGE"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
