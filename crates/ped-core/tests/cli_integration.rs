//! End-to-end CLI tests: output rendering and stable exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const FAMILY: &str = "\
name,mother,father,trait
Harry,Lily,James,
James,,,1
Lily,,,0
";

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn text_output_renders_all_people() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir, "family.csv", FAMILY);

    Command::cargo_bin("ped-core")
        .unwrap()
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Harry:"))
        .stdout(predicate::str::contains("  Gene:"))
        .stdout(predicate::str::contains("    2: 0.0092"))
        .stdout(predicate::str::contains("    True: 0.2665"))
        .stdout(predicate::str::contains("James:"))
        .stdout(predicate::str::contains("Lily:"));
}

#[test]
fn json_output_parses_and_is_versioned() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir, "family.csv", FAMILY);

    let output = Command::cargo_bin("ped-core")
        .unwrap()
        .arg(&data)
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["schema_version"], "1.0.0");
    assert_eq!(value["people"].as_array().unwrap().len(), 3);
    let harry = &value["people"][0];
    assert_eq!(harry["name"], "Harry");
    assert!((harry["trait"]["present"].as_f64().unwrap() - 0.266511245197).abs() < 1e-9);
}

#[test]
fn custom_priors_file_changes_the_posterior() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir, "lone.csv", "name,mother,father,trait\nHarry,,,\n");
    // A uniform gene prior, otherwise the default tables.
    let priors = write_fixture(
        &dir,
        "priors.json",
        r#"{
            "gene": {"zero": 0.4, "one": 0.3, "two": 0.3},
            "trait_given_gene": {
                "zero": {"present": 0.01, "absent": 0.99},
                "one": {"present": 0.56, "absent": 0.44},
                "two": {"present": 0.65, "absent": 0.35}
            },
            "mutation_rate": 0.01
        }"#,
    );

    Command::cargo_bin("ped-core")
        .unwrap()
        .arg(&data)
        .args(["--priors", priors.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("    0: 0.4000"))
        .stdout(predicate::str::contains("    1: 0.3000"));
}

#[test]
fn single_parent_record_exits_with_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(
        &dir,
        "broken.csv",
        "name,mother,father,trait\nHarry,Lily,,\nLily,,,0\n",
    );

    Command::cargo_bin("ped-core")
        .unwrap()
        .arg(&data)
        .assert()
        .failure()
        .code(11)
        .stderr(predicate::str::contains("exactly one parent"));
}

#[test]
fn missing_data_file_exits_with_io_error() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("ped-core")
        .unwrap()
        .arg(dir.path().join("no-such-file.csv"))
        .assert()
        .failure()
        .code(13);
}

#[test]
fn malformed_priors_exit_with_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_fixture(&dir, "lone.csv", "name,mother,father,trait\nHarry,,,\n");
    let priors = write_fixture(&dir, "priors.json", "{ not json");

    Command::cargo_bin("ped-core")
        .unwrap()
        .arg(&data)
        .args(["--priors", priors.to_str().unwrap()])
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("invalid priors file"));
}
