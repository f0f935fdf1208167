use crate::cli::support::{finder, json_stdout, write_gazetteer};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Country command tests
// ============================================================================

#[test]
fn test_country_by_code() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    finder(&dir)
        .args(["country", "ch", "--gazetteer"])
        .arg(&gazetteer)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CH Svizzera (weight 1.0000)"));
}

#[test]
fn test_country_misspelled_name() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "country", "Svizera", "--gazetteer"])
        .arg(&gazetteer)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["result"]["code"], "CH");
    assert!(json["result"].get("cities").is_none());
    assert!(json["matches"][0]["weight"].as_f64().unwrap() < 1.0);
}

#[test]
fn test_country_not_found_records() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    finder(&dir)
        .args(["--format", "records", "country", "Atlantide", "--gazetteer"])
        .arg(&gazetteer)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=country matches=0"))
        .stdout(predicate::str::contains("E country=Atlantide"));
}
