use crate::cli::support::{finder, json_stdout, write_config, write_gazetteer};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// City command tests
// ============================================================================

#[test]
fn test_city_pattern_match_human() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    finder(&dir)
        .args(["city", "Reggio nell Emilia", "-c", "IT", "--gazetteer"])
        .arg(&gazetteer)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reggio Emilia (RE) [IT] (weight 1.0000)",
        ));
}

#[test]
fn test_city_pattern_match_is_single_exact_hit() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "city", "Reggio nell Emilia", "--country", "it"])
        .arg("--gazetteer")
        .arg(&gazetteer)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["result"]["key"], "reggio emilia");
    assert_eq!(json["result"]["country_code"], "IT");
    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["weight"], 1.0);
}

#[test]
fn test_city_fallback_scoring() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "city", "Forly", "-c", "IT", "--gazetteer"])
        .arg(&gazetteer)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["result"]["name"], "Forlì");
    let weight = json["matches"][0]["weight"].as_f64().unwrap();
    assert!(weight < 1.0 && weight >= 0.89);
}

#[test]
fn test_city_bias_flag_rejects_weak_matches() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    finder(&dir)
        .args(["city", "Forly", "-c", "IT", "--bias", "0.95", "--gazetteer"])
        .arg(&gazetteer)
        .assert()
        .success()
        .stdout(predicate::str::contains("No match for city_name=\"Forly\""));
}

#[test]
fn test_city_country_is_guessed() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    finder(&dir)
        .args(["--format", "records", "city", "Lugano", "--gazetteer"])
        .arg(&gazetteer)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H finder=1 records=1 mode=city matches=1\n",
        ))
        .stdout(predicate::str::contains(
            "M 1 weight=1.0000 country=CH key=lugano name=Lugano area=TI",
        ));
}

#[test]
fn test_city_unknown_country_is_not_found() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "city", "Carpi", "-c", "XX", "--gazetteer"])
        .arg(&gazetteer)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert!(json["result"].is_null());
    assert_eq!(json["errors"]["city_name"], "Carpi");
}

#[test]
fn test_city_empty_name_is_usage_error() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());

    finder(&dir)
        .args(["city", " ", "-c", "IT", "--gazetteer"])
        .arg(&gazetteer)
        .assert()
        .code(2);
}

#[test]
fn test_city_missing_gazetteer_file_is_data_error() {
    let dir = tempdir().unwrap();

    finder(&dir)
        .args(["city", "Carpi", "--gazetteer", "missing.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("gazetteer not found"));
}

#[test]
fn test_city_without_gazetteer_is_usage_error() {
    let dir = tempdir().unwrap();

    finder(&dir)
        .args(["city", "Carpi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no gazetteer configured"));
}

#[test]
fn test_city_gazetteer_from_config() {
    let dir = tempdir().unwrap();
    let gazetteer = write_gazetteer(dir.path());
    let config = write_config(
        dir.path(),
        &format!("[city]\ngazetteer = \"{}\"\n", gazetteer.display()),
    );

    finder(&dir)
        .arg("--config")
        .arg(&config)
        .args(["city", "Reggio Emilia", "-c", "IT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reggio Emilia (RE) [IT]"));
}
