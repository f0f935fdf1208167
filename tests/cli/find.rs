use crate::cli::support::{
    finder, json_stderr, json_stdout, write_candidates, write_config, write_database,
};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Find command tests
// ============================================================================

#[test]
fn test_find_team_human() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    finder(&dir)
        .args(["find", "team", "name=A.S.D. Nuoto Carpi", "--candidates"])
        .arg(&candidates)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id=2 city_id=3 name=Nuoto Carpi (weight 1.0000)",
        ))
        .stdout(predicate::str::contains("Alternatives:"))
        .stdout(predicate::str::contains("id=3 city_id=9 name=Nuoto Capri"));
}

#[test]
fn test_find_team_quiet_omits_alternatives() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    finder(&dir)
        .args(["--quiet", "find", "team", "name=A.S.D. Nuoto Carpi", "--candidates"])
        .arg(&candidates)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alternatives:").not());
}

#[test]
fn test_find_team_json_is_ranked() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "find", "team", "name=A.S.D. Nuoto Carpi"])
        .arg("--candidates")
        .arg(&candidates)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["result"]["id"], 2);
    assert_eq!(json["result"]["name"], "Nuoto Carpi");
    let matches = json["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["weight"], 1.0);
    assert_eq!(matches[1]["candidate"]["id"], 3);
    assert!(matches[1]["weight"].as_f64().unwrap() < 1.0);
    assert!(json.get("errors").is_none());
}

#[test]
fn test_find_records_format() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    finder(&dir)
        .args(["--format", "records", "find", "team", "name=A.S.D. Nuoto Carpi"])
        .arg("--candidates")
        .arg(&candidates)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H finder=1 records=1 mode=find entity=team matches=2\n",
        ))
        .stdout(predicate::str::contains(
            "M 1 weight=1.0000 id=2 city_id=3 name=\"Nuoto Carpi\"",
        ))
        .stdout(predicate::str::contains("M 2 weight="));
}

#[test]
fn test_find_swimmer_filters_by_year() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let output = finder(&dir)
        .args([
            "--format",
            "json",
            "find",
            "swimmer",
            "complete_name=ROSSI Mario",
            "year_of_birth=1971",
        ])
        .arg("--candidates")
        .arg(&candidates)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["result"]["id"], 11);
    assert_eq!(json["matches"].as_array().unwrap().len(), 1);
}

#[test]
fn test_find_unknown_key_does_not_change_result() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let run = |extra: &[&str]| {
        let output = finder(&dir)
            .args(["--format", "json", "find", "team", "name=Nuoto Carpi"])
            .args(extra)
            .arg("--candidates")
            .arg(&candidates)
            .output()
            .unwrap();
        assert!(output.status.success());
        json_stdout(&output)
    };

    assert_eq!(run(&[]), run(&["colour=red"]));
}

#[test]
fn test_find_malformed_value_of_unsupported_key_is_ignored() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let run = |extra: &[&str]| {
        finder(&dir)
            .args(["find", "team", "name=Nuoto Carpi"])
            .args(extra)
            .arg("--candidates")
            .arg(&candidates)
            .output()
            .unwrap()
    };

    let plain = run(&[]);
    let extra = run(&["year_of_birth=n/a"]);
    assert!(extra.status.success());
    assert_eq!(plain.stdout, extra.stdout);
}

#[test]
fn test_find_integer_filter_given_as_text() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "find", "team", "name=Nuoto Carpy", "city_id=3"])
        .arg("--candidates")
        .arg(&candidates)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["result"]["id"], 2);
    assert!(json.get("errors").is_none());
}

#[test]
fn test_find_not_found_is_data() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "find", "swimmer", "complete_name=Zqwxy1"])
        .arg("--candidates")
        .arg(&candidates)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert!(json["result"].is_null());
    assert_eq!(json["matches"].as_array().unwrap().len(), 0);
    assert_eq!(json["errors"]["complete_name"], "Zqwxy1");

    finder(&dir)
        .args(["find", "swimmer", "complete_name=Zqwxy1", "--candidates"])
        .arg(&candidates)
        .assert()
        .success()
        .stdout(predicate::str::contains("No match for complete_name=\"Zqwxy1\""));

    finder(&dir)
        .args(["--format", "records", "find", "swimmer", "complete_name=Zqwxy1"])
        .arg("--candidates")
        .arg(&candidates)
        .assert()
        .success()
        .stdout(predicate::str::contains("matches=0"))
        .stdout(predicate::str::contains("E complete_name=Zqwxy1"));
}

#[test]
fn test_find_bias_flag_narrows_matches() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "find", "team", "name=A.S.D. Nuoto Carpi"])
        .args(["--bias", "0.99", "--candidates"])
        .arg(&candidates)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["matches"].as_array().unwrap().len(), 1);
}

#[test]
fn test_find_bias_out_of_range_is_rejected() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    finder(&dir)
        .args(["find", "team", "name=Carpi", "--bias", "1.5", "--candidates"])
        .arg(&candidates)
        .assert()
        .code(2);
}

#[test]
fn test_find_unknown_entity_is_usage_error() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "find", "lane", "name=4"])
        .arg("--candidates")
        .arg(&candidates)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json = json_stderr(&output);
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "unsupported");
}

#[test]
fn test_find_without_target_field_is_usage_error() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    finder(&dir)
        .args(["find", "team", "city_id=3", "--candidates"])
        .arg(&candidates)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("name"));
}

#[test]
fn test_find_non_numeric_integer_field_is_usage_error() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    finder(&dir)
        .args(["find", "swimmer", "complete_name=Rossi", "year_of_birth=old"])
        .arg("--candidates")
        .arg(&candidates)
        .assert()
        .code(2);
}

#[test]
fn test_find_without_store_is_usage_error() {
    let dir = tempdir().unwrap();

    finder(&dir)
        .args(["find", "team", "name=Carpi"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing candidate store"));
}

#[test]
fn test_find_missing_database_is_data_error() {
    let dir = tempdir().unwrap();

    finder(&dir)
        .args(["find", "team", "name=Carpi", "--db", "missing.db"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("database not found"));
}

#[test]
fn test_find_db_and_candidates_conflict() {
    let dir = tempdir().unwrap();

    finder(&dir)
        .args(["find", "team", "name=Carpi", "--db", "a.db", "--candidates", "b.json"])
        .assert()
        .code(2);
}

#[test]
fn test_find_in_sqlite_database() {
    let dir = tempdir().unwrap();
    let db = write_database(dir.path());

    let output = finder(&dir)
        .args(["--format", "json", "find", "team", "name=A.S.D. Nuoto Carpi"])
        .arg("--db")
        .arg(&db)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["result"]["id"], 2);
    assert_eq!(json["result"]["city_id"], 3);
}

#[test]
fn test_find_store_and_bias_from_config() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());
    let config = write_config(
        dir.path(),
        &format!(
            "[bias]\nteam = 0.95\n\n[store]\ncandidates = \"{}\"\n",
            candidates.display()
        ),
    );

    let output = finder(&dir)
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "find", "team", "name=A.S.D. Nuoto Carpi"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["result"]["id"], 2);
    assert_eq!(json["matches"].as_array().unwrap().len(), 1);
}

#[test]
fn test_find_debug_traces_to_stderr_only() {
    let dir = tempdir().unwrap();
    let candidates = write_candidates(dir.path());

    let plain = finder(&dir)
        .args(["--format", "json", "find", "team", "name=A.S.D. Nuoto Carpi"])
        .arg("--candidates")
        .arg(&candidates)
        .output()
        .unwrap();
    let traced = finder(&dir)
        .args(["--format", "json", "find", "team", "name=A.S.D. Nuoto Carpi"])
        .args(["--debug", "--candidates"])
        .arg(&candidates)
        .output()
        .unwrap();

    assert!(traced.status.success());
    assert_eq!(plain.stdout, traced.stdout);
    assert!(String::from_utf8_lossy(&traced.stderr).contains("inspected"));
}
