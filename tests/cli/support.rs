use assert_cmd::{cargo::cargo_bin_cmd, Command};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Get a Command for finder, isolated from the user configuration
pub fn finder(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("finder");
    cmd.current_dir(dir.path())
        .env("FINDER_CONFIG_DIR", dir.path().join("config"))
        .env_remove("FINDER_CONFIG")
        .env_remove("FINDER_LOG");
    cmd
}

/// Parse stdout of a `--format json` run
pub fn json_stdout(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

/// Parse stderr of a failed `--format json` run
pub fn json_stderr(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is a JSON error envelope")
}

/// Candidate file with a team and a swimmer domain
pub fn write_candidates(dir: &Path) -> PathBuf {
    let path = dir.join("candidates.json");
    fs::write(
        &path,
        r#"{
  "teams_by_name": [
    {"id": 1, "name": "Reggiana Nuoto", "city_id": 5},
    {"id": 2, "name": "Nuoto Carpi", "city_id": 3},
    {"id": 3, "name": "Nuoto Capri", "city_id": 9}
  ],
  "swimmers_by_name": [
    {"id": 10, "complete_name": "ROSSI Mario", "year_of_birth": 1970, "gender_type_id": 1},
    {"id": 11, "complete_name": "ROSSI Mario", "year_of_birth": 1971, "gender_type_id": 1},
    {"id": 12, "complete_name": "BIANCHI Luca", "year_of_birth": 1985, "gender_type_id": 1}
  ]
}"#,
    )
    .unwrap();
    path
}

/// SQLite results database with a `teams` table
pub fn write_database(dir: &Path) -> PathBuf {
    let path = dir.join("results.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE teams (id INTEGER PRIMARY KEY, name TEXT NOT NULL, city_id INTEGER);
         INSERT INTO teams (id, name, city_id) VALUES
             (1, 'Reggiana Nuoto', 5),
             (2, 'Nuoto Carpi', 3),
             (4, 'Rari Nantes Modena', 7);",
    )
    .unwrap();
    path
}

/// Gazetteer with Italian and Swiss cities
pub fn write_gazetteer(dir: &Path) -> PathBuf {
    let path = dir.join("gazetteer.toml");
    fs::write(
        &path,
        r#"[[countries]]
code = "IT"
name = "Italia"
cities = [
    { key = "reggio calabria", name = "Reggio Calabria", area = "RC" },
    { key = "reggio emilia", name = "Reggio Emilia", area = "RE" },
    { key = "forli", name = "Forlì", area = "FC" },
]

[[countries]]
code = "CH"
name = "Svizzera"
cities = [
    { key = "lugano", name = "Lugano", area = "TI" },
]
"#,
    )
    .unwrap();
    path
}

/// Write a configuration file and return its path
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("finder.toml");
    fs::write(&path, content).unwrap();
    path
}
