use clap::Parser;
use pretty_assertions::assert_eq;
use roster_cli::{resolve_config, run, Cli, Command, ConventionArg};
use roster_gateway::Convention;
use std::io::Write;
use std::path::PathBuf;

fn run_args(args: &[&str]) -> (bool, String) {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let ok = run(cli.command, &mut out).unwrap();
    (ok, String::from_utf8(out).unwrap())
}

fn seeded_db() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("students.db").to_str().unwrap().to_string();
    run_args(&["roster", "init", "--db", &db]);
    run_args(&["roster", "add", "--db", &db, "--name", "Ann Lee", "--grade", "90", "--course", "Math"]);
    run_args(&["roster", "add", "--db", &db, "--name", "Bob Stone"]);
    (dir, db)
}

#[test]
fn parses_search_with_overrides() {
    let cli = Cli::try_parse_from([
        "roster",
        "-v",
        "search",
        "--convention",
        "caller-buffer",
        "--capacity",
        "64",
        "ann",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Search {
            db,
            convention,
            capacity,
            config,
            term,
        } => {
            assert_eq!(db, PathBuf::from("students.db"));
            assert_eq!(convention, Some(ConventionArg::CallerBuffer));
            assert_eq!(capacity, Some(64));
            assert_eq!(config, None);
            assert_eq!(term, "ann");
        }
        other => panic!("expected Search, got {:?}", other),
    }
}

#[test]
fn search_requires_a_term() {
    assert!(Cli::try_parse_from(["roster", "search"]).is_err());
}

#[test]
fn add_prints_new_id() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("s.db").to_str().unwrap().to_string();
    run_args(&["roster", "init", "--db", &db]);
    let (ok, out) = run_args(&["roster", "add", "--db", &db, "--name", "Cy"]);
    assert!(ok);
    assert_eq!(out, "1\n");
}

#[test]
fn add_rejects_empty_name() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("s.db").to_str().unwrap().to_string();
    run_args(&["roster", "init", "--db", &db]);
    let cli = Cli::try_parse_from(["roster", "add", "--db", &db, "--name", ""]).unwrap();
    let err = run(cli.command, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("name is required"));
}

#[test]
fn search_prints_records_as_json() {
    let (_dir, db) = seeded_db();
    for convention in ["caller-buffer", "native-buffer"] {
        let (ok, out) = run_args(&["roster", "search", "--db", &db, "--convention", convention, "ann"]);
        assert!(ok);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "outcome": "found",
                "records": [{"id": 1, "name": "Ann Lee", "grade": 90, "course": "Math"}],
                "anomalies": [],
            })
        );
    }
}

#[test]
fn failed_search_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("missing.db").to_str().unwrap().to_string();
    let (ok, out) = run_args(&["roster", "search", "--db", &db, "--convention", "caller-buffer", "ann"]);
    assert!(!ok);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["outcome"], "failure");
    assert_eq!(json["status"], -1);
}

#[test]
fn resolve_config_applies_overrides_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"convention":"native-buffer","buffer_capacity":2048}}"#).unwrap();

    let config = resolve_config(Some(file.path()), Some(ConventionArg::CallerBuffer), None).unwrap();
    assert_eq!(config.convention, Convention::CallerBuffer);
    assert_eq!(config.buffer_capacity, 2048);

    let config = resolve_config(Some(file.path()), None, Some(16)).unwrap();
    assert_eq!(config.convention, Convention::NativeBuffer);
    assert_eq!(config.buffer_capacity, 16);
}

#[test]
fn zero_capacity_is_an_error() {
    let (_dir, db) = seeded_db();
    let cli = Cli::try_parse_from([
        "roster", "search", "--db", &db, "--convention", "caller-buffer", "--capacity", "0", "ann",
    ])
    .unwrap();
    assert!(run(cli.command, &mut Vec::new()).is_err());
}
