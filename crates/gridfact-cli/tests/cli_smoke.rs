use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_prints_semver() {
    Command::cargo_bin("gridfact")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_writes_sample_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("gridfact.yaml");

    Command::cargo_bin("gridfact")
        .unwrap()
        .arg("init")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let text = std::fs::read_to_string(&config).unwrap();
    assert!(text.contains("model: gemini-1.5-flash"));
}

#[test]
fn ingest_loads_and_previews_tables() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir(&data).unwrap();
    std::fs::write(
        data.join("drivers.csv"),
        "driverID,forename,surname\n1,Michael,Schumacher\n",
    )
    .unwrap();
    let db = dir.path().join("database.sqlite");

    Command::cargo_bin("gridfact")
        .unwrap()
        .arg("ingest")
        .arg("--db")
        .arg(&db)
        .arg("--data")
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ingest run started at"))
        .stdout(predicate::str::contains("drivers: appended 1 rows"))
        .stdout(predicate::str::contains("Schumacher"));
}

#[test]
fn ingest_fails_on_missing_directory() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("gridfact")
        .unwrap()
        .arg("ingest")
        .arg("--db")
        .arg(dir.path().join("db.sqlite"))
        .arg("--data")
        .arg(dir.path().join("nope"))
        .assert()
        .failure();
}

#[test]
fn ask_without_api_key_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("gridfact.yaml");
    std::fs::write(
        &config,
        format!(
            "model: gemini-1.5-flash\ndb: {}\n",
            dir.path().join("db.sqlite").display()
        ),
    )
    .unwrap();

    Command::cargo_bin("gridfact")
        .unwrap()
        .arg("ask")
        .arg("How many podiums has Michael Schumacher got?")
        .arg("--config")
        .arg(&config)
        .env_remove("GEMINI_API_KEY")
        .env_remove("GOOGLE_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}
