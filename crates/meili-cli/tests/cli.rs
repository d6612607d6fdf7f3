use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Nothing listens on the discard port
const DEAD_HOST: &str = "http://127.0.0.1:9";

/// A `meili` command with its config file inside a temp directory
fn meili_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("meili").unwrap();
    cmd.env("MEILI_CONFIG", dir.path().join("config.toml"));
    cmd.env_remove("MEILI_HOST");
    cmd.env_remove("MEILI_API_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("document"))
        .stdout(predicate::str::contains("index"))
        .stdout(predicate::str::contains("task"));
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("meili"));
}

#[test]
fn config_path_honors_env() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["config", "set", "timeout_ms", "1500"])
        .assert()
        .success();

    assert!(tmp.path().join("config.toml").exists());

    meili_cmd(&tmp)
        .args(["config", "get", "timeout_ms"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1500\n"));
}

#[test]
fn config_list_hides_api_key() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["config", "set", "api_key", "superSecret"])
        .assert()
        .success();

    meili_cmd(&tmp)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key = (hidden)"))
        .stdout(predicate::str::contains("superSecret").not());
}

#[test]
fn config_init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp).args(["config", "init"]).assert().success();
    meili_cmd(&tmp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn config_set_keeps_a_broken_file_intact() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("config.toml");
    let original = "host = \"https://search.example.com\"\napi_key = \"secret\"\ntimeout_ms = \"oops\"\n";
    std::fs::write(&file, original).unwrap();

    meili_cmd(&tmp)
        .args(["config", "set", "poll_interval_ms", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing"));

    assert_eq!(std::fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn config_get_reports_a_broken_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("config.toml"), "host = [").unwrap();

    meili_cmd(&tmp)
        .args(["config", "get", "host"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn config_unknown_key_fails() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["config", "get", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn task_wait_rejects_zero_interval() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["--host", DEAD_HOST, "task", "wait", "1", "--interval-ms", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn task_wait_rejects_negative_interval() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["--host", DEAD_HOST, "task", "wait", "1", "--interval-ms", "-5"])
        .assert()
        .failure();
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["--host", DEAD_HOST, "document", "list", "movies"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transport error"));
}

#[test]
fn add_rejects_non_array_payload() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("movie.json");
    std::fs::write(&file, r#"{"id": 1, "title": "Carol"}"#).unwrap();

    meili_cmd(&tmp)
        .args(["--host", DEAD_HOST, "document", "add", "movies"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn malformed_host_is_a_config_error() {
    let tmp = TempDir::new().unwrap();
    meili_cmd(&tmp)
        .args(["--host", "not a url", "health"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
