use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

/// Command with an isolated config directory so no user settings leak in.
fn vchconf(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vchconf").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("VCHCONF_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_command() {
    let home = TempDir::new().unwrap();
    vchconf(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Virtual Container Host"));
}

#[test]
fn test_completions_command() {
    let home = TempDir::new().unwrap();
    vchconf(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_vchconf"));
}

#[test]
fn test_man_page_command() {
    let home = TempDir::new().unwrap();
    vchconf(&home)
        .arg("man-page")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}

#[test]
fn test_to_api_from_json() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("wizard.json");
    fs::write(
        &input,
        r#"{
            "general": {"name": "vch1"},
            "computeCapacity": {"cpuLimit": "2000", "memoryLimit": 4096}
        }"#,
    )
    .unwrap();

    let output = vchconf(&home).arg("to-api").arg(&input).output().unwrap();
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        body,
        json!({
            "name": "vch1",
            "compute": {
                "cpu": { "limit": { "value": 2000, "units": "MHz" } },
                "memory": { "limit": { "value": 4096, "units": "MiB" } }
            }
        })
    );
}

#[test]
fn test_to_api_from_yaml_to_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("wizard.yaml");
    let out = home.path().join("body.json");
    fs::write(
        &input,
        "networks:\n  publicNetwork: public-pg\n  clientNetwork: client-pg\n",
    )
    .unwrap();

    vchconf(&home)
        .arg("to-api")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let body: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(body["network"]["client"]["port_group"]["name"], "public-pg");
}

#[test]
fn test_to_ui_reports_missing_section() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("vch.json");
    fs::write(&input, r#"{"name": "vch1"}"#).unwrap();

    vchconf(&home)
        .arg("to-ui")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing 'container'"));
}

#[test]
fn test_to_ui_missing_file() {
    let home = TempDir::new().unwrap();
    vchconf(&home)
        .args(["to-ui", "/nonexistent/vch.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_check_pattern() {
    let home = TempDir::new().unwrap();
    vchconf(&home)
        .args(["check", "ip-v4", "10.0.0.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matches ipV4"));

    vchconf(&home)
        .args(["check", "fqdn", "not_a_host"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match fqdn"));
}

#[test]
fn test_numeric_validation() {
    let home = TempDir::new().unwrap();
    vchconf(&home)
        .args(["numeric", "Unlimited", "--allow-unlimited", "--field", "cpuLimit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cpu Limit is valid"));

    vchconf(&home)
        .args(["numeric", "0", "--field", "memoryLimit"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"min\""))
        .stderr(predicate::str::contains("memory Limit is invalid: min"));
}

#[test]
fn test_patterns_lists_sources() {
    let home = TempDir::new().unwrap();
    vchconf(&home)
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("whitelist-registry"))
        .stdout(predicate::str::contains("^[Uu]nlimited$"));
}

#[test]
fn test_compact_output_from_settings() {
    let home = TempDir::new().unwrap();
    let settings = home.path().join("settings.json");
    fs::write(&settings, r#"{"pretty": false}"#).unwrap();
    let input = home.path().join("wizard.json");
    fs::write(&input, r#"{"general": {"name": "vch1"}}"#).unwrap();

    vchconf(&home)
        .arg("--config")
        .arg(&settings)
        .arg("to-api")
        .arg(&input)
        .assert()
        .success()
        .stdout("{\"name\":\"vch1\"}\n");
}

#[test]
fn test_missing_config_file() {
    let home = TempDir::new().unwrap();
    vchconf(&home)
        .args(["--config", "/nonexistent/vchconf.yaml", "patterns"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_install_fish_completions() {
    let home = TempDir::new().unwrap();
    let output = vchconf(&home).arg("install-fish").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let path_line = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Fish completions installed to: "))
        .expect("Expected output to contain installation path");
    assert!(path_line.ends_with("vchconf.fish"));
    assert!(std::path::Path::new(path_line).exists());
}
