use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn vehicle_factory() -> Command {
    let mut cmd = Command::cargo_bin("vehicle-factory").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn interactive_order_prints_summary() {
    vehicle_factory()
        .write_stdin("1\n1\n1\n\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("🔧 Vehicle Selection"))
        .stdout(predicate::str::contains("🔌 Engine Selection for Car"))
        .stdout(predicate::str::contains("Details:  A comfortable Car powered by Electric."))
        .stdout(predicate::str::contains("Thank you for your order!"));
}

#[test]
fn invalid_selection_reprompts() {
    vehicle_factory()
        .arg("shop")
        .write_stdin("1\n7\nmotorbike\n2\n3\n2\n\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid selection, please try again.").count(3))
        .stdout(predicate::str::contains("Details:  A nimble Motorcycle with a Gasoline engine."));
}

#[test]
fn undecodable_stdin_bytes_reprompt() {
    vehicle_factory()
        .write_stdin(b"1\n\xff\xfe\n1\n1\n\n2\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid selection, please try again.").count(1))
        .stdout(predicate::str::contains("Details:  A comfortable Car powered by Electric."));
}

#[test]
fn closed_stdin_exits_cleanly() {
    vehicle_factory()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Vehicle Factory Inc."));
}

#[test]
fn one_shot_order() {
    vehicle_factory()
        .args(["order", "--vehicle", "truck", "--engine", "hybrid"])
        .assert()
        .success()
        .stdout(
            "Vehicle:  Truck\nEngine:   Hybrid\nDetails:  A heavy-duty Truck running on Hybrid.\n",
        );
}

#[test]
fn one_shot_incompatible_order_fails() {
    vehicle_factory()
        .args(["order", "-v", "motorcycle", "-e", "hybrid"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("a Motorcycle cannot be built with a Hybrid engine"));
}

#[test]
fn catalog_lists_compatibility() {
    vehicle_factory()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Motorcycle   Electric, Gasoline\n"))
        .stdout(predicate::str::contains("Truck        Electric, Gasoline, Hybrid\n"));
}

#[test]
fn unknown_log_level_in_config_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = dir.path().join("vehicle-factory.toml");
    fs::write(&config, "[logging]\nlevel = \"loud\"\n")?;

    vehicle_factory()
        .arg("--config")
        .arg(&config)
        .arg("catalog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.level 'loud'"));
    Ok(())
}

#[test]
fn missing_config_file_is_rejected() {
    vehicle_factory()
        .args(["--config", "definitely-not-here.toml", "catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Loading shell settings"));
}

#[test]
fn file_logging_records_orders() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let logs = dir.path().join("logs");
    let config = dir.path().join("vehicle-factory.toml");
    fs::write(
        &config,
        format!("[logging]\nlevel = \"info\"\ndirectory = {:?}\n", logs.display().to_string()),
    )?;

    vehicle_factory()
        .arg("--config")
        .arg(&config)
        .args(["order", "-v", "car", "-e", "gasoline"])
        .assert()
        .success();

    let contents: String = fs::read_dir(&logs)?
        .flatten()
        .filter(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"))
        .map(|entry| fs::read_to_string(entry.path()).unwrap_or_default())
        .collect();
    assert!(contents.contains("Order completed"), "log contents: {contents}");
    Ok(())
}

#[test]
fn no_color_keeps_log_lines_plain() {
    vehicle_factory()
        .args(["--no-color", "--log-level", "warn", "order", "-v", "motorcycle", "-e", "hybrid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rejected incompatible vehicle/engine pair"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
