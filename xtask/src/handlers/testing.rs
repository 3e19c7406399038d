use crate::services::utils::normalize_project_name;
use anyhow::Context;

/// Appends `--workspace` or `-p <crate>` depending on `project` ("all" means the workspace).
fn push_target(args: &mut Vec<String>, project: Option<&str>) -> &'static str {
    match project.filter(|value| *value != "all") {
        Some(project) => {
            args.push("-p".into());
            args.push(normalize_project_name(project));
            "crate"
        },
        None => {
            args.push("--workspace".into());
            "workspace"
        },
    }
}

fn cargo(args: &[String], failure: &str) -> anyhow::Result<()> {
    let status = std::process::Command::new("cargo")
        .args(args)
        .status()
        .context("Failed to execute cargo")?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }
    Ok(())
}

/// Runs tests in the workspace or a specific crate, through `cargo-nextest` when installed.
///
/// # Errors
/// Returns an error if cargo cannot be started or any test fails.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    let has_nextest = std::process::Command::new("cargo-nextest").arg("--version").output().is_ok();

    let mut args: Vec<String> = if has_nextest {
        vec!["nextest".into(), "run".into()]
    } else {
        vec!["test".into()]
    };
    let target = push_target(&mut args, project);
    args.push("--all-features".into());

    if has_nextest {
        args.extend(
            ["--failure-output", "immediate-final", "--success-output", "never"]
                .into_iter()
                .map(String::from),
        );
    }

    println!(
        "🧪 Running {target} tests via '{}'...",
        if has_nextest { "nextest" } else { "cargo test" }
    );
    cargo(&args, "Tests failed!")
}

/// Runs doc tests in the workspace or a specific crate.
///
/// # Errors
/// Returns an error if cargo cannot be started or any doc test fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    let mut args: Vec<String> = vec!["test".into(), "--doc".into()];
    let target = push_target(&mut args, project);
    args.push("--all-features".into());

    println!("📚 Running {target} doc tests...");
    cargo(&args, "Doc tests failed!")
}
