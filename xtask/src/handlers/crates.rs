use crate::services::utils::{get_workspace_crates, render_crate_table};
use anyhow::Result;

/// Workspace sections, in the order they are listed.
const SECTIONS: &[(&str, &str)] = &[
    ("Applications", "apps"),
    ("Facade", "crates"),
    ("Features", "crates/features"),
    ("Shared", "crates/shared"),
    ("Infrastructure", "infra"),
];

/// Prints one table per workspace section.
///
/// # Errors
/// Returns an error if a section directory cannot be read or crate metadata cannot be parsed.
pub fn list_all() -> Result<()> {
    for (title, dir) in SECTIONS {
        let crates = get_workspace_crates(dir)?;

        if crates.is_empty() {
            println!("ℹ️ No crates found in '{dir}/'.");
            continue;
        }

        render_crate_table(title, &crates);
    }

    Ok(())
}
