//! Implementation of the `shadervar check` command.

use crate::report;
use crate::utils::{load_manifest, print_failure, print_material_status};
use anyhow::{Result, bail};
use std::path::Path;

/// Executes the `check` command to validate a material manifest.
///
/// # Errors
/// Returns an error if the manifest cannot be loaded or has issues.
pub fn execute(path: Option<&Path>) -> Result<()> {
    let (config, manifest_path) = load_manifest(path)?;

    if config.params.is_empty() {
        log::warn!("`{}` declares no parameters", config.material.name);
    }

    let issues = config.validate();
    if !issues.is_empty() {
        print_failure(
            "Invalid",
            &format!("{} ({})", config.material.name, manifest_path.display()),
        );
        eprintln!("{}", report::issues(&issues));
        bail!("{} issue(s) found", issues.len());
    }

    print_material_status("Checked", &config, &manifest_path);
    Ok(())
}
