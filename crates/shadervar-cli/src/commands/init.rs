//! Implementation of the `shadervar init` command.

use crate::utils::{manifest_template, print_material_status};
use anyhow::{Result, bail};
use shadervar_utils::CONFIG_FILE_NAME;
use std::env;

/// Executes the `init` command, writing a manifest into the current directory.
///
/// # Errors
/// Returns an error if a manifest already exists or cannot be written.
pub fn execute(name: &str) -> Result<()> {
    let manifest_path = env::current_dir()?.join(CONFIG_FILE_NAME);

    if manifest_path.exists() {
        bail!("{} already exists", manifest_path.display());
    }

    let config = manifest_template(name);
    config.save(&manifest_path)?;

    log::debug!("wrote {} parameter(s)", config.params.len());
    print_material_status("Created", &config, &manifest_path);
    Ok(())
}
