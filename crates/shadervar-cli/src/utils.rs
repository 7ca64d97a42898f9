//! Utility functions shared across the CLI.

use anyhow::{Context, Result};
use colored::Colorize;
use shadervar_core::var_type::VarKind;
use shadervar_utils::{Config, ParamDecl};
use std::path::{Path, PathBuf};

/// Returns the manifest written by `shadervar init`.
#[must_use]
pub fn manifest_template(name: &str) -> Config {
    Config::new(name)
        .with_param(ParamDecl::new("ColorMap", VarKind::Texture2D))
        .with_param(
            ParamDecl::new("Color", VarKind::Vector4).with_default(vec![1.0, 1.0, 1.0, 1.0]),
        )
}

/// Loads the manifest at `path`, or finds one upwards from the current
/// directory when no path is given.
///
/// # Errors
/// Returns an error if the manifest cannot be found or parsed.
pub fn load_manifest(path: Option<&Path>) -> Result<(Config, PathBuf)> {
    match path {
        Some(path) => Ok((Config::load(path)?, path.to_path_buf())),
        None => {
            let (config, dir) =
                Config::find().with_context(|| "Not in a shadervar material directory")?;
            Ok((config, dir.join(shadervar_utils::CONFIG_FILE_NAME)))
        }
    }
}

/// Prints a status message with colored output.
pub fn print_status(status: &str, message: &str) {
    println!("{} {message}", status.green().bold());
}

/// Prints a failure status message with colored output.
pub fn print_failure(status: &str, message: &str) {
    eprintln!("{} {message}", status.red().bold());
}

/// Prints a status message with material info.
pub fn print_material_status(status: &str, config: &Config, path: &Path) {
    println!(
        "{} {} v{} ({})",
        status.green().bold(),
        config.material.name,
        config.material.version,
        path.display()
    );
}
