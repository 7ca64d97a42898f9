//! Implementation of the `shadervar match` command.

use crate::report;
use crate::utils::print_status;
use anyhow::{Result, bail};
use shadervar_core::var_type::VarTypeRegistry;

/// Executes the `match` command, listing the kinds `glsl` corresponds to.
///
/// # Errors
/// Returns an error if no kind uses the GLSL type name.
pub fn execute(glsl: &str, array: bool) -> Result<()> {
    let registry = VarTypeRegistry::global();

    let rows = report::matches(registry, glsl);
    if rows.is_empty() {
        bail!("No variable kind corresponds to `{glsl}`");
    }
    for row in &rows {
        println!("{row}");
    }

    if let Some(kind) = registry.resolve_declaration(glsl, array) {
        let shape = if array { "array" } else { "single" };
        print_status("Resolved", &format!("{shape} `{glsl}` declaration to {kind}"));
    }
    Ok(())
}
