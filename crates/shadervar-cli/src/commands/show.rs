//! Implementation of the `shadervar show` command.

use crate::report;
use anyhow::Result;
use shadervar_core::var_type::VarKind;

/// Executes the `show` command for the kind named `name`.
///
/// # Errors
/// Returns an error if `name` is not a variable kind.
pub fn execute(name: &str) -> Result<()> {
    let kind: VarKind = name.parse().map_err(|e| {
        eprintln!("{:?}", miette::Report::new(e));
        anyhow::anyhow!("Unknown variable kind")
    })?;

    println!("{}", report::describe(kind));
    Ok(())
}
