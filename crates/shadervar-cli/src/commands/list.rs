//! Implementation of the `shadervar list` command.

use crate::report;
use anyhow::Result;
use shadervar_core::var_type::VarTypeRegistry;

/// Executes the `list` command, printing every variable kind.
pub fn execute() -> Result<()> {
    print!("{}", report::kind_table(VarTypeRegistry::global()));
    Ok(())
}
