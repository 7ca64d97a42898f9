//! Plain-text reports printed by the CLI.

use shadervar_core::var_type::{BufferLayout, HostType, VarKind, VarKindInfo, VarTypeRegistry};
use shadervar_utils::Issue;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn host_type_list(host_types: &[HostType]) -> String {
    if host_types.is_empty() {
        return "-".to_string();
    }
    host_types
        .iter()
        .map(|ty| ty.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn table_row(info: &VarKindInfo) -> String {
    format!(
        "{:<26} {:<36} {:<8} {}",
        info.kind.name(),
        info.wire_type,
        info.kind.binding_path().to_string(),
        host_type_list(info.host_types)
    )
}

/// Renders every kind as one line: name, GLSL spellings, binding path and
/// accepted host types.
pub fn kind_table(registry: &VarTypeRegistry) -> String {
    let mut out = format!("{:<26} {:<36} {:<8} {}\n", "KIND", "GLSL", "BINDING", "HOST TYPES");
    for info in registry.iter() {
        out.push_str(&table_row(info));
        out.push('\n');
    }
    out
}

/// Renders every property of one kind.
///
/// Buffer-object kinds get an extra line naming their default block layout.
pub fn describe(kind: VarKind) -> String {
    let info = kind.info();
    let mut out = format!(
        "{kind}\n  \
         glsl:          {}\n  \
         host types:    {}\n  \
         binding path:  {}\n  \
         multi-element: {}\n  \
         texture:       {}\n  \
         image:         {}",
        kind.wire_types().collect::<Vec<_>>().join(" | "),
        host_type_list(info.host_types),
        kind.binding_path(),
        yes_no(kind.uses_multi_element()),
        yes_no(kind.is_texture()),
        yes_no(kind.is_image()),
    );
    if let Some(layout) = BufferLayout::for_kind(kind) {
        out.push_str(&format!("\n  layout:        {layout}"));
    }
    out
}

/// Renders the kinds a GLSL type name corresponds to, one per line.
pub fn matches(registry: &VarTypeRegistry, glsl: &str) -> Vec<String> {
    registry
        .kinds_for_wire_type(glsl)
        .into_iter()
        .map(|kind| table_row(kind.info()))
        .collect()
}

/// Renders validation issues as a numbered list.
pub fn issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .enumerate()
        .map(|(index, issue)| format!("{:>3}. {issue}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
