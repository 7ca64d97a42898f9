/// Shader variable type registry
///
/// This module maps every kind of shader-declared variable to:
/// - The GLSL spellings it corresponds to
/// - The host value types that may supply its value
/// - Classification flags (multi-element, texture sampler, image)
/// - The binding path a uniform binder should take for it
mod binding_path;
mod host_type;
mod host_value;
mod kind_info;
mod registry;
mod resource;
mod var_kind;

pub use binding_path::BindingPath;
pub use host_type::HostType;
pub use host_value::{ColorRgba, HostValue};
pub use kind_info::{KindFlags, VarKindInfo, WIRE_TYPE_DELIMITER};
pub use registry::VarTypeRegistry;
pub use resource::{
    BufferHandle, BufferLayout, ImageAccess, ImageHandle, TextureHandle, TextureTarget,
};
pub use var_kind::VarKind;
