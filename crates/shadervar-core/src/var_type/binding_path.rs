use super::VarKind;

/// How a uniform binder hands a variable's value to the GPU
///
/// Derived from a kind's classification flags:
///
/// - Value: single scalar or vector copy into the uniform storage
/// - Array: element-count-aware copy (arrays and matrices)
/// - Sampler: texture bound to a texture unit
/// - Image: texture level bound to an image unit
/// - Block: buffer object bound to a block binding point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingPath {
    Value,
    Array,
    Sampler,
    Image,
    Block,
}

impl BindingPath {
    /// Determines the binding path of a kind
    pub fn for_kind(kind: VarKind) -> Self {
        match kind {
            VarKind::UniformBufferObject | VarKind::ShaderStorageBufferObject => Self::Block,
            _ if kind.is_texture() => Self::Sampler,
            _ if kind.is_image() => Self::Image,
            _ if kind.uses_multi_element() => Self::Array,
            _ => Self::Value,
        }
    }

    /// Determines if the value is bound as a resource rather than copied
    pub const fn is_resource(&self) -> bool {
        matches!(self, Self::Sampler | Self::Image | Self::Block)
    }

    /// Determines if the value is copied into uniform storage
    pub const fn is_value_copy(&self) -> bool {
        matches!(self, Self::Value | Self::Array)
    }
}

impl std::fmt::Display for BindingPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value => write!(f, "value"),
            Self::Array => write!(f, "array"),
            Self::Sampler => write!(f, "sampler"),
            Self::Image => write!(f, "image"),
            Self::Block => write!(f, "block"),
        }
    }
}
