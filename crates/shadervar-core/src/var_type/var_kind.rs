use super::registry::TABLE;
use super::{BindingPath, HostType, HostValue, VarKindInfo};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of a shader-declared variable
///
/// The set is closed: every kind has exactly one static [`VarKindInfo`].
/// Kinds serialize as their name, e.g. `"Texture2D"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VarKind {
    Float,
    Vector2,
    Vector3,
    Vector4,

    IntArray,
    FloatArray,
    Vector2Array,
    Vector3Array,
    Vector4Array,

    Int,
    Boolean,

    Matrix3,
    Matrix4,

    Matrix3Array,
    Matrix4Array,

    TextureBuffer,
    Texture2D,
    Texture3D,
    TextureArray,
    TextureCubeMap,

    Image2D,
    Image3D,

    UniformBufferObject,
    ShaderStorageBufferObject,
}

impl VarKind {
    /// Number of kinds
    pub const COUNT: usize = 24;

    /// Every kind, in declaration order
    pub const ALL: [VarKind; Self::COUNT] = [
        Self::Float,
        Self::Vector2,
        Self::Vector3,
        Self::Vector4,
        Self::IntArray,
        Self::FloatArray,
        Self::Vector2Array,
        Self::Vector3Array,
        Self::Vector4Array,
        Self::Int,
        Self::Boolean,
        Self::Matrix3,
        Self::Matrix4,
        Self::Matrix3Array,
        Self::Matrix4Array,
        Self::TextureBuffer,
        Self::Texture2D,
        Self::Texture3D,
        Self::TextureArray,
        Self::TextureCubeMap,
        Self::Image2D,
        Self::Image3D,
        Self::UniformBufferObject,
        Self::ShaderStorageBufferObject,
    ];

    /// Iterates over every kind in declaration order
    pub fn iter() -> impl Iterator<Item = VarKind> {
        Self::ALL.into_iter()
    }

    /// Returns the static descriptor of this kind
    #[inline]
    pub fn info(self) -> &'static VarKindInfo {
        &TABLE[self as usize]
    }

    /// Returns the GLSL spellings, separated by `|`
    ///
    /// Use [`VarKind::matches_wire_type`] to test a single parsed type name.
    pub fn wire_type(self) -> &'static str {
        self.info().wire_type
    }

    /// Iterates over the individual GLSL spellings
    pub fn wire_types(self) -> impl Iterator<Item = &'static str> {
        self.info().wire_types()
    }

    /// Returns true if `glsl` is one of this kind's GLSL spellings
    pub fn matches_wire_type(self, glsl: &str) -> bool {
        self.info().matches_wire_type(glsl)
    }

    /// Returns the host types that may supply a value; empty for kinds that
    /// are never value-copied
    pub fn host_types(self) -> &'static [HostType] {
        self.info().host_types
    }

    /// Returns true if this is a sampler bound through a texture unit
    pub fn is_texture(self) -> bool {
        self.info().flags.texture
    }

    /// Returns true if this is an image bound for load/store
    pub fn is_image(self) -> bool {
        self.info().flags.image
    }

    /// Returns true if values need an element-count-aware upload
    pub fn uses_multi_element(self) -> bool {
        self.info().flags.multi_element
    }

    /// Returns the binding path a uniform binder takes for this kind
    pub fn binding_path(self) -> BindingPath {
        BindingPath::for_kind(self)
    }

    /// Returns true if `value` may be assigned to a variable of this kind
    ///
    /// A value is accepted when its runtime host type is, or is a subtype of,
    /// one of [`VarKind::host_types`].
    pub fn accepts(self, value: &dyn HostValue) -> bool {
        self.info().accepts(value)
    }

    /// Validates a value about to be bound to a variable of this kind
    ///
    /// # Errors
    /// Returns `MissingValue` for `None` and `IncompatibleValue` when the
    /// value's host type is not accepted.
    pub fn check_value(self, value: Option<&dyn HostValue>) -> Result<()> {
        let value = value.ok_or(Error::MissingValue { kind: self })?;
        if self.accepts(value) {
            Ok(())
        } else {
            Err(Error::IncompatibleValue {
                kind: self,
                expected: self.wire_type(),
                found: value.host_type(),
            })
        }
    }

    /// Returns the name of the kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float => "Float",
            Self::Vector2 => "Vector2",
            Self::Vector3 => "Vector3",
            Self::Vector4 => "Vector4",
            Self::IntArray => "IntArray",
            Self::FloatArray => "FloatArray",
            Self::Vector2Array => "Vector2Array",
            Self::Vector3Array => "Vector3Array",
            Self::Vector4Array => "Vector4Array",
            Self::Int => "Int",
            Self::Boolean => "Boolean",
            Self::Matrix3 => "Matrix3",
            Self::Matrix4 => "Matrix4",
            Self::Matrix3Array => "Matrix3Array",
            Self::Matrix4Array => "Matrix4Array",
            Self::TextureBuffer => "TextureBuffer",
            Self::Texture2D => "Texture2D",
            Self::Texture3D => "Texture3D",
            Self::TextureArray => "TextureArray",
            Self::TextureCubeMap => "TextureCubeMap",
            Self::Image2D => "Image2D",
            Self::Image3D => "Image3D",
            Self::UniformBufferObject => "UniformBufferObject",
            Self::ShaderStorageBufferObject => "ShaderStorageBufferObject",
        }
    }
}

impl std::fmt::Display for VarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for VarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
