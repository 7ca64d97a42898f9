use super::{HostType, VarKind};
use serde::{Deserialize, Serialize};

/// Dimensionality of a sampled texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureTarget {
    TwoD,
    ThreeD,
    TwoDArray,
    CubeMap,
}

impl TextureTarget {
    /// Returns the concrete host type a texture of this target reports
    pub const fn host_type(self) -> HostType {
        match self {
            Self::TwoD => HostType::Texture2D,
            Self::ThreeD => HostType::Texture3D,
            Self::TwoDArray => HostType::TextureArray,
            Self::CubeMap => HostType::TextureCubeMap,
        }
    }
}

/// Handle to an engine-owned texture resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    pub id: u32,
    pub target: TextureTarget,
}

impl TextureHandle {
    #[must_use]
    pub const fn new(id: u32, target: TextureTarget) -> Self {
        Self { id, target }
    }
}

/// How a shader may touch an image bound for load/store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageAccess {
    ReadOnly,
    WriteOnly,
    #[default]
    ReadWrite,
}

/// A single mip level of a texture bound for image load/store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    pub texture: TextureHandle,
    pub level: u32,
    pub access: ImageAccess,
}

impl ImageHandle {
    #[must_use]
    pub const fn new(texture: TextureHandle, level: u32, access: ImageAccess) -> Self {
        Self {
            texture,
            level,
            access,
        }
    }
}

/// Memory layout rules of a buffer-backed block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BufferLayout {
    Std140,
    Std430,
}

impl BufferLayout {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Std140 => "std140",
            Self::Std430 => "std430",
        }
    }

    /// Returns the default layout for a buffer-object kind
    ///
    /// Uniform blocks use `std140`; storage blocks use `std430`.
    pub const fn for_kind(kind: VarKind) -> Option<Self> {
        match kind {
            VarKind::UniformBufferObject => Some(Self::Std140),
            VarKind::ShaderStorageBufferObject => Some(Self::Std430),
            _ => None,
        }
    }
}

impl std::fmt::Display for BufferLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle to an engine-owned buffer object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle {
    pub id: u32,
    pub layout: BufferLayout,
}

impl BufferHandle {
    #[must_use]
    pub const fn new(id: u32, layout: BufferLayout) -> Self {
        Self { id, layout }
    }
}
