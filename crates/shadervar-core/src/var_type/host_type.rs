/// A host-side value representation
///
/// Every value handed to a uniform binder reports one of these as its runtime
/// type. Concrete texture types are subtypes of [`HostType::Texture`], which
/// lets a kind accept "any texture" by listing the base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostType {
    Float,
    Int,
    Bool,
    Vector2,
    Vector3,
    Vector4,
    ColorRgba,
    IntArray,
    FloatArray,
    Vector2Array,
    Vector3Array,
    Vector4Array,
    Matrix3,
    Matrix4,
    Matrix3Array,
    Matrix4Array,

    /// Base type of every sampled texture resource
    Texture,
    Texture2D,
    Texture3D,
    TextureArray,
    TextureCubeMap,

    /// A texture level bound for image load/store
    TextureImage,

    /// Opaque uniform or shader storage buffer
    BufferObject,
}

impl HostType {
    /// Returns the direct parent of this type, if any
    pub const fn supertype(self) -> Option<HostType> {
        match self {
            Self::Texture2D | Self::Texture3D | Self::TextureArray | Self::TextureCubeMap => {
                Some(Self::Texture)
            }
            _ => None,
        }
    }

    /// Returns true if a value of this type can stand in for `other`
    ///
    /// The relation is reflexive and follows the supertype chain.
    pub fn is_a(self, other: HostType) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty == other {
                return true;
            }
            current = ty.supertype();
        }
        false
    }

    /// Returns true for the sampled texture family, base type included
    pub fn is_texture(self) -> bool {
        self.is_a(Self::Texture)
    }

    /// Returns the name of the type for display purposes
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float => "Float",
            Self::Int => "Int",
            Self::Bool => "Bool",
            Self::Vector2 => "Vector2",
            Self::Vector3 => "Vector3",
            Self::Vector4 => "Vector4",
            Self::ColorRgba => "ColorRgba",
            Self::IntArray => "IntArray",
            Self::FloatArray => "FloatArray",
            Self::Vector2Array => "Vector2Array",
            Self::Vector3Array => "Vector3Array",
            Self::Vector4Array => "Vector4Array",
            Self::Matrix3 => "Matrix3",
            Self::Matrix4 => "Matrix4",
            Self::Matrix3Array => "Matrix3Array",
            Self::Matrix4Array => "Matrix4Array",
            Self::Texture => "Texture",
            Self::Texture2D => "Texture2D",
            Self::Texture3D => "Texture3D",
            Self::TextureArray => "TextureArray",
            Self::TextureCubeMap => "TextureCubeMap",
            Self::TextureImage => "TextureImage",
            Self::BufferObject => "BufferObject",
        }
    }
}

impl std::fmt::Display for HostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
