use super::{HostType, KindFlags, VarKind, VarKindInfo};

const VALUE: KindFlags = KindFlags::NONE;

const MULTI: KindFlags = KindFlags {
    multi_element: true,
    ..KindFlags::NONE
};

const SAMPLER: KindFlags = KindFlags {
    texture: true,
    ..KindFlags::NONE
};

const IMAGE: KindFlags = KindFlags {
    image: true,
    ..KindFlags::NONE
};

const TEXTURE_2D: &[HostType] = &[HostType::Texture2D, HostType::Texture];
const TEXTURE_3D: &[HostType] = &[HostType::Texture3D, HostType::Texture];
const TEXTURE_ARRAY: &[HostType] = &[HostType::TextureArray, HostType::Texture];
const TEXTURE_CUBE_MAP: &[HostType] = &[HostType::TextureCubeMap, HostType::Texture];

/// Descriptors indexed by `VarKind as usize`
pub(crate) static TABLE: [VarKindInfo; VarKind::COUNT] = [
    VarKindInfo::new(VarKind::Float, "float", &[HostType::Float], VALUE),
    VarKindInfo::new(VarKind::Vector2, "vec2", &[HostType::Vector2], VALUE),
    VarKindInfo::new(VarKind::Vector3, "vec3", &[HostType::Vector3], VALUE),
    VarKindInfo::new(
        VarKind::Vector4,
        "vec4",
        &[HostType::Vector4, HostType::ColorRgba],
        VALUE,
    ),
    VarKindInfo::new(VarKind::IntArray, "int", &[HostType::IntArray], MULTI),
    VarKindInfo::new(VarKind::FloatArray, "float", &[HostType::FloatArray], MULTI),
    VarKindInfo::new(VarKind::Vector2Array, "vec2", &[HostType::Vector2Array], MULTI),
    VarKindInfo::new(VarKind::Vector3Array, "vec3", &[HostType::Vector3Array], MULTI),
    VarKindInfo::new(VarKind::Vector4Array, "vec4", &[HostType::Vector4Array], MULTI),
    VarKindInfo::new(VarKind::Int, "int", &[HostType::Int], VALUE),
    VarKindInfo::new(VarKind::Boolean, "bool", &[HostType::Bool], VALUE),
    VarKindInfo::new(VarKind::Matrix3, "mat3", &[HostType::Matrix3], MULTI),
    VarKindInfo::new(VarKind::Matrix4, "mat4", &[HostType::Matrix4], MULTI),
    VarKindInfo::new(VarKind::Matrix3Array, "mat3", &[HostType::Matrix3Array], MULTI),
    VarKindInfo::new(VarKind::Matrix4Array, "mat4", &[HostType::Matrix4Array], MULTI),
    // No host type: buffer textures are bound by the engine, never by value.
    VarKindInfo::new(
        VarKind::TextureBuffer,
        "sampler1D|sampler1DShadow",
        &[],
        SAMPLER,
    ),
    VarKindInfo::new(
        VarKind::Texture2D,
        "sampler2D|sampler2DShadow",
        TEXTURE_2D,
        SAMPLER,
    ),
    VarKindInfo::new(VarKind::Texture3D, "sampler3D", TEXTURE_3D, SAMPLER),
    VarKindInfo::new(
        VarKind::TextureArray,
        "sampler2DArray|sampler2DArrayShadow",
        TEXTURE_ARRAY,
        SAMPLER,
    ),
    VarKindInfo::new(
        VarKind::TextureCubeMap,
        "samplerCube",
        TEXTURE_CUBE_MAP,
        SAMPLER,
    ),
    VarKindInfo::new(VarKind::Image2D, "image2D", &[HostType::TextureImage], IMAGE),
    VarKindInfo::new(VarKind::Image3D, "image3D", &[HostType::TextureImage], IMAGE),
    VarKindInfo::new(
        VarKind::UniformBufferObject,
        "custom",
        &[HostType::BufferObject],
        VALUE,
    ),
    VarKindInfo::new(
        VarKind::ShaderStorageBufferObject,
        "custom",
        &[HostType::BufferObject],
        VALUE,
    ),
];

static GLOBAL: VarTypeRegistry = VarTypeRegistry { entries: &TABLE };

/// Read-only view of the variable kind table
///
/// The registry provides:
/// - Descriptor lookup by kind
/// - Kind lookup by name
/// - Kind lookup by declared GLSL type, for shader reflection
///
/// The table is a compile-time constant, so every view is the same and can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct VarTypeRegistry {
    entries: &'static [VarKindInfo; VarKind::COUNT],
}

impl VarTypeRegistry {
    /// Returns the process-wide registry
    pub fn global() -> &'static VarTypeRegistry {
        &GLOBAL
    }

    /// Looks up the descriptor of a kind
    #[inline]
    pub fn get(&self, kind: VarKind) -> &'static VarKindInfo {
        &self.entries[kind as usize]
    }

    /// Iterates over every descriptor in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &'static VarKindInfo> + use<> {
        let entries: &'static [VarKindInfo] = self.entries;
        entries.iter()
    }

    /// Returns the number of kinds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry holds no kinds
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a kind by its name
    pub fn by_name(&self, name: &str) -> Option<VarKind> {
        name.parse().ok()
    }

    /// Returns every kind one of whose GLSL spellings equals `glsl`
    ///
    /// Scalars and their arrays share a spelling (`float` names both
    /// `Float` and `FloatArray`), so the caller picks using the declaration's
    /// array size.
    pub fn kinds_for_wire_type(&self, glsl: &str) -> Vec<VarKind> {
        self.iter()
            .filter(|info| info.matches_wire_type(glsl))
            .map(|info| info.kind)
            .collect()
    }

    /// Picks the kind of a reflected declaration
    ///
    /// `array` is true when the declaration carries an array size. Matrices
    /// and scalars alike resolve to their `*Array` kind in that case. When no
    /// candidate has the declaration's shape (a single kind, or the two buffer
    /// kinds behind `custom`), the first candidate in table order wins.
    pub fn resolve_declaration(&self, glsl: &str, array: bool) -> Option<VarKind> {
        let candidates = self.kinds_for_wire_type(glsl);
        candidates
            .iter()
            .copied()
            .find(|kind| kind.name().ends_with("Array") == array)
            .or_else(|| candidates.first().copied())
    }
}

impl Default for VarTypeRegistry {
    fn default() -> Self {
        *Self::global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_kind() {
        for (index, info) in TABLE.iter().enumerate() {
            assert_eq!(info.kind as usize, index);
        }
    }

    #[test]
    fn test_global_registry() {
        let registry = VarTypeRegistry::global();
        assert_eq!(registry.len(), VarKind::COUNT);
        assert!(!registry.is_empty());
        assert_eq!(registry.get(VarKind::Vector3).wire_type, "vec3");
    }

    #[test]
    fn test_by_name() {
        let registry = VarTypeRegistry::default();
        assert_eq!(registry.by_name("Image3D"), Some(VarKind::Image3D));
        assert_eq!(registry.by_name("image3D"), None);
    }

    #[test]
    fn test_kinds_for_wire_type() {
        let registry = VarTypeRegistry::global();
        assert_eq!(
            registry.kinds_for_wire_type("float"),
            vec![VarKind::Float, VarKind::FloatArray]
        );
        assert_eq!(
            registry.kinds_for_wire_type("sampler2DArrayShadow"),
            vec![VarKind::TextureArray]
        );
        assert_eq!(
            registry.kinds_for_wire_type("custom"),
            vec![
                VarKind::UniformBufferObject,
                VarKind::ShaderStorageBufferObject
            ]
        );
        assert!(registry.kinds_for_wire_type("dvec3").is_empty());
    }

    #[test]
    fn test_resolve_declaration() {
        let registry = VarTypeRegistry::global();
        assert_eq!(registry.resolve_declaration("mat4", false), Some(VarKind::Matrix4));
        assert_eq!(
            registry.resolve_declaration("mat4", true),
            Some(VarKind::Matrix4Array)
        );
        assert_eq!(registry.resolve_declaration("int", true), Some(VarKind::IntArray));
        assert_eq!(
            registry.resolve_declaration("samplerCube", false),
            Some(VarKind::TextureCubeMap)
        );
        assert_eq!(registry.resolve_declaration("bool", true), Some(VarKind::Boolean));
        assert_eq!(registry.resolve_declaration("uvec2", false), None);
    }

    #[test]
    fn test_resolve_custom_block() {
        let registry = VarTypeRegistry::global();
        assert_eq!(
            registry.resolve_declaration("custom", false),
            Some(VarKind::UniformBufferObject)
        );
        assert_eq!(
            registry.resolve_declaration("custom", true),
            Some(VarKind::UniformBufferObject)
        );
    }
}
