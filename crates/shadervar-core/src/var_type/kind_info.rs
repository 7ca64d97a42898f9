use super::{HostType, HostValue, VarKind};

/// Separator between alternative GLSL spellings in a wire type string
pub const WIRE_TYPE_DELIMITER: char = '|';

/// Classification flags of a variable kind
///
/// Flags left out of a struct literal default to false through
/// `..KindFlags::NONE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindFlags {
    /// Value is a sequence, array or matrix and needs a count-aware upload
    pub multi_element: bool,

    /// Bound through a texture unit as a sampler
    pub texture: bool,

    /// Bound through an image unit for load/store
    pub image: bool,
}

impl KindFlags {
    pub const NONE: KindFlags = KindFlags {
        multi_element: false,
        texture: false,
        image: false,
    };
}

/// Immutable descriptor of a variable kind
///
/// One descriptor exists per [`VarKind`], built at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarKindInfo {
    /// The kind this descriptor belongs to
    pub kind: VarKind,

    /// GLSL spellings separated by [`WIRE_TYPE_DELIMITER`]
    pub wire_type: &'static str,

    /// Host types that may supply a value, in preference order
    pub host_types: &'static [HostType],

    pub flags: KindFlags,
}

impl VarKindInfo {
    /// Creates a descriptor
    pub const fn new(
        kind: VarKind,
        wire_type: &'static str,
        host_types: &'static [HostType],
        flags: KindFlags,
    ) -> Self {
        Self {
            kind,
            wire_type,
            host_types,
            flags,
        }
    }

    /// Iterates over the individual GLSL spellings
    pub fn wire_types(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.wire_type.split(WIRE_TYPE_DELIMITER)
    }

    /// Returns true if `glsl` is one of the accepted GLSL spellings
    pub fn matches_wire_type(&self, glsl: &str) -> bool {
        self.wire_types().any(|name| name == glsl)
    }

    /// Returns true if a value of runtime type `found` may be assigned
    pub fn accepts_type(&self, found: HostType) -> bool {
        self.host_types.iter().any(|&accepted| found.is_a(accepted))
    }

    /// Returns true if `value` may be assigned to a variable of this kind
    pub fn accepts(&self, value: &dyn HostValue) -> bool {
        self.accepts_type(value.host_type())
    }
}

impl std::fmt::Display for VarKindInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.wire_type)
    }
}
