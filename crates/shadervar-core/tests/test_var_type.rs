//! Integration tests for the variable kind registry

use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
use shadervar_core::var_type::{
    BindingPath, BufferHandle, BufferLayout, ColorRgba, HostType, HostValue, ImageAccess,
    ImageHandle, TextureHandle, TextureTarget, VarKind, VarTypeRegistry, WIRE_TYPE_DELIMITER,
};

const ARRAY_AND_MATRIX_KINDS: [VarKind; 9] = [
    VarKind::IntArray,
    VarKind::FloatArray,
    VarKind::Vector2Array,
    VarKind::Vector3Array,
    VarKind::Vector4Array,
    VarKind::Matrix3,
    VarKind::Matrix4,
    VarKind::Matrix3Array,
    VarKind::Matrix4Array,
];

#[test]
fn test_every_kind_has_wire_type_tokens() {
    for kind in VarKind::iter() {
        assert!(!kind.wire_type().is_empty(), "{kind} has an empty wire type");

        let tokens: Vec<_> = kind.wire_type().split(WIRE_TYPE_DELIMITER).collect();
        assert!(!tokens.is_empty());
        assert!(
            tokens.iter().all(|token| !token.is_empty()),
            "{kind} has an empty GLSL spelling"
        );
        assert_eq!(kind.wire_types().collect::<Vec<_>>(), tokens);
    }
}

#[test]
fn test_texture_and_image_are_exclusive() {
    for kind in VarKind::iter() {
        assert!(
            !(kind.is_texture() && kind.is_image()),
            "{kind} is both a texture and an image"
        );
    }
}

#[test]
fn test_multi_element_exactly_for_arrays_and_matrices() {
    for kind in VarKind::iter() {
        assert_eq!(
            kind.uses_multi_element(),
            ARRAY_AND_MATRIX_KINDS.contains(&kind),
            "unexpected multi-element flag on {kind}"
        );
    }
}

#[test]
fn test_vector3_accepts_only_vec3() {
    assert!(VarKind::Vector3.accepts(&Vec3::new(1.0, 2.0, 3.0)));
    assert!(!VarKind::Vector3.accepts(&Vec4::new(1.0, 2.0, 3.0, 4.0)));
    assert!(!VarKind::Vector3.accepts(&vec![Vec3::ZERO]));
}

#[test]
fn test_vector4_accepts_color() {
    assert!(VarKind::Vector4.accepts(&Vec4::ONE));
    assert!(VarKind::Vector4.accepts(&ColorRgba::WHITE));
    assert!(!VarKind::Vector4Array.accepts(&ColorRgba::WHITE));
}

#[test]
fn test_texture_kinds_accept_any_texture() {
    let cube = TextureHandle::new(1, TextureTarget::CubeMap);
    let flat = TextureHandle::new(2, TextureTarget::TwoD);

    assert!(VarKind::Texture2D.accepts(&flat));
    assert!(VarKind::Texture2D.accepts(&cube));
    assert!(VarKind::Texture3D.accepts(&flat));
    assert!(VarKind::TextureCubeMap.accepts(&cube));
    assert!(VarKind::TextureArray.accepts(&cube));
}

#[test]
fn test_texture_buffer_never_accepts() {
    let flat = TextureHandle::new(2, TextureTarget::TwoD);

    assert!(VarKind::TextureBuffer.host_types().is_empty());
    assert!(VarKind::TextureBuffer.is_texture());
    assert!(!VarKind::TextureBuffer.accepts(&flat));
    assert!(!VarKind::TextureBuffer.accepts(&1.0_f32));
}

#[test]
fn test_images_accept_image_handles_only() {
    let texture = TextureHandle::new(4, TextureTarget::ThreeD);
    let image = ImageHandle::new(texture, 0, ImageAccess::ReadWrite);

    assert!(VarKind::Image3D.accepts(&image));
    assert!(VarKind::Image2D.accepts(&image));
    assert!(!VarKind::Image3D.accepts(&texture));
    assert!(!VarKind::Texture3D.accepts(&image));
}

#[test]
fn test_image_access_does_not_change_acceptance() {
    let texture = TextureHandle::new(5, TextureTarget::TwoD);
    for access in [ImageAccess::ReadOnly, ImageAccess::WriteOnly, ImageAccess::ReadWrite] {
        let image = ImageHandle::new(texture, 1, access);
        assert_eq!(image.host_type(), HostType::TextureImage);
        assert!(VarKind::Image2D.accepts(&image));
    }
}

#[test]
fn test_uniform_buffer_host_types() {
    assert_eq!(
        VarKind::UniformBufferObject.host_types(),
        &[HostType::BufferObject]
    );

    let buffer = BufferHandle::new(9, BufferLayout::Std140);
    assert!(VarKind::UniformBufferObject.accepts(&buffer));
    assert!(VarKind::ShaderStorageBufferObject.accepts(&buffer));
    assert!(!VarKind::UniformBufferObject.accepts(&Vec4::ZERO));
}

#[test]
fn test_scalar_and_array_kinds() {
    assert!(VarKind::Float.accepts(&0.5_f32));
    assert!(!VarKind::Float.accepts(&1_i32));
    assert!(VarKind::Int.accepts(&1_i32));
    assert!(VarKind::Boolean.accepts(&false));

    let ints: &[i32] = &[1, 2, 3];
    assert!(VarKind::IntArray.accepts(&ints));
    assert!(VarKind::FloatArray.accepts(&vec![0.0_f32; 4]));
    assert!(!VarKind::FloatArray.accepts(&0.0_f32));
    assert!(VarKind::Vector2Array.accepts(&vec![Vec2::X, Vec2::Y]));
}

#[test]
fn test_matrix_kinds() {
    assert!(VarKind::Matrix3.accepts(&Mat3::IDENTITY));
    assert!(!VarKind::Matrix3.accepts(&Mat4::IDENTITY));
    assert!(VarKind::Matrix4Array.accepts(&vec![Mat4::IDENTITY; 2]));
    assert!(!VarKind::Matrix4Array.accepts(&Mat4::IDENTITY));
}

#[test]
fn test_queries_are_idempotent() {
    for kind in VarKind::iter() {
        assert_eq!(kind.wire_type(), kind.wire_type());
        assert_eq!(kind.host_types(), kind.host_types());
        assert_eq!(kind.is_texture(), kind.is_texture());
        assert_eq!(kind.is_image(), kind.is_image());
        assert_eq!(kind.uses_multi_element(), kind.uses_multi_element());
        assert!(std::ptr::eq(kind.info(), kind.info()));
    }
}

#[test]
fn test_every_kind_is_reachable() {
    let registry = VarTypeRegistry::global();
    let kinds: Vec<_> = registry.iter().map(|info| info.kind).collect();
    assert_eq!(kinds, VarKind::ALL);

    for kind in VarKind::iter() {
        assert_eq!(registry.get(kind), kind.info());
        assert_eq!(registry.by_name(kind.name()), Some(kind));
    }
}

#[test]
fn test_only_buffer_texture_has_no_host_types() {
    let empty: Vec<_> = VarKind::iter()
        .filter(|kind| kind.host_types().is_empty())
        .collect();
    assert_eq!(empty, vec![VarKind::TextureBuffer]);
}

#[test]
fn test_reflection_round_trip() {
    let registry = VarTypeRegistry::global();
    for kind in VarKind::iter() {
        for glsl in kind.wire_types() {
            assert!(
                registry.kinds_for_wire_type(glsl).contains(&kind),
                "`{glsl}` does not lead back to {kind}"
            );
        }
    }
}

#[test]
fn test_binding_paths_follow_flags() {
    for kind in VarKind::iter() {
        let path = kind.binding_path();
        assert_eq!(path == BindingPath::Sampler, kind.is_texture());
        assert_eq!(path == BindingPath::Image, kind.is_image());
        if path.is_value_copy() {
            assert_eq!(path == BindingPath::Array, kind.uses_multi_element());
        }
    }
}

#[test]
fn test_kinds_serialize_by_name() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Param {
        kind: VarKind,
    }

    let value: Param = toml::from_str("kind = \"TextureCubeMap\"").unwrap();
    assert_eq!(value.kind, VarKind::TextureCubeMap);
    assert!(toml::from_str::<Param>("kind = \"Sampler\"").is_err());
}
