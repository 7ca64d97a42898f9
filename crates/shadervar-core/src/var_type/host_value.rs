use super::{BufferHandle, HostType, ImageHandle, TextureHandle};
use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A value that can be handed to a uniform binder
///
/// The binder never inspects the value itself through this trait; it only
/// needs the runtime host type to decide whether a variable kind accepts it.
pub trait HostValue {
    /// Returns the runtime host type of this value
    fn host_type(&self) -> HostType;
}

/// Linear RGBA color
///
/// Accepted wherever a `vec4` is, but kept distinct from [`Vec4`] so color
/// parameters can be recognised as such.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub const WHITE: ColorRgba = ColorRgba::new(1.0, 1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for ColorRgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<ColorRgba> for Vec4 {
    fn from(color: ColorRgba) -> Self {
        Vec4::from_array(color.to_array())
    }
}

macro_rules! impl_host_value {
    ($($ty:ty => $host:ident),* $(,)?) => {
        $(
            impl HostValue for $ty {
                fn host_type(&self) -> HostType {
                    HostType::$host
                }
            }
        )*
    };
}

impl_host_value! {
    f32 => Float,
    i32 => Int,
    bool => Bool,
    Vec2 => Vector2,
    Vec3 => Vector3,
    Vec4 => Vector4,
    ColorRgba => ColorRgba,
    Mat3 => Matrix3,
    Mat4 => Matrix4,

    [i32] => IntArray,
    Vec<i32> => IntArray,
    [f32] => FloatArray,
    Vec<f32> => FloatArray,
    [Vec2] => Vector2Array,
    Vec<Vec2> => Vector2Array,
    [Vec3] => Vector3Array,
    Vec<Vec3> => Vector3Array,
    [Vec4] => Vector4Array,
    Vec<Vec4> => Vector4Array,
    [Mat3] => Matrix3Array,
    Vec<Mat3> => Matrix3Array,
    [Mat4] => Matrix4Array,
    Vec<Mat4> => Matrix4Array,

    ImageHandle => TextureImage,
    BufferHandle => BufferObject,
}

impl HostValue for TextureHandle {
    fn host_type(&self) -> HostType {
        self.target.host_type()
    }
}

impl<T: HostValue + ?Sized> HostValue for &T {
    fn host_type(&self) -> HostType {
        (**self).host_type()
    }
}

impl<T: HostValue + ?Sized> HostValue for Box<T> {
    fn host_type(&self) -> HostType {
        (**self).host_type()
    }
}
