//! Default values written in a manifest.

use anyhow::{Context, Result, bail};
use glam::{Mat3, Mat4, Vec2, Vec3, Vec4};
use shadervar_core::var_type::{ColorRgba, HostType, HostValue, VarKind};
use toml::Value;

/// A parameter value parsed from its TOML literal
///
/// [`ParamValue::from_toml`] follows the literal's shape alone, so a mismatch
/// with the declared kind can be reported:
///
/// | literal                    | value         |
/// |----------------------------|---------------|
/// | `1.5`                      | `Float`       |
/// | `3`                        | `Int`         |
/// | `true`                     | `Bool`        |
/// | `[x, y]` .. `[x, y, z, w]` | `Vector2..4`  |
/// | other integer arrays       | `IntArray`    |
/// | other number arrays        | `FloatArray`  |
/// | `[[x, y], [x, y]]`         | `Vector2Array` (3 and 4 likewise) |
/// | `{ rgba = [r, g, b, a] }`  | `Color`       |
///
/// [`ParamValue::for_kind`] reads the literal as the declared kind first where
/// the shape alone is ambiguous: an integer for a `Float`, a short number
/// array for an `IntArray` or `FloatArray`, and nested arrays of columns for
/// the matrix kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Vector2(Vec2),
    Vector3(Vec3),
    Vector4(Vec4),
    Color(ColorRgba),
    IntArray(Vec<i32>),
    FloatArray(Vec<f32>),
    Vector2Array(Vec<Vec2>),
    Vector3Array(Vec<Vec3>),
    Vector4Array(Vec<Vec4>),
    Matrix3(Mat3),
    Matrix4(Mat4),
    Matrix3Array(Vec<Mat3>),
    Matrix4Array(Vec<Mat4>),
}

impl ParamValue {
    /// Parses a TOML literal as a default for `kind`.
    ///
    /// Literals that cannot be read as `kind` fall back to
    /// [`ParamValue::from_toml`], leaving the mismatch to the kind check.
    ///
    /// # Errors
    /// Returns an error if the literal cannot be read at all.
    pub fn for_kind(value: &Value, kind: VarKind) -> Result<Self> {
        match (kind, value) {
            (VarKind::Float, Value::Integer(v)) => Ok(Self::Float(*v as f32)),
            (VarKind::IntArray, Value::Array(items))
                if !items.is_empty() && items.iter().all(Value::is_integer) =>
            {
                Ok(Self::IntArray(ints_of(items)?))
            }
            (VarKind::FloatArray, Value::Array(items))
                if !items.is_empty() && items.iter().all(is_number) =>
            {
                Ok(Self::FloatArray(numbers_of(items)?))
            }
            (VarKind::Matrix3, Value::Array(_)) => {
                Ok(Self::Matrix3(Mat3::from_cols_slice(&columns(value, 3)?)))
            }
            (VarKind::Matrix4, Value::Array(_)) => {
                Ok(Self::Matrix4(Mat4::from_cols_slice(&columns(value, 4)?)))
            }
            (VarKind::Matrix3Array, Value::Array(items)) if !items.is_empty() => items
                .iter()
                .map(|m| columns(m, 3).map(|cols| Mat3::from_cols_slice(&cols)))
                .collect::<Result<Vec<_>>>()
                .map(Self::Matrix3Array),
            (VarKind::Matrix4Array, Value::Array(items)) if !items.is_empty() => items
                .iter()
                .map(|m| columns(m, 4).map(|cols| Mat4::from_cols_slice(&cols)))
                .collect::<Result<Vec<_>>>()
                .map(Self::Matrix4Array),
            _ => Self::from_toml(value),
        }
    }

    /// Parses a TOML literal.
    ///
    /// # Errors
    /// Returns an error for strings, dates, empty arrays, ragged or mixed
    /// arrays, integers outside the `i32` range, floats outside the `f32`
    /// range and tables other than `{ rgba = [..] }`.
    pub fn from_toml(value: &Value) -> Result<Self> {
        match value {
            Value::Float(v) => Ok(Self::Float(finite(*v)?)),
            Value::Integer(v) => {
                let v = i32::try_from(*v).with_context(|| format!("{v} does not fit an int"))?;
                Ok(Self::Int(v))
            }
            Value::Boolean(v) => Ok(Self::Bool(*v)),
            Value::Array(items) => Self::from_array(items),
            Value::Table(table) => {
                let Some(rgba) = table.get("rgba") else {
                    bail!("tables are only supported as `{{ rgba = [r, g, b, a] }}`");
                };
                let components = numbers(rgba)?;
                let Ok(rgba) = <[f32; 4]>::try_from(components.as_slice()) else {
                    bail!("rgba needs 4 components, got {}", components.len());
                };
                Ok(Self::Color(ColorRgba::from(rgba)))
            }
            other => bail!("unsupported {} literal", other.type_str()),
        }
    }

    fn from_array(items: &[Value]) -> Result<Self> {
        let Some(first) = items.first() else {
            bail!("empty arrays have no element type");
        };

        if first.is_array() {
            let rows = items.iter().map(numbers).collect::<Result<Vec<_>>>()?;
            let width = rows[0].len();
            if rows.iter().any(|row| row.len() != width) {
                bail!("vector arrays need rows of equal length");
            }
            return match width {
                2 => Ok(Self::Vector2Array(rows.iter().map(|r| Vec2::from_slice(r)).collect())),
                3 => Ok(Self::Vector3Array(rows.iter().map(|r| Vec3::from_slice(r)).collect())),
                4 => Ok(Self::Vector4Array(rows.iter().map(|r| Vec4::from_slice(r)).collect())),
                n => bail!("vector arrays need rows of 2, 3 or 4 components, got {n}"),
            };
        }

        let values = numbers_of(items)?;
        match values.as_slice() {
            [x, y] => Ok(Self::Vector2(Vec2::new(*x, *y))),
            [x, y, z] => Ok(Self::Vector3(Vec3::new(*x, *y, *z))),
            [x, y, z, w] => Ok(Self::Vector4(Vec4::new(*x, *y, *z, *w))),
            _ if items.iter().all(Value::is_integer) => Ok(Self::IntArray(ints_of(items)?)),
            _ => Ok(Self::FloatArray(values)),
        }
    }
}

fn numbers(value: &Value) -> Result<Vec<f32>> {
    match value.as_array() {
        Some(items) => numbers_of(items),
        None => bail!("expected an array of numbers, got {}", value.type_str()),
    }
}

fn is_number(value: &Value) -> bool {
    value.is_integer() || value.is_float()
}

fn finite(v: f64) -> Result<f32> {
    let narrowed = v as f32;
    if !narrowed.is_finite() {
        bail!("{v:e} is not a finite float");
    }
    Ok(narrowed)
}

fn ints_of(items: &[Value]) -> Result<Vec<i32>> {
    items
        .iter()
        .map(|item| match item {
            Value::Integer(v) => {
                i32::try_from(*v).with_context(|| format!("{v} does not fit an int"))
            }
            other => bail!("expected an integer, got {}", other.type_str()),
        })
        .collect()
}

/// Flattens an `n` x `n` array of columns in column-major order.
fn columns(value: &Value, n: usize) -> Result<Vec<f32>> {
    let Some(cols) = value.as_array() else {
        bail!("expected an array of columns, got {}", value.type_str());
    };
    if cols.len() != n {
        bail!("a {n}x{n} matrix needs {n} columns, got {}", cols.len());
    }
    let mut flat = Vec::with_capacity(n * n);
    for col in cols {
        let col = numbers(col)?;
        if col.len() != n {
            bail!("a {n}x{n} matrix needs columns of {n} components, got {}", col.len());
        }
        flat.extend(col);
    }
    Ok(flat)
}

fn numbers_of(items: &[Value]) -> Result<Vec<f32>> {
    items
        .iter()
        .map(|item| match item {
            Value::Float(v) => finite(*v),
            Value::Integer(v) => Ok(*v as f32),
            other => bail!("expected a number, got {}", other.type_str()),
        })
        .collect()
}

impl HostValue for ParamValue {
    fn host_type(&self) -> HostType {
        match self {
            Self::Float(v) => v.host_type(),
            Self::Int(v) => v.host_type(),
            Self::Bool(v) => v.host_type(),
            Self::Vector2(v) => v.host_type(),
            Self::Vector3(v) => v.host_type(),
            Self::Vector4(v) => v.host_type(),
            Self::Color(v) => v.host_type(),
            Self::IntArray(v) => v.host_type(),
            Self::FloatArray(v) => v.host_type(),
            Self::Vector2Array(v) => v.host_type(),
            Self::Vector3Array(v) => v.host_type(),
            Self::Vector4Array(v) => v.host_type(),
            Self::Matrix3(v) => v.host_type(),
            Self::Matrix4(v) => v.host_type(),
            Self::Matrix3Array(v) => v.host_type(),
            Self::Matrix4Array(v) => v.host_type(),
        }
    }
}
