//! Error types and result aliases for shadervar.

use crate::var_type::{HostType, VarKind};
use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shadervar.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown variable kind `{0}`")]
    #[diagnostic(
        code(shadervar::unknown_kind),
        help("run `shadervar list` to see every variable kind")
    )]
    UnknownKind(String),

    #[error("{kind} expects a value but none was supplied")]
    #[diagnostic(code(shadervar::missing_value))]
    MissingValue { kind: VarKind },

    #[error("{kind} expects `{expected}` but received {found}")]
    #[diagnostic(code(shadervar::incompatible_value))]
    IncompatibleValue {
        kind: VarKind,
        expected: &'static str,
        found: HostType,
    },
}

/// Result type alias using the shadervar Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_value_message() {
        let err = Error::IncompatibleValue {
            kind: VarKind::Vector3,
            expected: VarKind::Vector3.wire_type(),
            found: HostType::Vector4,
        };
        assert_eq!(err.to_string(), "Vector3 expects `vec3` but received Vector4");
    }

    #[test]
    fn test_missing_value_message() {
        let err = Error::MissingValue {
            kind: VarKind::Texture2D,
        };
        assert_eq!(
            err.to_string(),
            "Texture2D expects a value but none was supplied"
        );
    }
}
