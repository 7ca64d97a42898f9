//! Material manifest handling for shadervar.
//!
//! A manifest (`shadervar.toml`) declares the parameters of a material by
//! variable kind, optionally with the GLSL spelling used in the shader source
//! and a default value.

pub mod config;
pub mod param_value;

pub use config::{Config, Issue, Material, ParamDecl, CONFIG_FILE_NAME};
pub use param_value::ParamValue;
