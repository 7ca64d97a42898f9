//! shadervar CLI library for testing and reusability.

pub mod report;
pub mod utils;

pub use shadervar_utils::Config;
