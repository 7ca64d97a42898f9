//! Core types for shadervar.
//!
//! This crate holds the closed set of shader variable kinds, the host value
//! types each kind accepts, and the classification flags uniform binders use
//! to pick an upload path.

pub mod error;
pub mod var_type;

pub use error::{Error, Result};
pub use var_type::{HostType, HostValue, VarKind, VarKindInfo};
