//! Command implementations for the shadervar CLI.

pub mod check;
pub mod init;
pub mod list;
pub mod match_type;
pub mod show;
