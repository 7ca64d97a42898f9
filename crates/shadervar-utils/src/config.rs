//! Manifest file handling for shadervar materials.

use crate::ParamValue;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shadervar_core::var_type::{BindingPath, VarKind};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the manifest file searched for by [`Config::find`].
pub const CONFIG_FILE_NAME: &str = "shadervar.toml";

/// Represents the shadervar.toml manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub material: Material,

    #[serde(default, rename = "param", skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// A material parameter declared by variable kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDecl {
    pub name: String,
    pub kind: VarKind,

    /// GLSL spelling used by the shader source, e.g. `sampler2DShadow`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glsl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<toml::Value>,
}

impl ParamDecl {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: VarKind) -> Self {
        Self {
            name: name.into(),
            kind,
            glsl: None,
            default: None,
        }
    }

    #[must_use]
    pub fn with_glsl(mut self, glsl: impl Into<String>) -> Self {
        self.glsl = Some(glsl.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<toml::Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A problem found while validating a manifest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Issue {
    #[error("parameter `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("parameter `{param}` is declared as `{declared}` but {kind} is spelled `{expected}`")]
    WireTypeMismatch {
        param: String,
        kind: VarKind,
        declared: String,
        expected: &'static str,
    },

    #[error("parameter `{param}` is bound as a {path} and cannot have a default value")]
    DefaultOnResource { param: String, path: BindingPath },

    #[error("parameter `{param}` has an unreadable default: {reason}")]
    UnreadableDefault { param: String, reason: String },

    #[error("parameter `{param}` has an incompatible default: {source}")]
    IncompatibleDefault {
        param: String,
        source: shadervar_core::Error,
    },
}

impl Config {
    /// Creates a new manifest with the given material name and no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            material: Material {
                name: name.into(),
                version: default_version(),
            },
            params: Vec::new(),
        }
    }

    /// Appends a parameter declaration.
    #[must_use]
    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    /// Loads a manifest from a shadervar.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading manifest from {}", path.display());

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves the manifest to a shadervar.toml file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize manifest")?;

        fs::write(path.as_ref(), contents)
            .with_context(|| format!("Failed to write {}", path.as_ref().display()))
    }

    /// Finds the shadervar.toml file starting from the current directory.
    ///
    /// # Errors
    /// Returns an error if no shadervar.toml is found in the current or parent directories.
    pub fn find() -> Result<(Self, std::path::PathBuf)> {
        let mut current_dir =
            std::env::current_dir().with_context(|| "Failed to get current directory")?;

        loop {
            let config_path = current_dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                anyhow::bail!(
                    "Could not find {CONFIG_FILE_NAME} in current directory or any parent directory"
                );
            }
        }
    }

    /// Looks up a parameter declaration by name.
    pub fn param(&self, name: &str) -> Option<&ParamDecl> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Checks every parameter declaration against the variable kind table.
    ///
    /// Returns the problems in declaration order; an empty list means the
    /// manifest is valid.
    pub fn validate(&self) -> Vec<Issue> {
        log::debug!(
            "validating {} parameter(s) of `{}`",
            self.params.len(),
            self.material.name
        );

        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for param in &self.params {
            if !seen.insert(param.name.as_str()) {
                issues.push(Issue::DuplicateName(param.name.clone()));
            }

            if let Some(glsl) = &param.glsl {
                if !param.kind.matches_wire_type(glsl) {
                    issues.push(Issue::WireTypeMismatch {
                        param: param.name.clone(),
                        kind: param.kind,
                        declared: glsl.clone(),
                        expected: param.kind.wire_type(),
                    });
                }
            }

            if let Some(default) = &param.default {
                issues.extend(check_default(param, default));
            }
        }

        for issue in &issues {
            log::debug!("{issue}");
        }
        issues
    }
}

fn check_default(param: &ParamDecl, default: &toml::Value) -> Option<Issue> {
    let path = param.kind.binding_path();
    if path.is_resource() {
        return Some(Issue::DefaultOnResource {
            param: param.name.clone(),
            path,
        });
    }

    match ParamValue::for_kind(default, param.kind) {
        Ok(value) => param
            .kind
            .check_value(Some(&value))
            .err()
            .map(|source| Issue::IncompatibleDefault {
                param: param.name.clone(),
                source,
            }),
        Err(err) => Some(Issue::UnreadableDefault {
            param: param.name.clone(),
            reason: format!("{err:#}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names() {
        let config = Config::new("Dup")
            .with_param(ParamDecl::new("Color", VarKind::Vector4))
            .with_param(ParamDecl::new("Color", VarKind::Vector4));
        assert_eq!(
            config.validate(),
            vec![Issue::DuplicateName("Color".to_string())]
        );
    }

    #[test]
    fn test_glsl_spelling_variants() {
        let config = Config::new("Shadow")
            .with_param(ParamDecl::new("ShadowMap", VarKind::Texture2D).with_glsl("sampler2DShadow"))
            .with_param(ParamDecl::new("Volume", VarKind::Texture3D).with_glsl("sampler2D"));

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            Issue::WireTypeMismatch { param, expected: "sampler3D", .. } if param == "Volume"
        ));
    }

    #[test]
    fn test_default_on_resource() {
        let config = Config::new("Res")
            .with_param(ParamDecl::new("Lights", VarKind::UniformBufferObject).with_default(1_i64));
        assert_eq!(
            config.validate(),
            vec![Issue::DefaultOnResource {
                param: "Lights".to_string(),
                path: BindingPath::Block,
            }]
        );
    }

    #[test]
    fn test_param_lookup() {
        let config = Config::new("Lookup").with_param(ParamDecl::new("Alpha", VarKind::Float));
        assert_eq!(config.param("Alpha").map(|p| p.kind), Some(VarKind::Float));
        assert!(config.param("Beta").is_none());
    }
}
