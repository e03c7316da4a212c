//! `navgen.toml` configuration.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration. Relative paths are resolved against the directory
//! holding the config file.

use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

/// Name of the config file looked up by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = "navgen.toml";

/// Env var forcing the animation capability on or off.
pub const ANIMATION_ENV: &str = "NAVGEN_ANIMATION";

/// Env var forcing the material capability on or off.
pub const MATERIAL_ENV: &str = "NAVGEN_MATERIAL";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("{var} must be a flag (1/0, true/false, yes/no, on/off), got '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub naming: NamingConfig,
    pub capabilities: CapabilitiesConfig,
    pub templates: TemplatePaths,
    pub input: InputConfig,
}

/// `[output]` section.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub package: String,
    pub aggregate_name: String,
    pub sealed_destination_name: String,
    pub file_extension: String,
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            package: "destinations".to_string(),
            aggregate_name: "Destinations".to_string(),
            sealed_destination_name: "Destination".to_string(),
            file_extension: "kt".to_string(),
            directory: PathBuf::from("generated"),
        }
    }
}

/// `[naming]` section.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub nav_graph_type: String,
    pub nav_graphs_object: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            nav_graph_type: "NavGraph".to_string(),
            nav_graphs_object: "NavGraphs".to_string(),
        }
    }
}

/// `[capabilities]` section.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapabilitiesConfig {
    pub animation: bool,
    pub material: bool,
}

/// `[templates]` section. Import lists hold one import per line.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatePaths {
    pub aggregate: PathBuf,
    pub sealed_destination: PathBuf,
    pub inner_nav_host: PathBuf,
    pub inner_animated_nav_host: PathBuf,
    pub imports: PathBuf,
    pub animated_imports: PathBuf,
}

impl Default for TemplatePaths {
    fn default() -> Self {
        Self {
            aggregate: PathBuf::from("templates/aggregate.kt.tmpl"),
            sealed_destination: PathBuf::from("templates/destination.kt.tmpl"),
            inner_nav_host: PathBuf::from("templates/inner_nav_host.kt.tmpl"),
            inner_animated_nav_host: PathBuf::from("templates/inner_animated_nav_host.kt.tmpl"),
            imports: PathBuf::from("templates/imports.txt"),
            animated_imports: PathBuf::from("templates/animated_imports.txt"),
        }
    }
}

/// `[input]` section.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// JSON array of destination descriptors.
    pub manifest: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("destinations.json"),
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Load a config file, resolving relative paths against its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        debug!(path = %path.display(), "loaded navgen config");

        Ok(config.resolved(base))
    }

    /// Load `navgen.toml` from `dir`, or fall back to defaults rooted there.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            debug!(dir = %dir.display(), "no navgen config found, using defaults");
            Ok(Self::default().resolved(dir))
        }
    }

    /// Apply capability overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply capability overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ANIMATION_ENV) {
            self.capabilities.animation = parse_flag(ANIMATION_ENV, &value)?;
        }
        if let Some(value) = lookup(MATERIAL_ENV) {
            self.capabilities.material = parse_flag(MATERIAL_ENV, &value)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let output = &self.output;

        if output.package.is_empty() || !output.package.split('.').all(is_identifier) {
            return Err(invalid(
                "output.package",
                &output.package,
                "must be dot-separated identifiers",
            ));
        }

        for (field, value) in [
            ("output.aggregate_name", &output.aggregate_name),
            ("output.sealed_destination_name", &output.sealed_destination_name),
            ("naming.nav_graph_type", &self.naming.nav_graph_type),
            ("naming.nav_graphs_object", &self.naming.nav_graphs_object),
        ] {
            if !is_identifier(value) {
                return Err(invalid(field, value, "must be an identifier"));
            }
        }

        if output.aggregate_name == output.sealed_destination_name {
            return Err(invalid(
                "output.sealed_destination_name",
                &output.sealed_destination_name,
                "must differ from output.aggregate_name",
            ));
        }

        if output.file_extension.is_empty()
            || !output.file_extension.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(invalid(
                "output.file_extension",
                &output.file_extension,
                "must be a non-empty alphanumeric extension",
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn resolved(mut self, base: &Path) -> Self {
        let t = &mut self.templates;
        for path in [
            &mut self.output.directory,
            &mut self.input.manifest,
            &mut t.aggregate,
            &mut t.sealed_destination,
            &mut t.inner_nav_host,
            &mut t.inner_animated_nav_host,
            &mut t.imports,
            &mut t.animated_imports,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }

        self
    }
}

fn invalid(field: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        value: value.to_string(),
        reason,
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}

///
/// TESTS
///
