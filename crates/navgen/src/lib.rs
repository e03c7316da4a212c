//! ## Crate layout
//! - `schema`: descriptor model, graph assembly and validation.
//! - `build`: templates, capability variants, rendering and output sinks.
//! - `config`: `navgen.toml` loading and env overrides.
//!
//! [`generate`] wires them together for a config: read the descriptor
//! manifest and templates from disk, render, and write the artifacts.

mod macros;

pub use navgen_build as build;
pub use navgen_config_build as config;
pub use navgen_schema as schema;

use navgen_build::{
    Capabilities, FsOutput, Generated, GeneratorOptions, TemplateSources, Templates,
    template::TemplateError,
};
use navgen_config_build::{Config, ConfigError, TemplatePaths};
use navgen_schema::node::DestinationDescriptor;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::info;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error(transparent)]
    Build(#[from] navgen_build::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid destination manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Generator options named by a config.
#[must_use]
pub fn options(config: &Config) -> GeneratorOptions {
    GeneratorOptions {
        package: config.output.package.clone(),
        aggregate_name: config.output.aggregate_name.clone(),
        sealed_destination_name: config.output.sealed_destination_name.clone(),
        nav_graph_type: config.naming.nav_graph_type.clone(),
        nav_graphs_object: config.naming.nav_graphs_object.clone(),
    }
}

#[must_use]
pub const fn capabilities(config: &Config) -> Capabilities {
    Capabilities::new(config.capabilities.animation, config.capabilities.material)
}

/// Read a JSON array of destination descriptors.
pub fn load_manifest(path: &Path) -> Result<Vec<DestinationDescriptor>, Error> {
    let source = read(path)?;

    serde_json::from_str(&source).map_err(|source| Error::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse every template named by the config.
pub fn load_templates(paths: &TemplatePaths) -> Result<Templates, Error> {
    let sources = TemplateSources {
        aggregate: read(&paths.aggregate)?,
        sealed_destination: read(&paths.sealed_destination)?,
        inner_nav_host: read(&paths.inner_nav_host)?,
        inner_animated_nav_host: read(&paths.inner_animated_nav_host)?,
        imports: read_imports(&paths.imports)?,
        animated_imports: read_imports(&paths.animated_imports)?,
    };

    Ok(Templates::parse(&sources)?)
}

/// Generate and write both artifacts for a loaded config.
pub fn generate(config: &Config) -> Result<Generated, Error> {
    let descriptors = load_manifest(&config.input.manifest)?;
    let templates = load_templates(&config.templates)?;
    let mut output = FsOutput::new(&config.output.directory, &config.output.file_extension);

    let generated = navgen_build::process(
        &descriptors,
        capabilities(config),
        &templates,
        &options(config),
        &mut output,
    )?;

    info!(directory = %output.root().display(), "navgen output written");

    Ok(generated)
}

/// Discover the config in `dir`, apply env overrides, and generate.
pub fn generate_from_dir(dir: &Path) -> Result<Generated, Error> {
    let mut config = Config::discover(dir)?;
    config.apply_env_overrides()?;

    generate(&config)
}

/// [`generate_from_dir`] plus the cargo directives a build script needs.
pub fn build_script(dir: &Path) -> Result<Generated, Error> {
    let mut config = Config::discover(dir)?;
    config.apply_env_overrides()?;

    println!(
        "cargo:rerun-if-changed={}",
        dir.join(navgen_config_build::CONFIG_FILE_NAME).display()
    );
    println!("cargo:rerun-if-env-changed={}", navgen_config_build::ANIMATION_ENV);
    println!("cargo:rerun-if-env-changed={}", navgen_config_build::MATERIAL_ENV);
    for path in watched_paths(&config) {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    generate(&config)
}

fn watched_paths(config: &Config) -> [&Path; 7] {
    let t = &config.templates;

    [
        &config.input.manifest,
        &t.aggregate,
        &t.sealed_destination,
        &t.inner_nav_host,
        &t.inner_animated_nav_host,
        &t.imports,
        &t.animated_imports,
    ]
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

// One import per line; blank lines and `#` comments are skipped.
fn read_imports(path: &Path) -> Result<Vec<String>, Error> {
    Ok(parse_imports(&read(path)?))
}

fn parse_imports(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.strip_prefix("import ").unwrap_or(line).trim().to_string())
        .collect()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_lists_skip_comments_and_prefixes() {
        let imports = parse_imports(
            "# navigation\nimport androidx.navigation.NavHostController\n\n  androidx.compose.runtime.Composable  \n",
        );

        assert_eq!(
            imports,
            vec![
                "androidx.navigation.NavHostController",
                "androidx.compose.runtime.Composable",
            ]
        );
    }

    #[test]
    fn options_follow_config_names() {
        let mut config = Config::default();
        config.output.package = "com.example.nav".to_string();
        config.naming.nav_graphs_object = "Graphs".to_string();

        let options = options(&config);

        assert_eq!(options.package, "com.example.nav");
        assert_eq!(options.nav_graphs_object, "Graphs");
        assert_eq!(options.aggregate_name, "Destinations");
    }
}
