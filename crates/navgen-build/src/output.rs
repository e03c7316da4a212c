//! Artifact sinks.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

///
/// Artifact
///
/// A generated source file addressed by package and name. `source_ids`
/// are the provenance tokens of every input that contributed to it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    pub package: String,
    pub name: String,
    pub source_ids: Vec<String>,
    pub contents: String,
}

///
/// CodeOutput
///

pub trait CodeOutput {
    fn write(&mut self, artifact: &Artifact) -> io::Result<()>;
}

///
/// FsOutput
///
/// Writes `<root>/<package path>/<name>.<extension>`.
///

#[derive(Clone, Debug)]
pub struct FsOutput {
    root: PathBuf,
    extension: String,
}

impl FsOutput {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_for(&self, artifact: &Artifact) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(artifact.package.split('.').filter(|part| !part.is_empty()));
        path.push(format!("{}.{}", artifact.name, self.extension));

        path
    }
}

impl CodeOutput for FsOutput {
    fn write(&mut self, artifact: &Artifact) -> io::Result<()> {
        let path = self.path_for(artifact);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(&path)?;
        file.write_all(artifact.contents.as_bytes())?;

        debug!(path = %path.display(), sources = artifact.source_ids.len(), "wrote artifact");

        Ok(())
    }
}

///
/// MemoryOutput
///

#[derive(Clone, Debug, Default)]
pub struct MemoryOutput {
    pub artifacts: Vec<Artifact>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}

impl CodeOutput for MemoryOutput {
    fn write(&mut self, artifact: &Artifact) -> io::Result<()> {
        self.artifacts.push(artifact.clone());

        Ok(())
    }
}
