//! Navigation graph model and assembly.
//!
//! Destination descriptors arrive as a flat list. This crate regroups them
//! into nav graphs, resolves each graph's start destination, derives field
//! identifiers from routes, and validates the result before anything is
//! rendered.

pub mod build;
pub mod error;
pub mod node;
pub mod sanitize;
pub mod token;
pub mod validate;

/// Route of the reserved top-level graph.
pub const ROOT_GRAPH_ROUTE: &str = "root";

use crate::build::BuildError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        ROOT_GRAPH_ROUTE,
        error::{ErrorTree, SetupError},
        node::*,
        sanitize::sanitize,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),
}

impl Error {
    /// Validation issues collected during assembly, if this is a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&error::ErrorTree> {
        match self {
            Self::BuildError(BuildError::Validation(tree)) => Some(tree),
        }
    }
}
