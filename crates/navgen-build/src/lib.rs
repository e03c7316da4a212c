//! Renders assembled nav graphs into source artifacts.
//!
//! The pipeline is strictly linear: assemble and validate the graph tree,
//! render every block that may contribute imports, render the import block,
//! and only then fill the aggregate template. Both artifacts are complete in
//! memory before anything reaches a [`CodeOutput`].

mod capability;
mod graph;
mod imports;
mod output;
mod rendered;
pub mod template;
mod templates;

pub use capability::{ANIMATION_PARAMS, Capabilities, EXPERIMENTAL_ANIMATION_API};
pub use graph::{render_graphs, string_literal};
pub use imports::render_imports;
pub use output::{Artifact, CodeOutput, FsOutput, MemoryOutput};
pub use rendered::Rendered;
pub use templates::{REQUIRED_AGGREGATE_PLACEHOLDERS, TemplateSources, Templates};

use navgen_schema::{
    build::assemble,
    node::{DestinationDescriptor, GraphTree},
};
use std::{collections::BTreeSet, io};
use template::{Placeholder, RenderContext, TemplateError};
use thiserror::Error as ThisError;
use tracing::{info, warn};

///
/// Error
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error("failed to write artifact '{name}': {source}")]
    Output {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Schema(#[from] navgen_schema::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

///
/// GeneratorOptions
///
/// Names used in generated code and for addressing the artifacts.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorOptions {
    pub package: String,
    pub aggregate_name: String,
    pub sealed_destination_name: String,
    pub nav_graph_type: String,
    pub nav_graphs_object: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: "destinations".to_string(),
            aggregate_name: "Destinations".to_string(),
            sealed_destination_name: "Destination".to_string(),
            nav_graph_type: "NavGraph".to_string(),
            nav_graphs_object: "NavGraphs".to_string(),
        }
    }
}

///
/// Generated
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Generated {
    pub aggregate: Artifact,
    pub sealed_destination: Artifact,
}

impl Generated {
    #[must_use]
    pub fn artifacts(&self) -> [&Artifact; 2] {
        [&self.aggregate, &self.sealed_destination]
    }
}

/// Assemble, validate and render both artifacts without writing them.
pub fn generate(
    descriptors: &[DestinationDescriptor],
    capabilities: Capabilities,
    templates: &Templates,
    options: &GeneratorOptions,
) -> Result<Generated, Error> {
    info!(
        destinations = descriptors.len(),
        animation = capabilities.animation,
        material = capabilities.material,
        "generating destinations aggregate"
    );

    let tree = assemble(descriptors)?;
    let builder = AggregateBuilder::new(tree, templates, options, capabilities);

    let aggregate = Artifact {
        package: options.package.clone(),
        name: options.aggregate_name.clone(),
        source_ids: descriptors
            .iter()
            .flat_map(|d| d.source_ids.iter().cloned())
            .collect(),
        contents: builder.generate(),
    };

    let sealed_destination = Artifact {
        package: options.package.clone(),
        name: options.sealed_destination_name.clone(),
        source_ids: Vec::new(),
        contents: templates.sealed_destination.clone(),
    };

    Ok(Generated {
        aggregate,
        sealed_destination,
    })
}

/// Generate both artifacts and hand them to `output`.
pub fn process(
    descriptors: &[DestinationDescriptor],
    capabilities: Capabilities,
    templates: &Templates,
    options: &GeneratorOptions,
    output: &mut dyn CodeOutput,
) -> Result<Generated, Error> {
    let generated = generate(descriptors, capabilities, templates, options)?;

    for artifact in generated.artifacts() {
        output.write(artifact).map_err(|source| Error::Output {
            name: artifact.name.clone(),
            source,
        })?;
    }

    info!(
        package = %options.package,
        aggregate = %generated.aggregate.name,
        sealed = %generated.sealed_destination.name,
        "generated destinations"
    );

    Ok(generated)
}

///
/// AggregateBuilder
///

pub struct AggregateBuilder<'a> {
    pub tree: GraphTree,
    pub templates: &'a Templates,
    pub options: &'a GeneratorOptions,
    pub capabilities: Capabilities,
}

impl<'a> AggregateBuilder<'a> {
    #[must_use]
    pub const fn new(
        tree: GraphTree,
        templates: &'a Templates,
        options: &'a GeneratorOptions,
        capabilities: Capabilities,
    ) -> Self {
        Self {
            tree,
            templates,
            options,
            capabilities,
        }
    }

    /// Render the aggregate template.
    #[must_use]
    pub fn generate(&self) -> String {
        self.warn_missing_slots();

        let mut imports = BTreeSet::new();
        let mut ctx = RenderContext::new();

        // every import-contributing step runs before the import block
        imports.extend(self.capabilities.apply(
            &mut ctx,
            &self.templates.inner_nav_host,
            &self.templates.inner_animated_nav_host,
        ));

        let graphs = render_graphs(
            &self.tree,
            &self.options.nav_graph_type,
            &self.options.nav_graphs_object,
        )
        .into_text(&mut imports);
        ctx.set(Placeholder::NavGraphsDeclaration, graphs);

        let base = self.templates.base_imports(self.capabilities.animation);
        ctx.set(Placeholder::Imports, render_imports(base, &imports));

        self.templates.aggregate.render(&ctx)
    }

    fn warn_missing_slots(&self) {
        if !self.capabilities.animation {
            return;
        }

        let present = self.templates.aggregate.placeholders();
        for placeholder in [
            Placeholder::AnimationDefaultParams,
            Placeholder::ExperimentalApi,
        ] {
            if !present.contains(&placeholder) {
                warn!(
                    placeholder = %placeholder,
                    "animation enabled but aggregate template has no slot for it"
                );
            }
        }
    }
}
