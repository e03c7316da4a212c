use crate::template::{Placeholder, Template, TemplateError};

/// Placeholders the aggregate template cannot do without.
pub const REQUIRED_AGGREGATE_PLACEHOLDERS: [Placeholder; 2] =
    [Placeholder::NavGraphsDeclaration, Placeholder::Imports];

///
/// TemplateSources
///
/// Raw template text as handed over by the template repository.
///

#[derive(Clone, Debug, Default)]
pub struct TemplateSources {
    pub aggregate: String,
    pub sealed_destination: String,
    pub inner_nav_host: String,
    pub inner_animated_nav_host: String,
    pub imports: Vec<String>,
    pub animated_imports: Vec<String>,
}

///
/// Templates
///
/// Parsed templates ready for rendering. The sealed destination template is
/// emitted verbatim and is never parsed.
///

#[derive(Clone, Debug)]
pub struct Templates {
    pub aggregate: Template,
    pub sealed_destination: String,
    pub inner_nav_host: Template,
    pub inner_animated_nav_host: Template,
    pub imports: Vec<String>,
    pub animated_imports: Vec<String>,
}

impl Templates {
    pub fn parse(sources: &TemplateSources) -> Result<Self, TemplateError> {
        let aggregate = Template::parse(&sources.aggregate)?;
        aggregate.require(&REQUIRED_AGGREGATE_PLACEHOLDERS)?;

        Ok(Self {
            aggregate,
            sealed_destination: sources.sealed_destination.clone(),
            inner_nav_host: Template::parse(&sources.inner_nav_host)?,
            inner_animated_nav_host: Template::parse(&sources.inner_animated_nav_host)?,
            imports: sources.imports.clone(),
            animated_imports: sources.animated_imports.clone(),
        })
    }

    #[must_use]
    pub fn base_imports(&self, animation: bool) -> &[String] {
        if animation {
            &self.animated_imports
        } else {
            &self.imports
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_must_declare_graphs_and_imports() {
        let sources = TemplateSources {
            aggregate: "package x\n[IMPORTS_BLOCK]".to_string(),
            ..TemplateSources::default()
        };

        assert_eq!(
            Templates::parse(&sources).unwrap_err(),
            TemplateError::MissingPlaceholder(Placeholder::NavGraphsDeclaration)
        );
    }

    #[test]
    fn sealed_template_is_kept_verbatim() {
        let sources = TemplateSources {
            aggregate: "[IMPORTS_BLOCK]\n[NAV_GRAPHS_DECLARATION]".to_string(),
            sealed_destination: "sealed interface Destination [SCAFFOLD_START]".to_string(),
            ..TemplateSources::default()
        };

        let templates = Templates::parse(&sources).unwrap();

        assert_eq!(
            templates.sealed_destination,
            "sealed interface Destination [SCAFFOLD_START]"
        );
    }
}
