use crate::{ROOT_GRAPH_ROUTE, prelude::*};
use std::collections::BTreeSet;

///
/// DestinationDescriptor
///
/// One navigable destination as reported by the discovery step. The
/// descriptor is read-only input; assembly never mutates it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DestinationDescriptor {
    /// Identifier used both as the reference and the generated type name.
    pub simple_name: String,

    /// Route key, not guaranteed to be identifier-safe.
    pub route: String,

    #[serde(default = "default_nav_graph_route")]
    pub nav_graph_route: String,

    #[serde(default)]
    pub is_start_destination: bool,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub require_opt_in_annotation_names: BTreeSet<String>,

    /// Provenance tokens forwarded untouched to the output sink.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_ids: Vec<String>,
}

fn default_nav_graph_route() -> String {
    ROOT_GRAPH_ROUTE.to_string()
}

impl DestinationDescriptor {
    /// Create a non-start destination in the root graph.
    #[must_use]
    pub fn new(simple_name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            route: route.into(),
            nav_graph_route: default_nav_graph_route(),
            is_start_destination: false,
            require_opt_in_annotation_names: BTreeSet::new(),
            source_ids: Vec::new(),
        }
    }

    #[must_use]
    pub fn in_graph(mut self, nav_graph_route: impl Into<String>) -> Self {
        self.nav_graph_route = nav_graph_route.into();
        self
    }

    #[must_use]
    pub const fn start(mut self) -> Self {
        self.is_start_destination = true;
        self
    }

    #[must_use]
    pub fn with_opt_in(mut self, annotation: impl Into<String>) -> Self {
        self.require_opt_in_annotation_names
            .insert(annotation.into());
        self
    }

    #[must_use]
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_ids.push(source_id.into());
        self
    }

    #[must_use]
    pub fn is_in_root(&self) -> bool {
        self.nav_graph_route == ROOT_GRAPH_ROUTE
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_fields_default_to_root_non_start() {
        let descriptor: DestinationDescriptor =
            serde_json::from_str(r#"{ "simple_name": "Home", "route": "home" }"#).unwrap();

        assert_eq!(descriptor, DestinationDescriptor::new("Home", "home"));
        assert!(descriptor.is_in_root());
    }

    #[test]
    fn builder_sets_graph_start_and_annotations() {
        let descriptor = DestinationDescriptor::new("Settings", "settings")
            .in_graph("settings_graph")
            .start()
            .with_opt_in("ExperimentalMaterialApi")
            .with_source_id("Settings.kt");

        assert!(!descriptor.is_in_root());
        assert!(descriptor.is_start_destination);
        assert!(
            descriptor
                .require_opt_in_annotation_names
                .contains("ExperimentalMaterialApi")
        );
        assert_eq!(descriptor.source_ids, vec!["Settings.kt".to_string()]);
    }
}
