//! Graph assembly: partition, resolve, collect, validate.

mod annotation;
mod partition;
mod start;

pub use annotation::collect_annotations;
pub use partition::{Partition, partition};
pub use start::resolve_start;

use crate::{Error, ThisError, prelude::*, validate::validate_partition};
use tracing::{debug, info};

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed:\n{0}")]
    Validation(ErrorTree),
}

/// Assemble the graph tree, failing if any structural check fails.
pub fn assemble(descriptors: &[DestinationDescriptor]) -> Result<GraphTree, Error> {
    let tree = assemble_graphs(descriptors).map_err(BuildError::Validation)?;

    Ok(tree)
}

/// Assemble nested graphs followed by the root graph.
///
/// All checks run before the tree is returned: a single problem anywhere
/// means no graph is handed to the renderer.
pub fn assemble_graphs(descriptors: &[DestinationDescriptor]) -> Result<GraphTree, ErrorTree> {
    let partition = partition(descriptors)?;

    // Phase 1: partition-wide invariants (identifiers, token collisions).
    let mut errs = validate_partition(&partition);

    // Phase 2: per-graph construction.
    let nested_identifiers: Vec<String> = partition
        .nested
        .iter()
        .map(|(route, _)| sanitize(route))
        .collect();

    let mut graphs = Vec::with_capacity(partition.nested.len() + 1);
    for (route, group) in &partition.nested {
        if let Some(graph) = build_graph(route, group, Vec::new(), &mut errs) {
            graphs.push(graph);
        }
    }
    if let Some(root) = build_graph(
        ROOT_GRAPH_ROUTE,
        &partition.root,
        nested_identifiers,
        &mut errs,
    ) {
        graphs.push(root);
    }

    errs.result()?;

    info!(
        graphs = graphs.len(),
        destinations = descriptors.len(),
        "assembled nav graphs"
    );

    Ok(GraphTree::new(graphs))
}

// Build one graph, recording a start-destination failure against its route.
fn build_graph(
    route: &str,
    group: &[&DestinationDescriptor],
    nested_graph_identifiers: Vec<String>,
    errs: &mut ErrorTree,
) -> Option<NavGraph> {
    let start = match resolve_start(route, group) {
        Ok(start) => start,
        Err(e) => {
            errs.add_for(route, e);
            return None;
        }
    };

    let graph = NavGraph {
        route: route.to_string(),
        field_identifier: sanitize(route),
        start_destination_name: start.to_string(),
        destinations: group
            .iter()
            .map(|d| GraphDestination {
                route: d.route.clone(),
                simple_name: d.simple_name.clone(),
            })
            .collect(),
        nested_graph_identifiers,
        opt_in_annotations: collect_annotations(group),
    };

    debug!(
        route = %graph.route,
        field = %graph.field_identifier,
        start = %graph.start_destination_name,
        destinations = graph.destinations.len(),
        "built nav graph"
    );

    Some(graph)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DestinationDescriptor> {
        vec![
            DestinationDescriptor::new("Home", "home").start(),
            DestinationDescriptor::new("Detail", "detail/{id}"),
            DestinationDescriptor::new("Settings", "settings")
                .in_graph("settings_graph")
                .start(),
        ]
    }

    #[test]
    fn nested_graphs_precede_root() {
        let tree = assemble_graphs(&sample()).unwrap();

        let routes: Vec<&str> = tree.iter().map(|g| g.route.as_str()).collect();
        assert_eq!(routes, vec!["settings_graph", "root"]);
        assert_eq!(tree.nested().len(), 1);
        assert!(tree.root().is_some());
    }

    #[test]
    fn root_lists_nested_identifiers() {
        let tree = assemble_graphs(&sample()).unwrap();
        let root = tree.root().unwrap();

        assert_eq!(root.nested_graph_identifiers, vec!["settingsGraph"]);
        assert_eq!(root.start_destination_name, "Home");
        assert_eq!(
            root.destinations,
            vec![
                GraphDestination {
                    route: "home".to_string(),
                    simple_name: "Home".to_string(),
                },
                GraphDestination {
                    route: "detail/{id}".to_string(),
                    simple_name: "Detail".to_string(),
                },
            ]
        );
    }

    #[test]
    fn nested_graph_has_no_nested_identifiers() {
        let tree = assemble_graphs(&sample()).unwrap();
        let nested = tree.graph("settings_graph").unwrap();

        assert_eq!(nested.field_identifier, "settingsGraph");
        assert!(!nested.has_nested_graphs());
    }

    #[test]
    fn every_failing_graph_is_reported() {
        let descriptors = vec![
            DestinationDescriptor::new("Home", "home"),
            DestinationDescriptor::new("A", "a").in_graph("first").start(),
            DestinationDescriptor::new("B", "b").in_graph("first").start(),
        ];

        let errs = assemble_graphs(&descriptors).unwrap_err();

        assert_eq!(errs.len(), 2);
        assert!(errs.contains(&SetupError::IllegalGraphSetup {
            route: "root".to_string(),
            count: 0,
        }));
        assert!(errs.contains(&SetupError::IllegalGraphSetup {
            route: "first".to_string(),
            count: 2,
        }));
    }

    #[test]
    fn missing_root_fails_before_graphs_are_built() {
        let descriptors = vec![DestinationDescriptor::new("A", "a").in_graph("first")];

        let errs = assemble_graphs(&descriptors).unwrap_err();

        assert_eq!(errs.messages, vec![SetupError::MissingRootGraph]);
    }

    #[test]
    fn assemble_wraps_validation_failures() {
        let err = assemble(&[]).unwrap_err();

        assert!(
            err.validation_errors()
                .is_some_and(|tree| tree.contains(&SetupError::MissingRootGraph))
        );
        assert!(err.to_string().starts_with("validation failed"));
    }
}
