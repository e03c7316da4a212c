use crate::{ROOT_GRAPH_ROUTE, prelude::*};
use derive_more::{Deref, IntoIterator};
use std::collections::BTreeSet;

///
/// GraphDestination
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GraphDestination {
    pub route: String,
    pub simple_name: String,
}

///
/// NavGraph
///
/// An assembled graph. Built once per run and never mutated afterwards.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NavGraph {
    pub route: String,
    pub field_identifier: String,
    pub start_destination_name: String,

    /// Destinations in input order.
    pub destinations: Vec<GraphDestination>,

    /// Field identifiers of nested graphs; only ever populated on the root.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nested_graph_identifiers: Vec<String>,

    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub opt_in_annotations: BTreeSet<String>,
}

impl NavGraph {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.route == ROOT_GRAPH_ROUTE
    }

    #[must_use]
    pub fn has_nested_graphs(&self) -> bool {
        !self.nested_graph_identifiers.is_empty()
    }
}

///
/// GraphTree
///
/// Nested graphs in first-seen order, followed by the root graph.
///

#[derive(Clone, Debug, Deref, Eq, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
pub struct GraphTree {
    graphs: Vec<NavGraph>,
}

impl GraphTree {
    /// Callers must push the root graph last.
    pub(crate) const fn new(graphs: Vec<NavGraph>) -> Self {
        Self { graphs }
    }

    /// The root graph. Assembly guarantees it is present and last.
    #[must_use]
    pub fn root(&self) -> Option<&NavGraph> {
        self.graphs.last().filter(|graph| graph.is_root())
    }

    #[must_use]
    pub fn nested(&self) -> &[NavGraph] {
        match self.graphs.split_last() {
            Some((last, rest)) if last.is_root() => rest,
            _ => &self.graphs,
        }
    }

    #[must_use]
    pub fn graph(&self, route: &str) -> Option<&NavGraph> {
        self.graphs.iter().find(|graph| graph.route == route)
    }
}
