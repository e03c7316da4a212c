//! Validation passes that need the whole partitioned descriptor set.

pub mod naming;
pub mod placeholder;

use crate::{build::Partition, error::ErrorTree};

/// Run every partition-wide check, collecting issues by graph route.
pub(crate) fn validate_partition(partition: &Partition<'_>) -> ErrorTree {
    let mut errors = ErrorTree::new();

    naming::validate_graph_identifiers(partition, &mut errors);
    placeholder::validate_placeholder_collisions(partition, &mut errors);

    errors
}
