use crate::{build::Partition, prelude::*};
use std::collections::BTreeMap;

/// Every graph route must sanitize to a non-empty identifier that no other
/// graph already uses.
pub fn validate_graph_identifiers(partition: &Partition<'_>, errs: &mut ErrorTree) {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();

    for (route, _) in partition.groups() {
        let identifier = sanitize(route);

        if identifier.is_empty() {
            errs.add_for(
                route,
                SetupError::EmptyGraphIdentifier {
                    route: route.to_string(),
                },
            );
            continue;
        }

        if let Some(first_route) = seen.get(identifier.as_str()) {
            errs.add_for(
                route,
                SetupError::DuplicateGraphIdentifier {
                    identifier,
                    first_route: (*first_route).to_string(),
                    second_route: route.to_string(),
                },
            );
        } else {
            seen.insert(identifier, route);
        }
    }
}
