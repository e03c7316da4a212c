use crate::{ROOT_GRAPH_ROUTE, prelude::*};
use std::collections::BTreeMap;

///
/// Partition
///
/// Descriptors grouped by owning graph. `nested` keeps the order in which
/// each graph route was first seen.
///

#[derive(Debug)]
pub struct Partition<'a> {
    pub root: Vec<&'a DestinationDescriptor>,
    pub nested: Vec<(&'a str, Vec<&'a DestinationDescriptor>)>,
}

impl<'a> Partition<'a> {
    /// Every group, nested first, root last.
    pub fn groups(&self) -> impl Iterator<Item = (&'a str, &[&'a DestinationDescriptor])> {
        self.nested
            .iter()
            .map(|(route, group)| (*route, group.as_slice()))
            .chain(std::iter::once((ROOT_GRAPH_ROUTE, self.root.as_slice())))
    }
}

/// Group descriptors by `nav_graph_route`, splitting off the root group.
pub fn partition(descriptors: &[DestinationDescriptor]) -> Result<Partition<'_>, SetupError> {
    let mut root = Vec::new();
    let mut nested: Vec<(&str, Vec<&DestinationDescriptor>)> = Vec::new();
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();

    for descriptor in descriptors {
        let route = descriptor.nav_graph_route.as_str();
        if route == ROOT_GRAPH_ROUTE {
            root.push(descriptor);
            continue;
        }

        let slot = *index.entry(route).or_insert_with(|| {
            nested.push((route, Vec::new()));
            nested.len() - 1
        });
        nested[slot].1.push(descriptor);
    }

    if root.is_empty() {
        return Err(SetupError::MissingRootGraph);
    }

    Ok(Partition { root, nested })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(group: &[&DestinationDescriptor]) -> Vec<String> {
        group.iter().map(|d| d.simple_name.clone()).collect()
    }

    #[test]
    fn nested_groups_follow_first_occurrence() {
        let descriptors = vec![
            DestinationDescriptor::new("A", "a").in_graph("second"),
            DestinationDescriptor::new("Home", "home").start(),
            DestinationDescriptor::new("B", "b").in_graph("first"),
            DestinationDescriptor::new("C", "c").in_graph("second"),
        ];

        let partition = partition(&descriptors).unwrap();

        let routes: Vec<&str> = partition.nested.iter().map(|(r, _)| *r).collect();
        assert_eq!(routes, vec!["second", "first"]);
        assert_eq!(names(&partition.nested[0].1), vec!["A", "C"]);
        assert_eq!(names(&partition.root), vec!["Home"]);
    }

    #[test]
    fn groups_yield_root_last() {
        let descriptors = vec![
            DestinationDescriptor::new("Home", "home").start(),
            DestinationDescriptor::new("B", "b").in_graph("nested"),
        ];

        let partition = partition(&descriptors).unwrap();
        let routes: Vec<&str> = partition.groups().map(|(r, _)| r).collect();

        assert_eq!(routes, vec!["nested", ROOT_GRAPH_ROUTE]);
    }

    #[test]
    fn missing_root_is_rejected() {
        let descriptors = vec![DestinationDescriptor::new("A", "a").in_graph("other")];

        assert_eq!(
            partition(&descriptors).unwrap_err(),
            SetupError::MissingRootGraph
        );
        assert_eq!(partition(&[]).unwrap_err(), SetupError::MissingRootGraph);
    }

    proptest! {
        #[test]
        fn partition_keeps_every_descriptor(graphs in prop::collection::vec(0u8..4, 0..24)) {
            let mut descriptors = vec![DestinationDescriptor::new("Root", "root_dest")];
            for (i, g) in graphs.iter().enumerate() {
                descriptors.push(DestinationDescriptor::new(format!("D{i}"), format!("d{i}")).in_graph(format!("g{g}")));
            }

            let partition = partition(&descriptors).unwrap();
            let total: usize = partition.groups().map(|(_, group)| group.len()).sum();
            prop_assert_eq!(total, descriptors.len());

            let mut seen = Vec::new();
            for g in &graphs {
                let route = format!("g{g}");
                if !seen.contains(&route) {
                    seen.push(route);
                }
            }
            let routes: Vec<String> = partition.nested.iter().map(|(r, _)| (*r).to_string()).collect();
            prop_assert_eq!(routes, seen);
        }
    }
}
