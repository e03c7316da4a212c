use crate::prelude::*;
use std::collections::BTreeSet;

/// Union of every opt-in annotation required by any destination in the group.
#[must_use]
pub fn collect_annotations(group: &[&DestinationDescriptor]) -> BTreeSet<String> {
    group
        .iter()
        .flat_map(|d| d.require_opt_in_annotation_names.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotations_are_unioned_and_sorted() {
        let a = DestinationDescriptor::new("A", "a")
            .with_opt_in("ExperimentalMaterialApi")
            .with_opt_in("ExperimentalFoundationApi");
        let b = DestinationDescriptor::new("B", "b").with_opt_in("ExperimentalMaterialApi");
        let c = DestinationDescriptor::new("C", "c");

        let collected: Vec<String> = collect_annotations(&[&a, &b, &c]).into_iter().collect();

        assert_eq!(
            collected,
            vec!["ExperimentalFoundationApi", "ExperimentalMaterialApi"]
        );
    }

    #[test]
    fn no_requirements_yield_empty_set() {
        let a = DestinationDescriptor::new("A", "a");

        assert!(collect_annotations(&[&a]).is_empty());
    }
}
