use crate::{build::Partition, prelude::*, token::contains_token};

/// Reject user-controlled strings that contain a template token, so that no
/// rendered value can be mistaken for a substitution point.
pub fn validate_placeholder_collisions(partition: &Partition<'_>, errs: &mut ErrorTree) {
    for (route, group) in partition.groups() {
        let mut check = |value: &str| {
            if contains_token(value) {
                errs.add_for(
                    route,
                    SetupError::PlaceholderCollision {
                        route: route.to_string(),
                        value: value.to_string(),
                    },
                );
            }
        };

        check(route);
        for descriptor in group {
            check(descriptor.route.as_str());
            check(descriptor.simple_name.as_str());
            for annotation in &descriptor.require_opt_in_annotation_names {
                check(annotation.as_str());
            }
        }
    }
}
