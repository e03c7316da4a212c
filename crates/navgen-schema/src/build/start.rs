use crate::prelude::*;

/// Resolve the single start destination of a graph.
pub fn resolve_start<'a>(
    route: &str,
    group: &[&'a DestinationDescriptor],
) -> Result<&'a str, SetupError> {
    let mut starts = group.iter().copied().filter(|d| d.is_start_destination);

    match (starts.next(), starts.count()) {
        (Some(start), 0) => Ok(start.simple_name.as_str()),
        (first, rest) => Err(SetupError::IllegalGraphSetup {
            route: route.to_string(),
            count: usize::from(first.is_some()) + rest,
        }),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_start_resolves() {
        let home = DestinationDescriptor::new("Home", "home").start();
        let detail = DestinationDescriptor::new("Detail", "detail");

        assert_eq!(resolve_start("root", &[&detail, &home]), Ok("Home"));
    }

    #[test]
    fn no_start_reports_zero() {
        let detail = DestinationDescriptor::new("Detail", "detail");

        assert_eq!(
            resolve_start("root", &[&detail]),
            Err(SetupError::IllegalGraphSetup {
                route: "root".to_string(),
                count: 0,
            })
        );
    }

    #[test]
    fn several_starts_report_count() {
        let a = DestinationDescriptor::new("A", "a").start();
        let b = DestinationDescriptor::new("B", "b").start();
        let c = DestinationDescriptor::new("C", "c").start();

        assert_eq!(
            resolve_start("nested", &[&a, &b, &c]),
            Err(SetupError::IllegalGraphSetup {
                route: "nested".to_string(),
                count: 3,
            })
        );
    }
}
