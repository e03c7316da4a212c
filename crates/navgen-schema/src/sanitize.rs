///
/// sanitize
/// Derive a bare identifier from a route string.
///
/// Every character outside `A-Za-z` is dropped and the character after it
/// is uppercased, so `settings_graph` becomes `settingsGraph`. A character
/// survives only if it is an ASCII letter once uppercased, which keeps
/// `ı` (as `I`) after a separator but never `ß`. A trailing separator is
/// simply dropped. A route made only of separators yields an empty string;
/// callers must reject that.
///
#[must_use]
pub fn sanitize(route: &str) -> String {
    let mut ident = String::with_capacity(route.len());
    let mut upper_next = false;

    for c in route.chars() {
        let c = if upper_next { uppercase_char(c) } else { c };

        if c.is_ascii_alphabetic() {
            ident.push(c);
            upper_next = false;
        } else {
            upper_next = true;
        }
    }

    ident
}

// Single-character uppercase mapping; multi-character mappings leave `c` as is.
fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn camel_cases_across_separators() {
        assert_eq!(sanitize("settings_graph"), "settingsGraph");
        assert_eq!(sanitize("profile/edit-screen"), "profileEditScreen");
        assert_eq!(sanitize("detail/{id}"), "detailId");
    }

    #[test]
    fn separator_runs_uppercase_only_the_next_letter() {
        assert_eq!(sanitize("a--b"), "aB");
        assert_eq!(sanitize("a_1_b"), "aB");
    }

    #[test]
    fn leading_separator_uppercases_first_letter() {
        assert_eq!(sanitize("-home"), "Home");
    }

    #[test]
    fn trailing_separator_is_dropped() {
        assert_eq!(sanitize("home/"), "home");
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(sanitize("caf\u{e9}bar"), "cafBar");
    }

    #[test]
    fn non_ascii_letters_with_ascii_uppercase_survive_after_separator() {
        assert_eq!(sanitize("a-\u{131}b"), "aIb");
        assert_eq!(sanitize("nav_\u{17f}ettings"), "navSettings");
        assert_eq!(sanitize("\u{131}dle"), "Dle");
    }

    #[test]
    fn multi_char_uppercase_is_still_a_separator() {
        assert_eq!(sanitize("a-\u{df}b"), "aB");
    }

    #[test]
    fn all_separators_collapse_to_empty() {
        assert_eq!(sanitize("__/-1"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn distinct_routes_can_collide() {
        assert_eq!(sanitize("a-b"), sanitize("a_b"));
    }

    proptest! {
        #[test]
        fn output_contains_only_ascii_letters(route in ".{0,32}") {
            prop_assert!(sanitize(&route).chars().all(|c| c.is_ascii_alphabetic()));
        }

        #[test]
        fn letter_only_routes_are_unchanged(route in "[a-zA-Z]{0,32}") {
            prop_assert_eq!(sanitize(&route), route.clone());
        }

        #[test]
        fn sanitize_is_idempotent(route in ".{0,32}") {
            let once = sanitize(&route);
            prop_assert_eq!(sanitize(&once), once.clone());
        }
    }
}
