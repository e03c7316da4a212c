use std::collections::BTreeSet;

/// Render the import block: base imports in their given order, then any
/// additional imports (sorted) that the base list does not already cover.
#[must_use]
pub fn render_imports(base: &[String], additional: &BTreeSet<String>) -> String {
    let mut lines: Vec<String> = base.iter().map(|import| format!("import {import}")).collect();

    lines.extend(
        additional
            .iter()
            .filter(|import| !base.contains(import))
            .map(|import| format!("import {import}")),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additional_imports_follow_base_without_duplicates() {
        let base = vec![
            "androidx.navigation.NavHostController".to_string(),
            "androidx.compose.runtime.Composable".to_string(),
        ];
        let additional = BTreeSet::from([
            "androidx.compose.runtime.Composable".to_string(),
            "androidx.compose.animation.ExperimentalAnimationApi".to_string(),
        ]);

        assert_eq!(
            render_imports(&base, &additional),
            "import androidx.navigation.NavHostController\n\
             import androidx.compose.runtime.Composable\n\
             import androidx.compose.animation.ExperimentalAnimationApi"
        );
    }

    #[test]
    fn empty_inputs_render_nothing() {
        assert_eq!(render_imports(&[], &BTreeSet::new()), "");
    }
}
