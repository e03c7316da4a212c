//! Nav graph declarations.

use crate::Rendered;
use navgen_schema::node::{GraphTree, NavGraph};

const INDENT: &str = "    ";

/// Render every graph of the tree inside a single `object` declaration.
#[must_use]
pub fn render_graphs(tree: &GraphTree, nav_graph_type: &str, nav_graphs_object: &str) -> Rendered {
    let mut w = CodeWriter::default();

    w.open(&format!("object {nav_graphs_object} {{"));
    for graph in tree {
        w.blank();
        render_graph(&mut w, graph, nav_graph_type);
    }
    w.close("}");

    Rendered::text(w.finish())
}

fn render_graph(w: &mut CodeWriter, graph: &NavGraph, nav_graph_type: &str) {
    for annotation in &graph.opt_in_annotations {
        w.line(&format!("@{annotation}"));
    }

    w.open(&format!(
        "val {} = {nav_graph_type}(",
        graph.field_identifier
    ));
    w.line(&format!("route = {},", string_literal(&graph.route)));
    w.line(&format!("startDestination = {},", graph.start_destination_name));

    w.open("destinations = mapOf(");
    let entries: Vec<String> = graph
        .destinations
        .iter()
        .map(|d| format!("{} to {}", string_literal(&d.route), d.simple_name))
        .collect();
    w.list(&entries);

    if graph.is_root() && graph.has_nested_graphs() {
        w.close("),");
        w.open("nestedNavGraphs = listOf(");
        w.list(&graph.nested_graph_identifiers);
    }
    w.close(")");

    w.close(")");
}

/// Quote a value as a double-quoted string literal with `$` templates disabled.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');

    out
}

///
/// CodeWriter
///

#[derive(Default)]
struct CodeWriter {
    out: String,
    depth: usize,
}

impl CodeWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self, text: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    // One item per line, comma separated, no trailing comma.
    fn list(&mut self, items: &[String]) {
        for (i, item) in items.iter().enumerate() {
            if i + 1 == items.len() {
                self.line(item);
            } else {
                self.line(&format!("{item},"));
            }
        }
    }

    fn finish(mut self) -> String {
        while self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use navgen_schema::{build::assemble, node::DestinationDescriptor};

    fn render(descriptors: &[DestinationDescriptor]) -> String {
        let tree = assemble(descriptors).unwrap();

        render_graphs(&tree, "NavGraph", "NavGraphs").text
    }

    #[test]
    fn renders_root_only_graph() {
        let text = render(&[DestinationDescriptor::new("Home", "home").start()]);

        assert_eq!(
            text,
            r#"object NavGraphs {

    val root = NavGraph(
        route = "root",
        startDestination = Home,
        destinations = mapOf(
            "home" to Home
        )
    )
}"#
        );
    }

    #[test]
    fn renders_nested_graph_list_on_root() {
        let text = render(&[
            DestinationDescriptor::new("Home", "home").start(),
            DestinationDescriptor::new("Detail", "detail/{id}"),
            DestinationDescriptor::new("Settings", "settings")
                .in_graph("settings_graph")
                .start(),
        ]);

        assert_eq!(
            text,
            r#"object NavGraphs {

    val settingsGraph = NavGraph(
        route = "settings_graph",
        startDestination = Settings,
        destinations = mapOf(
            "settings" to Settings
        )
    )

    val root = NavGraph(
        route = "root",
        startDestination = Home,
        destinations = mapOf(
            "home" to Home,
            "detail/{id}" to Detail
        ),
        nestedNavGraphs = listOf(
            settingsGraph
        )
    )
}"#
        );
    }

    #[test]
    fn opt_in_annotations_precede_the_field_in_sorted_order() {
        let text = render(&[
            DestinationDescriptor::new("Home", "home")
                .start()
                .with_opt_in("ExperimentalMaterialApi")
                .with_opt_in("ExperimentalFoundationApi"),
        ]);

        assert!(text.contains(
            "    @ExperimentalFoundationApi\n    @ExperimentalMaterialApi\n    val root = NavGraph("
        ));
    }

    #[test]
    fn string_literal_escapes_templates_and_quotes() {
        assert_eq!(string_literal("a\"b\\c$d"), r#""a\"b\\c\$d""#);
        assert_eq!(string_literal("detail/{id}"), r#""detail/{id}""#);
    }
}
