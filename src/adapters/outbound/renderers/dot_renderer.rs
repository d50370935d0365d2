use crate::graph_resolution::domain::{PackageId, Resolution};
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use chrono::Utc;

/// DotRenderer adapter producing Graphviz DOT source
///
/// Nodes are emitted in discovery order, labeled `name\nversion`; the root
/// is highlighted. Edges are resolved through the version map and only
/// drawn between nodes present in the graph.
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, resolution: &Resolution, root: &PackageId) -> Result<String> {
        let graph = resolution.graph();
        let versions = resolution.versions();

        let mut out = String::new();
        out.push_str(&format!(
            "// Dependency graph of {} — generated by crate-viz at {}\n",
            root,
            Utc::now().to_rfc3339()
        ));
        out.push_str("digraph dependencies {\n");
        out.push_str("    rankdir=TB;\n");
        out.push_str(
            "    node [shape=box, style=filled, fillcolor=lightblue, fontname=\"Helvetica\"];\n",
        );
        out.push_str("    edge [fontname=\"Helvetica\", fontsize=10];\n");
        out.push('\n');

        for (id, _) in graph.iter() {
            let label = format!("{}\\n{}", id.name(), id.version());
            if id == root {
                out.push_str(&format!(
                    "    \"{}\" [label=\"{}\", fillcolor=lightgreen];\n",
                    id.canonical(),
                    label
                ));
            } else {
                out.push_str(&format!(
                    "    \"{}\" [label=\"{}\"];\n",
                    id.canonical(),
                    label
                ));
            }
        }

        out.push('\n');

        for (id, names) in graph.iter() {
            for name in names {
                let Ok(target) = versions.resolve_id(name) else {
                    continue;
                };
                if graph.contains(&target) {
                    out.push_str(&format!(
                        "    \"{}\" -> \"{}\";\n",
                        id.canonical(),
                        target.canonical()
                    ));
                }
            }
        }

        out.push_str("}\n");
        Ok(out)
    }
}
