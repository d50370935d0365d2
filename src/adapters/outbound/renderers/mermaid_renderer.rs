use crate::graph_resolution::domain::{PackageId, Resolution};
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use std::collections::HashMap;

/// MermaidRenderer adapter producing a Mermaid flowchart
///
/// Mermaid node identifiers cannot contain `@`, so nodes get positional
/// ids (`n0`, `n1`, ...) with the canonical package id as the label.
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for MermaidRenderer {
    fn render(&self, resolution: &Resolution, root: &PackageId) -> Result<String> {
        let graph = resolution.graph();
        let versions = resolution.versions();

        let mut node_ids: HashMap<PackageId, String> = HashMap::new();
        for (index, (id, _)) in graph.iter().enumerate() {
            node_ids.insert(id.clone(), format!("n{}", index));
        }

        let mut out = String::from("graph TD\n");

        for (id, _) in graph.iter() {
            out.push_str(&format!(
                "    {}[\"{}\"]\n",
                node_ids[id],
                id.canonical()
            ));
        }

        for (id, names) in graph.iter() {
            for name in names {
                let Ok(target) = versions.resolve_id(name) else {
                    continue;
                };
                if let Some(target_node) = node_ids.get(&target) {
                    out.push_str(&format!("    {} --> {}\n", node_ids[id], target_node));
                }
            }
        }

        if let Some(root_node) = node_ids.get(root) {
            out.push_str(&format!(
                "    style {} fill:#90ee90,stroke:#333\n",
                root_node
            ));
        }

        Ok(out)
    }
}
