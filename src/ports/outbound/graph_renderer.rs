use crate::graph_resolution::domain::{PackageId, Resolution};
use crate::shared::Result;

/// GraphRenderer port for turning a finished resolution into diagram text
///
/// Renderers consume the graph read-only: nodes are canonical
/// `name@version` ids, edges are dependency names resolved through the
/// version map recorded during discovery.
pub trait GraphRenderer {
    /// Renders the resolution as diagram source text (e.g. DOT, Mermaid).
    ///
    /// # Errors
    /// Returns an error if the graph cannot be rendered.
    fn render(&self, resolution: &Resolution, root: &PackageId) -> Result<String>;
}
