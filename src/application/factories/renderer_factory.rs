use crate::adapters::outbound::renderers::{DotRenderer, MermaidRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphRenderer;

/// Factory for creating graph renderers
///
/// This factory encapsulates the creation logic for the different renderer
/// implementations, following the Factory Pattern. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on application needs.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified output format
    pub fn create(format: OutputFormat) -> Box<dyn GraphRenderer> {
        match format {
            OutputFormat::Dot => Box::new(DotRenderer::new()),
            OutputFormat::Mermaid => Box::new(MermaidRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Dot => "📝 Rendering Graphviz DOT diagram...",
            OutputFormat::Mermaid => "📝 Rendering Mermaid diagram...",
        }
    }
}
