/// Renderer adapters turning a finished resolution into diagram text
mod dot_renderer;
mod mermaid_renderer;

pub use dot_renderer::DotRenderer;
pub use mermaid_renderer::MermaidRenderer;
