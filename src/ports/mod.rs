/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist here: the CLI drives the use case
/// directly, while the use case reaches infrastructure through these
/// interfaces.
pub mod outbound;
