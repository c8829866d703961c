/// Adapter implementations for the hexagonal architecture.
pub mod outbound;
