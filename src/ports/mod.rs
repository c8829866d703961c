/// Port definitions for the hexagonal architecture.
pub mod outbound;
