//! Port definitions (hexagonal architecture boundaries)

pub mod inbound;
pub mod outbound;
