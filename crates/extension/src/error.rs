//! Errors surfaced by the movement tool use cases.
//!
//! None of these reach the user: the tool's event dispatcher logs them and
//! carries on.

use cthulu_domain::DomainError;

use crate::ports::outbound::HostError;

#[derive(Debug, thiserror::Error)]
pub enum MovementError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),
    #[error("Geometry error: {0}")]
    Domain(#[from] DomainError),
    #[error("No interaction session is active")]
    NoActiveSession,
    #[error("A movement animation is still running")]
    AnimationInFlight,
}

impl MovementError {
    /// True for errors caused by the host rather than local state.
    pub fn is_host_failure(&self) -> bool {
        matches!(self, Self::Host(_))
    }
}
