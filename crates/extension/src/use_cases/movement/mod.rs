//! Movement use cases.
//!
//! A gesture runs: pointer event → grid snap → path mutation → geometry →
//! interaction update. Confirming stops the interaction and hands the path to
//! the animator.

pub mod animator;
pub mod geometry;
pub mod grid_adapter;
pub mod path_state;
pub mod session;
mod tool;

pub use animator::{AnimationReport, MotionAnimator};
pub use geometry::{DistanceLabel, PathGeometry};
pub use grid_adapter::GridAdapter;
pub use path_state::{find_hovered_token, HoveredToken, PathMutation, PathState};
pub use session::InteractionSession;
pub use tool::{mode_specs, HostPorts, MovementTool};

#[cfg(test)]
mod tests;
