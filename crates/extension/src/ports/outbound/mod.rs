//! Outbound ports - Interfaces to the host platform
//!
//! The movement tool only talks to the VTT through these traits, so the use
//! cases run the same against the real host bridge, the in-memory host, or
//! mocks.

pub mod error;
pub mod grid_port;
pub mod interaction_port;
pub mod platform;
pub mod player_port;
pub mod scene_port;
pub mod tool_port;

pub use error::HostError;
pub use grid_port::GridPort;
pub use interaction_port::{InteractionPort, ItemInteraction};
pub use platform::{SleepFuture, SleepProvider};
pub use player_port::PlayerPort;
pub use scene_port::{ItemMutator, ScenePort};
pub use tool_port::ToolRegistryPort;

#[cfg(any(test, feature = "testing"))]
pub use grid_port::MockGridPort;
#[cfg(any(test, feature = "testing"))]
pub use interaction_port::{MockInteractionPort, MockItemInteraction};
#[cfg(any(test, feature = "testing"))]
pub use player_port::MockPlayerPort;
#[cfg(any(test, feature = "testing"))]
pub use scene_port::MockScenePort;
#[cfg(any(test, feature = "testing"))]
pub use tool_port::MockToolRegistryPort;
