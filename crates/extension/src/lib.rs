//! Cthulu Extension - grid movement tool for a virtual-tabletop host
//!
//! Layout follows ports and adapters:
//! - `ports`: what the tool needs from the host (grid, scene, interaction
//!   lock, player, toolbar, timers) and the events it receives
//! - `use_cases`: path planning, rendering and animation
//! - `infrastructure`: platform timers, the in-memory host, settings loading

pub mod error;
pub mod infrastructure;
pub mod ports;
pub mod settings;
pub mod use_cases;

pub use error::MovementError;
pub use settings::MovementSettings;
