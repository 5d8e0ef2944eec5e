//! Platform-specific implementations
//!
//! Implementations of the platform traits in `ports::outbound::platform`.
//! The correct platform is selected at compile time based on the target
//! architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmSleepProvider as PlatformSleepProvider;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopSleepProvider as PlatformSleepProvider;

// Mock platform remains available via `crate::infrastructure::platform::mock`.
