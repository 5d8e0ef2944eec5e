//! Infrastructure - adapters for the outbound ports.

pub mod in_memory;
pub mod platform;
pub mod settings_loader;
