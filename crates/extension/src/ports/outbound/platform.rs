//! Platform abstraction ports
//!
//! Keeps `#[cfg]` branches out of the use cases. Implementations live in
//! `infrastructure::platform`.

use std::{future::Future, pin::Pin};

/// Boxed sleep future; `Send` so it can be awaited inside port futures.
pub type SleepFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Async sleep abstraction
///
/// Used for animation pacing.
pub trait SleepProvider: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> SleepFuture;
}
