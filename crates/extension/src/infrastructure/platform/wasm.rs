//! Browser platform implementations.

use gloo_timers::future::TimeoutFuture;
use send_wrapper::SendWrapper;

use crate::ports::outbound::{SleepFuture, SleepProvider};

/// Browser sleep provider using `setTimeout`
///
/// The browser runs everything on one thread, so wrapping the timer future
/// in `SendWrapper` is sound.
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> SleepFuture {
        let millis = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(SendWrapper::new(TimeoutFuture::new(millis)))
    }
}
