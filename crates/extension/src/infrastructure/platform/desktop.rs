//! Desktop platform implementations backed by tokio.

use crate::ports::outbound::{SleepFuture, SleepProvider};

/// Desktop sleep provider using tokio timers
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> SleepFuture {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}
