//! Mock platform for tests
//!
//! Sleeps return immediately; every requested duration is recorded so tests
//! can assert on pacing.

use std::sync::{Arc, Mutex};

use crate::ports::outbound::{SleepFuture, SleepProvider};

#[derive(Clone, Default)]
pub struct MockSleepProvider {
    calls: Arc<Mutex<Vec<u64>>>,
}

impl MockSleepProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in call order.
    pub fn calls(&self) -> Vec<u64> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> SleepFuture {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ms);
        }
        Box::pin(std::future::ready(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_every_sleep() {
        let sleep = MockSleepProvider::new();
        sleep.sleep_ms(100).await;
        sleep.sleep_ms(5).await;
        assert_eq!(sleep.calls(), vec![100, 5]);
    }
}
