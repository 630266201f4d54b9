use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Minimum gap between consecutive dispatches on one client.
///
/// Clones share state. The lock is held across the wait, so concurrent callers are
/// released one interval apart.
#[derive(Debug, Clone)]
pub(crate) struct Throttle {
    interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl Throttle {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait out the rest of the interval, then record now as the last dispatch.
    pub(crate) async fn acquire(&self) {
        let mut last_request = self.last_request.lock().await;
        if let Some(previous) = *last_request {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                let wait = self.interval - elapsed;
                tracing::trace!(wait_ms = wait.as_millis() as u64, "throttling request");
                tokio::time::sleep(wait).await;
            }
        }
        *last_request = Some(Instant::now());
    }
}
