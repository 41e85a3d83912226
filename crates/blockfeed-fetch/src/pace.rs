//! Fixed-interval pacing between page fetches.

use std::time::Duration;

/// Inserts a mandatory delay between consecutive page fetches for the
/// same block.
///
/// This is a fixed interval, not a rate limiter: it does not adapt to
/// load or errors. Bulk pagination without it gets the client throttled
/// by the provider.
#[derive(Debug, Clone)]
pub struct Pacer {
    interval: Duration,
}

impl Pacer {
    /// Default pacing interval between page fetches.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

    /// Creates a pacer with the given interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Returns the configured interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits out the pacing interval.
    pub async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        assert_eq!(Pacer::default().interval(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_sleeps_for_interval() {
        let pacer = Pacer::new(Duration::from_secs(5));
        let before = tokio::time::Instant::now();
        pacer.pause().await;
        assert_eq!(before.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_zero_interval_returns_immediately() {
        Pacer::new(Duration::ZERO).pause().await;
    }
}
