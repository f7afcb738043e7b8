use async_trait::async_trait;
use std::time::Duration;

/// Gate between outbound requests.
///
/// The downloader asks for a pause and the pacer decides how to honor it,
/// so tests can record delays instead of sleeping through them.
#[async_trait]
pub trait Pacer: Send {
    async fn pause(&mut self, delay: Duration);
}

/// Wall-clock pacer backed by `tokio::time::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

#[async_trait]
impl Pacer for SleepPacer {
    async fn pause(&mut self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        tracing::trace!(ms = delay.as_millis() as u64, "Pausing");
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_pacer_waits_requested_delay() {
        let start = tokio::time::Instant::now();
        SleepPacer.pause(Duration::from_secs(2)).await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_pacer_zero_delay() {
        let start = tokio::time::Instant::now();
        SleepPacer.pause(Duration::ZERO).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
