use crate::config::PacingConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// The step of a walk that just completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceStep {
    /// A result page was counted
    CountedPage,
    /// A result page was fully crawled and another follows
    CrawledPage,
    /// A listing's description was fetched and shown
    DescribedListing,
    /// A page fetch failed and is about to be retried
    RetryPage,
}

/// Decides how long to wait after each step
pub trait Pacing: Send + Sync {
    fn delay(&self, step: PaceStep) -> Duration;
}

/// Fixed delays taken from the site configuration
#[derive(Debug, Clone, Copy)]
pub struct FixedPacing {
    config: PacingConfig,
}

impl FixedPacing {
    pub fn new(config: PacingConfig) -> Self {
        Self { config }
    }
}

impl Pacing for FixedPacing {
    fn delay(&self, step: PaceStep) -> Duration {
        let ms = match step {
            PaceStep::CountedPage => self.config.count_page_ms,
            PaceStep::CrawledPage => self.config.crawl_page_ms,
            PaceStep::DescribedListing => self.config.listing_ms,
            PaceStep::RetryPage => self.config.retry_ms,
        };
        Duration::from_millis(ms)
    }
}

/// No delays at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacing for NoPacing {
    fn delay(&self, _step: PaceStep) -> Duration {
        Duration::ZERO
    }
}

/// Applies a pacing policy while staying responsive to cancellation
#[derive(Clone)]
pub struct Pacer {
    policy: Arc<dyn Pacing>,
}

impl Pacer {
    pub fn new(policy: Arc<dyn Pacing>) -> Self {
        Self { policy }
    }

    /// Waits out the delay for `step`. Returns `false` if `cancel` fired first.
    pub async fn pause(&self, step: PaceStep, cancel: &CancellationToken) -> bool {
        if cancel.is_cancelled() {
            return false;
        }

        let delay = self.policy.delay(step);
        if delay.is_zero() {
            return true;
        }

        ::log::trace!("Pausing {:?} after {:?}", delay, step);
        tokio::select! {
            _ = tokio::time::sleep(delay) => true,
            _ = cancel.cancelled() => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pacing_maps_each_step() {
        let pacing = FixedPacing::new(PacingConfig::default());
        assert_eq!(pacing.delay(PaceStep::CountedPage), Duration::from_millis(500));
        assert_eq!(pacing.delay(PaceStep::CrawledPage), Duration::from_secs(1));
        assert_eq!(pacing.delay(PaceStep::DescribedListing), Duration::from_millis(500));
        assert_eq!(pacing.delay(PaceStep::RetryPage), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_pause_reports_cancellation() {
        let pacer = Pacer::new(Arc::new(FixedPacing::new(PacingConfig::default())));
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(!pacer.pause(PaceStep::CrawledPage, &cancel).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_is_interrupted_by_cancellation() {
        let pacer = Pacer::new(Arc::new(FixedPacing::new(PacingConfig::default())));
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });
        assert!(!pacer.pause(PaceStep::RetryPage, &cancel).await);
    }

    #[tokio::test]
    async fn test_no_pacing_returns_immediately() {
        let pacer = Pacer::new(Arc::new(NoPacing));
        assert!(pacer.pause(PaceStep::CrawledPage, &CancellationToken::new()).await);
    }
}
