use crate::crawlers::Walker;
use crate::crawlers::pagination::Pagination;
use crate::error::CrawlError;
use crate::pacing::PaceStep;
use crate::results::{CountProgress, CountSummary};
use tokio_util::sync::CancellationToken;
use url::Url;

impl Walker {
    /// Counts every listing reachable from `start_url`.
    ///
    /// `observer` receives the running total after each page.
    pub async fn count_all<F>(
        &self,
        start_url: Url,
        cancel: &CancellationToken,
        mut observer: F,
    ) -> Result<CountSummary, CrawlError>
    where
        F: FnMut(CountProgress),
    {
        ::log::info!("Counting listings from {}", start_url);

        let mut pagination = Pagination::new(self, start_url);
        let mut summary = CountSummary { pages: 0, total: 0 };

        while let Some(page) = pagination.next_page(cancel).await? {
            summary.pages = page.number;
            summary.total += page.result.listings.len();
            observer(CountProgress {
                page: summary.pages,
                total: summary.total,
            });

            if !pagination.has_next() {
                break;
            }
            if !self.pacer.pause(PaceStep::CountedPage, cancel).await {
                return Err(CrawlError::Cancelled);
            }
        }

        ::log::info!(
            "Counted {} listing(s) over {} page(s)",
            summary.total,
            summary.pages
        );
        Ok(summary)
    }
}
