use crate::crawlers::Walker;
use crate::crawlers::pagination::Pagination;
use crate::error::CrawlError;
use crate::pacing::PaceStep;
use crate::parsers::text::snippet;
use crate::results::{CrawlEvent, CrawlOutcome, DisplayedListing};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url::Url;

impl Walker {
    /// Starts a crawl and returns a receiver that yields events as listings are read.
    ///
    /// At most `limit` listings are yielded. The last event is always
    /// [`CrawlEvent::Finished`].
    pub fn crawl(
        &self,
        start_url: Url,
        limit: usize,
        cancel: CancellationToken,
    ) -> mpsc::Receiver<CrawlEvent> {
        let (event_tx, event_rx) = mpsc::channel(32);
        let walker = self.clone();

        tokio::spawn(async move {
            let outcome = walker.crawl_into(start_url, limit, &cancel, &event_tx).await;
            ::log::info!("Crawl finished: {:?}", outcome);
            if event_tx.send(CrawlEvent::Finished(outcome)).await.is_err() {
                ::log::debug!("Crawl receiver dropped before the final event");
            }
        });

        event_rx
    }

    /// Runs a crawl, sending listing events to `events`, and returns how it ended
    pub async fn crawl_into(
        &self,
        start_url: Url,
        limit: usize,
        cancel: &CancellationToken,
        events: &mpsc::Sender<CrawlEvent>,
    ) -> CrawlOutcome {
        let mut shown = 0;
        if limit == 0 {
            return CrawlOutcome::Completed { shown };
        }

        ::log::info!("Crawling up to {} listing(s) from {}", limit, start_url);
        let mut pagination = Pagination::new(self, start_url);

        loop {
            // Fetch the next result page, retrying transient failures
            let page = match pagination.next_page(cancel).await {
                Ok(Some(page)) => page,
                Ok(None) => return CrawlOutcome::Exhausted { shown },
                Err(CrawlError::Cancelled) => return CrawlOutcome::Cancelled { shown },
                Err(error) => return CrawlOutcome::Failed { shown, error },
            };

            let started = CrawlEvent::PageStarted {
                number: page.number,
                url: page.url,
            };
            if events.send(started).await.is_err() {
                return CrawlOutcome::Cancelled { shown };
            }

            // Describe each listing until the limit is reached
            for listing in page.result.listings {
                if shown >= limit {
                    break;
                }
                if cancel.is_cancelled() {
                    return CrawlOutcome::Cancelled { shown };
                }

                let description = self.extractor.extract(&listing.detail_url).await;
                shown += 1;
                let displayed = DisplayedListing {
                    index: shown,
                    snippet: snippet(&description.into_text(), self.snippet_words),
                    listing,
                };
                if events.send(CrawlEvent::Listing(displayed)).await.is_err() {
                    return CrawlOutcome::Cancelled { shown };
                }

                // No pause after the last listing
                if shown < limit && !self.pacer.pause(PaceStep::DescribedListing, cancel).await {
                    return CrawlOutcome::Cancelled { shown };
                }
            }

            if shown >= limit {
                return CrawlOutcome::Completed { shown };
            }

            // Move on to the next page, if any
            if !pagination.has_next() {
                return CrawlOutcome::Exhausted { shown };
            }
            if !self.pacer.pause(PaceStep::CrawledPage, cancel).await {
                return CrawlOutcome::Cancelled { shown };
            }
        }
    }
}
