use crate::crawlers::Walker;
use crate::error::CrawlError;
use crate::pacing::PaceStep;
use crate::results::PageResult;
use std::collections::HashSet;
use tokio_util::sync::CancellationToken;
use url::Url;

/// A fetched and parsed result page
#[derive(Debug)]
pub struct FetchedPage {
    /// 1-based page number within the walk
    pub number: usize,
    pub url: Url,
    pub result: PageResult,
}

/// Follows "next page" links from a starting URL.
///
/// Every URL is fetched at most once; revisiting one is a pagination loop.
pub struct Pagination<'a> {
    walker: &'a Walker,
    next: Option<Url>,
    visited: HashSet<Url>,
    pages: usize,
}

impl<'a> Pagination<'a> {
    pub fn new(walker: &'a Walker, start_url: Url) -> Self {
        Self {
            walker,
            next: Some(start_url),
            visited: HashSet::new(),
            pages: 0,
        }
    }

    /// Whether the last fetched page linked to another one
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Fetches and parses the next page; `Ok(None)` once the chain ends
    pub async fn next_page(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<Option<FetchedPage>, CrawlError> {
        if cancel.is_cancelled() {
            return Err(CrawlError::Cancelled);
        }

        let Some(url) = self.next.take() else {
            return Ok(None);
        };

        if self.pages >= self.walker.max_pages {
            return Err(CrawlError::PageCeiling { pages: self.pages });
        }
        if !self.visited.insert(url.clone()) {
            ::log::error!("Page {} links back to {}", self.pages, url);
            return Err(CrawlError::PaginationLoop {
                url: url.to_string(),
            });
        }

        let html = self.fetch(&url, cancel).await?;
        self.pages += 1;

        let result = self.walker.parser.parse_page(&html);
        ::log::debug!(
            "Page {} ({}): {} listing(s), next: {:?}",
            self.pages,
            url,
            result.listings.len(),
            result.next_page_url.as_ref().map(Url::as_str)
        );
        self.next = result.next_page_url.clone();

        Ok(Some(FetchedPage {
            number: self.pages,
            url,
            result,
        }))
    }

    async fn fetch(&self, url: &Url, cancel: &CancellationToken) -> Result<String, CrawlError> {
        let mut attempt = 0;
        loop {
            match self.walker.fetcher.fetch(url).await {
                Ok(html) => return Ok(html),
                Err(e) if e.is_transient() && attempt < self.walker.page_retries => {
                    attempt += 1;
                    ::log::warn!(
                        "Fetching {} failed ({}), retry {} of {}",
                        url,
                        e,
                        attempt,
                        self.walker.page_retries
                    );
                    if !self.walker.pacer.pause(PaceStep::RetryPage, cancel).await {
                        return Err(CrawlError::Cancelled);
                    }
                }
                Err(e) => {
                    ::log::error!("Failed to fetch result page {}: {}", url, e);
                    return Err(e);
                }
            }
        }
    }
}
