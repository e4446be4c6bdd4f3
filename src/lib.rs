// Re-export modules
pub mod catalog;
pub mod config;
pub mod crawlers;
pub mod display;
pub mod error;
pub mod fetch;
pub mod pacing;
pub mod parsers;
pub mod prompt;
pub mod results;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use config::SiteConfig;
pub use error::CrawlError;
pub use results::{CrawlEvent, CrawlOutcome, ListingRecord, PageResult, SearchQuery};

use catalog::CatalogEntry;
use crawlers::Walker;
use fetch::{HttpFetcher, PageFetcher};
use pacing::{FixedPacing, Pacing};
use results::{CountProgress, CountSummary, DescriptionOutcome};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Builder for a job board session
pub struct JobBoard {
    config: SiteConfig,
    fetcher: Option<Arc<dyn PageFetcher>>,
    pacing: Option<Arc<dyn Pacing>>,
}

impl JobBoard {
    /// Create a new builder with the given site configuration
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            fetcher: None,
            pacing: None,
        }
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, CrawlError> {
        let config = SiteConfig::from_file(path)?;
        Ok(Self { config, ..self })
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, CrawlError> {
        let config = SiteConfig::from_json(config_str)?;
        Ok(Self { config, ..self })
    }

    /// Use a custom fetcher instead of plain HTTP
    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Use a custom pacing policy instead of the configured delays
    pub fn with_pacing(mut self, pacing: Arc<dyn Pacing>) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Validate the configuration and build the session
    pub fn build(self) -> Result<Session, CrawlError> {
        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpFetcher::new(&self.config)?),
        };
        let pacing = self
            .pacing
            .unwrap_or_else(|| Arc::new(FixedPacing::new(self.config.pacing)));

        let walker = Walker::new(&self.config, Arc::clone(&fetcher), pacing)?;

        Ok(Session {
            config: self.config,
            fetcher,
            walker,
        })
    }
}

/// A configured connection to one job board
pub struct Session {
    config: SiteConfig,
    fetcher: Arc<dyn PageFetcher>,
    walker: Walker,
}

impl Session {
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Specialties offered by the site
    pub async fn specialties(&self) -> Result<Vec<CatalogEntry>, CrawlError> {
        catalog::fetch_specialties(self.fetcher.as_ref(), &self.config).await
    }

    /// Regions offered by the site
    pub async fn regions(&self) -> Result<Vec<CatalogEntry>, CrawlError> {
        catalog::fetch_regions(self.fetcher.as_ref(), &self.config).await
    }

    /// First result page of a search
    pub fn start_url(&self, query: &SearchQuery) -> Result<Url, CrawlError> {
        query.start_url(&self.config)
    }

    /// Count every listing of a search
    pub async fn count<F>(
        &self,
        start_url: Url,
        cancel: &CancellationToken,
        observer: F,
    ) -> Result<CountSummary, CrawlError>
    where
        F: FnMut(CountProgress),
    {
        self.walker.count_all(start_url, cancel, observer).await
    }

    /// Stream up to `limit` listings of a search
    pub fn crawl(
        &self,
        start_url: Url,
        limit: usize,
        cancel: CancellationToken,
    ) -> mpsc::Receiver<CrawlEvent> {
        self.walker.crawl(start_url, limit, cancel)
    }

    /// Description of a single detail page
    pub async fn describe(&self, detail_url: &Url) -> DescriptionOutcome {
        self.walker.extractor().extract(detail_url).await
    }
}
