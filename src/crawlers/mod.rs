pub mod counter;
pub mod description;
pub mod pagination;
pub mod web;


use crate::config::SiteConfig;
use crate::error::CrawlError;
use crate::fetch::PageFetcher;
use crate::pacing::{Pacer, Pacing};
use crate::parsers::ListingParser;
use std::sync::Arc;

pub use description::DescriptionExtractor;

/// Walks the result pages of one site.
///
/// Both walkers (counting and crawling) live on this type; they share the
/// fetcher, the listing parser and the pacing policy.
#[derive(Clone)]
pub struct Walker {
    fetcher: Arc<dyn PageFetcher>,
    parser: Arc<ListingParser>,
    extractor: Arc<DescriptionExtractor>,
    pacer: Pacer,
    page_retries: u32,
    max_pages: usize,
    snippet_words: usize,
}

impl Walker {
    pub fn new(
        config: &SiteConfig,
        fetcher: Arc<dyn PageFetcher>,
        pacing: Arc<dyn Pacing>,
    ) -> Result<Self, CrawlError> {
        let parser = ListingParser::new(&config.selectors, config.base()?)?;
        let extractor = DescriptionExtractor::new(Arc::clone(&fetcher), &config.selectors)?;

        Ok(Self {
            fetcher,
            parser: Arc::new(parser),
            extractor: Arc::new(extractor),
            pacer: Pacer::new(pacing),
            page_retries: config.page_retries,
            max_pages: config.max_pages,
            snippet_words: config.snippet_words,
        })
    }

    /// The description extractor used for each listing
    pub fn extractor(&self) -> &DescriptionExtractor {
        &self.extractor
    }
}
