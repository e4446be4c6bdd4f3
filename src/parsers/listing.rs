use crate::config::SiteSelectors;
use crate::error::CrawlError;
use crate::parsers::compile_selector;
use crate::parsers::html::{element_text, first_text};
use crate::results::{ListingRecord, PageResult};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracts listings and the next-page link from a result page
#[derive(Debug, Clone)]
pub struct ListingParser {
    base: Url,
    listing: Selector,
    date: Selector,
    title: Selector,
    next_page: Selector,
}

impl ListingParser {
    /// Compile the site's selectors. Relative links resolve against `base`.
    pub fn new(selectors: &SiteSelectors, base: Url) -> Result<Self, CrawlError> {
        Ok(Self {
            base,
            listing: compile_selector(&selectors.listing)?,
            date: compile_selector(&selectors.date)?,
            title: compile_selector(&selectors.title)?,
            next_page: compile_selector(&selectors.next_page)?,
        })
    }

    /// Parses one result page
    pub fn parse_page(&self, html: &str) -> PageResult {
        let doc = Html::parse_document(html);

        let mut listings = Vec::new();
        let mut dropped = 0;
        for container in doc.select(&self.listing) {
            match self.parse_listing(container) {
                Some(listing) => listings.push(listing),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            ::log::debug!("Skipped {} incomplete listing(s)", dropped);
            if listings.is_empty() {
                ::log::warn!(
                    "Every listing on the page was incomplete; the site markup may have changed"
                );
            }
        }

        let next_page_url = doc
            .select(&self.next_page)
            .find_map(|a| a.value().attr("href"))
            .and_then(|href| self.resolve(href));

        PageResult {
            listings,
            next_page_url,
            dropped,
        }
    }

    fn parse_listing(&self, container: ElementRef<'_>) -> Option<ListingRecord> {
        let posted_date = first_text(container, &self.date)?;

        let anchor = container.select(&self.title).next()?;
        let title = Some(element_text(anchor)).filter(|t| !t.is_empty())?;
        let detail_url = self.resolve(anchor.value().attr("href")?)?;

        Some(ListingRecord {
            title,
            posted_date,
            detail_url,
        })
    }

    fn resolve(&self, href: &str) -> Option<Url> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }

        match self.base.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                ::log::debug!("Ignoring unresolvable link {}: {}", href, e);
                None
            }
        }
    }
}
