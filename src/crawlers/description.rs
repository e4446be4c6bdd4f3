use crate::config::SiteSelectors;
use crate::error::CrawlError;
use crate::fetch::PageFetcher;
use crate::parsers::compile_selector;
use crate::parsers::description::{decode_lenient, description_field, structured_data_blocks};
use crate::parsers::html::visible_text;
use crate::results::{DescriptionFailure, DescriptionOutcome};
use scraper::Selector;
use std::sync::Arc;
use url::Url;

/// Reads the plain-text description from a listing's detail page
pub struct DescriptionExtractor {
    fetcher: Arc<dyn PageFetcher>,
    structured_data: Selector,
}

impl DescriptionExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>, selectors: &SiteSelectors) -> Result<Self, CrawlError> {
        Ok(Self {
            fetcher,
            structured_data: compile_selector(&selectors.structured_data)?,
        })
    }

    /// Fetches `detail_url` and extracts its description. Never fails outward.
    pub async fn extract(&self, detail_url: &Url) -> DescriptionOutcome {
        let html = match self.fetcher.fetch(detail_url).await {
            Ok(html) => html,
            Err(e) => {
                ::log::debug!("No description for {}: {}", detail_url, e);
                return DescriptionOutcome::Failed(DescriptionFailure::Fetch(e.to_string()));
            }
        };

        let outcome = describe_page(&html, &self.structured_data);
        if let DescriptionOutcome::Failed(reason) = &outcome {
            ::log::debug!("No description for {}: {:?}", detail_url, reason);
        }
        outcome
    }
}

/// Extracts the description from an already fetched detail page.
///
/// Blocks are tried in order; the first one carrying a description wins.
/// A decode error is only reported when no block could be decoded at all.
pub fn describe_page(html: &str, structured_data: &Selector) -> DescriptionOutcome {
    let blocks = structured_data_blocks(html, structured_data);
    if blocks.is_empty() {
        return DescriptionOutcome::Failed(DescriptionFailure::NoStructuredData);
    }

    let mut decoded_any = false;
    let mut decode_error = None;

    for block in &blocks {
        let value = match decode_lenient(block) {
            Ok(value) => value,
            Err(e) => {
                decode_error.get_or_insert_with(|| e.to_string());
                continue;
            }
        };
        decoded_any = true;

        let text = description_field(&value).map(|markup| visible_text(markup.trim()));
        if let Some(text) = text.filter(|text| !text.is_empty()) {
            return DescriptionOutcome::Text(text);
        }
    }

    match decode_error {
        Some(reason) if !decoded_any => DescriptionOutcome::Failed(DescriptionFailure::Decode(reason)),
        _ => DescriptionOutcome::Missing,
    }
}
