pub mod description;
pub mod html;
pub mod listing;
pub mod text;

#[cfg(test)]
mod tests;

use crate::error::CrawlError;
use scraper::Selector;

pub use listing::ListingParser;

/// Compiles a CSS selector, keeping the offending text in the error
pub fn compile_selector(selector: &str) -> Result<Selector, CrawlError> {
    Selector::parse(selector).map_err(|e| CrawlError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
