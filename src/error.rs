use thiserror::Error;

/// Errors surfaced by the walkers, the fetcher and the catalog
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("request to {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("pagination loop detected at {url}")]
    PaginationLoop { url: String },

    #[error("stopped after reaching the {pages} page limit")]
    PageCeiling { pages: usize },

    #[error("stopped by user")]
    Cancelled,

    #[error("could not derive a search slug from `{href}`")]
    Slug { href: String },

    #[error("no {what} found")]
    EmptyCatalog { what: &'static str },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CrawlError {
    /// Whether another attempt at the same request might succeed
    pub fn is_transient(&self) -> bool {
        match self {
            CrawlError::Fetch { .. } => true,
            CrawlError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
