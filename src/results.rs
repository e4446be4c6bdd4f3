use crate::config::SiteConfig;
use crate::error::CrawlError;
use url::Url;

/// One job posting found on a result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    /// Title of the posting, never empty
    pub title: String,

    /// Posting date as displayed by the site, never empty
    pub posted_date: String,

    /// Absolute link to the detail page
    pub detail_url: Url,
}

/// Listings and pagination found on one result page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageResult {
    /// Complete listings in page order
    pub listings: Vec<ListingRecord>,

    /// Absolute link to the following page, absent on the last page
    pub next_page_url: Option<Url>,

    /// Containers skipped because the date, title or link was missing
    pub dropped: usize,
}

/// Specialty and region filters chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub specialty_slug: String,
    pub region_slug: String,
}

impl SearchQuery {
    pub fn new(specialty_slug: impl Into<String>, region_slug: impl Into<String>) -> Self {
        Self {
            specialty_slug: specialty_slug.into(),
            region_slug: region_slug.into(),
        }
    }

    /// Build a query from catalog links.
    ///
    /// Specialty links look like `/JobAds/<specialty>/GR/...` and region links
    /// like `/JobAds/all/<region>/GR/...`.
    pub fn from_links(specialty_href: &str, region_href: &str) -> Result<Self, CrawlError> {
        let specialty = path_segment(specialty_href, 1)?;
        let region = path_segment(region_href, 2)?;
        Ok(Self::new(specialty, region))
    }

    /// First page of the combined search
    pub fn start_url(&self, config: &SiteConfig) -> Result<Url, CrawlError> {
        config.join(&format!(
            "/JobAds/{}/{}/{}",
            self.specialty_slug,
            self.region_slug,
            config.search_suffix.trim_matches('/')
        ))
    }
}

fn path_segment(href: &str, index: usize) -> Result<String, CrawlError> {
    // Catalog links may be absolute; only the path matters.
    let path = match Url::parse(href) {
        Ok(url) => url.path().to_string(),
        Err(_) => href.to_string(),
    };

    path.trim_matches('/')
        .split('/')
        .nth(index)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CrawlError::Slug {
            href: href.to_string(),
        })
}

/// Why a description could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionFailure {
    /// The detail page could not be fetched
    Fetch(String),
    /// The detail page has no linked-data block
    NoStructuredData,
    /// The linked-data block could not be decoded
    Decode(String),
}

/// Result of reading a listing's description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionOutcome {
    /// Plain text of the description
    Text(String),
    /// The structured data carries no usable description
    Missing,
    /// Extraction failed somewhere along the way
    Failed(DescriptionFailure),
}

impl DescriptionOutcome {
    /// The description text, empty when missing or failed
    pub fn into_text(self) -> String {
        match self {
            DescriptionOutcome::Text(text) => text,
            DescriptionOutcome::Missing | DescriptionOutcome::Failed(_) => String::new(),
        }
    }
}

/// A listing as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedListing {
    /// 1-based position in the crawl
    pub index: usize,
    pub listing: ListingRecord,
    /// Truncated plain-text description, possibly empty
    pub snippet: String,
}

/// How a crawl ended
#[derive(Debug)]
pub enum CrawlOutcome {
    /// The requested number of listings was shown
    Completed { shown: usize },
    /// The result set ran out before the limit
    Exhausted { shown: usize },
    /// The user stopped the crawl
    Cancelled { shown: usize },
    /// A result page could not be walked
    Failed { shown: usize, error: CrawlError },
}

impl CrawlOutcome {
    pub fn shown(&self) -> usize {
        match self {
            CrawlOutcome::Completed { shown }
            | CrawlOutcome::Exhausted { shown }
            | CrawlOutcome::Cancelled { shown }
            | CrawlOutcome::Failed { shown, .. } => *shown,
        }
    }
}

/// Events yielded by a crawl, in order
#[derive(Debug)]
pub enum CrawlEvent {
    /// A result page is being walked
    PageStarted { number: usize, url: Url },
    /// A listing is ready to be displayed
    Listing(DisplayedListing),
    /// Always the last event
    Finished(CrawlOutcome),
}

/// Running count reported after each page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountProgress {
    pub page: usize,
    pub total: usize,
}

/// Final result of counting a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSummary {
    pub pages: usize,
    pub total: usize,
}
