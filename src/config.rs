use crate::error::CrawlError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Configuration for one job board site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Root of the site; relative links are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Path of the page listing every specialty
    #[serde(default = "default_specialties_path")]
    pub specialties_path: String,

    /// Trailing path segments of a combined search URL
    #[serde(default = "default_search_suffix")]
    pub search_suffix: String,

    /// Substring that marks a homepage link as a region filter
    #[serde(default = "default_region_marker")]
    pub region_marker: String,

    /// Timeout for a single request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Extra attempts for a result page that failed to load
    #[serde(default = "default_page_retries")]
    pub page_retries: u32,

    /// Hard ceiling on the number of result pages walked
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Number of description words shown per listing
    #[serde(default = "default_snippet_words")]
    pub snippet_words: usize,

    /// Politeness delays
    #[serde(default)]
    pub pacing: PacingConfig,

    /// CSS selectors describing the site's markup
    #[serde(default)]
    pub selectors: SiteSelectors,
}

/// Fixed delays, in milliseconds, applied after each step of a walk
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PacingConfig {
    /// After each page while counting
    #[serde(default = "default_count_page_ms")]
    pub count_page_ms: u64,

    /// Before moving to the next page while crawling
    #[serde(default = "default_crawl_page_ms")]
    pub crawl_page_ms: u64,

    /// After each listing's description fetch
    #[serde(default = "default_listing_ms")]
    pub listing_ms: u64,

    /// Before retrying a failed page fetch
    #[serde(default = "default_retry_ms")]
    pub retry_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            count_page_ms: default_count_page_ms(),
            crawl_page_ms: default_crawl_page_ms(),
            listing_ms: default_listing_ms(),
            retry_ms: default_retry_ms(),
        }
    }
}

/// CSS selectors for the parts of the site we read
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSelectors {
    /// One listing container on a result page
    pub listing: String,
    /// Posting date, relative to a listing container
    pub date: String,
    /// Title anchor, relative to a listing container
    pub title: String,
    /// "Next page" anchor
    pub next_page: String,
    /// Linked-data script block on a detail page
    pub structured_data: String,
    /// Specialty anchors on the specialties page
    pub specialty: String,
    /// Candidate region anchors on the homepage
    pub region: String,
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            listing: "div.jobitem".to_string(),
            date: "span.datemob".to_string(),
            title: "h3.title a".to_string(),
            next_page: "a.gtnext".to_string(),
            structured_data: r#"script[type="application/ld+json"]"#.to_string(),
            specialty: "div.catbox h3 a".to_string(),
            region: "ul.homelist li a".to_string(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.jobfind.gr".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:139.0) Gecko/20100101 Firefox/139.0".to_string()
}

fn default_specialties_path() -> String {
    "/JobAdsSearchCat/GR/Theseis-Ergasias-ana-Eidikotita".to_string()
}

fn default_search_suffix() -> String {
    "GR/Theseis_Ergasias".to_string()
}

fn default_region_marker() -> String {
    "/JobAds/all/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_page_retries() -> u32 {
    1
}

fn default_max_pages() -> usize {
    500
}

fn default_snippet_words() -> usize {
    30
}

fn default_count_page_ms() -> u64 {
    500
}

fn default_crawl_page_ms() -> u64 {
    1000
}

fn default_listing_ms() -> u64 {
    500
}

fn default_retry_ms() -> u64 {
    2000
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            specialties_path: default_specialties_path(),
            search_suffix: default_search_suffix(),
            region_marker: default_region_marker(),
            request_timeout_secs: default_request_timeout_secs(),
            page_retries: default_page_retries(),
            max_pages: default_max_pages(),
            snippet_words: default_snippet_words(),
            pacing: PacingConfig::default(),
            selectors: SiteSelectors::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CrawlError> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut contents))
            .map_err(|e| CrawlError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CrawlError> {
        serde_json::from_str(json).map_err(|e| CrawlError::Config(e.to_string()))
    }

    /// Apply `JOBFIND_BASE_URL` if it is set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var("JOBFIND_BASE_URL") {
            if !base_url.is_empty() {
                ::log::info!("Using base URL from environment: {}", base_url);
                self.base_url = base_url;
            }
        }
        self
    }

    /// The parsed base URL
    pub fn base(&self) -> Result<Url, CrawlError> {
        Url::parse(&self.base_url).map_err(|source| CrawlError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    /// Absolute URL of the specialties page
    pub fn specialties_url(&self) -> Result<Url, CrawlError> {
        self.join(&self.specialties_path)
    }

    /// Resolve `path` against the base URL
    pub fn join(&self, path: &str) -> Result<Url, CrawlError> {
        self.base()?
            .join(path)
            .map_err(|source| CrawlError::InvalidUrl {
                url: path.to_string(),
                source,
            })
    }
}
