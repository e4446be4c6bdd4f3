use crate::config::SiteConfig;
use crate::error::CrawlError;
use crate::fetch::PageFetcher;
use crate::parsers::compile_selector;
use crate::parsers::html::element_text;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

/// Trailing parenthetical such as the listing count in `Attica (35)`
static TRAILING_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^(]*$").expect("valid trailing count pattern"));

/// A named filter link on the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub href: String,
}

/// Specialties listed on the specialties page
pub fn parse_specialties(html: &str, config: &SiteConfig) -> Result<Vec<CatalogEntry>, CrawlError> {
    let selector = compile_selector(&config.selectors.specialty)?;
    let doc = Html::parse_document(html);

    Ok(doc
        .select(&selector)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let name = element_text(a);
            (!name.is_empty()).then(|| CatalogEntry {
                name,
                href: href.to_string(),
            })
        })
        .collect())
}

/// Region filters listed on the homepage, without their listing counts
pub fn parse_regions(html: &str, config: &SiteConfig) -> Result<Vec<CatalogEntry>, CrawlError> {
    let selector = compile_selector(&config.selectors.region)?;
    let doc = Html::parse_document(html);

    Ok(doc
        .select(&selector)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            if !href.contains(&config.region_marker) {
                return None;
            }
            let name = strip_count(&element_text(a));
            (!name.is_empty()).then(|| CatalogEntry {
                name,
                href: href.to_string(),
            })
        })
        .collect())
}

/// Removes a trailing parenthetical from a display name
pub fn strip_count(name: &str) -> String {
    TRAILING_COUNT.replace(name, "").trim().to_string()
}

pub async fn fetch_specialties(
    fetcher: &dyn PageFetcher,
    config: &SiteConfig,
) -> Result<Vec<CatalogEntry>, CrawlError> {
    let url = config.specialties_url()?;
    ::log::info!("Fetching specialties from {}", url);
    let html = fetcher.fetch(&url).await?;
    non_empty(parse_specialties(&html, config)?, "specialties")
}

pub async fn fetch_regions(
    fetcher: &dyn PageFetcher,
    config: &SiteConfig,
) -> Result<Vec<CatalogEntry>, CrawlError> {
    let url = config.base()?;
    ::log::info!("Fetching regions from {}", url);
    let html = fetcher.fetch(&url).await?;
    non_empty(parse_regions(&html, config)?, "regions")
}

fn non_empty(
    entries: Vec<CatalogEntry>,
    what: &'static str,
) -> Result<Vec<CatalogEntry>, CrawlError> {
    if entries.is_empty() {
        return Err(CrawlError::EmptyCatalog { what });
    }
    ::log::debug!("Found {} {}", entries.len(), what);
    Ok(entries)
}
