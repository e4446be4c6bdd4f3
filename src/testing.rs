//! Fixtures shared by the unit tests.

use crate::error::CrawlError;
use crate::fetch::PageFetcher;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;
use url::Url;

pub const BASE: &str = "https://jobs.test";

/// In-memory fetcher that records every request
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    failing: HashMap<String, usize>,
    cancel_on: Option<(String, CancellationToken)>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, path: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url(path).to_string(), html.into());
        self
    }

    /// Fail the next `times` requests to `path`
    pub fn failing(mut self, path: &str, times: usize) -> Self {
        self.failing.insert(url(path).to_string(), times);
        self
    }

    /// Cancel `token` as soon as `path` is requested
    pub fn cancel_on(mut self, path: &str, token: CancellationToken) -> Self {
        self.cancel_on = Some((url(path).to_string(), token));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, path: &str) -> usize {
        let target = url(path).to_string();
        self.requests().iter().filter(|r| **r == target).count()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, CrawlError> {
        let key = url.to_string();
        let attempt = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(key.clone());
            requests.iter().filter(|r| **r == key).count()
        };

        if let Some((target, token)) = &self.cancel_on {
            if *target == key {
                token.cancel();
            }
        }

        if self.failing.get(&key).is_some_and(|times| attempt <= *times) {
            return Err(CrawlError::Fetch {
                url: key,
                reason: "connection reset".to_string(),
            });
        }

        self.pages.get(&key).cloned().ok_or(CrawlError::Status {
            url: key,
            status: 404,
        })
    }
}

pub fn url(path: &str) -> Url {
    Url::parse(BASE).unwrap().join(path).unwrap()
}

/// A listing container; `None` leaves the element out
pub fn job(date: Option<&str>, title: Option<&str>, href: &str) -> String {
    let date = date
        .map(|d| format!(r#"<span class="datemob">{}</span>"#, d))
        .unwrap_or_default();
    let title = title
        .map(|t| format!(r#"<h3 class="title"><a href="{}">{}</a></h3>"#, href, t))
        .unwrap_or_default();
    format!(r#"<div class="jobitem">{}{}</div>"#, date, title)
}

/// A result page holding `jobs`, optionally linking to `next`
pub fn results_page(jobs: &[String], next: Option<&str>) -> String {
    let next = next
        .map(|n| format!(r#"<a class="gtnext" href="{}">Next</a>"#, n))
        .unwrap_or_default();
    format!(
        "<html><body><div class=\"results\">{}</div><div class=\"pager\">{}</div></body></html>",
        jobs.concat(),
        next
    )
}

/// A detail page with a JSON-LD block carrying `description`
pub fn detail_page(description: &str) -> String {
    let json = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "JobPosting",
        "description": description,
    });
    format!(
        "<html><head><script type=\"application/ld+json\">{}</script></head><body></body></html>",
        json
    )
}
