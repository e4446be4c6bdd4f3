use crate::config::SiteConfig;
use crate::error::CrawlError;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Retrieves the raw HTML behind a URL
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, CrawlError>;
}

/// Plain GET requests with a browser User-Agent and a per-request timeout
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &SiteConfig) -> Result<Self, CrawlError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| CrawlError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, CrawlError> {
        let started = std::time::Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| fetch_error(url, e))?;

        let status = response.status();
        ::log::debug!("[{}] Fetching {}", status.as_u16(), url);
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| fetch_error(url, e))?;
        ::log::trace!(
            "Fetched {} bytes from {} in {:.2} seconds",
            body.len(),
            url,
            started.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}

fn fetch_error(url: &Url, error: reqwest::Error) -> CrawlError {
    let reason = if error.is_timeout() {
        "timed out".to_string()
    } else {
        error.to_string()
    };
    CrawlError::Fetch {
        url: url.to_string(),
        reason,
    }
}
