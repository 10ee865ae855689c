//! Bulletin page scraping and workbook download
//!
//! The publisher lists each week's workbooks on a bulletin page. The
//! fetcher pulls that page, locates the "prices with taxes" workbook link
//! (falling back to the first spreadsheet link when the label changed), and
//! downloads the workbook to a caller-supplied path. Link discovery is a
//! pure function over the HTML so it can be tested offline.

use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::constants::WORKBOOK_LINK_LABEL;
use crate::{Error, Result};

/// HTTP client for the bulletin publisher
pub struct BulletinFetcher {
    client: reqwest::Client,
    page_url: String,
    base_url: String,
}

impl BulletinFetcher {
    /// Build a fetcher from configuration
    ///
    /// Redirects are followed, matching how the publisher serves document
    /// downloads through redirecting links.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let page = Url::parse(&config.page_url).map_err(|e| {
            Error::configuration(format!("Invalid bulletin page URL '{}': {}", config.page_url, e))
        })?;
        let base_url = format!(
            "{}://{}",
            page.scheme(),
            page.host_str()
                .ok_or_else(|| Error::configuration("Bulletin page URL has no host"))?
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::fetch(&config.page_url, "Failed to build HTTP client", Some(e)))?;

        Ok(Self {
            client,
            page_url: config.page_url.clone(),
            base_url,
        })
    }

    /// Locate the latest workbook URL on the bulletin page
    pub async fn latest_workbook_url(&self) -> Result<String> {
        info!("Fetching bulletin page: {}", self.page_url);
        let html = self
            .client
            .get(&self.page_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        find_workbook_url(&html, &self.base_url)
    }

    /// Download a workbook to the given path, returning its size in bytes
    pub async fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        info!("Downloading workbook: {}", url);
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        tokio::fs::write(dest, &bytes)
            .await
            .map_err(|e| Error::io(format!("Failed to write {}", dest.display()), e))?;

        debug!("Wrote {} bytes to {}", bytes.len(), dest.display());
        Ok(bytes.len() as u64)
    }
}

/// Find the with-taxes workbook link in bulletin page HTML
///
/// Prefers anchors whose visible text or `data-untranslated-label`
/// attribute mentions the with-taxes label; falls back to the first
/// spreadsheet link on the page. Relative hrefs are resolved against the
/// page's origin.
pub fn find_workbook_url(html: &str, base_url: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]")
        .map_err(|e| Error::link_discovery(format!("Invalid anchor selector: {}", e)))?;

    let mut fallback: Option<String> = None;

    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let is_workbook = href.contains(".xlsx") || href.contains("/document/download/");
        if !is_workbook {
            continue;
        }

        let text = anchor.text().collect::<String>().to_lowercase();
        let label = anchor
            .value()
            .attr("data-untranslated-label")
            .unwrap_or("")
            .to_lowercase();

        if text.contains(WORKBOOK_LINK_LABEL) || label.contains(WORKBOOK_LINK_LABEL) {
            return Ok(absolutize(href, base_url));
        }

        if fallback.is_none() && href.contains(".xlsx") {
            fallback = Some(absolutize(href, base_url));
        }
    }

    fallback.ok_or_else(|| {
        Error::link_discovery("Could not find a workbook download link on the bulletin page")
    })
}

/// Resolve a possibly-relative href against the page origin
fn absolutize(href: &str, base_url: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", base_url, href)
    } else {
        format!("{}/{}", base_url, href)
    }
}
