//! HTTP fetcher implementation
//!
//! This module handles every request of a scrape run:
//! - Building the HTTP client with the static header set
//! - GET requests for the product page markup
//! - GET requests for raw image bytes

use crate::config::HttpConfig;
use crate::{ConfigError, ScrapeError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

/// Builds an HTTP client carrying the configured static headers
///
/// # Arguments
///
/// * `config` - The static request settings
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(ScrapeError)` - A header was invalid or the client failed to build
///
/// # Example
///
/// ```no_run
/// use toko_scout::config::HttpConfig;
/// use toko_scout::product::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, ScrapeError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(format!("invalid header name '{}'", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| ConfigError::InvalidHeader(format!("invalid value for header '{}'", name)))?;
        headers.insert(name, value);
    }

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches the product page markup
///
/// Any non-success status is reported as [`ScrapeError::Status`]; the page is
/// the one request of a run that is not allowed to fail.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, ScrapeError> {
    let response = send_get(client, url).await?;
    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();

    let body = response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Fetched {} ({} bytes, status {})", final_url, body.len(), status_code);

    Ok(FetchedPage {
        final_url,
        status_code,
        body,
    })
}

/// Fetches a resource and returns its raw body bytes
pub async fn fetch_bytes(client: &Client, url: &Url) -> Result<Vec<u8>, ScrapeError> {
    let response = send_get(client, url).await?;
    let bytes = response.bytes().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })?;
    Ok(bytes.to_vec())
}

/// Sends a GET request and rejects non-success statuses
async fn send_get(client: &Client, url: &Url) -> Result<Response, ScrapeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}
