//! HTTP client seam for catalog search and artwork retrieval.

use crate::api::{parse_search_response, SearchQuery, SEARCH_ENDPOINT};
use crate::error::ArtworkError;
use crate::types::AlbumResult;
use crate::Result;
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use std::sync::Arc;

/// Remote operations the tool performs: one search fetch per query and one
/// independent artwork fetch per download link.
///
/// This trait is the seam between the pure data transformations (pagination,
/// link building) and the network; mock it (via the `mock` feature) to test
/// flows without touching the real endpoint.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait CatalogClient {
    /// Run one album search and return the qualifying results.
    ///
    /// Results lacking artwork are already filtered out. An empty vec is a
    /// normal outcome, not an error.
    async fn search_albums(&self, query: &SearchQuery) -> Result<Vec<AlbumResult>>;

    /// Fetch one artwork image as raw bytes.
    ///
    /// No retry and no resumption: a failure here is terminal for this URL.
    async fn fetch_artwork(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`CatalogClient`] implementation backed by the iTunes Search API.
///
/// # Examples
///
/// ```rust,no_run
/// # use artfetch::{CatalogClient, ItunesClient, SearchQuery};
/// # tokio_test::block_on(async {
/// let client = ItunesClient::new(Box::new(http_client::native::NativeClient::new()));
///
/// let results = client.search_albums(&SearchQuery::new("Beatles", "")).await?;
/// for album in results.iter().take(5) {
///     println!("{} by {}", album.collection_name, album.artist_name);
/// }
/// # Ok::<(), artfetch::ArtworkError>(())
/// # });
/// ```
#[derive(Clone)]
pub struct ItunesClient {
    client: Arc<dyn HttpClient + Send + Sync>,
    endpoint: String,
}

impl ItunesClient {
    /// Create a client over the given HTTP backend, talking to the production
    /// search endpoint.
    pub fn new(client: Box<dyn HttpClient + Send + Sync>) -> Self {
        Self {
            client: Arc::from(client),
            endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }

    /// Create a client pointed at a different search endpoint.
    pub fn with_endpoint(client: Box<dyn HttpClient + Send + Sync>, endpoint: String) -> Self {
        Self {
            client: Arc::from(client),
            endpoint,
        }
    }

    /// The search endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get(&self, url: &str) -> Result<http_client::Response> {
        let parsed = url
            .parse::<Url>()
            .map_err(|e| ArtworkError::Parse(format!("invalid URL '{url}': {e}")))?;
        let request = Request::new(Method::Get, parsed);

        let start = std::time::Instant::now();
        let response = self
            .client
            .send(request)
            .await
            .map_err(|e| ArtworkError::Http(e.to_string()))?;

        log::debug!(
            "GET {url} -> {} in {}ms",
            response.status(),
            start.elapsed().as_millis()
        );

        if !response.status().is_success() {
            return Err(ArtworkError::Api {
                status: response.status().into(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl CatalogClient for ItunesClient {
    async fn search_albums(&self, query: &SearchQuery) -> Result<Vec<AlbumResult>> {
        let url = query.url_for(&self.endpoint);
        log::debug!("searching albums for term '{}'", query.term());

        let mut response = self.get(&url).await?;
        let body = response
            .body_string()
            .await
            .map_err(|e| ArtworkError::Http(e.to_string()))?;

        parse_search_response(&body)
    }

    async fn fetch_artwork(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("fetching artwork {url}");

        let mut response = self.get(url).await?;
        let bytes = response
            .body_bytes()
            .await
            .map_err(|e| ArtworkError::Http(e.to_string()))?;

        log::debug!("fetched {} bytes from {url}", bytes.len());
        Ok(bytes)
    }
}
