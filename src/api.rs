//! Search query construction and response parsing for the iTunes Search API.

use crate::types::{AlbumResult, SEARCH_RESULT_LIMIT};
use crate::Result;
use serde::Deserialize;

/// Base URL of the public catalog search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://itunes.apple.com/search";

/// A catalog search for album artwork.
///
/// Owns the raw artist and album input and renders the single search term and
/// the full request URL. Both fields are trimmed and concatenated into one
/// query string, so an empty album field contributes nothing.
///
/// # Examples
///
/// ```rust
/// use artfetch::SearchQuery;
///
/// let query = SearchQuery::new("Beatles", "");
/// assert_eq!(query.term(), "Beatles");
///
/// let query = SearchQuery::new(" AC/DC ", "Back in Black");
/// assert_eq!(query.term(), "AC/DC Back in Black");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    artist: String,
    album: String,
    limit: usize,
}

impl SearchQuery {
    /// Create a query from artist and album input.
    ///
    /// The album may be empty; the artist usually should not be, but an
    /// entirely empty query is not rejected here (the endpoint simply
    /// returns nothing useful for it).
    pub fn new(artist: &str, album: &str) -> Self {
        Self {
            artist: artist.to_string(),
            album: album.to_string(),
            limit: SEARCH_RESULT_LIMIT,
        }
    }

    /// Override the upstream result cap for this query.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The result cap sent to the endpoint.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The single search term sent to the endpoint.
    ///
    /// Artist and album are each trimmed, joined with one space, and the
    /// result is trimmed again so a missing album leaves no trailing space.
    pub fn term(&self) -> String {
        format!("{} {}", self.artist.trim(), self.album.trim())
            .trim()
            .to_string()
    }

    /// Render the full GET URL for this query against the given endpoint.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}?term={}&entity=album&limit={}&media=music",
            endpoint,
            urlencoding::encode(&self.term()),
            self.limit
        )
    }

    /// Render the full GET URL against the production endpoint.
    pub fn url(&self) -> String {
        self.url_for(SEARCH_ENDPOINT)
    }
}

#[derive(Deserialize)]
pub struct ItunesSearchResponse {
    #[serde(rename = "resultCount")]
    pub result_count: u32,
    pub results: Vec<ItunesAlbum>,
}

/// One raw entry of the search response.
///
/// Every field the card rendering needs is optional here; entries missing any
/// of them are discarded during conversion rather than surfaced as partial
/// results.
#[derive(Deserialize)]
pub struct ItunesAlbum {
    #[serde(rename = "collectionId")]
    pub collection_id: Option<u64>,
    #[serde(rename = "artistName")]
    pub artist_name: Option<String>,
    #[serde(rename = "collectionName")]
    pub collection_name: Option<String>,
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_100: Option<String>,
}

/// Parse a search response body into qualifying album results.
///
/// Results lacking an artwork thumbnail are excluded from the set entirely:
/// never rendered, never counted toward the session total. The order of the
/// remaining results is preserved.
pub fn parse_search_response(json: &str) -> Result<Vec<AlbumResult>> {
    let response: ItunesSearchResponse =
        serde_json::from_str(json).map_err(|e| crate::ArtworkError::Parse(e.to_string()))?;

    let albums: Vec<AlbumResult> = response
        .results
        .into_iter()
        .filter_map(|entry| {
            Some(AlbumResult {
                collection_id: entry.collection_id.unwrap_or_default(),
                artist_name: entry.artist_name?,
                collection_name: entry.collection_name?,
                release_date: entry.release_date,
                artwork_url_100: entry.artwork_url_100?,
            })
        })
        .collect();

    log::debug!(
        "parsed search response: {} raw results, {} with artwork",
        response.result_count,
        albums.len()
    );

    Ok(albums)
}
