//! Data types for album search results and artwork resolutions.
//!
//! This module contains the core data structures used throughout the crate:
//! the album record as sourced from the iTunes Search API, the fixed set of
//! artwork resolutions, and the tunable pagination/search constants.

use serde::{Deserialize, Serialize};

/// Number of results shown per page.
///
/// This is the default page window size; it can be overridden per session
/// with [`SearchSession::with_page_size`](crate::SearchSession::with_page_size).
pub const RESULTS_PER_PAGE: usize = 72;

/// Maximum number of results requested from the search endpoint in one call.
///
/// The full result list for a query is fetched once, bounded by this cap;
/// pagination is purely client-side slicing of the already-fetched data.
/// Overridable per query with [`SearchQuery::with_limit`](crate::SearchQuery::with_limit).
pub const SEARCH_RESULT_LIMIT: usize = 200;

/// The resolution token carried by thumbnail artwork URLs.
pub const THUMBNAIL_TOKEN: &str = "100x100bb.jpg";

/// Represents one album from a catalog search.
///
/// Fields are sourced verbatim from the iTunes Search API response and are
/// immutable once fetched. Results lacking an artwork thumbnail never become
/// an `AlbumResult`; they are dropped during parsing.
///
/// # Examples
///
/// ```rust
/// use artfetch::AlbumResult;
///
/// let album = AlbumResult {
///     collection_id: 1440769632,
///     artist_name: "AC/DC".to_string(),
///     collection_name: "Who Made Who?".to_string(),
///     release_date: Some("1986-05-24T07:00:00Z".to_string()),
///     artwork_url_100: "https://example.org/art/100x100bb.jpg".to_string(),
/// };
///
/// assert_eq!(album.release_year(), Some(1986));
/// assert_eq!(album.display_year(), "1986");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumResult {
    /// The catalog identifier of the album
    pub collection_id: u64,
    /// The artist name
    pub artist_name: String,
    /// The album (collection) name
    pub collection_name: String,
    /// Release date as reported by the API (RFC 3339), if present
    pub release_date: Option<String>,
    /// The 100x100 artwork thumbnail URL
    ///
    /// Larger renditions are derived from this URL by substituting the
    /// trailing resolution token; see [`artwork_url`](crate::download::artwork_url).
    pub artwork_url_100: String,
}

impl AlbumResult {
    /// Extract the release year from the release date.
    ///
    /// Parses the RFC 3339 date the API reports; falls back to the leading
    /// `YYYY` digits for dates that do not parse cleanly. Returns `None` when
    /// no release date is present at all.
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;

        let raw = self.release_date.as_deref()?;
        if let Ok(date) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(date.year());
        }
        raw.get(..4)?.parse().ok()
    }

    /// The release year as shown on a result card, `"N/A"` when unknown.
    pub fn display_year(&self) -> String {
        match self.release_year() {
            Some(year) => year.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// The fixed set of artwork resolutions offered for download.
///
/// Artwork URLs follow a predictable naming convention where the thumbnail's
/// size suffix can be textually substituted with larger size tokens. Nothing
/// guarantees the larger sizes exist server-side; absence surfaces as a
/// download failure on that one link.
///
/// # Examples
///
/// ```rust
/// use artfetch::ArtworkSize;
///
/// let tokens: Vec<String> = ArtworkSize::ALL.iter().map(|s| s.token()).collect();
/// assert_eq!(
///     tokens,
///     ["300x300bb.jpg", "600x600bb.jpg", "1000x1000bb.jpg", "3000x3000bb.jpg"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtworkSize {
    /// 300x300 pixels
    Small,
    /// 600x600 pixels
    Medium,
    /// 1000x1000 pixels
    Large,
    /// ~3000x3000 pixels, the largest rendition the convention supports
    Max,
}

impl ArtworkSize {
    /// All sizes in their fixed presentation order: 300, 600, 1000, 3000.
    pub const ALL: [ArtworkSize; 4] = [
        ArtworkSize::Small,
        ArtworkSize::Medium,
        ArtworkSize::Large,
        ArtworkSize::Max,
    ];

    /// The square pixel dimension of this size.
    pub fn pixels(&self) -> u32 {
        match self {
            ArtworkSize::Small => 300,
            ArtworkSize::Medium => 600,
            ArtworkSize::Large => 1000,
            ArtworkSize::Max => 3000,
        }
    }

    /// The dimension string embedded in URLs and filenames, e.g. `600x600`.
    pub fn dimensions(&self) -> String {
        let px = self.pixels();
        format!("{px}x{px}")
    }

    /// The URL suffix requesting this rendition, e.g. `600x600bb.jpg`.
    pub fn token(&self) -> String {
        format!("{}bb.jpg", self.dimensions())
    }

    /// Human-readable label for this size.
    pub fn label(&self) -> &'static str {
        match self {
            ArtworkSize::Small => "Small (300x300)",
            ArtworkSize::Medium => "Medium (600x600)",
            ArtworkSize::Large => "Large (1000x1000)",
            ArtworkSize::Max => "Max (~3000x3000)",
        }
    }
}

impl std::fmt::Display for ArtworkSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(release_date: Option<&str>) -> AlbumResult {
        AlbumResult {
            collection_id: 1,
            artist_name: "Artist".to_string(),
            collection_name: "Album".to_string(),
            release_date: release_date.map(str::to_string),
            artwork_url_100: "https://example.org/a/100x100bb.jpg".to_string(),
        }
    }

    #[test]
    fn test_release_year_rfc3339() {
        assert_eq!(album(Some("1986-05-24T07:00:00Z")).release_year(), Some(1986));
    }

    #[test]
    fn test_release_year_prefix_fallback() {
        assert_eq!(album(Some("1997")).release_year(), Some(1997));
    }

    #[test]
    fn test_release_year_missing() {
        assert_eq!(album(None).release_year(), None);
        assert_eq!(album(None).display_year(), "N/A");
    }

    #[test]
    fn test_size_order_is_fixed() {
        let px: Vec<u32> = ArtworkSize::ALL.iter().map(ArtworkSize::pixels).collect();
        assert_eq!(px, [300, 600, 1000, 3000]);
    }
}
