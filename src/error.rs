use thiserror::Error;

/// Error types for catalog search and artwork download operations.
///
/// This enum covers all possible errors that can occur when talking to the
/// iTunes Search API and when retrieving artwork images, including network
/// issues, non-success HTTP statuses, and parsing failures.
///
/// All failures are local and recoverable: a failed artwork download does not
/// invalidate the search session it came from, and a failed search leaves the
/// previous session untouched.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use artfetch::{ArtworkError, CatalogClient, ItunesClient, SearchQuery};
///
/// #[tokio::main]
/// async fn main() {
///     let client = ItunesClient::new(Box::new(http_client::native::NativeClient::new()));
///     let query = SearchQuery::new("Beatles", "");
///
///     match client.search_albums(&query).await {
///         Ok(results) => println!("{} albums found", results.len()),
///         Err(ArtworkError::Api { status }) => eprintln!("API request failed with status {status}"),
///         Err(ArtworkError::Http(msg)) => eprintln!("Network error: {msg}"),
///         Err(e) => eprintln!("Other error: {e}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum ArtworkError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, timeouts, DNS errors, and other
    /// low-level networking issues.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The remote endpoint answered with a non-success status code.
    ///
    /// For artwork fetches this commonly means the requested resolution
    /// variant does not exist on the server; nothing guarantees that every
    /// album has a 3000x3000 rendition.
    #[error("API request failed with status {status}")]
    Api {
        /// The HTTP status code returned by the server
        status: u16,
    },

    /// Failed to parse the search response.
    ///
    /// This can happen when the API changes its JSON shape or returns
    /// unexpected data formats.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// An artwork download could not be completed.
    ///
    /// The failure is terminal for that one link; other resolutions of the
    /// same album are unaffected.
    #[error("Download failed: {0}")]
    Download(String),

    /// File system I/O errors.
    ///
    /// This can occur when saving downloaded artwork to disk.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
