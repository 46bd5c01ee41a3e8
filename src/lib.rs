pub mod api;
pub mod client;
pub mod download;
pub mod error;
pub mod messages;
pub mod session;
pub mod types;

pub use api::{parse_search_response, SearchQuery, SEARCH_ENDPOINT};
pub use client::{CatalogClient, ItunesClient};
pub use download::{
    artwork_url, build_download_links, download_filename, sanitize_file_component, save_artwork,
    DownloadLink, UNKNOWN_YEAR,
};
pub use error::ArtworkError;
pub use session::{RequestToken, SearchController, SearchSession};
pub use types::{AlbumResult, ArtworkSize, RESULTS_PER_PAGE, SEARCH_RESULT_LIMIT};

#[cfg(feature = "mock")]
pub use client::MockCatalogClient;

pub type Result<T> = std::result::Result<T, ArtworkError>;
