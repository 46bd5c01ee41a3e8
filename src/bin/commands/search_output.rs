use artfetch::{messages, AlbumResult};
use serde::{Deserialize, Serialize};

/// Events emitted by the search command
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SearchEvent {
    /// Starting a search
    Started { term: String },
    /// One qualifying album on the displayed page
    AlbumFound { index: usize, album: AlbumResult },
    /// Pagination summary for the displayed page
    PageInfo {
        page: usize,
        total_pages: usize,
        total_results: usize,
        has_next: bool,
    },
    /// The search completed with zero qualifying results
    NoResults,
    /// The search fetch failed
    Failed { message: String },
}

/// Trait for handling search command output
pub trait SearchOutputHandler {
    fn handle_event(&mut self, event: SearchEvent);
}

/// Default output handler: status messages go to stderr, result cards go to
/// stdout as readable lines.
pub struct HumanReadableSearchHandler;

impl HumanReadableSearchHandler {
    pub fn new() -> Self {
        Self
    }
}

impl SearchOutputHandler for HumanReadableSearchHandler {
    fn handle_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Started { term } => {
                eprintln!("Searching albums for '{term}'...");
            }
            SearchEvent::AlbumFound { index, album } => {
                println!(
                    "{index:>3}. {} by {} (Released: {})",
                    album.collection_name,
                    album.artist_name,
                    album.display_year()
                );
                println!("     {}", album.artwork_url_100);
            }
            SearchEvent::PageInfo {
                page,
                total_pages,
                total_results,
                has_next,
            } => {
                eprintln!("Page {page} of {total_pages} ({total_results} results)");
                if has_next {
                    eprintln!("  (Use --page {} for the next page)", page + 1);
                }
            }
            SearchEvent::NoResults => {
                eprintln!("{}", messages::NO_RESULTS);
            }
            SearchEvent::Failed { message } => {
                eprintln!("{message}");
            }
        }
    }
}

/// JSON output handler: status events go to stderr as JSON, albums go to
/// stdout one JSON object per line.
pub struct JsonSearchHandler;

impl JsonSearchHandler {
    pub fn new() -> Self {
        Self
    }
}

impl SearchOutputHandler for JsonSearchHandler {
    fn handle_event(&mut self, event: SearchEvent) {
        match &event {
            SearchEvent::AlbumFound { album, .. } => {
                if let Ok(json) = serde_json::to_string(album) {
                    println!("{json}");
                }
            }
            SearchEvent::Started { .. }
            | SearchEvent::PageInfo { .. }
            | SearchEvent::NoResults
            | SearchEvent::Failed { .. } => {
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}
