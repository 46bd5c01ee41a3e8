//! User-facing status messages.
//!
//! Kept as library constants so the exact wording is testable and the CLI
//! front end stays free of copy.

/// Shown when a search completes with zero qualifying results. This is an
/// informational state, distinct from a failed search.
pub const NO_RESULTS: &str =
    "No albums found for your search. Try different terms or check spelling.";

/// Shown when the search input is blank and there is nothing to query.
pub const IDLE_PROMPT: &str = "Enter an artist and optionally an album name to begin your search.";

/// Format the error-styled message for a failed search fetch.
pub fn search_failed(error: &impl std::fmt::Display) -> String {
    format!("Failed to fetch album art: {error}. Please check your connection or try again later.")
}

/// Format the alert shown when one download link fails, offering the raw URL
/// as a manual fallback.
pub fn download_failed(url: &str, error: &impl std::fmt::Display) -> String {
    format!("Download failed: {error}. Open the URL directly instead: {url}")
}
