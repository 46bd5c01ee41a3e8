pub mod download;
pub mod links;
pub mod search;
pub mod search_output;
pub mod utils;

use artfetch::{ArtworkSize, ItunesClient, RESULTS_PER_PAGE, SEARCH_RESULT_LIMIT};
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy)]
pub enum SizeArg {
    /// 300x300 pixels
    Small,
    /// 600x600 pixels
    Medium,
    /// 1000x1000 pixels
    Large,
    /// ~3000x3000 pixels
    Max,
    /// All four sizes
    All,
}

impl SizeArg {
    /// Whether this argument selects the given artwork size.
    pub fn selects(&self, size: ArtworkSize) -> bool {
        match self {
            SizeArg::Small => size == ArtworkSize::Small,
            SizeArg::Medium => size == ArtworkSize::Medium,
            SizeArg::Large => size == ArtworkSize::Large,
            SizeArg::Max => size == ArtworkSize::Max,
            SizeArg::All => true,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog for albums with artwork
    ///
    /// The artist and album inputs are trimmed and concatenated into one
    /// search term. Results without an artwork thumbnail are discarded.
    /// The full result list is fetched once; --page selects a window over
    /// the already-fetched data.
    ///
    /// Usage examples:
    /// # Search by artist only
    /// artfetch search "Beatles"
    ///
    /// # Narrow the term with an album name
    /// artfetch search "AC/DC" --album "Who Made Who?"
    ///
    /// # Show the second page of results
    /// artfetch search "Mozart" --page 2
    ///
    /// # Emit results as JSON lines
    /// artfetch search "Beatles" --json
    Search {
        /// Artist name
        artist: String,

        /// Album name to narrow the search
        #[arg(long, default_value = "")]
        album: String,

        /// Page of results to display (1-based)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Results per page
        #[arg(long, default_value_t = RESULTS_PER_PAGE)]
        page_size: usize,

        /// Upstream result cap for the single search call
        #[arg(long, default_value_t = SEARCH_RESULT_LIMIT)]
        limit: usize,

        /// Output results as JSON (one album per line)
        #[arg(long)]
        json: bool,
    },

    /// Show the download links for one search result
    ///
    /// Prints the four fixed-resolution artwork URLs (300, 600, 1000, 3000)
    /// and the filename each would be saved under, without downloading.
    ///
    /// Usage examples:
    /// # Links for the first result
    /// artfetch links "AC/DC" --album "Who Made Who?"
    ///
    /// # Links for the third result
    /// artfetch links "Beatles" --index 3
    Links {
        /// Artist name
        artist: String,

        /// Album name to narrow the search
        #[arg(long, default_value = "")]
        album: String,

        /// Which search result to use (1-based, over the full result list)
        #[arg(long, default_value = "1")]
        index: usize,
    },

    /// Download artwork for one search result
    ///
    /// Fetches the selected resolutions independently and saves each under
    /// the output directory. A failed size is reported with its raw URL as a
    /// manual fallback and does not affect the other sizes.
    ///
    /// Usage examples:
    /// # Download all four sizes to the default download directory
    /// artfetch download "AC/DC" --album "Who Made Who?"
    ///
    /// # Only the largest rendition, into a chosen directory
    /// artfetch download "Beatles" --size max --output ./covers
    Download {
        /// Artist name
        artist: String,

        /// Album name to narrow the search
        #[arg(long, default_value = "")]
        album: String,

        /// Which search result to download (1-based, over the full result list)
        #[arg(long, default_value = "1")]
        index: usize,

        /// Which artwork size(s) to download
        #[arg(long, value_enum, default_value = "all")]
        size: SizeArg,

        /// Directory to save images into (default: your download directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Execute the appropriate command handler based on the parsed command
pub async fn execute_command(
    command: Commands,
    client: &ItunesClient,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Search {
            artist,
            album,
            page,
            page_size,
            limit,
            json,
        } => search::handle_search_command(client, &artist, &album, page, page_size, limit, json).await,

        Commands::Links {
            artist,
            album,
            index,
        } => links::handle_links_command(client, &artist, &album, index).await,

        Commands::Download {
            artist,
            album,
            index,
            size,
            output,
        } => download::handle_download_command(client, &artist, &album, index, size, output).await,
    }
}
