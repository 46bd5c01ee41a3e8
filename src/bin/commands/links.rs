use super::utils::checked_index;
use artfetch::{build_download_links, messages, CatalogClient, ItunesClient, SearchQuery};

/// Handle the links command: print the four download URLs and filenames for
/// one search result without downloading anything.
pub async fn handle_links_command(
    client: &ItunesClient,
    artist: &str,
    album: &str,
    index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = SearchQuery::new(artist, album);
    let results = match client.search_albums(&query).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{}", messages::search_failed(&e));
            return Err(Box::new(e));
        }
    };

    if results.is_empty() {
        eprintln!("{}", messages::NO_RESULTS);
        return Ok(());
    }

    let selected = &results[checked_index(index, results.len())?];
    println!(
        "{} by {} (Released: {})",
        selected.collection_name,
        selected.artist_name,
        selected.display_year()
    );

    for link in build_download_links(selected) {
        println!("{}: {}", link.size.label(), link.url);
        println!("  -> {}", link.filename);
    }

    Ok(())
}
