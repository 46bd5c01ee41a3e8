use super::utils::{checked_index, resolve_output_dir};
use super::SizeArg;
use artfetch::{
    build_download_links, messages, save_artwork, CatalogClient, DownloadLink, ItunesClient,
    SearchQuery,
};
use std::path::PathBuf;

/// Handle the download command: search, pick one result, then fetch the
/// selected artwork sizes independently and save each to disk.
pub async fn handle_download_command(
    client: &ItunesClient,
    artist: &str,
    album: &str,
    index: usize,
    size: SizeArg,
    output: Option<PathBuf>,
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
    let links: Vec<DownloadLink> = build_download_links(selected)
        .into_iter()
        .filter(|link| size.selects(link.size))
        .collect();

    let dir = resolve_output_dir(output);
    eprintln!(
        "Downloading {} size(s) for '{}' by '{}' into {}",
        links.len(),
        selected.collection_name,
        selected.artist_name,
        dir.display()
    );

    // Each size is fetched independently; one failing does not cancel the rest.
    let fetches = links
        .iter()
        .map(|link| async move { (link, client.fetch_artwork(&link.url).await) });
    let outcomes = futures::future::join_all(fetches).await;

    let mut failed = 0;
    for (link, outcome) in outcomes {
        match outcome {
            Ok(bytes) => match save_artwork(&bytes, &dir, &link.filename) {
                Ok(path) => println!("✅ {}: {} ({} bytes)", link.size.label(), path.display(), bytes.len()),
                Err(e) => {
                    failed += 1;
                    eprintln!("❌ {}: {}", link.size.label(), messages::download_failed(&link.url, &e));
                }
            },
            Err(e) => {
                failed += 1;
                eprintln!("❌ {}: {}", link.size.label(), messages::download_failed(&link.url, &e));
            }
        }
    }

    if failed > 0 && failed == links.len() {
        return Err("all requested downloads failed".into());
    }
    Ok(())
}
