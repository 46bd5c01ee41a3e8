use super::search_output::{
    HumanReadableSearchHandler, JsonSearchHandler, SearchEvent, SearchOutputHandler,
};
use artfetch::{messages, CatalogClient, ItunesClient, SearchController, SearchQuery};

/// Handle the search command: one fetch, then a client-side page window over
/// the fetched results.
pub async fn handle_search_command(
    client: &ItunesClient,
    artist: &str,
    album: &str,
    page: usize,
    page_size: usize,
    limit: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut handler: Box<dyn SearchOutputHandler> = if json {
        Box::new(JsonSearchHandler::new())
    } else {
        Box::new(HumanReadableSearchHandler::new())
    };

    let query = SearchQuery::new(artist, album).with_limit(limit);
    if query.term().is_empty() {
        eprintln!("{}", messages::IDLE_PROMPT);
        return Ok(());
    }
    handler.handle_event(SearchEvent::Started { term: query.term() });

    let mut controller = SearchController::with_page_size(page_size);
    let token = controller.begin_search();

    let results = match client.search_albums(&query).await {
        Ok(results) => results,
        Err(e) => {
            handler.handle_event(SearchEvent::Failed {
                message: messages::search_failed(&e),
            });
            return Err(Box::new(e));
        }
    };
    controller.apply_results(token, results);

    let session = controller.session_mut();
    if session.is_empty() {
        handler.handle_event(SearchEvent::NoResults);
        return Ok(());
    }

    if page != session.current_page() && !session.go_to_page(page) {
        eprintln!(
            "⚠️  Page {page} is out of range (1-{}); showing page {}",
            session.page_count(),
            session.current_page()
        );
    }

    let first_index = (session.current_page() - 1) * session.page_size();
    for (offset, result) in session.current_slice().iter().enumerate() {
        handler.handle_event(SearchEvent::AlbumFound {
            index: first_index + offset + 1,
            album: result.clone(),
        });
    }

    handler.handle_event(SearchEvent::PageInfo {
        page: session.current_page(),
        total_pages: session.page_count(),
        total_results: session.total_results(),
        has_next: session.has_next_page(),
    });

    Ok(())
}
