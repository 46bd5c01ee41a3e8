use artfetch::{build_download_links, messages, parse_search_response, AlbumResult, SearchQuery};

fn acdc() -> AlbumResult {
    AlbumResult {
        collection_id: 1440769632,
        artist_name: "AC/DC".to_string(),
        collection_name: "Who Made Who?".to_string(),
        release_date: Some("1986-05-24T07:00:00Z".to_string()),
        artwork_url_100: "https://is1-ssl.mzstatic.com/image/thumb/abc/100x100bb.jpg".to_string(),
    }
}

#[test]
fn four_links_in_fixed_resolution_order() {
    let links = build_download_links(&acdc());
    assert_eq!(links.len(), 4);

    let base = "https://is1-ssl.mzstatic.com/image/thumb/abc/";
    let expected = [
        "300x300bb.jpg",
        "600x600bb.jpg",
        "1000x1000bb.jpg",
        "3000x3000bb.jpg",
    ];
    for (link, token) in links.iter().zip(expected) {
        assert_eq!(link.url, format!("{base}{token}"));
    }
}

#[test]
fn filenames_never_contain_filesystem_invalid_characters() {
    for link in build_download_links(&acdc()) {
        for c in ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'] {
            assert!(
                !link.filename.contains(c),
                "{:?} contains {c:?}",
                link.filename
            );
        }
        assert!(link.filename.ends_with(".jpg"));
    }
}

#[test]
fn search_term_for_artist_only_has_no_trailing_space() {
    let query = SearchQuery::new("Beatles", "");
    assert_eq!(query.term(), "Beatles");
    assert!(query
        .url()
        .starts_with("https://itunes.apple.com/search?term=Beatles&"));
}

#[test]
fn results_without_artwork_never_enter_the_session() {
    let json = r#"{
        "resultCount": 2,
        "results": [
            {"collectionId": 1, "artistName": "A", "collectionName": "One"},
            {
                "collectionId": 2,
                "artistName": "B",
                "collectionName": "Two",
                "artworkUrl100": "https://example.org/2/100x100bb.jpg"
            }
        ]
    }"#;

    let results = parse_search_response(json).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].collection_id, 2);
}

#[test]
fn no_results_message_is_the_documented_literal() {
    assert_eq!(
        messages::NO_RESULTS,
        "No albums found for your search. Try different terms or check spelling."
    );
}

#[test]
fn idle_prompt_is_the_documented_literal() {
    assert_eq!(
        messages::IDLE_PROMPT,
        "Enter an artist and optionally an album name to begin your search."
    );
}

#[test]
fn blank_input_produces_an_empty_term() {
    assert!(SearchQuery::new("", "").term().is_empty());
    assert!(SearchQuery::new("   ", "  ").term().is_empty());
}
