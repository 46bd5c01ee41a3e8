//! In-memory search session state: the full result list for the current
//! query, the 1-based page cursor, and the stale-response guard.
//!
//! Pagination never refetches: the full result list is fetched once per
//! search and page navigation slices the already-fetched data.

use crate::types::{AlbumResult, RESULTS_PER_PAGE};

/// The per-query session: full result list plus pagination cursor.
///
/// A session is replaced wholesale on every new search; results are never
/// merged across searches. An empty result set is a valid zero-page,
/// zero-result display state, not an error.
///
/// # Examples
///
/// ```rust
/// use artfetch::SearchSession;
///
/// let session = SearchSession::with_page_size(Vec::new(), 72);
/// assert_eq!(session.page_count(), 0);
/// assert!(session.current_slice().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    results: Vec<AlbumResult>,
    current_page: usize,
    page_size: usize,
}

impl SearchSession {
    /// Create a session over a freshly fetched result list, positioned on
    /// page 1, with the default page size.
    pub fn new(results: Vec<AlbumResult>) -> Self {
        Self::with_page_size(results, RESULTS_PER_PAGE)
    }

    /// Create a session with an explicit page size.
    ///
    /// A page size of zero is treated as the default.
    pub fn with_page_size(results: Vec<AlbumResult>, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            RESULTS_PER_PAGE
        } else {
            page_size
        };
        Self {
            results,
            current_page: 1,
            page_size,
        }
    }

    /// Total number of qualifying results for the current query.
    pub fn total_results(&self) -> usize {
        self.results.len()
    }

    /// Whether the query produced no qualifying results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The page size this session slices by.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total page count: `ceil(total / page_size)`, zero when empty.
    pub fn page_count(&self) -> usize {
        self.results.len().div_ceil(self.page_size)
    }

    /// The current page number (1-based).
    ///
    /// Always within `[1, page_count]` when the session is non-empty.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The results of the current page: elements
    /// `[(p-1)*P, min(p*P, N))` of the full list.
    pub fn current_slice(&self) -> &[AlbumResult] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.results.len());
        &self.results[start..end]
    }

    /// The full result list, in API order.
    pub fn results(&self) -> &[AlbumResult] {
        &self.results
    }

    /// Look up one result by its position in the full list (0-based).
    pub fn get(&self, index: usize) -> Option<&AlbumResult> {
        self.results.get(index)
    }

    /// Navigate to the given page number.
    ///
    /// Requests outside `[1, page_count]` are a no-op returning `false`: the
    /// current page and its slice are left unchanged. Page 0 and
    /// `page_count + 1` are both rejected this way; on an empty session every
    /// page is.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.page_count() {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Advance one page, a no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    /// Go back one page, a no-op on page 1.
    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Whether a further page exists after the current one.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Whether a page exists before the current one.
    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1 && !self.is_empty()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Token identifying one issued search request.
///
/// Tokens are ordered by issue time; only the most recently issued token may
/// install results into the controller's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// The sequence number of this request.
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Owns the session across searches and discards stale responses.
///
/// Without generation tracking, a slow first search resolving after a faster
/// second search would overwrite newer results with stale ones. The
/// controller tags each search with a monotonically increasing token and
/// refuses results whose token is not the latest issued.
///
/// # Examples
///
/// ```rust
/// use artfetch::SearchController;
///
/// let mut controller = SearchController::new();
/// let first = controller.begin_search();
/// let second = controller.begin_search();
///
/// // The second search resolves first and wins.
/// assert!(controller.apply_results(second, Vec::new()));
/// // The slow first response arrives late and is discarded.
/// assert!(!controller.apply_results(first, Vec::new()));
/// ```
#[derive(Debug, Default)]
pub struct SearchController {
    issued: u64,
    page_size: Option<usize>,
    session: SearchSession,
}

impl SearchController {
    /// Create a controller with an empty session and the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller whose sessions use the given page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            issued: 0,
            page_size: Some(page_size),
            session: SearchSession::with_page_size(Vec::new(), page_size),
        }
    }

    /// Start a new search, invalidating all previously issued tokens.
    pub fn begin_search(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Install the results of a completed search.
    ///
    /// Returns `true` and replaces the session (cursor reset to page 1) when
    /// `token` is the latest issued; returns `false` and discards the results
    /// otherwise. Discarding a stale response is normal operation.
    pub fn apply_results(&mut self, token: RequestToken, results: Vec<AlbumResult>) -> bool {
        if token.0 != self.issued {
            log::debug!(
                "discarding stale search response (token {}, latest {})",
                token.0,
                self.issued
            );
            return false;
        }
        self.session = match self.page_size {
            Some(size) => SearchSession::with_page_size(results, size),
            None => SearchSession::new(results),
        };
        true
    }

    /// The current session.
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Mutable access to the current session, for page navigation.
    pub fn session_mut(&mut self) -> &mut SearchSession {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AlbumResult;

    fn albums(n: usize) -> Vec<AlbumResult> {
        (0..n)
            .map(|i| AlbumResult {
                collection_id: i as u64,
                artist_name: format!("Artist {i}"),
                collection_name: format!("Album {i}"),
                release_date: None,
                artwork_url_100: format!("https://example.org/{i}/100x100bb.jpg"),
            })
            .collect()
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(SearchSession::new(albums(0)).page_count(), 0);
        assert_eq!(SearchSession::new(albums(72)).page_count(), 1);
        assert_eq!(SearchSession::new(albums(73)).page_count(), 2);
        assert_eq!(SearchSession::new(albums(144)).page_count(), 2);
        assert_eq!(SearchSession::new(albums(150)).page_count(), 3);
    }

    #[test]
    fn test_slices_match_window_arithmetic() {
        let n = 150;
        let mut session = SearchSession::new(albums(n));
        for page in 1..=session.page_count() {
            assert!(session.go_to_page(page));
            let slice = session.current_slice();
            let start = (page - 1) * session.page_size();
            let end = (start + session.page_size()).min(n);
            assert_eq!(slice.len(), end - start);
            assert_eq!(slice[0].collection_id, start as u64);
            assert_eq!(slice[slice.len() - 1].collection_id, (end - 1) as u64);
        }
    }

    #[test]
    fn test_out_of_range_navigation_is_noop() {
        let mut session = SearchSession::new(albums(150));
        assert!(session.go_to_page(2));
        let before = session.current_slice().to_vec();

        assert!(!session.go_to_page(0));
        assert!(!session.go_to_page(session.page_count() + 1));
        assert_eq!(session.current_page(), 2);
        assert_eq!(session.current_slice(), &before[..]);
    }

    #[test]
    fn test_empty_session_is_zero_page_state() {
        let mut session = SearchSession::new(Vec::new());
        assert_eq!(session.page_count(), 0);
        assert_eq!(session.total_results(), 0);
        assert!(session.current_slice().is_empty());
        assert!(!session.go_to_page(1));
        assert!(!session.next_page());
        assert!(!session.prev_page());
        assert!(!session.has_next_page());
        assert!(!session.has_prev_page());
    }

    #[test]
    fn test_150_results_paginate_72_72_6() {
        let mut session = SearchSession::new(albums(150));

        assert_eq!(session.current_page(), 1);
        assert_eq!(session.current_slice().len(), 72);
        assert!(session.has_next_page());

        assert!(session.next_page());
        assert_eq!(session.current_slice().len(), 72);
        assert_eq!(session.current_slice()[0].collection_id, 72);
        assert!(session.has_next_page());

        assert!(session.next_page());
        assert_eq!(session.current_slice().len(), 6);
        assert_eq!(session.current_slice()[0].collection_id, 144);
        assert!(!session.has_next_page());
        assert!(!session.next_page());
    }

    #[test]
    fn test_custom_page_size() {
        let session = SearchSession::with_page_size(albums(10), 4);
        assert_eq!(session.page_count(), 3);
        assert_eq!(session.current_slice().len(), 4);
    }

    #[test]
    fn test_zero_page_size_falls_back_to_default() {
        let session = SearchSession::with_page_size(albums(10), 0);
        assert_eq!(session.page_size(), RESULTS_PER_PAGE);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut controller = SearchController::new();
        let slow = controller.begin_search();
        let fast = controller.begin_search();

        assert!(controller.apply_results(fast, albums(3)));
        assert_eq!(controller.session().total_results(), 3);

        // The slow response resolves last but must not win.
        assert!(!controller.apply_results(slow, albums(99)));
        assert_eq!(controller.session().total_results(), 3);
    }

    #[test]
    fn test_new_search_replaces_session_wholesale() {
        let mut controller = SearchController::with_page_size(5);
        let first = controller.begin_search();
        assert!(controller.apply_results(first, albums(12)));
        controller.session_mut().next_page();
        assert_eq!(controller.session().current_page(), 2);

        let second = controller.begin_search();
        assert!(controller.apply_results(second, albums(2)));
        assert_eq!(controller.session().current_page(), 1);
        assert_eq!(controller.session().total_results(), 2);
        assert_eq!(controller.session().page_size(), 5);
    }
}
