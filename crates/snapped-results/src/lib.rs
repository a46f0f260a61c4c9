pub mod history;
pub mod marketplace;
pub mod price;

pub use history::{HistoryState, result_count_label};
pub use marketplace::{PRE_OWNED_SITES, is_pre_owned_link, matches_filter};
pub use price::{compare_prices, parse_price};

use shared::{LoadingEvent, LoadingState};
use snapped_config::{ResultFilter, SortOrder};
use snapped_types::{SearchResponse, SearchResult};

/// Results of one search with the active filter and price sort applied.
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    search_id: Option<i64>,
    results: Vec<SearchResult>,
    header_image: Option<String>,
    filter: ResultFilter,
    sort_order: SortOrder,
    sorted: bool,
    visible: Vec<usize>,
    load_state: LoadingState,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_loading(&mut self, search_id: i64) {
        self.search_id = Some(search_id);
        self.load_state = LoadingEvent::StartLoading.apply_to_state(self.load_state.clone());
    }

    pub fn set_response(&mut self, response: SearchResponse) {
        self.header_image = response.header_image().map(str::to_string);
        self.search_id = Some(response.search_id);
        self.results = response.results;
        self.refresh();

        tracing::debug!(
            "Search {} loaded with {} results",
            response.search_id,
            self.results.len()
        );
        self.load_state =
            LoadingEvent::LoadComplete(self.results.len()).apply_to_state(self.load_state.clone());
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.load_state =
            LoadingEvent::LoadError(message.into()).apply_to_state(self.load_state.clone());
    }

    /// Search id to fetch again after a failed load.
    pub fn retry(&mut self) -> Option<i64> {
        if !self.load_state.can_retry() {
            return None;
        }
        self.load_state = LoadingEvent::RetryRequested.apply_to_state(self.load_state.clone());
        self.search_id
    }

    pub fn load_state(&self) -> &LoadingState {
        &self.load_state
    }

    pub fn search_id(&self) -> Option<i64> {
        self.search_id
    }

    pub fn header_image(&self) -> Option<&str> {
        self.header_image.as_deref()
    }

    pub fn filter(&self) -> ResultFilter {
        self.filter
    }

    /// Direction shown on the sort toggle.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether a price sort has been applied yet.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn set_filter(&mut self, filter: ResultFilter) {
        self.filter = filter;
        self.refresh();
    }

    /// Flip the price sort direction and apply it.
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggle();
        self.sorted = true;
        self.refresh();
        self.sort_order
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.sorted = true;
        self.refresh();
    }

    pub fn all(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn visible(&self) -> impl Iterator<Item = &SearchResult> {
        self.visible.iter().filter_map(|&idx| self.results.get(idx))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn count_label(&self) -> String {
        result_count_label(self.visible_count())
    }

    fn refresh(&mut self) {
        let filter = self.filter;
        let mut visible: Vec<usize> = self
            .results
            .iter()
            .enumerate()
            .filter(|(_, result)| matches_filter(result, filter))
            .map(|(idx, _)| idx)
            .collect();

        if self.sorted {
            let order = self.sort_order;
            let prices: Vec<Option<f64>> = self
                .results
                .iter()
                .map(|result| result.price.as_deref().and_then(parse_price))
                .collect();
            // Stable, so equal prices keep the backend ranking
            visible.sort_by(|&a, &b| compare_prices(prices[a], prices[b], order));
        }

        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: i64, link: &str, price: Option<&str>) -> SearchResult {
        SearchResult {
            id,
            search_id: 9,
            title: Some(format!("Item {id}")),
            link: Some(link.to_string()),
            image_url: None,
            price: price.map(str::to_string),
            brand: None,
            source: None,
            description: None,
            rating: None,
            reviews_count: None,
        }
    }

    fn response() -> SearchResponse {
        SearchResponse {
            search_id: 9,
            search_time: "2025-09-30T10:00:00".to_string(),
            image_path: "https://cdn/clip.jpg".to_string(),
            original_image_path: None,
            is_clipped: true,
            cloudinary_public_id: None,
            cloudinary_url: None,
            original_cloudinary_public_id: None,
            original_cloudinary_url: Some("https://cdn/original.jpg".to_string()),
            results: vec![
                result(1, "https://www.ebay.com/itm/1", Some("$80.00")),
                result(2, "https://shop.example.com/bag", Some("$1,200")),
                result(3, "https://www.grailed.com/listings/3", None),
                result(4, "https://shop.example.com/tote", Some("$15.50")),
            ],
            total_results: 4,
        }
    }

    fn ids(state: &ResultsState) -> Vec<i64> {
        state.visible().map(|r| r.id).collect()
    }

    #[test]
    fn test_load_lifecycle() {
        let mut state = ResultsState::new();
        state.begin_loading(9);
        assert!(state.load_state().is_loading());

        state.set_response(response());
        assert!(state.load_state().is_ready());
        assert_eq!(state.header_image(), Some("https://cdn/original.jpg"));
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
        assert_eq!(state.count_label(), "4 Results");
    }

    #[test]
    fn test_filters() {
        let mut state = ResultsState::new();
        state.set_response(response());

        state.set_filter(ResultFilter::PreOwned);
        assert_eq!(ids(&state), vec![1, 3]);

        state.set_filter(ResultFilter::New);
        assert_eq!(ids(&state), vec![2, 4]);

        state.set_filter(ResultFilter::All);
        assert_eq!(state.visible_count(), 4);
    }

    #[test]
    fn test_first_toggle_sorts_descending() {
        let mut state = ResultsState::new();
        state.set_response(response());
        assert!(!state.is_sorted());
        assert_eq!(state.sort_order(), SortOrder::Ascending);

        assert_eq!(state.toggle_sort(), SortOrder::Descending);
        assert_eq!(ids(&state), vec![2, 1, 4, 3]);

        assert_eq!(state.toggle_sort(), SortOrder::Ascending);
        assert_eq!(ids(&state), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_sort_survives_filter_change() {
        let mut state = ResultsState::new();
        state.set_response(response());
        state.toggle_sort();
        state.toggle_sort();

        state.set_filter(ResultFilter::New);
        assert_eq!(ids(&state), vec![4, 2]);
        assert_eq!(state.count_label(), "2 Results");
    }

    #[test]
    fn test_set_sort_directly() {
        let mut state = ResultsState::new();
        state.set_response(response());
        state.set_sort(SortOrder::Ascending);
        assert!(state.is_sorted());
        assert_eq!(ids(&state), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_empty_response() {
        let mut state = ResultsState::new();
        let mut res = response();
        res.results.clear();
        state.set_response(res);
        assert!(state.load_state().is_empty());
        assert_eq!(state.count_label(), "0 Results");
    }
}
