use shared::{LoadingEvent, LoadingState};
use snapped_types::{SearchList, SearchSummary};

/// Past uploads and which one is selected for viewing.
#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    searches: Vec<SearchSummary>,
    total: usize,
    selected: Option<i64>,
    load_state: LoadingState,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_loading(&mut self) {
        self.load_state = LoadingEvent::StartLoading.apply_to_state(self.load_state.clone());
    }

    pub fn set_list(&mut self, list: SearchList) {
        self.total = list.total;
        self.searches = list.searches;
        // Drop a selection that no longer exists
        if let Some(id) = self.selected
            && !self.searches.iter().any(|s| s.id == id)
        {
            self.selected = None;
        }
        self.load_state =
            LoadingEvent::LoadComplete(self.searches.len()).apply_to_state(self.load_state.clone());
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.load_state =
            LoadingEvent::LoadError(message.into()).apply_to_state(self.load_state.clone());
    }

    pub fn load_state(&self) -> &LoadingState {
        &self.load_state
    }

    pub fn searches(&self) -> &[SearchSummary] {
        &self.searches
    }

    /// Total uploads on the server, which may exceed the page held here.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.searches.is_empty()
    }

    pub fn select(&mut self, id: i64) -> Option<&SearchSummary> {
        let found = self.searches.iter().position(|s| s.id == id)?;
        self.selected = Some(id);
        self.searches.get(found)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SearchSummary> {
        let id = self.selected?;
        self.searches.iter().find(|s| s.id == id)
    }

    /// Search id to open from the "view result" action.
    pub fn view_result(&self) -> Option<i64> {
        self.selected().map(|s| s.id)
    }
}

pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 Result".to_string()
    } else {
        format!("{count} Results")
    }
}
