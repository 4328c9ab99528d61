//! Application state (Model in TEA pattern)

use skycast_core::WeatherSnapshot;

use crate::cities;
use crate::message::RequestId;

/// Search prompt state: the query, the derived suggestion list, and the
/// highlighted row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Whether the prompt is open and receiving keystrokes
    pub active: bool,
    pub query: String,
    /// Always derived from the popular-city list; never mutated directly
    pub suggestions: Vec<String>,
    /// Index into `suggestions`
    pub highlighted: usize,
}

impl SearchState {
    /// Replace the query and re-derive the suggestion list.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.suggestions = cities::filter_suggestions(&self.query);
        self.highlighted = 0;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.highlighted = 0;
    }

    pub fn highlight_up(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = if self.highlighted == 0 {
                self.suggestions.len() - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    pub fn highlight_down(&mut self) {
        if !self.suggestions.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.suggestions.len();
        }
    }

    pub fn highlighted_city(&self) -> Option<&str> {
        self.suggestions.get(self.highlighted).map(String::as_str)
    }

    /// The dropdown is only shown for an open prompt with a non-empty
    /// query that has matches.
    pub fn shows_dropdown(&self) -> bool {
        self.active && !self.query.is_empty() && !self.suggestions.is_empty()
    }
}

/// Tags the in-flight fetch so late completions can be discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchState {
    next_id: RequestId,
    in_flight: Option<RequestId>,
}

impl FetchState {
    /// Start a new fetch, superseding any outstanding one.
    pub fn begin(&mut self) -> RequestId {
        self.next_id += 1;
        self.in_flight = Some(self.next_id);
        self.next_id
    }

    /// True if `id` is the fetch we are currently waiting for.
    pub fn is_current(&self, id: RequestId) -> bool {
        self.in_flight == Some(id)
    }

    /// Try to complete `id`; returns false for a stale completion.
    pub fn complete(&mut self, id: RequestId) -> bool {
        if self.is_current(id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }
}

/// The single state record owned by the dashboard.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Currently selected city; never empty
    pub selected_city: String,
    pub search: SearchState,
    pub loading: bool,
    /// Banner text from the last failed fetch
    pub error: Option<String>,
    /// Last successful snapshot. A failed fetch leaves this untouched;
    /// the render rules hide it behind the error banner.
    pub snapshot: Option<WeatherSnapshot>,
    pub fetch: FetchState,
    pub should_quit: bool,
    /// Skeleton spinner frame, advanced by Tick while loading
    pub animation_frame: u64,
}

impl AppState {
    /// Fresh state for the given initial city. The caller is expected to
    /// issue the implicit startup fetch by sending `SelectCity`.
    pub fn new(initial_city: impl Into<String>) -> Self {
        Self {
            selected_city: initial_city.into(),
            search: SearchState::default(),
            loading: true,
            error: None,
            snapshot: None,
            fetch: FetchState::default(),
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// Select transition: set the city, close and clear the prompt, mark
    /// loading, clear the stale error, and tag a fresh fetch. Always
    /// fetches, even when `city` is already selected.
    pub fn select_city(&mut self, city: String) -> RequestId {
        self.selected_city = city;
        self.search.clear();
        self.search.active = false;
        self.loading = true;
        self.error = None;
        self.fetch.begin()
    }
}
