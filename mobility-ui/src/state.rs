//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use dioxus::prelude::*;

use mobility_api::filter::FilterState;
use mobility_api::models::{SummaryStats, TripsPage};

/// What the trip table is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// Nothing has arrived yet. Refetches skip this state so the previous
    /// page stays on screen until its replacement lands.
    Loading,
    /// The last trips fetch failed.
    Failed,
    /// The last trips fetch succeeded, possibly with zero rows.
    Loaded(TripsPage),
}

/// Shared state for the dashboard app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The one source of truth every pipeline reads its query from.
    pub filters: Signal<FilterState>,
    /// Latest summary payload; None until the first successful fetch.
    pub summary: Signal<Option<SummaryStats>>,
    /// Trip table view state.
    pub trips: Signal<TableView>,
    /// Pretty-printed body of the last drill-down, shown in the modal.
    pub detail_json: Signal<String>,
    /// Whether the detail modal is visible. Hiding leaves the content in
    /// place; the next drill-down overwrites it.
    pub detail_open: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            filters: Signal::new(FilterState::default()),
            summary: Signal::new(None),
            trips: Signal::new(TableView::Loading),
            detail_json: Signal::new(String::new()),
            detail_open: Signal::new(false),
        }
    }
}
