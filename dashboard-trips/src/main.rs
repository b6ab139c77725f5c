//! Trips Analytics Dashboard
//!
//! A browser-resident dashboard over a trip dataset: filter trips by date
//! range and minimum distance, then read the filtered result four ways at
//! once: summary cards, a fare-by-hour trend chart, a pickup density map,
//! and a paginated trip table with per-trip drill-down.
//!
//! Data flow:
//! 1. The filter bar edits `FilterState` through setters that snap the
//!    page index back to 1 on any non-page change.
//! 2. Apply (and mount, and reset) runs `pipelines::apply_filters`, which
//!    snapshots the filters once and drives the four fetch-render
//!    pipelines concurrently.
//! 3. Prev/next page navigation refetches the trips pipeline alone.
//! 4. Clicking a row fetches that trip's full record and opens the modal.

use dioxus::prelude::*;

use mobility_api::filter::FilterState;
use mobility_ui::chart_bridge::FareChart;
use mobility_ui::components::{
    ChartPanel, DetailModal, FilterBar, MapPanel, Pager, SummaryCards, TripTable,
};
use mobility_ui::map_bridge::DensityMap;
use mobility_ui::state::AppState;

mod pipelines;

/// Canvas element ID the fare chart renders into.
const CHART_CANVAS_ID: &str = "timeChart";
/// Container element ID Leaflet mounts into.
const MAP_CONTAINER_ID: &str = "map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("trips-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let chart = use_signal(|| FareChart::new(CHART_CANVAS_ID));
    let map = use_signal(|| None::<DensityMap>);

    // One-time mount work: bind the map to its container, publish the
    // external chart hook, then run the first cycle with default filters.
    use_effect(move || {
        let mut map = map;
        match DensityMap::init(MAP_CONTAINER_ID) {
            Ok(density) => map.set(Some(density)),
            Err(e) => log::warn!("Map disabled: {:?}", e),
        }
        pipelines::register_update_fare_chart(chart);
        spawn(async move {
            pipelines::apply_filters(state, chart, map).await;
        });
    });

    let on_apply = move |_| {
        state.filters.write().reset_page();
        spawn(async move {
            pipelines::apply_filters(state, chart, map).await;
        });
    };

    let on_reset = move |_| {
        state.filters.set(FilterState::default());
        spawn(async move {
            pipelines::apply_filters(state, chart, map).await;
        });
    };

    let on_prev = move |_| {
        let moved_back = state.filters.write().prev_page();
        if moved_back {
            spawn(async move {
                pipelines::refresh_trips(state).await;
            });
        }
    };

    let on_next = move |_| {
        state.filters.write().next_page();
        spawn(async move {
            pipelines::refresh_trips(state).await;
        });
    };

    let on_select = move |trip_id: String| {
        spawn(async move {
            pipelines::open_trip_detail(state, trip_id).await;
        });
    };

    let on_close = move |_| {
        state.detail_open.set(false);
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h2 {
                style: "margin: 0 0 8px 0; font-size: 20px;",
                "Trips Analytics Dashboard"
            }

            FilterBar { on_apply, on_reset }
            SummaryCards {}

            ChartPanel { canvas_id: CHART_CANVAS_ID.to_string() }
            MapPanel { container_id: MAP_CONTAINER_ID.to_string() }

            section {
                style: "margin: 16px 0;",
                TripTable { on_select }
                Pager { on_prev, on_next }
            }

            DetailModal { on_close }
        }
    }
}
