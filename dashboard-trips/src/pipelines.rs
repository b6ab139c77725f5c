//! The query orchestrator: four concurrent fetch-transform-render
//! pipelines driven by one filter snapshot.
//!
//! `apply_filters` reads the filter state exactly once, then runs the
//! summary, trend, heatmap, and trips pipelines concurrently. Pipelines
//! are independent: a failed fetch leaves that view in its previous or
//! empty state, logs to the console, and never cancels or delays the
//! others. Nothing is cancellable once issued; when a new cycle starts
//! while an old one is in flight, both complete and the later DOM write
//! wins.

use dioxus::prelude::*;
use futures::join;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use mobility_api::filter::FilterState;
use mobility_api::models::pretty_detail;
use mobility_api::trend::derive_series;
use mobility_ui::chart_bridge::FareChart;
use mobility_ui::fetch;
use mobility_ui::map_bridge::DensityMap;
use mobility_ui::script_loader::ensure_chart_library;
use mobility_ui::state::{AppState, TableView};

/// Runs one full refresh cycle against a single snapshot of the filters.
/// Completes when all four pipelines have settled, success or not.
pub async fn apply_filters(
    state: AppState,
    chart: Signal<FareChart>,
    map: Signal<Option<DensityMap>>,
) {
    let filter = (state.filters)();
    log::info!(
        "refresh cycle: start={:?} end={:?} min_distance={:?} page={}",
        filter.start_date,
        filter.end_date,
        filter.min_distance,
        filter.page
    );
    join!(
        load_summary(state, filter.clone()),
        load_time_series(chart, filter.clone()),
        load_heatmap(map, filter.clone()),
        load_trips(state, filter),
    );
}

/// Page navigation path: refetches the trips pipeline alone, against the
/// already-updated page index.
pub async fn refresh_trips(state: AppState) {
    let filter = (state.filters)();
    load_trips(state, filter).await;
}

/// Summary cards pipeline. A failure leaves the previous cards in place.
async fn load_summary(mut state: AppState, filter: FilterState) {
    match fetch::fetch_summary(&filter).await {
        Ok(summary) => {
            log::info!("summary: {} trips in range", summary.total_trips);
            state.summary.set(Some(summary));
        }
        Err(e) => log::warn!("Summary fetch failed: {:#}", e),
    }
}

/// Trend chart pipeline: fetch the aggregate response, derive the hourly
/// series, then render once the chart library is live. Fetch and script
/// failures both abort this cycle only, leaving any previous chart up.
async fn load_time_series(mut chart: Signal<FareChart>, filter: FilterState) {
    let series = match fetch::fetch_summary(&filter).await {
        Ok(summary) => derive_series(&summary),
        Err(e) => {
            log::warn!("Trend fetch failed: {:#}", e);
            return;
        }
    };
    if let Err(e) = ensure_chart_library().await {
        log::error!("Chart library unavailable: {:?}", e);
        return;
    }
    if let Err(e) = chart.write().render(&series) {
        log::warn!("Trend render skipped: {:?}", e);
    }
}

/// Density map pipeline. On success the overlay set is replaced wholesale;
/// on failure the prior overlay stays untouched, never partially cleared.
async fn load_heatmap(map: Signal<Option<DensityMap>>, filter: FilterState) {
    let cells = match fetch::fetch_heatmap(&filter).await {
        Ok(cells) => cells,
        Err(e) => {
            log::warn!("Heatmap fetch failed: {:#}", e);
            return;
        }
    };
    match &*map.read() {
        Some(density) => {
            log::info!("heatmap: {} cells", cells.len());
            if let Err(e) = density.replace_cells(&cells) {
                log::warn!("Heatmap render skipped: {:?}", e);
            }
        }
        None => log::warn!("Map not initialized, skipping heatmap render"),
    }
}

/// Trip table pipeline: the only one with a user-visible failure state.
/// The previous page stays on screen until the new result lands.
async fn load_trips(mut state: AppState, filter: FilterState) {
    match fetch::fetch_trips(&filter).await {
        Ok(page) => {
            log::info!("trips: {} rows on page {}", page.rows.len(), filter.page);
            state.trips.set(TableView::Loaded(page));
        }
        Err(e) => {
            log::warn!("Trips fetch failed: {:#}", e);
            state.trips.set(TableView::Failed);
        }
    }
}

/// Drill-down: fetch one trip's full record and open the modal with it
/// pretty-printed verbatim. On failure the modal simply stays closed.
pub async fn open_trip_detail(mut state: AppState, trip_id: String) {
    match fetch::fetch_trip_detail(&trip_id).await {
        Ok(detail) => {
            state.detail_json.set(pretty_detail(&detail));
            state.detail_open.set(true);
        }
        Err(e) => log::warn!("Trip detail fetch failed for {}: {:#}", trip_id, e),
    }
}

/// Publishes the `window.updateFareChart(labels, values)` hook other page
/// scripts use to push an externally computed series into the chart
/// without going through the fetch path. The hook returns a promise that
/// settles when the render does.
pub fn register_update_fare_chart(chart: Signal<FareChart>) {
    let hook = Closure::<dyn FnMut(JsValue, JsValue) -> JsValue>::new(
        move |labels: JsValue, values: JsValue| -> JsValue {
            let labels = js_string_vec(&labels);
            let values = js_number_vec(&values);
            future_to_promise(async move {
                let mut chart = chart;
                ensure_chart_library().await?;
                if let Err(e) = chart.write().apply_series(labels, values) {
                    log::warn!("External chart update skipped: {:?}", e);
                }
                Ok(JsValue::UNDEFINED)
            })
            .into()
        },
    );

    let Some(window) = web_sys::window() else {
        log::warn!("No window object, updateFareChart hook not registered");
        return;
    };
    if let Err(e) = js_sys::Reflect::set(
        window.as_ref(),
        &JsValue::from_str("updateFareChart"),
        hook.as_ref(),
    ) {
        log::warn!("Failed to register updateFareChart: {:?}", e);
    }
    hook.forget();
}

fn js_string_vec(value: &JsValue) -> Vec<String> {
    js_sys::Array::from(value)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

fn js_number_vec(value: &JsValue) -> Vec<f64> {
    js_sys::Array::from(value)
        .iter()
        .filter_map(|v| v.as_f64())
        .collect()
}
