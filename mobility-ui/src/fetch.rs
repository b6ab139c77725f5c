//! Browser fetch layer: typed GETs against the dashboard API.
//!
//! Every endpoint wrapper builds its URL from the shared [`FilterState`]
//! query builders, runs one GET through the browser's `fetch`, and
//! deserializes the JSON body into the matching `mobility_api` model.
//! Errors stay `anyhow` here; the pipelines decide what "no data this
//! cycle" looks like for each view.

use anyhow::{anyhow, bail, Context, Result};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use mobility_api::filter::{encode, FilterState};
use mobility_api::models::{HeatCell, SummaryStats, TripDetail, TripsPage};

/// Resolves the API root against the page origin, falling back to a
/// relative path when no window is available.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{origin}/api"))
        .unwrap_or_else(|| "/api".to_string())
}

/// Aggregate stats plus the optional hourly series for the trend chart.
pub async fn fetch_summary(filter: &FilterState) -> Result<SummaryStats> {
    get_json(&format!("{}/summary?{}", api_base(), filter.summary_query())).await
}

/// Pickup density cells for the map overlay.
pub async fn fetch_heatmap(filter: &FilterState) -> Result<Vec<HeatCell>> {
    get_json(&format!("{}/heatmap?{}", api_base(), filter.heatmap_query())).await
}

/// One page of trips for the table.
pub async fn fetch_trips(filter: &FilterState) -> Result<TripsPage> {
    get_json(&format!("{}/trips?{}", api_base(), filter.trips_query())).await
}

/// Full record of one trip, kept as raw JSON for the modal.
pub async fn fetch_trip_detail(trip_id: &str) -> Result<TripDetail> {
    get_json(&format!("{}/trip/{}", api_base(), encode(trip_id))).await
}

/// One GET returning a deserialized JSON body. Non-success statuses and
/// undeserializable bodies are plain errors.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    log::debug!("GET {url}");
    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("network error fetching {url}: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch for {url} returned a non-Response value"))?;
    if !response.ok() {
        bail!("GET {url} failed with status {}", response.status());
    }
    let body = JsFuture::from(response.text().map_err(|e| anyhow!("{e:?}"))?)
        .await
        .map_err(|e| anyhow!("error reading body of {url}: {e:?}"))?;
    let body = body.as_string().unwrap_or_default();
    serde_json::from_str(&body).with_context(|| format!("undeserializable body from {url}"))
}
