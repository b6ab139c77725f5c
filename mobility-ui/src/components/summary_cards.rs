//! Aggregate metric cards.

use dioxus::prelude::*;

use mobility_api::format::{format_one, format_two, format_usd};

use crate::state::AppState;

/// Value shown before the first summary arrives.
const PLACEHOLDER: &str = "—";

/// The four aggregate cards. A failed summary fetch leaves the previous
/// values on screen; only the initial state shows placeholders.
#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let summary = (state.summary)();

    let (trips, distance, duration, revenue) = match &summary {
        Some(s) => (
            s.total_trips.to_string(),
            format_two(s.avg_distance_km),
            format_one(s.avg_duration_min),
            format_usd(s.total_revenue),
        ),
        None => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
        ),
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; margin: 12px 0;",
            MetricCard { label: "Total trips".to_string(), value: trips }
            MetricCard { label: "Avg distance (km)".to_string(), value: distance }
            MetricCard { label: "Avg duration (min)".to_string(), value: duration }
            MetricCard { label: "Revenue".to_string(), value: revenue }
        }
    }
}

/// One labeled metric.
#[component]
fn MetricCard(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; border: 1px solid #e0e0e0; border-radius: 6px;",
            strong {
                style: "display: block; font-size: 12px; color: #666; margin-bottom: 4px;",
                "{label}"
            }
            div {
                style: "font-size: 20px; font-weight: 600;",
                "{value}"
            }
        }
    }
}
