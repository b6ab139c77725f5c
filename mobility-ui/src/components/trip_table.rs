//! Trip table with row drill-down.

use dioxus::prelude::*;

use mobility_api::format::{format_one, format_timestamp, format_two};
use mobility_api::models::TripRow;

use crate::state::{AppState, TableView};

const CELL_STYLE: &str = "padding: 6px 8px; border-bottom: 1px solid #eee;";
const NOTICE_STYLE: &str = "padding: 16px; font-size: 13px;";

/// One page of trips, or the loading, failed, and empty states of the
/// trips pipeline. Row clicks hand the trip id to the app for drill-down.
#[component]
pub fn TripTable(on_select: EventHandler<String>) -> Element {
    let state = use_context::<AppState>();

    match (state.trips)() {
        TableView::Loading => rsx! {
            p {
                style: "{NOTICE_STYLE} color: #666;",
                "Loading trips..."
            }
        },
        TableView::Failed => rsx! {
            p {
                style: "{NOTICE_STYLE} color: #b5463b;",
                "Failed to load trips"
            }
        },
        TableView::Loaded(page) if page.rows.is_empty() => rsx! {
            p {
                style: "{NOTICE_STYLE} color: #666;",
                "No trips found"
            }
        },
        TableView::Loaded(page) => rsx! {
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        for heading in ["ID", "Pickup", "Dropoff", "Dist (km)", "Dur (min)", "Fare", "Tip"] {
                            th {
                                style: "text-align: left; padding: 6px 8px; border-bottom: 2px solid #ccc;",
                                "{heading}"
                            }
                        }
                    }
                }
                tbody {
                    for (idx, row) in page.rows.iter().enumerate() {
                        TripRowView {
                            key: "{row.id}",
                            row: row.clone(),
                            striped: idx % 2 == 1,
                            on_select,
                        }
                    }
                }
            }
        },
    }
}

/// One clickable row.
#[component]
fn TripRowView(row: TripRow, striped: bool, on_select: EventHandler<String>) -> Element {
    let background = if striped { "#fafafa" } else { "transparent" };
    let id = row.id.clone();
    let pickup = format_timestamp(&row.pickup_ts);
    let dropoff = format_timestamp(&row.dropoff_ts);
    let distance = format_two(row.distance_km);
    let duration = format_one(row.duration_min);
    let fare = format_two(row.fare_amount);
    let tip = format_two(row.tip_amount);

    rsx! {
        tr {
            style: "cursor: pointer; background: {background};",
            onclick: move |_| on_select.call(id.clone()),
            td { style: "{CELL_STYLE}", "{row.id}" }
            td { style: "{CELL_STYLE}", "{pickup}" }
            td { style: "{CELL_STYLE}", "{dropoff}" }
            td { style: "{CELL_STYLE}", "{distance}" }
            td { style: "{CELL_STYLE}", "{duration}" }
            td { style: "{CELL_STYLE}", "{fare}" }
            td { style: "{CELL_STYLE}", "{tip}" }
        }
    }
}
