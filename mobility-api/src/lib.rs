//! Typed API contract and derivation policy for the mobility trips dashboard.
//!
//! This crate is the pure, natively testable half of the dashboard:
//! - `models`: `serde` schemas for the four remote payloads, defaulted at the
//!   boundary so sparse responses degrade instead of failing
//! - `filter`: the filter state, its page-reset rule and pagination moves,
//!   and the query-string builders for the list endpoints
//! - `trend`: the fare-by-hour series derivation with its strategy table and
//!   synthetic fallback, plus the chart configuration builder
//! - `heatmap`: density-marker sizing policy and map constants
//! - `format`: card/cell/pager display formatting
//!
//! Nothing here touches the DOM or the JS boundary; the whole contract runs
//! under plain `cargo test`. The fetch layer and the rendering live in
//! `mobility-ui`, the orchestration in the `dashboard-trips` app.

pub mod filter;
pub mod format;
pub mod heatmap;
pub mod models;
pub mod trend;

pub use filter::FilterState;
pub use models::{HeatCell, HourlyCount, HourlyFare, SummaryStats, TripDetail, TripRow, TripsPage};
pub use trend::{SeriesSource, TrendSeries};

#[cfg(test)]
mod tests {
    use crate::filter::FilterState;
    use crate::format;
    use crate::models::{SummaryStats, TripsPage};
    use crate::trend;

    // ───────────────────── Full-cycle workflows ─────────────────────

    #[test]
    fn full_summary_workflow_formats_cards_and_falls_back_synthetic() {
        let body = r#"{
            "total_trips": 120,
            "avg_distance_km": 5.4,
            "avg_duration_min": 14.2,
            "total_revenue": 850.30
        }"#;
        let summary: SummaryStats = serde_json::from_str(body).unwrap();

        assert_eq!(summary.total_trips.to_string(), "120");
        assert_eq!(format::format_two(summary.avg_distance_km), "5.40");
        assert_eq!(format::format_one(summary.avg_duration_min), "14.2");
        assert_eq!(format::format_usd(summary.total_revenue), "$850.30");

        let series = trend::derive_series(&summary);
        assert!(series.is_synthetic(), "no hourly arrays in the payload");
        assert_eq!(series.labels.len(), 12);
    }

    #[test]
    fn full_trips_workflow_builds_query_and_renders_page_info() {
        let mut filter = FilterState::default();
        filter.set_start_date("2016-03-01");
        filter.set_min_distance("2");
        filter.next_page();

        assert_eq!(
            filter.trips_query(),
            "start=2016-03-01&end=&min_distance=2&limit=20&page=2"
        );

        let body = r#"{
            "rows": [{
                "id": 42,
                "pickup_ts": "2016-03-14 17:24:55",
                "distance_km": 3.2,
                "duration_min": 11.0,
                "fare_amount": 14.5,
                "tip_amount": 2.0
            }],
            "total": 57
        }"#;
        let page: TripsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.rows[0].id, "42");
        assert_eq!(page.rows[0].dropoff_ts, "", "missing field defaults");
        assert_eq!(
            format::page_info(filter.page, page.total),
            "Page 2 — 57 trips total"
        );
        assert_eq!(
            format::format_timestamp(&page.rows[0].pickup_ts),
            "2016-03-14 17:24"
        );
    }
}
