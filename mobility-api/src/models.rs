//! Typed payload models for the dashboard's remote API.
//!
//! Every shape deserializes tolerantly: missing numeric fields default to
//! zero, missing arrays to empty, and a missing `total` to `None`, so a
//! sparse backend response never takes a renderer down with it. A body that
//! fails to deserialize at all counts as a fetch failure for that pipeline.

use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate statistics for the filtered trip set, from `GET /summary`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of trips matching the filter.
    #[serde(default)]
    pub total_trips: u64,
    /// Mean trip distance in kilometres.
    #[serde(default)]
    pub avg_distance_km: f64,
    /// Mean trip duration in minutes.
    #[serde(default)]
    pub avg_duration_min: f64,
    /// Total fare revenue in USD.
    #[serde(default)]
    pub total_revenue: f64,
    /// Preferred hourly trend source: average fare per hour bucket.
    #[serde(default)]
    pub fares_per_hour: Vec<HourlyFare>,
    /// Fallback hourly trend source: trip count per hour bucket.
    #[serde(default)]
    pub trips_per_hour: Vec<HourlyCount>,
}

/// One `(hour, fare)` bucket of the preferred trend source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlyFare {
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub fare: f64,
}

/// One `(hour, count)` bucket of the fallback trend source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlyCount {
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub count: u64,
}

/// One cell of the pickup-density grid, from `GET /heatmap`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatCell {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    /// Trips whose pickup falls inside this cell.
    #[serde(default)]
    pub count: u64,
}

/// One page of trip rows plus the size of the full filtered set, from
/// `GET /trips`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripsPage {
    #[serde(default)]
    pub rows: Vec<TripRow>,
    /// Total rows matching the filter across all pages. Absent when the
    /// backend does not count the full set; the pager shows `?` then.
    #[serde(default)]
    pub total: Option<u64>,
}

/// A single trip as listed in the table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripRow {
    /// Trip identifier; numeric ids are normalized to their decimal string.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub pickup_ts: String,
    #[serde(default)]
    pub dropoff_ts: String,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub duration_min: f64,
    #[serde(default)]
    pub fare_amount: f64,
    #[serde(default)]
    pub tip_amount: f64,
}

/// Full drill-down record for one trip, from `GET /trip/{id}`. The shape is
/// backend-defined and rendered verbatim, so it stays an opaque JSON value.
pub type TripDetail = serde_json::Value;

/// Renders a trip detail as the modal body text.
pub fn pretty_detail(detail: &TripDetail) -> String {
    serde_json::to_string_pretty(detail).unwrap_or_else(|_| detail.to_string())
}

/// Accepts either a JSON string or a JSON integer for an id field.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────── Summary parsing ─────────────────────

    #[test]
    fn summary_defaults_missing_numerics_to_zero() {
        let stats: SummaryStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total_trips, 0);
        assert_eq!(stats.avg_distance_km, 0.0);
        assert_eq!(stats.avg_duration_min, 0.0);
        assert_eq!(stats.total_revenue, 0.0);
    }

    #[test]
    fn summary_defaults_missing_arrays_to_empty() {
        let stats: SummaryStats = serde_json::from_str(r#"{"total_trips": 120}"#).unwrap();
        assert!(stats.fares_per_hour.is_empty(), "no fares array in payload");
        assert!(stats.trips_per_hour.is_empty(), "no counts array in payload");
    }

    #[test]
    fn summary_parses_both_hourly_arrays() {
        let body = r#"{
            "total_trips": 3,
            "fares_per_hour": [{"hour": "08:00", "fare": 12.5}],
            "trips_per_hour": [{"hour": "08:00", "count": 4}]
        }"#;
        let stats: SummaryStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.fares_per_hour.len(), 1);
        assert_eq!(stats.fares_per_hour[0].hour, "08:00");
        assert_eq!(stats.fares_per_hour[0].fare, 12.5);
        assert_eq!(stats.trips_per_hour[0].count, 4);
    }

    // ───────────────────── Trips page parsing ─────────────────────

    #[test]
    fn trips_page_total_is_optional() {
        let page: TripsPage = serde_json::from_str(r#"{"rows": []}"#).unwrap();
        assert_eq!(page.total, None, "absent total must stay None");

        let page: TripsPage = serde_json::from_str(r#"{"rows": [], "total": 0}"#).unwrap();
        assert_eq!(page.total, Some(0), "an explicit zero is not absent");
    }

    #[test]
    fn trip_id_accepts_string_or_number() {
        let row: TripRow = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(row.id, "42");

        let row: TripRow = serde_json::from_str(r#"{"id": "id2875421"}"#).unwrap();
        assert_eq!(row.id, "id2875421");
    }

    #[test]
    fn trip_row_defaults_missing_fields() {
        let row: TripRow = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        assert_eq!(row.pickup_ts, "");
        assert_eq!(row.distance_km, 0.0);
        assert_eq!(row.fare_amount, 0.0);
        assert_eq!(row.tip_amount, 0.0);
    }

    #[test]
    fn trips_page_parses_full_rows() {
        let body = r#"{
            "rows": [{
                "id": "id100",
                "pickup_ts": "2016-03-14 17:24:55",
                "dropoff_ts": "2016-03-14 17:32:30",
                "distance_km": 1.5,
                "duration_min": 7.6,
                "fare_amount": 8.0,
                "tip_amount": 1.2
            }],
            "total": 57
        }"#;
        let page: TripsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].duration_min, 7.6);
        assert_eq!(page.total, Some(57));
    }

    // ───────────────────── Heatmap parsing ─────────────────────

    #[test]
    fn heatmap_cells_parse_as_array() {
        let body = r#"[{"lat": 40.75, "lng": -73.98, "count": 12}, {"lat": 40.76, "lng": -73.97}]"#;
        let cells: Vec<HeatCell> = serde_json::from_str(body).unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].count, 12);
        assert_eq!(cells[1].count, 0, "missing count defaults to zero");
    }

    // ───────────────────── Detail pretty printing ─────────────────────

    #[test]
    fn pretty_detail_renders_multiline_json() {
        let detail: TripDetail =
            serde_json::from_str(r#"{"id": "42", "passenger_count": 2}"#).unwrap();
        let text = pretty_detail(&detail);
        assert!(text.contains('\n'), "pretty form spans lines: {text}");
        assert!(text.contains("\"passenger_count\": 2"));
    }
}
