//! Trend-series derivation for the fare-by-hour chart.
//!
//! The summary endpoint may carry either of two hourly arrays, both, or
//! neither. Derivation walks a fixed priority table of extraction strategies
//! and takes the first whose source array is non-empty; when nothing usable
//! is present the chart falls back to a fixed twelve-point demonstration
//! series so the panel never renders blank.

use serde_json::{json, Value};

use crate::models::SummaryStats;

/// Labels of the synthetic fallback series: every second hour of one day.
pub const SYNTHETIC_HOURS: [&str; 12] = [
    "12 AM", "2 AM", "4 AM", "6 AM", "8 AM", "10 AM", "12 PM", "2 PM", "4 PM", "6 PM", "8 PM",
    "10 PM",
];

/// Values of the synthetic fallback series: low overnight, peaking in the
/// early afternoon, dipping, then rising again toward evening.
pub const SYNTHETIC_FARES: [f64; 12] = [
    5.0, 4.0, 4.0, 7.0, 10.0, 14.0, 20.0, 28.0, 22.0, 16.0, 18.0, 12.0,
];

/// Where a derived series came from. `Synthetic` marks the degraded-mode
/// placeholder so it stays distinguishable from real data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesSource {
    FaresPerHour,
    TripsPerHour,
    Synthetic,
    /// Pushed in through the `updateFareChart` entry point.
    External,
}

/// The labeled numeric series driving the trend chart. Order and length are
/// whatever the source provided; nothing is resorted.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub source: SeriesSource,
}

impl TrendSeries {
    /// Wraps externally supplied label/value arrays.
    pub fn external(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            source: SeriesSource::External,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == SeriesSource::Synthetic
    }
}

/// One entry of the derivation table: a name for diagnostics plus an
/// extractor that returns `None` when its source array is empty.
struct Strategy {
    name: &'static str,
    extract: fn(&SummaryStats) -> Option<TrendSeries>,
}

/// Priority-ordered derivation strategies; first match wins.
const STRATEGIES: [Strategy; 2] = [
    Strategy {
        name: "fares_per_hour",
        extract: from_fares,
    },
    Strategy {
        name: "trips_per_hour",
        extract: from_trip_counts,
    },
];

/// Derives the chart series from a summary payload.
pub fn derive_series(summary: &SummaryStats) -> TrendSeries {
    for strategy in &STRATEGIES {
        if let Some(series) = (strategy.extract)(summary) {
            log::debug!("trend series derived from {}", strategy.name);
            return series;
        }
    }
    log::debug!("no hourly data in summary; using synthetic trend series");
    synthetic_series()
}

fn from_fares(summary: &SummaryStats) -> Option<TrendSeries> {
    if summary.fares_per_hour.is_empty() {
        return None;
    }
    Some(TrendSeries {
        labels: summary.fares_per_hour.iter().map(|b| b.hour.clone()).collect(),
        values: summary.fares_per_hour.iter().map(|b| b.fare).collect(),
        source: SeriesSource::FaresPerHour,
    })
}

fn from_trip_counts(summary: &SummaryStats) -> Option<TrendSeries> {
    if summary.trips_per_hour.is_empty() {
        return None;
    }
    Some(TrendSeries {
        labels: summary.trips_per_hour.iter().map(|b| b.hour.clone()).collect(),
        values: summary.trips_per_hour.iter().map(|b| b.count as f64).collect(),
        source: SeriesSource::TripsPerHour,
    })
}

/// The fixed demonstration series rendered when no hourly data exists.
pub fn synthetic_series() -> TrendSeries {
    TrendSeries {
        labels: SYNTHETIC_HOURS.iter().map(|s| s.to_string()).collect(),
        values: SYNTHETIC_FARES.to_vec(),
        source: SeriesSource::Synthetic,
    }
}

/// Builds the Chart.js configuration for a series. The gradient fill cannot
/// be expressed in JSON; the chart bridge injects it into
/// `data.datasets[0].backgroundColor` after parsing this.
pub fn line_chart_config(series: &TrendSeries) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": "Average Fare (USD)",
                "data": series.values,
                "fill": true,
                "borderColor": "rgba(59,130,246,0.95)",
                "pointBackgroundColor": "#fff",
                "pointBorderColor": "rgba(59,130,246,0.95)",
                "tension": 0.32,
                "pointRadius": 4,
                "pointHoverRadius": 6,
                "borderWidth": 2,
            }],
        },
        "options": {
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "tooltip": {
                    "backgroundColor": "rgba(2,6,23,0.95)",
                    "titleColor": "#7dc3f8",
                    "bodyColor": "#eaf6ff",
                    "padding": 8,
                    "cornerRadius": 6,
                },
            },
            "scales": {
                "x": {
                    "grid": { "display": false },
                    "ticks": { "color": "#9fb7c9" },
                },
                "y": {
                    "grid": { "color": "rgba(255,255,255,0.03)" },
                    "ticks": { "color": "#9fb7c9", "beginAtZero": true },
                },
            },
            "interaction": { "mode": "index", "intersect": false },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HourlyCount, HourlyFare};

    fn fares(buckets: &[(&str, f64)]) -> Vec<HourlyFare> {
        buckets
            .iter()
            .map(|(hour, fare)| HourlyFare {
                hour: hour.to_string(),
                fare: *fare,
            })
            .collect()
    }

    fn counts(buckets: &[(&str, u64)]) -> Vec<HourlyCount> {
        buckets
            .iter()
            .map(|(hour, count)| HourlyCount {
                hour: hour.to_string(),
                count: *count,
            })
            .collect()
    }

    // ───────────────────── Derivation priority ─────────────────────

    #[test]
    fn fares_per_hour_wins_even_when_counts_present() {
        let summary = SummaryStats {
            fares_per_hour: fares(&[("08:00", 12.5), ("09:00", 14.0)]),
            trips_per_hour: counts(&[("08:00", 99)]),
            ..Default::default()
        };
        let series = derive_series(&summary);
        assert_eq!(series.source, SeriesSource::FaresPerHour);
        assert_eq!(series.labels, vec!["08:00", "09:00"]);
        assert_eq!(series.values, vec![12.5, 14.0]);
    }

    #[test]
    fn trip_counts_used_when_fares_empty() {
        let summary = SummaryStats {
            trips_per_hour: counts(&[("08:00", 4), ("09:00", 7)]),
            ..Default::default()
        };
        let series = derive_series(&summary);
        assert_eq!(series.source, SeriesSource::TripsPerHour);
        assert_eq!(series.labels, vec!["08:00", "09:00"]);
        assert_eq!(series.values, vec![4.0, 7.0]);
    }

    #[test]
    fn synthetic_fallback_when_no_hourly_data() {
        let series = derive_series(&SummaryStats::default());
        assert!(series.is_synthetic());
        let expected: Vec<String> = SYNTHETIC_HOURS.iter().map(|s| s.to_string()).collect();
        assert_eq!(series.labels, expected);
        assert_eq!(series.values, SYNTHETIC_FARES.to_vec());
    }

    #[test]
    fn explicitly_empty_arrays_count_as_absent() {
        let summary = SummaryStats {
            fares_per_hour: Vec::new(),
            trips_per_hour: Vec::new(),
            total_trips: 500,
            ..Default::default()
        };
        assert!(derive_series(&summary).is_synthetic());
    }

    #[test]
    fn derivation_preserves_source_order() {
        let summary = SummaryStats {
            fares_per_hour: fares(&[("23:00", 9.0), ("01:00", 3.0), ("12:00", 20.0)]),
            ..Default::default()
        };
        let series = derive_series(&summary);
        assert_eq!(
            series.labels,
            vec!["23:00", "01:00", "12:00"],
            "labels must keep backend order, unsorted"
        );
    }

    // ───────────────────── Synthetic series shape ─────────────────────

    #[test]
    fn synthetic_series_spans_a_full_day_in_twelve_points() {
        assert_eq!(SYNTHETIC_HOURS.len(), 12);
        assert_eq!(SYNTHETIC_FARES.len(), 12);
        assert_eq!(SYNTHETIC_HOURS[0], "12 AM");
        assert_eq!(SYNTHETIC_HOURS[6], "12 PM");
        assert_eq!(SYNTHETIC_HOURS[11], "10 PM");
    }

    #[test]
    fn synthetic_series_peaks_in_early_afternoon() {
        let peak = SYNTHETIC_FARES
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(SYNTHETIC_HOURS[peak], "2 PM");
        assert!(
            SYNTHETIC_FARES[11] > SYNTHETIC_FARES[10] || SYNTHETIC_FARES[10] > SYNTHETIC_FARES[9],
            "series rises again toward evening"
        );
    }

    #[test]
    fn external_series_is_tagged_external() {
        let series = TrendSeries::external(vec!["a".into()], vec![1.0]);
        assert_eq!(series.source, SeriesSource::External);
        assert!(!series.is_synthetic());
    }

    // ───────────────────── Chart configuration ─────────────────────

    #[test]
    fn chart_config_embeds_labels_and_values() {
        let config = line_chart_config(&synthetic_series());
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"][0], "12 AM");
        assert_eq!(config["data"]["datasets"][0]["data"][7], 28.0);
        assert_eq!(config["data"]["datasets"][0]["label"], "Average Fare (USD)");
    }

    #[test]
    fn chart_config_hides_legend_and_fills_under_line() {
        let config = line_chart_config(&synthetic_series());
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(config["data"]["datasets"][0]["fill"], true);
        assert_eq!(config["options"]["interaction"]["mode"], "index");
        assert_eq!(
            config["options"]["scales"]["y"]["ticks"]["beginAtZero"],
            true
        );
    }
}
