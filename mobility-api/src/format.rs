//! Display formatting for cards, table cells, and the pager readout.

use chrono::NaiveDateTime;

/// The timestamp shapes backends actually send: SQLite's space-separated
/// form and ISO 8601 with a `T`, each with or without fractional seconds.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Two-decimal rendering for distance and money cells.
pub fn format_two(value: f64) -> String {
    format!("{value:.2}")
}

/// One-decimal rendering for durations in minutes.
pub fn format_one(value: f64) -> String {
    format!("{value:.1}")
}

/// Revenue card rendering, `$` prefixed.
pub fn format_usd(value: f64) -> String {
    format!("${value:.2}")
}

/// Renders a raw timestamp as `YYYY-MM-DD HH:MM`; anything unparseable is
/// shown as received rather than dropped.
pub fn format_timestamp(raw: &str) -> String {
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return ts.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    raw.to_string()
}

/// Pager readout. `total` is absent when the backend did not count the full
/// result set; the readout shows `?` in its place.
pub fn page_info(page: u32, total: Option<u64>) -> String {
    match total {
        Some(total) => format!("Page {page} — {total} trips total"),
        None => format!("Page {page} — ? trips total"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────── Numeric formatting ─────────────────────

    #[test]
    fn card_formats_match_expected_precision() {
        assert_eq!(format_two(5.4), "5.40");
        assert_eq!(format_one(14.2), "14.2");
        assert_eq!(format_usd(850.3), "$850.30");
    }

    #[test]
    fn zero_values_render_as_zero() {
        assert_eq!(format_two(0.0), "0.00");
        assert_eq!(format_one(0.0), "0.0");
        assert_eq!(format_usd(0.0), "$0.00");
    }

    #[test]
    fn formats_round_rather_than_truncate() {
        assert_eq!(format_two(3.14159), "3.14");
        assert_eq!(format_two(9.999), "10.00");
        assert_eq!(format_one(11.96), "12.0");
    }

    // ───────────────────── Timestamps ─────────────────────

    #[test]
    fn sqlite_timestamps_render_short() {
        assert_eq!(format_timestamp("2016-03-14 17:24:55"), "2016-03-14 17:24");
    }

    #[test]
    fn iso_timestamps_render_short() {
        assert_eq!(format_timestamp("2016-03-14T17:24:55"), "2016-03-14 17:24");
        assert_eq!(
            format_timestamp("2016-03-14T17:24:55.123"),
            "2016-03-14 17:24"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    // ───────────────────── Pager readout ─────────────────────

    #[test]
    fn page_info_includes_page_and_total() {
        assert_eq!(page_info(2, Some(57)), "Page 2 — 57 trips total");
    }

    #[test]
    fn page_info_shows_question_mark_without_total() {
        assert_eq!(page_info(3, None), "Page 3 — ? trips total");
    }

    #[test]
    fn zero_total_renders_as_zero_not_question_mark() {
        assert_eq!(page_info(1, Some(0)), "Page 1 — 0 trips total");
    }
}
