//! Filter state and query-string construction.
//!
//! One `FilterState` value is the single source of truth for everything the
//! dashboard asks of the backend. Setters funnel every non-page edit through
//! the page-reset rule, and the query builders render exactly the parameter
//! sets the three list endpoints expect, with absent values sent as empty
//! strings.

use crate::heatmap::HEATMAP_GRID_SIZE;

/// Rows requested per table page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// The user-controlled query parameters driving all four dashboard views.
///
/// Date and distance fields hold raw input-element values; an empty string
/// means "no constraint" and is passed through to the backend as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub start_date: String,
    pub end_date: String,
    pub min_distance: String,
    /// Current table page, 1-based.
    pub page: u32,
    pub page_size: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            min_distance: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    /// Sets the start date and resets pagination.
    pub fn set_start_date(&mut self, value: impl Into<String>) {
        self.start_date = value.into();
        self.page = 1;
    }

    /// Sets the end date and resets pagination.
    pub fn set_end_date(&mut self, value: impl Into<String>) {
        self.end_date = value.into();
        self.page = 1;
    }

    /// Sets the minimum trip distance and resets pagination.
    pub fn set_min_distance(&mut self, value: impl Into<String>) {
        self.min_distance = value.into();
        self.page = 1;
    }

    /// Snaps back to page 1 without touching the filter values.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Moves one page back. Returns whether the page actually changed;
    /// page 1 has no predecessor.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Moves one page forward. There is no upper bound: paging past the end
    /// of the result set yields an empty page, which the table surfaces as
    /// its empty state rather than an error.
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Query string for `GET /summary`.
    pub fn summary_query(&self) -> String {
        format!(
            "start={}&end={}",
            encode(&self.start_date),
            encode(&self.end_date)
        )
    }

    /// Query string for `GET /heatmap`, carrying the fixed grid resolution.
    pub fn heatmap_query(&self) -> String {
        format!(
            "start={}&end={}&grid_size={}",
            encode(&self.start_date),
            encode(&self.end_date),
            HEATMAP_GRID_SIZE
        )
    }

    /// Query string for `GET /trips`.
    pub fn trips_query(&self) -> String {
        format!(
            "start={}&end={}&min_distance={}&limit={}&page={}",
            encode(&self.start_date),
            encode(&self.end_date),
            encode(&self.min_distance),
            self.page_size,
            self.page
        )
    }
}

/// Percent-encodes one query-string value. Values come from date and number
/// controls, so this only has to keep the URL-reserved bytes out of the way.
pub fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────── Page-reset rule ─────────────────────

    #[test]
    fn any_filter_edit_resets_page() {
        let mut f = FilterState::default();

        f.page = 7;
        f.set_start_date("2016-03-01");
        assert_eq!(f.page, 1, "start-date edit must reset pagination");

        f.page = 7;
        f.set_end_date("2016-03-31");
        assert_eq!(f.page, 1, "end-date edit must reset pagination");

        f.page = 7;
        f.set_min_distance("2.5");
        assert_eq!(f.page, 1, "min-distance edit must reset pagination");
    }

    #[test]
    fn page_navigation_does_not_reset() {
        let mut f = FilterState::default();
        f.next_page();
        f.next_page();
        assert_eq!(f.page, 3);
        assert!(f.prev_page());
        assert_eq!(f.page, 2);
    }

    // ───────────────────── Pagination state machine ─────────────────────

    #[test]
    fn prev_page_stops_at_one() {
        let mut f = FilterState::default();
        assert!(!f.prev_page(), "page 1 has no predecessor");
        assert_eq!(f.page, 1);

        f.next_page();
        assert!(f.prev_page());
        assert_eq!(f.page, 1);
    }

    #[test]
    fn next_page_has_no_upper_bound() {
        let mut f = FilterState::default();
        f.page = 999;
        f.next_page();
        assert_eq!(f.page, 1000);
    }

    #[test]
    fn default_state_starts_on_page_one() {
        let f = FilterState::default();
        assert_eq!(f.page, 1);
        assert_eq!(f.page_size, DEFAULT_PAGE_SIZE);
        assert!(f.start_date.is_empty());
    }

    // ───────────────────── Query strings ─────────────────────

    #[test]
    fn absent_filters_are_sent_as_empty_strings() {
        let f = FilterState::default();
        assert_eq!(f.summary_query(), "start=&end=");
        assert_eq!(f.trips_query(), "start=&end=&min_distance=&limit=20&page=1");
    }

    #[test]
    fn trips_query_carries_page_and_limit() {
        let mut f = FilterState::default();
        f.set_start_date("2016-03-01");
        f.set_end_date("2016-03-31");
        f.set_min_distance("1.5");
        f.next_page();
        assert_eq!(
            f.trips_query(),
            "start=2016-03-01&end=2016-03-31&min_distance=1.5&limit=20&page=2"
        );
    }

    #[test]
    fn heatmap_query_pins_grid_size() {
        let mut f = FilterState::default();
        f.set_start_date("2016-03-01");
        assert_eq!(f.heatmap_query(), "start=2016-03-01&end=&grid_size=0.01");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        assert_eq!(encode("2016-03-01"), "2016-03-01");
        assert_eq!(encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode(""), "");
    }
}
