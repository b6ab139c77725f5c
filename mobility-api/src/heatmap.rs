//! Density-map policy: marker sizing, popup text, and map constants.

/// Fixed aggregation grid resolution in degrees, sent with every heatmap
/// request.
pub const HEATMAP_GRID_SIZE: f64 = 0.01;

/// Smallest rendered marker radius in metres; keeps sparse cells visible at
/// the default zoom.
pub const MIN_MARKER_RADIUS_M: f64 = 50.0;

/// Startup viewport: midtown Manhattan, the dataset's centre of mass.
pub const MAP_CENTER: (f64, f64) = (40.75, -73.98);
pub const MAP_ZOOM: f64 = 12.0;

/// OpenStreetMap raster tiles.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: u32 = 18;

/// Marker radius in metres for a cell's trip count: ten metres per trip,
/// never below the visibility floor. Monotonic in `count`.
pub fn marker_radius(count: u64) -> f64 {
    (count as f64 * 10.0).max(MIN_MARKER_RADIUS_M)
}

/// Popup content for a density cell.
pub fn popup_text(count: u64) -> String {
    format!("Trips: {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_never_drops_below_floor() {
        assert_eq!(marker_radius(0), MIN_MARKER_RADIUS_M);
        assert_eq!(marker_radius(1), MIN_MARKER_RADIUS_M);
        assert_eq!(marker_radius(5), MIN_MARKER_RADIUS_M);
    }

    #[test]
    fn radius_scales_ten_metres_per_trip_above_floor() {
        assert_eq!(marker_radius(6), 60.0);
        assert_eq!(marker_radius(120), 1200.0);
    }

    #[test]
    fn radius_is_monotonic() {
        let mut last = 0.0;
        for count in 0..200 {
            let r = marker_radius(count);
            assert!(r >= last, "radius shrank at count {count}");
            last = r;
        }
    }

    #[test]
    fn popup_names_the_count() {
        assert_eq!(popup_text(12), "Trips: 12");
        assert_eq!(popup_text(0), "Trips: 0");
    }
}
