//! Shared Dioxus components and JS bridges for the mobility dashboard.
//!
//! This crate holds everything between the typed API layer and the app
//! shell:
//! - `state`: the `AppState` signal bundle provided through Dioxus context
//! - `fetch`: typed GETs against the dashboard API via the browser fetch
//! - `script_loader`: idempotent CDN loading for the chart library
//! - `chart_bridge` / `map_bridge`: wasm-bindgen bindings to the Chart.js
//!   and Leaflet globals, each wrapped in a single-instance handle
//! - `components`: reusable RSX components (filter bar, cards, table,
//!   pager, modal, panels)

pub mod chart_bridge;
pub mod components;
pub mod fetch;
pub mod map_bridge;
pub mod script_loader;
pub mod state;

pub use state::{AppState, TableView};
