//! Reusable RSX components for the trips dashboard.

mod chart_panel;
mod detail_modal;
mod filter_bar;
mod map_panel;
mod pager;
mod panel_header;
mod summary_cards;
mod trip_table;

pub use chart_panel::ChartPanel;
pub use detail_modal::DetailModal;
pub use filter_bar::FilterBar;
pub use map_panel::MapPanel;
pub use pager::Pager;
pub use panel_header::PanelHeader;
pub use summary_cards::SummaryCards;
pub use trip_table::TripTable;
