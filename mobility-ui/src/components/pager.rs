//! Prev/next pagination controls with the page-info readout.

use dioxus::prelude::*;

use mobility_api::format::page_info;

use crate::state::{AppState, TableView};

/// Pagination controls. Prev is enabled only past page 1; next always
/// advances, since the server does not promise a total. Paging off the end
/// of the result set just yields the table's empty state.
#[component]
pub fn Pager(on_prev: EventHandler<()>, on_next: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let page = (state.filters)().page;
    let total = match (state.trips)() {
        TableView::Loaded(p) => p.total,
        _ => None,
    };
    let info = page_info(page, total);

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; margin-top: 8px;",
            button {
                style: "padding: 4px 12px;",
                disabled: page <= 1,
                onclick: move |_| on_prev.call(()),
                "Prev"
            }
            span {
                style: "font-size: 13px; color: #444;",
                "{info}"
            }
            button {
                style: "padding: 4px 12px;",
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
