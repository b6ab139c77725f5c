//! Trip drill-down modal.

use dioxus::prelude::*;

use crate::state::AppState;

/// Fixed overlay showing one trip's full record as pretty-printed JSON.
/// Visibility is a pure toggle: closing hides the overlay but leaves the
/// content in place, and the next drill-down overwrites it.
#[component]
pub fn DetailModal(on_close: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let open = (state.detail_open)();
    let body = (state.detail_json)();

    let overlay = if open {
        "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 1000;"
    } else {
        "display: none;"
    };

    rsx! {
        div {
            style: "{overlay}",
            div {
                style: "background: #fff; border-radius: 8px; padding: 16px; max-width: 560px; width: 90%; max-height: 80vh; overflow: auto;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    h3 {
                        style: "margin: 0; font-size: 15px;",
                        "Trip detail"
                    }
                    button {
                        style: "padding: 4px 12px; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
                pre {
                    style: "margin: 0; font-size: 12px; white-space: pre-wrap;",
                    "{body}"
                }
            }
        }
    }
}
