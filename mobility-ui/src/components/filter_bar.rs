//! Filter controls: date range, minimum distance, apply and reset.

use dioxus::prelude::*;

use crate::state::AppState;

const FIELD_STYLE: &str = "display: flex; flex-direction: column; gap: 4px; font-size: 13px;";
const BUTTON_STYLE: &str = "padding: 6px 16px; cursor: pointer;";

/// Filter inputs bound to the shared `FilterState`. Every edit funnels
/// through the state's setters, so the page index snaps back to 1 on any
/// change. The bar itself never fetches; apply and reset are handed to the
/// app through the two handlers.
#[component]
pub fn FilterBar(on_apply: EventHandler<()>, on_reset: EventHandler<()>) -> Element {
    let mut state = use_context::<AppState>();
    let filters = (state.filters)();

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap; margin: 8px 0;",
            label {
                style: "{FIELD_STYLE}",
                "Start date"
                input {
                    r#type: "date",
                    value: "{filters.start_date}",
                    onchange: move |evt: Event<FormData>| {
                        state.filters.write().set_start_date(evt.value());
                    },
                }
            }
            label {
                style: "{FIELD_STYLE}",
                "End date"
                input {
                    r#type: "date",
                    value: "{filters.end_date}",
                    onchange: move |evt: Event<FormData>| {
                        state.filters.write().set_end_date(evt.value());
                    },
                }
            }
            label {
                style: "{FIELD_STYLE}",
                "Min distance (km)"
                input {
                    r#type: "number",
                    min: "0",
                    step: "0.1",
                    value: "{filters.min_distance}",
                    onchange: move |evt: Event<FormData>| {
                        state.filters.write().set_min_distance(evt.value());
                    },
                }
            }
            button {
                style: "{BUTTON_STYLE}",
                onclick: move |_| on_apply.call(()),
                "Apply"
            }
            button {
                style: "{BUTTON_STYLE}",
                onclick: move |_| on_reset.call(()),
                "Reset"
            }
        }
    }
}
