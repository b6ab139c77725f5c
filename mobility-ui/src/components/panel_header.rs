//! Panel header component with title and optional description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeaderProps {
    /// Panel title
    pub title: String,
    /// One-paragraph explanation of what the panel shows
    #[props(default = String::new())]
    pub description: String,
}

/// Header for the chart and map panels.
#[component]
pub fn PanelHeader(props: PanelHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}
