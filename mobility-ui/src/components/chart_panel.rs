//! Fare trend panel: the canvas surface Chart.js draws on.

use dioxus::prelude::*;

use crate::components::PanelHeader;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id of the canvas the chart bridge renders into
    pub canvas_id: String,
    /// Panel height in pixels
    #[props(default = 260)]
    pub height: u32,
}

/// The fare-by-hour panel. The canvas keeps a stable id across renders so
/// the chart bridge can rebind after every filter cycle.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    rsx! {
        section {
            style: "margin: 16px 0;",
            PanelHeader {
                title: "Fare prices by time of day".to_string(),
                description: "Average fares dip through the small hours, climb toward an early-afternoon peak, ease off, then rise again into the evening.".to_string(),
            }
            div {
                style: "position: relative; height: {props.height}px; width: 100%;",
                canvas {
                    id: "{props.canvas_id}",
                    aria_label: "Fare by hour trend chart",
                    style: "width: 100%; height: 100%;",
                }
            }
        }
    }
}
