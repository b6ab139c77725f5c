//! Pickup density panel: the container Leaflet owns after mount.

use dioxus::prelude::*;

use crate::components::PanelHeader;

#[derive(Props, Clone, PartialEq)]
pub struct MapPanelProps {
    /// DOM id Leaflet mounts into
    pub container_id: String,
    /// Panel height in pixels
    #[props(default = 360)]
    pub height: u32,
}

/// The density map panel. The container div must exist before the map
/// bridge runs, and its id never changes afterwards.
#[component]
pub fn MapPanel(props: MapPanelProps) -> Element {
    rsx! {
        section {
            style: "margin: 16px 0;",
            PanelHeader {
                title: "Pickup density".to_string(),
                description: "Each circle is one grid cell of the filtered result; larger circles mean more pickups.".to_string(),
            }
            div {
                id: "{props.container_id}",
                style: "height: {props.height}px; width: 100%; border-radius: 6px;",
            }
        }
    }
}
