//! Leaflet interop for the pickup density map.
//!
//! Leaflet is loaded by the page shell, so unlike the chart library there
//! is no loader step; the bindings target the `L` global directly and
//! [`DensityMap::init`] refuses to build when it is missing.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use mobility_api::heatmap::{marker_radius, popup_text, MAP_CENTER, MAP_ZOOM, TILE_MAX_ZOOM, TILE_URL};
use mobility_api::models::HeatCell;

#[wasm_bindgen]
extern "C" {
    /// A live Leaflet map (`L.map(...)`).
    pub type LeafletMap;
    /// Base tile layer (`L.tileLayer(...)`).
    pub type TileLayer;
    /// Overlay group holding the density markers (`L.layerGroup()`).
    pub type LayerGroup;
    /// One circular density marker (`L.circle(...)`).
    pub type Circle;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn leaflet_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer, catch)]
    fn tile_layer(url_template: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup, catch)]
    fn layer_group() -> Result<LayerGroup, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_group_to(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup);

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &LayerGroup, layer: &Circle);

    #[wasm_bindgen(js_namespace = L, js_name = circle, catch)]
    fn circle(center: &Array, options: &JsValue) -> Result<Circle, JsValue>;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Circle, content: &str) -> Circle;
}

/// The dashboard's one map: the Leaflet instance plus the single overlay
/// group the density renderer owns. Markers are replaced wholesale on every
/// successful heatmap fetch; the base map itself is never rebuilt.
pub struct DensityMap {
    _map: LeafletMap,
    cells: LayerGroup,
}

impl DensityMap {
    /// Builds the map once, on mount. Checks the container and the `L`
    /// global first so a page without Leaflet degrades to a warning
    /// instead of an exception.
    pub fn init(container_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
        if !js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("L"))? {
            return Err(JsValue::from_str("Leaflet global not present"));
        }
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document object"))?;
        if document.get_element_by_id(container_id).is_none() {
            return Err(JsValue::from_str(&format!(
                "map container #{container_id} not in DOM"
            )));
        }

        let map = leaflet_map(container_id)?;
        let _ = map.set_view(&lat_lng(MAP_CENTER.0, MAP_CENTER.1), MAP_ZOOM);

        let tile_options = js_sys::JSON::parse(&format!(r#"{{"maxZoom": {TILE_MAX_ZOOM}}}"#))?;
        let _ = tile_layer(TILE_URL, &tile_options)?.add_tiles_to(&map);

        let cells = layer_group()?;
        let _ = cells.add_group_to(&map);

        Ok(Self { _map: map, cells })
    }

    /// Replaces the whole overlay set with one circle per cell. The radius
    /// scales with the cell count so denser cells read larger at any zoom.
    pub fn replace_cells(&self, cells: &[HeatCell]) -> Result<(), JsValue> {
        self.cells.clear_layers();
        for cell in cells {
            let options = js_sys::JSON::parse(&format!(
                r#"{{"radius": {}, "weight": 0.5}}"#,
                marker_radius(cell.count)
            ))?;
            let marker = circle(&lat_lng(cell.lat, cell.lng), &options)?;
            let marker = marker.bind_popup(&popup_text(cell.count));
            self.cells.add_layer(&marker);
        }
        Ok(())
    }
}

fn lat_lng(lat: f64, lng: f64) -> Array {
    let pair = Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lng));
    pair
}
