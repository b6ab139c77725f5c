//! Chart.js interop for the fare trend chart.
//!
//! The library lives on `window.Chart` after the script loader has run.
//! [`FareChart`] owns the single live instance bound to the dashboard's
//! canvas and exposes the two mutation paths the app uses: a full
//! destroy-and-recreate render for filter cycles, and an in-place data
//! swap for external pushes through the `updateFareChart` hook.

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use mobility_api::trend::{line_chart_config, TrendSeries};

/// Area fill at the top of the line.
const GRADIENT_TOP: &str = "rgba(59,130,246,0.28)";
/// Area fill fading out toward the x axis.
const GRADIENT_BOTTOM: &str = "rgba(94,208,255,0.05)";
/// Gradient extent when the canvas has not been sized yet.
const FALLBACK_CANVAS_HEIGHT: f64 = 260.0;

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js chart (the `window.Chart` constructor).
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(ctx: &CanvasRenderingContext2d, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &Chart) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn update(this: &Chart) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter)]
    fn data(this: &Chart) -> JsValue;
}

/// The dashboard's one fare chart: an optional handle to the Chart.js
/// instance bound to a fixed canvas. At most one instance is ever live.
pub struct FareChart {
    canvas_id: &'static str,
    instance: Option<Chart>,
}

impl FareChart {
    /// A chart handle with no live instance yet. Nothing touches the DOM
    /// until the first render.
    pub fn new(canvas_id: &'static str) -> Self {
        Self {
            canvas_id,
            instance: None,
        }
    }

    /// Destroys any live instance and builds a fresh one for `series`.
    /// Callers must have awaited the script loader first; this path is
    /// synchronous so it can run under a signal write guard.
    pub fn render(&mut self, series: &TrendSeries) -> Result<(), JsValue> {
        let (canvas, ctx) = canvas_context(self.canvas_id)?;
        if let Some(old) = self.instance.take() {
            let _ = old.destroy();
        }
        let config = js_sys::JSON::parse(&line_chart_config(series).to_string())?;
        apply_gradient(&config, &canvas, &ctx)?;
        self.instance = Some(Chart::new(&ctx, &config)?);
        Ok(())
    }

    /// In-place update for externally pushed series: swaps the labels and
    /// the first dataset's points on the live instance and redraws. Falls
    /// back to a full render when no instance exists yet.
    pub fn apply_series(&mut self, labels: Vec<String>, values: Vec<f64>) -> Result<(), JsValue> {
        match &self.instance {
            Some(chart) => {
                let data = chart.data();
                let labels_js = str_array(&labels);
                Reflect::set(&data, &JsValue::from_str("labels"), labels_js.as_ref())?;
                let datasets = Array::from(&Reflect::get(&data, &JsValue::from_str("datasets"))?);
                let first = datasets.get(0);
                let values_js = num_array(&values);
                Reflect::set(&first, &JsValue::from_str("data"), values_js.as_ref())?;
                chart.update()
            }
            None => self.render(&TrendSeries::external(labels, values)),
        }
    }
}

/// Looks up the canvas and its 2d context by element id.
fn canvas_context(
    canvas_id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document object"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{canvas_id} not in DOM")))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
    Ok((canvas, ctx))
}

/// Injects the vertical area gradient into the first dataset. The gradient
/// is a canvas object, so it cannot travel through the JSON config and is
/// patched in afterwards.
fn apply_gradient(
    config: &JsValue,
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
) -> Result<(), JsValue> {
    let height = match canvas.height() {
        0 => FALLBACK_CANVAS_HEIGHT,
        h => f64::from(h),
    };
    let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
    gradient.add_color_stop(0.0, GRADIENT_TOP)?;
    gradient.add_color_stop(1.0, GRADIENT_BOTTOM)?;

    let data = Reflect::get(config, &JsValue::from_str("data"))?;
    let datasets = Array::from(&Reflect::get(&data, &JsValue::from_str("datasets"))?);
    let first = datasets.get(0);
    Reflect::set(&first, &JsValue::from_str("backgroundColor"), gradient.as_ref())?;
    Ok(())
}

fn str_array(items: &[String]) -> Array {
    items.iter().map(|s| JsValue::from_str(s)).collect()
}

fn num_array(items: &[f64]) -> Array {
    items.iter().copied().map(JsValue::from_f64).collect()
}
