//! Idempotent loading of CDN scripts.
//!
//! The chart library is not bundled; it is pulled from a CDN the first time
//! a render needs it. The loader is a module-level state machine: one phase
//! in {unloaded, loading, loaded, failed} plus a registry of waiters that
//! are all notified when the in-flight load settles. Concurrent renders
//! therefore share a single script tag instead of injecting their own, and
//! a failed load is retried on the next call rather than wedging every
//! later caller.

use std::cell::RefCell;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// CDN location of Chart.js.
pub const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Attribute marking tags this loader owns, keyed by source URL.
const MARKER_ATTR: &str = "data-src";

/// Where the current load attempt stands.
#[derive(Clone, Copy, PartialEq)]
enum LoadPhase {
    Unloaded,
    Loading,
    Loaded,
    Failed,
}

struct LoaderRegistry {
    phase: LoadPhase,
    waiters: Vec<oneshot::Sender<Result<(), String>>>,
}

thread_local! {
    static LOADER: RefCell<LoaderRegistry> = RefCell::new(LoaderRegistry {
        phase: LoadPhase::Unloaded,
        waiters: Vec::new(),
    });
}

/// What the caller should do next, decided under one registry borrow.
enum Action {
    Ready,
    Wait(oneshot::Receiver<Result<(), String>>),
    Inject(oneshot::Receiver<Result<(), String>>),
}

/// Makes sure Chart.js is loaded, injecting its script tag at most once
/// per attempt however many renders ask concurrently.
pub async fn ensure_chart_library() -> Result<(), JsValue> {
    ensure_script(CHART_JS_URL, "Chart").await
}

/// Resolves once the script at `url` has loaded, whichever caller injected
/// it. If `global` already exists on `window` the library is live and no
/// DOM work happens at all. A phase of failed is not sticky: the next call
/// starts a fresh attempt.
pub async fn ensure_script(url: &str, global: &str) -> Result<(), JsValue> {
    let action = LOADER.with(|cell| {
        let mut registry = cell.borrow_mut();
        match registry.phase {
            LoadPhase::Loaded => Action::Ready,
            LoadPhase::Loading => Action::Wait(register_waiter(&mut registry)),
            LoadPhase::Unloaded | LoadPhase::Failed => {
                registry.phase = LoadPhase::Loading;
                Action::Inject(register_waiter(&mut registry))
            }
        }
    });

    match action {
        Action::Ready => Ok(()),
        Action::Wait(settled) => await_outcome(settled).await,
        Action::Inject(settled) => {
            // Every exit from this branch settles the registry, otherwise
            // the waiters registered behind us would hang forever.
            match global_present(global) {
                Ok(true) => settle(Ok(())),
                Ok(false) => {
                    if let Err(e) = inject(url) {
                        settle(Err(format!("script injection for {url} failed: {e:?}")));
                    }
                }
                Err(e) => settle(Err(format!("no global scope to probe: {e:?}"))),
            }
            await_outcome(settled).await
        }
    }
}

fn register_waiter(registry: &mut LoaderRegistry) -> oneshot::Receiver<Result<(), String>> {
    let (tx, rx) = oneshot::channel();
    registry.waiters.push(tx);
    rx
}

async fn await_outcome(settled: oneshot::Receiver<Result<(), String>>) -> Result<(), JsValue> {
    match settled.await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(msg)) => Err(JsValue::from_str(&msg)),
        Err(_) => Err(JsValue::from_str("script loader dropped without settling")),
    }
}

/// Moves the registry to its terminal phase for this attempt and drains
/// every waiter with the outcome.
fn settle(outcome: Result<(), String>) {
    LOADER.with(|cell| {
        let mut registry = cell.borrow_mut();
        registry.phase = match outcome {
            Ok(()) => LoadPhase::Loaded,
            Err(_) => LoadPhase::Failed,
        };
        for waiter in registry.waiters.drain(..) {
            let _ = waiter.send(outcome.clone());
        }
    });
}

fn global_present(global: &str) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str(global))
}

/// Builds the script tag and wires its load/error events into the
/// registry. Listeners are attached before the tag goes live so a cached
/// script cannot fire `load` into the void.
fn inject(url: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document object"))?;
    let script: HtmlScriptElement = document
        .create_element("script")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("created element is not a script"))?;
    script.set_src(url);
    script.set_attribute("async", "")?;
    script.set_attribute(MARKER_ATTR, url)?;

    let on_load = Closure::once(move || settle(Ok(())));
    script.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();

    let failed_url = url.to_string();
    let on_error = Closure::once(move || settle(Err(format!("failed to load {failed_url}"))));
    script.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
    on_error.forget();

    document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?
        .append_child(&script)?;
    Ok(())
}
