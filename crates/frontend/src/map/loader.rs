//! Runtime injection of the Leaflet script and stylesheet.
//!
//! Leaflet is not a Rust dependency; it arrives as a classic script tag that
//! defines the global `L` namespace. The tags are injected once (guarded by
//! element id) and `ensure_loaded` polls until the global is available.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};

const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const SCRIPT_ID: &str = "leaflet-js";
const CSS_ID: &str = "leaflet-css";

const POLL_INTERVAL_MS: u32 = 100;
const MAX_POLLS: u32 = 100;

fn global_l_present() -> bool {
    match web_sys::window() {
        Some(window) => js_sys::Reflect::has(&window, &JsValue::from_str("L")).unwrap_or(false),
        None => false,
    }
}

fn inject_tags() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?;

    if document.get_element_by_id(CSS_ID).is_none() {
        let link: web_sys::HtmlLinkElement = document.create_element("link")?.unchecked_into();
        link.set_id(CSS_ID);
        link.set_rel("stylesheet");
        link.set_href(LEAFLET_CSS);
        head.append_child(&link)?;
    }

    if document.get_element_by_id(SCRIPT_ID).is_none() {
        let script: web_sys::HtmlScriptElement =
            document.create_element("script")?.unchecked_into();
        script.set_id(SCRIPT_ID);
        script.set_src(LEAFLET_JS);
        head.append_child(&script)?;
    }

    Ok(())
}

/// Inject the Leaflet tags if needed and wait until the `L` global exists.
/// Errors after ten seconds without the script becoming available.
pub async fn ensure_loaded() -> Result<(), JsValue> {
    if global_l_present() {
        return Ok(());
    }
    inject_tags()?;

    for _ in 0..MAX_POLLS {
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
        if global_l_present() {
            return Ok(());
        }
    }
    Err(JsValue::from_str("leaflet failed to load"))
}
