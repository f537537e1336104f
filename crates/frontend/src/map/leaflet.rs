//! Minimal wasm-bindgen surface over the Leaflet `L` global.
//!
//! `js_namespace = L` resolves the namespace at call time, so these externs
//! work even though the script is injected after the wasm module starts;
//! callers must await [`loader::ensure_loaded`](super::loader::ensure_loaded)
//! before touching anything here.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Map;
    pub type TileLayer;
    pub type Marker;
    pub type Circle;
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container: &web_sys::HtmlElement) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(latlng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &web_sys::Element) -> Marker;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);

    #[wasm_bindgen(js_namespace = L, js_name = circle)]
    pub fn circle(latlng: &JsValue, options: &JsValue) -> Circle;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Circle, map: &Map) -> Circle;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> DivIcon;
}

/// `[lat, lng]` pair in the array form Leaflet accepts everywhere.
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lng));
    pair.into()
}

/// Plain JS object from key/value pairs. Needed for option bags that embed
/// Leaflet objects (e.g. a marker's `icon`), which serde cannot serialize.
pub fn js_obj(entries: &[(&str, &JsValue)]) -> Result<JsValue, JsValue> {
    let obj = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj.into())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions {
    pub attribution: &'static str,
    pub max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions {
    pub html: String,
    pub class_name: &'static str,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleOptions {
    pub radius: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}
