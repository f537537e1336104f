use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use contracts::domain::map::MapNgo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::leaflet::{self, CircleOptions, DivIconOptions, TileLayerOptions};
use super::loader;
use super::popup::build_popup;
use super::style::{div_icon_html, marker_style, MarkerStyle, LEGEND};

const INDIA_CENTER: (f64, f64) = (20.5937, 78.9629);
const INDIA_ZOOM: f64 = 5.0;
const USER_ZOOM: f64 = 10.0;
const NEARBY_RADIUS_M: f64 = 5000.0;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const USER_STYLE: MarkerStyle = MarkerStyle {
    color: "#3b82f6",
    glyph: "\u{25cf}",
    label: "You are here",
};

/// Outcome of the single geolocation request made per widget mount.
#[derive(Clone, Copy, PartialEq)]
enum LocationStatus {
    Requesting,
    Granted { lat: f64, lng: f64 },
    Denied,
}

fn marker_icon(style: &MarkerStyle) -> Result<leaflet::DivIcon, JsValue> {
    let options = serde_wasm_bindgen::to_value(&DivIconOptions {
        html: div_icon_html(style),
        class_name: "ngo-marker-wrap",
        icon_size: [28, 28],
        icon_anchor: [14, 14],
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(leaflet::div_icon(&options))
}

fn add_ngo_marker(map: &leaflet::Map, ngo: &MapNgo) -> Result<leaflet::Marker, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let icon = marker_icon(&marker_style(ngo.verified, ngo.blacklisted))?;
    let options = leaflet::js_obj(&[("icon", icon.as_ref())])?;
    let marker = leaflet::marker(&leaflet::lat_lng(ngo.lat, ngo.lng), &options);
    marker.bind_popup(&build_popup(&document, ngo)?);
    marker.add_to(map);
    Ok(marker)
}

fn add_user_overlay(map: &leaflet::Map, lat: f64, lng: f64) -> Result<(), JsValue> {
    let icon = marker_icon(&USER_STYLE)?;
    let options = leaflet::js_obj(&[("icon", icon.as_ref())])?;
    leaflet::marker(&leaflet::lat_lng(lat, lng), &options).add_to(map);

    let circle_options = serde_wasm_bindgen::to_value(&CircleOptions {
        radius: NEARBY_RADIUS_M,
        color: "#3b82f6",
        fill_color: "#3b82f6",
        fill_opacity: 0.1,
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    leaflet::circle(&leaflet::lat_lng(lat, lng), &circle_options).add_to(map);
    Ok(())
}

fn init_map(
    container: &web_sys::HtmlElement,
    status: LocationStatus,
) -> Result<leaflet::Map, JsValue> {
    let map = leaflet::new_map(container);
    match status {
        LocationStatus::Granted { lat, lng } => {
            map.set_view(&leaflet::lat_lng(lat, lng), USER_ZOOM);
            add_user_overlay(&map, lat, lng)?;
        }
        _ => {
            map.set_view(
                &leaflet::lat_lng(INDIA_CENTER.0, INDIA_CENTER.1),
                INDIA_ZOOM,
            );
        }
    }

    let tile_options = serde_wasm_bindgen::to_value(&TileLayerOptions {
        attribution: TILE_ATTRIBUTION,
        max_zoom: 19,
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    leaflet::tile_layer(TILE_URL, &tile_options).add_to(&map);
    Ok(map)
}

/// Ask for the user position once; any failure path degrades to the
/// all-India view.
fn request_location(set_status: WriteSignal<LocationStatus>) {
    let geolocation = web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| n.geolocation().ok());
    let Some(geolocation) = geolocation else {
        set_status.set(LocationStatus::Denied);
        return;
    };

    let on_position = Closure::<dyn FnMut(web_sys::Position)>::new(move |pos: web_sys::Position| {
        let coords = pos.coords();
        set_status.set(LocationStatus::Granted {
            lat: coords.latitude(),
            lng: coords.longitude(),
        });
    });
    let on_error = Closure::<dyn FnMut(web_sys::PositionError)>::new(
        move |_err: web_sys::PositionError| {
            set_status.set(LocationStatus::Denied);
        },
    );

    let outcome = geolocation.get_current_position_with_error_callback(
        on_position.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
    );
    if outcome.is_err() {
        set_status.set(LocationStatus::Denied);
        return;
    }
    // single-shot callbacks; leak them for the page lifetime
    on_position.forget();
    on_error.forget();
}

/// Interactive map over the given organizations. Owns the Leaflet objects;
/// marker churn is reconciled against the data signal by id.
#[component]
#[allow(non_snake_case)]
pub fn NgoMap(#[prop(into)] data: Signal<Vec<MapNgo>>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let (status, set_status) = signal(LocationStatus::Requesting);
    let (lib_ready, set_lib_ready) = signal(false);
    let (map_ready, set_map_ready) = signal(false);

    let map_handle: Rc<RefCell<Option<leaflet::Map>>> = Rc::new(RefCell::new(None));
    let markers: Rc<RefCell<HashMap<i64, leaflet::Marker>>> =
        Rc::new(RefCell::new(HashMap::new()));

    request_location(set_status);
    spawn_local(async move {
        match loader::ensure_loaded().await {
            Ok(()) => set_lib_ready.set(true),
            Err(e) => log::warn!("leaflet unavailable: {:?}", e),
        }
    });

    // Create the map once the library is in, the container is mounted and
    // the location request has resolved either way.
    Effect::new({
        let map_handle = Rc::clone(&map_handle);
        move |_| {
            if !lib_ready.get() || map_handle.borrow().is_some() {
                return;
            }
            let resolved = status.get();
            if resolved == LocationStatus::Requesting {
                return;
            }
            let Some(element) = container.get() else {
                return;
            };
            match init_map(&element, resolved) {
                Ok(map) => {
                    *map_handle.borrow_mut() = Some(map);
                    set_map_ready.set(true);
                }
                Err(e) => log::warn!("map init failed: {:?}", e),
            }
        }
    });

    // Reconcile markers against the data: drop ids that left, add ids that
    // arrived, leave the rest untouched.
    Effect::new({
        let map_handle = Rc::clone(&map_handle);
        let markers = Rc::clone(&markers);
        move |_| {
            let records = data.get();
            if !map_ready.get() {
                return;
            }
            let map_ref = map_handle.borrow();
            let Some(map) = map_ref.as_ref() else {
                return;
            };

            let mut current = markers.borrow_mut();
            let wanted: HashSet<i64> = records.iter().map(|r| r.id).collect();
            current.retain(|id, marker| {
                if wanted.contains(id) {
                    true
                } else {
                    marker.remove();
                    false
                }
            });
            for record in &records {
                if current.contains_key(&record.id) {
                    continue;
                }
                match add_ngo_marker(map, record) {
                    Ok(marker) => {
                        current.insert(record.id, marker);
                    }
                    Err(e) => log::warn!("marker for NGO {} failed: {:?}", record.id, e),
                }
            }
        }
    });

    // on_cleanup requires Send + Sync captures; the Leaflet handles never
    // leave this thread, so SendWrapper is sound here.
    on_cleanup({
        let map_handle = SendWrapper::new(Rc::clone(&map_handle));
        let markers = SendWrapper::new(Rc::clone(&markers));
        move || {
            markers.borrow_mut().clear();
            if let Some(map) = map_handle.borrow_mut().take() {
                map.remove();
            }
        }
    });

    let status_text = move || match status.get() {
        LocationStatus::Requesting => "Locating you...",
        LocationStatus::Granted { .. } => "Showing NGOs near you",
        LocationStatus::Denied => "Showing all India",
    };

    view! {
        <div class="ngo-map">
            <div class="ngo-map__canvas" node_ref=container></div>
            <div class="ngo-map__status">{status_text}</div>
            <div class="ngo-map__count">
                {move || format!("{} NGOs on the map", data.get().len())}
            </div>
            <ul class="ngo-map__legend">
                {LEGEND
                    .iter()
                    .map(|style| view! {
                        <li>
                            <span
                                class="ngo-map__legend-dot"
                                style=format!("background: {}", style.color)
                            ></span>
                            {style.label}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
