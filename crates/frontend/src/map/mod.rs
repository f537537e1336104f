//! Leaflet-backed map of all geocoded organizations.
//!
//! The Leaflet library is loaded at runtime from a CDN ([`loader`]), bound
//! through thin wasm-bindgen externs ([`leaflet`]) and driven declaratively
//! by [`widget::NgoMap`]: pages hand it a signal of map records and the
//! widget reconciles markers, never touching Leaflet objects directly.

pub mod leaflet;
pub mod loader;
pub mod popup;
pub mod style;
pub mod widget;

pub use widget::NgoMap;
