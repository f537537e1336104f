pub mod api;
pub mod components;
pub mod date_utils;
pub mod fetch_seq;
pub mod icons;
