//! Marker popup content.
//!
//! Popups are built through DOM APIs with `set_text_content`, so
//! organization names and categories coming from the backend can never be
//! interpreted as markup.

use contracts::domain::map::MapNgo;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::style::marker_style;

const MAX_POPUP_CATEGORIES: usize = 3;

pub fn build_popup(document: &Document, ngo: &MapNgo) -> Result<Element, JsValue> {
    let root = document.create_element("div")?;
    root.set_class_name("map-popup");

    let title = document.create_element("strong")?;
    title.set_text_content(Some(&ngo.name));
    root.append_child(&title)?;

    let status = document.create_element("span")?;
    status.set_class_name("map-popup__status");
    status.set_text_content(Some(marker_style(ngo.verified, ngo.blacklisted).label));
    root.append_child(&status)?;

    if let Some(location) = ngo.location_line() {
        let line = document.create_element("div")?;
        line.set_class_name("map-popup__location");
        line.set_text_content(Some(&location));
        root.append_child(&line)?;
    }

    if !ngo.categories.is_empty() {
        let tags = document.create_element("div")?;
        tags.set_class_name("map-popup__tags");
        for category in ngo.categories.iter().take(MAX_POPUP_CATEGORIES) {
            let tag = document.create_element("span")?;
            tag.set_class_name("map-popup__tag");
            tag.set_text_content(Some(category));
            tags.append_child(&tag)?;
        }
        root.append_child(&tags)?;
    }

    let link = document.create_element("a")?;
    link.set_attribute("href", &format!("/ngos/{}", ngo.id))?;
    link.set_text_content(Some("View details"));
    root.append_child(&link)?;

    Ok(root)
}
