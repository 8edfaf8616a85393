//! Finding a place in Flower's markup for the switcher.

use crate::{Placement, CONFIG_ID, MOUNT_ID};
use dioxus::logger::tracing::{debug, warn};
use i18n::I18nConfig;
use web_sys::wasm_bindgen::closure::Closure;
use web_sys::wasm_bindgen::JsCast;
use web_sys::Document;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Run `start` now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn when_ready(start: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() != "loading" {
        start();
        return;
    }

    let callback = Closure::once_into_js(start);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .is_err()
    {
        warn!("could not wait for DOMContentLoaded");
    }
}

/// Overrides from `<script type="application/json" id="flower-i18n-config">`.
pub fn read_config(document: &Document) -> I18nConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ID)
        .and_then(|element| element.text_content())
    else {
        return I18nConfig::default();
    };

    match I18nConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "ignoring malformed #{CONFIG_ID} block");
            I18nConfig::default()
        }
    }
}

/// Create the element Dioxus renders into.
///
/// Without a navigation container the switcher is skipped and only the
/// `FlowerI18n` export is mounted, in a hidden node at the end of `<body>`.
pub fn insert_mount_point(document: &Document, config: &I18nConfig) -> Option<Placement> {
    if document.get_element_by_id(MOUNT_ID).is_some() {
        debug!("switcher already mounted");
        return None;
    }

    match document.query_selector(&config.nav_selector).ok().flatten() {
        Some(nav) => {
            let item = document.create_element("li").ok()?;
            item.set_id(MOUNT_ID);
            item.set_class_name("nav-item dropdown");
            nav.append_child(&item).ok()?;
            Some(Placement::Navbar)
        }
        None => {
            debug!(selector = %config.nav_selector, "navigation container not found");
            let holder = document.create_element("div").ok()?;
            holder.set_id(MOUNT_ID);
            holder.set_attribute("hidden", "").ok()?;
            document.body()?.append_child(&holder).ok()?;
            Some(Placement::Detached)
        }
    }
}
