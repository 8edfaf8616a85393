#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use dioxus::logger::tracing::{debug, Level};
use dioxus::prelude::*;
use i18n::I18nConfig;
use std::sync::OnceLock;

#[cfg(target_arch = "wasm32")]
mod mount;

/// Id of the element the app renders into.
const MOUNT_ID: &str = "flower-i18n";
/// Id of the optional JSON block overriding [`I18nConfig`].
const CONFIG_ID: &str = "flower-i18n-config";

/// Where the mount point ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Inside the navigation list: render the switcher.
    Navbar,
    /// No navigation list on this page: only install the global export.
    Detached,
}

struct Startup {
    config: I18nConfig,
    placement: Placement,
}

static STARTUP: OnceLock<Startup> = OnceLock::new();

fn main() {
    install_panic_hook();
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("startup: logger already installed: {err}");
    }

    #[cfg(target_arch = "wasm32")]
    mount::when_ready(start);

    #[cfg(not(target_arch = "wasm32"))]
    dioxus::logger::tracing::warn!("flower-i18n runs in the browser only; build it for wasm32");
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        dioxus::logger::tracing::error!("panic: {info}");
    }));
}

#[cfg(target_arch = "wasm32")]
fn start() {
    let Some(document) = mount::document() else {
        return;
    };
    let config = mount::read_config(&document);
    log_config(&config);

    let Some(placement) = mount::insert_mount_point(&document, &config) else {
        return;
    };
    if STARTUP.set(Startup { config, placement }).is_err() {
        return;
    }

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(MOUNT_ID))
        .launch(App);
}

fn log_config(config: &I18nConfig) {
    debug!(
        cookie = %config.cookie_name,
        days = config.cookie_days,
        nav = %config.nav_selector,
        attribute = %config.key_attribute,
        default = %config.default_locale,
        "startup: i18n config"
    );
}

#[component]
fn App() -> Element {
    let (config, placement) = match STARTUP.get() {
        Some(startup) => (startup.config.clone(), startup.placement),
        None => (I18nConfig::default(), Placement::Detached),
    };

    rsx! {
        ui::I18nProvider { config,
            if placement == Placement::Navbar {
                ui::LanguageSwitcher {}
            }
            ui::GlobalExport {}
        }
    }
}
