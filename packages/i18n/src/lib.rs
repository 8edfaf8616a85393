//! Locale state, the translation catalog and the switcher operations for the
//! Flower dashboard. Nothing here touches the DOM directly; the page is reached
//! through the traits in [`page`].

mod locale;
pub use locale::{Locale, UnknownLocale};

pub mod catalog;
pub use catalog::{translate, translate_code};

mod config;
pub use config::I18nConfig;

pub mod cookie;

mod dropdown;
pub use dropdown::{MenuOption, SwitcherModel};

pub mod page;
pub use page::{CookieJar, TaggedPage};

mod switch;
pub use switch::{apply_translations, current_locale, switch_language, switch_language_at};
