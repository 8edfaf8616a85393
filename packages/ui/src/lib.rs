//! Dioxus side of the Flower language switcher.

mod host;
pub use host::HostPage;

mod locale;
pub use locale::{use_locale, I18nProvider, LocaleHandle};

mod switcher;
pub use switcher::{LanguageDropdown, LanguageSwitcher};

mod export;
pub use export::{export_script, GlobalExport};
