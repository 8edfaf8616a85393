use crate::Locale;
use serde::{Deserialize, Serialize};

/// Knobs the host page can override through a JSON block.
///
/// Every field is optional in the JSON; missing fields keep the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Name of the cookie holding the locale code.
    pub cookie_name: String,
    /// Cookie lifetime.
    pub cookie_days: i64,
    /// Selector of the navigation list the switcher is appended to.
    pub nav_selector: String,
    /// Attribute whose value is the translation key of an element.
    pub key_attribute: String,
    pub default_locale: Locale,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            cookie_name: "flower_locale".to_string(),
            cookie_days: 365,
            nav_selector: ".navbar-nav.mr-auto".to_string(),
            key_attribute: "data-i18n".to_string(),
            default_locale: Locale::EnUs,
        }
    }
}

impl I18nConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_flower_markup() {
        let config = I18nConfig::default();
        assert_eq!(config.cookie_name, "flower_locale");
        assert_eq!(config.cookie_days, 365);
        assert_eq!(config.nav_selector, ".navbar-nav.mr-auto");
        assert_eq!(config.key_attribute, "data-i18n");
        assert_eq!(config.default_locale, Locale::EnUs);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = I18nConfig::from_json(r#"{ "cookie_days": 30, "default_locale": "zh_CN" }"#)
            .unwrap();
        assert_eq!(config.cookie_days, 30);
        assert_eq!(config.default_locale, Locale::ZhCn);
        assert_eq!(config.cookie_name, "flower_locale");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(I18nConfig::from_json("{}").unwrap(), I18nConfig::default());
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(I18nConfig::from_json(r#"{ "default_locale": "de_DE" }"#).is_err());
    }
}
