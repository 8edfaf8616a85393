use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use i18n::{I18nConfig, Locale};
use std::collections::BTreeMap;

/// Installs `window.FlowerI18n` for other scripts on the page.
///
/// `switchLanguage` writes the cookie right away, so a `getCurrentLocale`
/// call on the next line already sees the new code, then forwards to Rust
/// over the eval channel to go through the same path as a click in the menu.
/// `getCurrentLocale` and `translate` answer from a copy of the catalog.
#[component]
pub fn GlobalExport() -> Element {
    let handle = crate::use_locale();

    use_future(move || async move {
        let mut handle = handle;
        let mut channel = document::eval(&export_script(&handle.config()));
        while let Ok(code) = channel.recv::<String>().await {
            match Locale::from_code(&code) {
                Some(locale) => handle.switch(locale),
                None => warn!(%code, "FlowerI18n.switchLanguage called with an unknown locale"),
            }
        }
        debug!("FlowerI18n channel closed");
    });

    rsx! {}
}

/// Script run once through `document::eval`.
pub fn export_script(config: &I18nConfig) -> String {
    let catalog: BTreeMap<&str, BTreeMap<&str, &str>> = Locale::ALL
        .into_iter()
        .map(|locale| (locale.code(), i18n::catalog::entries(locale)))
        .collect();
    let catalog = serde_json::to_string(&catalog).unwrap_or_else(|_| "{}".to_string());
    let cookie_name =
        serde_json::to_string(&config.cookie_name).unwrap_or_else(|_| r#""flower_locale""#.to_string());
    let fallback = serde_json::to_string(&config.default_locale)
        .unwrap_or_else(|_| r#""en_US""#.to_string());
    let cookie_days = config.cookie_days;
    let default_days = i18n::cookie::DEFAULT_DAYS;

    format!(
        r#"
        const catalog = {catalog};
        const cookieName = {cookie_name};
        const fallback = {fallback};
        const known = (table, key) => Object.prototype.hasOwnProperty.call(table, key);
        function readLocale() {{
          const parts = `; ${{document.cookie}}`.split(`; ${{cookieName}}=`);
          const code = parts.length === 2 ? parts.pop().split(";").shift() : null;
          return code && known(catalog, code) ? code : fallback;
        }}
        function writeLocale(code) {{
          let expires = new Date(Date.now() + {cookie_days} * 864e5);
          if (isNaN(expires.getTime())) {{
            expires = new Date(Date.now() + {default_days} * 864e5);
          }}
          document.cookie = `${{cookieName}}=${{code}};expires=${{expires.toUTCString()}};path=/`;
        }}
        window.FlowerI18n = {{
          switchLanguage(locale) {{
            const code = String(locale);
            if (known(catalog, code)) {{
              writeLocale(code);
            }}
            dioxus.send(code);
          }},
          getCurrentLocale() {{ return readLocale(); }},
          translate(key, locale) {{
            const code = locale || readLocale();
            if (!known(catalog, code)) {{
              return key;
            }}
            const table = catalog[code];
            return known(table, key) ? table[key] : key;
          }},
        }};
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_exports_the_three_functions() {
        let script = export_script(&I18nConfig::default());
        assert!(script.contains("window.FlowerI18n"));
        for name in ["switchLanguage", "getCurrentLocale", "translate"] {
            assert!(script.contains(&format!("{name}(")), "{name} missing");
        }
        assert!(script.contains(r#"const cookieName = "flower_locale";"#));
        assert!(script.contains(r#"const fallback = "en_US";"#));
    }

    #[test]
    fn script_embeds_both_locales() {
        let script = export_script(&I18nConfig::default());
        assert!(script.contains(r#""zh_CN":{"#));
        assert!(script.contains(r#""nav.workers":"工作节点""#));
        assert!(script.contains(r#""nav.workers":"Workers""#));
    }

    #[test]
    fn configured_cookie_name_is_quoted() {
        let config = I18nConfig {
            cookie_name: "lang\"x".to_string(),
            ..I18nConfig::default()
        };
        assert!(export_script(&config).contains(r#"const cookieName = "lang\"x";"#));
    }

    #[test]
    fn switch_writes_the_cookie_before_forwarding() {
        let script = export_script(&I18nConfig {
            cookie_days: 30,
            ..I18nConfig::default()
        });
        let switch = &script[script.find("switchLanguage(locale)").expect("switchLanguage")..];
        let write = switch.find("writeLocale(code)").expect("cookie written");
        let send = switch.find("dioxus.send(code)").expect("forwarded");
        assert!(write < send);
        assert!(switch[..write].contains("if (known(catalog, code))"));
        assert!(script.contains("Date.now() + 30 * 864e5"));
        assert!(script.contains(";expires=${expires.toUTCString()};path=/"));
    }

    #[test]
    fn lookups_ignore_inherited_properties() {
        let script = export_script(&I18nConfig::default());
        let translate = &script[script.find("translate(key, locale)").expect("translate")..];
        assert!(translate.contains("if (!known(catalog, code))"));
        assert!(translate.contains("known(table, key) ? table[key] : key"));
        assert!(!script.contains("catalog[locale"));
        assert!(script.contains("Object.prototype.hasOwnProperty.call(table, key)"));
    }
}
