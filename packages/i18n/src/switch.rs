use crate::catalog::translate;
use crate::config::I18nConfig;
use crate::cookie::{self, CookieWrite};
use crate::page::{CookieJar, TaggedPage};
use crate::Locale;
use chrono::{DateTime, Utc};

/// Locale stored in the cookie, or the configured default when the cookie is
/// missing or holds a code we don't know.
pub fn current_locale(cookies: &impl CookieJar, config: &I18nConfig) -> Locale {
    let header = cookies.cookie_header();
    match cookie::read(&header, &config.cookie_name) {
        Some(code) => Locale::from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, "ignoring unknown locale cookie");
            config.default_locale
        }),
        None => config.default_locale,
    }
}

/// Rewrite every tagged element with its string for `locale`.
pub fn apply_translations(page: &impl TaggedPage, config: &I18nConfig, locale: Locale) -> usize {
    let touched = page.rewrite_tagged(&config.key_attribute, &mut |key: &str| {
        translate(key, locale).to_string()
    });
    tracing::debug!(%locale, touched, "applied translations");
    touched
}

/// Persist `locale` in the cookie and re-render the tagged elements in place.
pub fn switch_language(
    cookies: &impl CookieJar,
    page: &impl TaggedPage,
    config: &I18nConfig,
    locale: Locale,
) {
    switch_language_at(cookies, page, config, locale, Utc::now());
}

pub fn switch_language_at(
    cookies: &impl CookieJar,
    page: &impl TaggedPage,
    config: &I18nConfig,
    locale: Locale,
    now: DateTime<Utc>,
) {
    let write = CookieWrite::new(&config.cookie_name, locale.code(), config.cookie_days, now);
    cookies.set_cookie(&write.to_header());
    tracing::info!(%locale, "switched language");
    apply_translations(page, config, locale);
}
