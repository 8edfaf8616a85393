use crate::HostPage;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use i18n::{I18nConfig, Locale};

/// Shared handle on the active locale.
///
/// Switching goes through here so the cookie, the tagged elements of the host
/// page and every subscribed component move together.
#[derive(Clone, Copy)]
pub struct LocaleHandle {
    locale: Signal<Locale>,
    config: Signal<I18nConfig>,
}

impl LocaleHandle {
    pub fn current(&self) -> Locale {
        (self.locale)()
    }

    pub fn config(&self) -> I18nConfig {
        self.config.read().clone()
    }

    pub fn switch(&mut self, next: Locale) {
        let page = HostPage::current();
        i18n::switch_language(&page, &page, &self.config.read(), next);
        self.locale.set(next);
    }
}

/// Reads the locale cookie once, translates the host page, and provides a
/// [`LocaleHandle`] to the tree below.
#[component]
pub fn I18nProvider(config: I18nConfig, children: Element) -> Element {
    let handle = use_hook(|| {
        let page = HostPage::current();
        let locale = i18n::current_locale(&page, &config);
        let touched = i18n::apply_translations(&page, &config, locale);
        debug!(%locale, touched, "initial translation pass");
        LocaleHandle {
            locale: Signal::new(locale),
            config: Signal::new(config.clone()),
        }
    });
    use_context_provider(|| handle);

    rsx! { {children} }
}

pub fn use_locale() -> LocaleHandle {
    if let Some(handle) = try_use_context::<LocaleHandle>() {
        return handle;
    }

    // Mis-ordered providers shouldn't take the navbar down.
    warn!("missing I18nProvider context, using a detached default locale");
    use_hook(|| LocaleHandle {
        locale: Signal::new(Locale::default()),
        config: Signal::new(I18nConfig::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[component]
    fn CurrentCode() -> Element {
        let code = use_locale().current().code();
        rsx! { span { "{code}" } }
    }

    #[test]
    fn provider_starts_on_the_default_locale() {
        fn app() -> Element {
            rsx! {
                I18nProvider { config: I18nConfig::default(), CurrentCode {} }
            }
        }
        assert!(render(app).contains(">en_US<"));
    }

    #[test]
    fn provider_honours_configured_default() {
        fn app() -> Element {
            let config = I18nConfig {
                default_locale: Locale::ZhCn,
                ..I18nConfig::default()
            };
            rsx! {
                I18nProvider { config, CurrentCode {} }
            }
        }
        assert!(render(app).contains(">zh_CN<"));
    }

    #[test]
    fn missing_provider_falls_back() {
        fn app() -> Element {
            rsx! { CurrentCode {} }
        }
        assert!(render(app).contains(">en_US<"));
    }
}
