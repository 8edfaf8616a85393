use dioxus::prelude::*;
use i18n::{Locale, SwitcherModel};

/// Language menu in the Flower navbar.
///
/// Mounted inside the `li.nav-item.dropdown` the web entry appends to the
/// navigation list, so it renders the toggle and the menu directly.
#[component]
pub fn LanguageSwitcher() -> Element {
    let mut handle = crate::use_locale();
    let mut open = use_signal(|| false);
    let model = SwitcherModel::new(handle.current(), &Locale::ALL);

    rsx! {
        LanguageDropdown {
            model,
            open: open(),
            on_toggle: move |_| {
                let next = !open();
                open.set(next);
            },
            on_select: move |locale: Locale| {
                open.set(false);
                handle.switch(locale);
            },
        }
    }
}

/// Stateless rendering of a [`SwitcherModel`] with Bootstrap dropdown classes.
#[component]
pub fn LanguageDropdown(
    model: SwitcherModel,
    open: bool,
    on_toggle: EventHandler<()>,
    on_select: EventHandler<Locale>,
) -> Element {
    let toggle_class = if open {
        "nav-link dropdown-toggle text-dark show"
    } else {
        "nav-link dropdown-toggle text-dark"
    };
    let menu_class = if open {
        "dropdown-menu show"
    } else {
        "dropdown-menu"
    };
    let label = model.label();

    rsx! {
        a {
            class: toggle_class,
            href: "#",
            id: "languageDropdown",
            role: "button",
            "aria-expanded": if open { "true" } else { "false" },
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_toggle.call(());
            },
            TranslateIcon {}
            " {label}"
        }
        ul { class: menu_class, "aria-labelledby": "languageDropdown",
            for option in model.options.iter().copied() {
                li { key: "{option.locale}",
                    a {
                        class: if option.active { "dropdown-item active" } else { "dropdown-item" },
                        href: "#",
                        "data-locale": option.code(),
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_select.call(option.locale);
                        },
                        {option.label()}
                    }
                }
            }
        }
    }
}

#[component]
fn TranslateIcon() -> Element {
    rsx! {
        svg {
            "xmlns": "http://www.w3.org/2000/svg",
            "width": "16",
            "height": "16",
            "fill": "currentColor",
            class: "bi bi-translate",
            "viewBox": "0 0 16 16",
            path { "d": "M4.545 6.714 4.11 8H3l1.862-5h1.284L8 8H6.833l-.435-1.286H4.545zm1.634-.736L5.5 3.956h-.049l-.679 2.022H6.18z" }
            path { "d": "M0 2a2 2 0 0 1 2-2h7a2 2 0 0 1 2 2v3h3a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-3H2a2 2 0 0 1-2-2V2zm2-1a1 1 0 0 0-1 1v7a1 1 0 0 0 1 1h7a1 1 0 0 0 1-1V2a1 1 0 0 0-1-1H2zm7.138 9.995c.193.301.402.583.63.846-.748.575-1.673 1.001-2.768 1.292.178.217.451.635.555.867 1.125-.359 2.08-.844 2.886-1.494.777.665 1.739 1.165 2.93 1.472.133-.254.414-.673.629-.89-1.125-.253-2.057-.694-2.82-1.284.681-.747 1.222-1.651 1.621-2.757H14V8h-3v1.047h.765c-.318.844-.74 1.546-1.272 2.13a6.066 6.066 0 0 1-.415-.492 1.988 1.988 0 0 1-.94.31z" }
        }
    }
}
