//! The Flower page the switcher is mounted into.

#[cfg(target_arch = "wasm32")]
mod browser {
    use i18n::{CookieJar, TaggedPage};
    use web_sys::wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlDocument};

    /// Live `window.document`.
    pub struct HostPage {
        document: Option<Document>,
    }

    impl HostPage {
        pub fn current() -> Self {
            Self {
                document: web_sys::window().and_then(|window| window.document()),
            }
        }

        fn html(&self) -> Option<HtmlDocument> {
            self.document.clone()?.dyn_into::<HtmlDocument>().ok()
        }
    }

    impl CookieJar for HostPage {
        fn cookie_header(&self) -> String {
            self.html()
                .and_then(|doc| doc.cookie().ok())
                .unwrap_or_default()
        }

        fn set_cookie(&self, assignment: &str) {
            if let Some(doc) = self.html() {
                if doc.set_cookie(assignment).is_err() {
                    dioxus::logger::tracing::warn!("cookie write rejected by the browser");
                }
            }
        }
    }

    impl TaggedPage for HostPage {
        fn rewrite_tagged(
            &self,
            attribute: &str,
            render: &mut dyn FnMut(&str) -> String,
        ) -> usize {
            let Some(document) = &self.document else {
                return 0;
            };
            let Ok(nodes) = document.query_selector_all(&format!("[{attribute}]")) else {
                return 0;
            };

            let mut touched = 0;
            for index in 0..nodes.length() {
                let Some(element) = nodes
                    .item(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                if let Some(key) = element.get_attribute(attribute) {
                    element.set_text_content(Some(&render(key.as_str())));
                    touched += 1;
                }
            }
            touched
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod detached {
    use i18n::{CookieJar, TaggedPage};

    /// Outside the browser (SSR, tests) there is no page: no cookies, nothing tagged.
    pub struct HostPage;

    impl HostPage {
        pub fn current() -> Self {
            HostPage
        }
    }

    impl CookieJar for HostPage {
        fn cookie_header(&self) -> String {
            String::new()
        }

        fn set_cookie(&self, _assignment: &str) {}
    }

    impl TaggedPage for HostPage {
        fn rewrite_tagged(&self, _attribute: &str, _render: &mut dyn FnMut(&str) -> String) -> usize {
            0
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::HostPage;
#[cfg(not(target_arch = "wasm32"))]
pub use detached::HostPage;
