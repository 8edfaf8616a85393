//! Seams between the switcher logic and the page it runs in.
//!
//! The browser build implements these over `web_sys::Document`; tests use the
//! in-memory versions in [`memory`].

/// The page's cookie store.
pub trait CookieJar {
    /// Everything `document.cookie` would return.
    fn cookie_header(&self) -> String;

    /// Equivalent of assigning to `document.cookie`.
    fn set_cookie(&self, assignment: &str);
}

/// Elements tagged with a translation key.
pub trait TaggedPage {
    /// Replace the text of every element carrying `attribute` with
    /// `render(key)`, where `key` is the attribute's value. Returns how many
    /// elements were rewritten.
    fn rewrite_tagged(&self, attribute: &str, render: &mut dyn FnMut(&str) -> String) -> usize;
}

pub mod memory {
    use super::{CookieJar, TaggedPage};
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// Cookie store that keeps name/value pairs and drops the attributes.
    #[derive(Debug, Default)]
    pub struct MemoryCookies {
        jar: RefCell<BTreeMap<String, String>>,
        writes: RefCell<Vec<String>>,
    }

    impl MemoryCookies {
        pub fn new() -> Self {
            Self::default()
        }

        /// Raw assignments in the order they were made.
        pub fn writes(&self) -> Vec<String> {
            self.writes.borrow().clone()
        }
    }

    impl CookieJar for MemoryCookies {
        fn cookie_header(&self) -> String {
            self.jar
                .borrow()
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ")
        }

        fn set_cookie(&self, assignment: &str) {
            self.writes.borrow_mut().push(assignment.to_string());
            let pair = assignment.split(';').next().unwrap_or_default();
            if let Some((name, value)) = pair.split_once('=') {
                self.jar
                    .borrow_mut()
                    .insert(name.trim().to_string(), value.to_string());
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MemoryElement {
        pub key: Option<String>,
        pub text: String,
    }

    /// Flat list of elements standing in for a document.
    #[derive(Debug, Default)]
    pub struct MemoryPage {
        elements: RefCell<Vec<MemoryElement>>,
    }

    impl MemoryPage {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add an element; `key` is the value of its translation attribute.
        pub fn push(&self, key: Option<&str>, text: &str) -> usize {
            let mut elements = self.elements.borrow_mut();
            elements.push(MemoryElement {
                key: key.map(str::to_string),
                text: text.to_string(),
            });
            elements.len() - 1
        }

        pub fn text(&self, index: usize) -> Option<String> {
            self.elements.borrow().get(index).map(|el| el.text.clone())
        }

        pub fn elements(&self) -> Vec<MemoryElement> {
            self.elements.borrow().clone()
        }
    }

    impl TaggedPage for MemoryPage {
        fn rewrite_tagged(
            &self,
            _attribute: &str,
            render: &mut dyn FnMut(&str) -> String,
        ) -> usize {
            let mut touched = 0;
            for element in self.elements.borrow_mut().iter_mut() {
                if let Some(key) = &element.key {
                    element.text = render(key.as_str());
                    touched += 1;
                }
            }
            touched
        }
    }
}
