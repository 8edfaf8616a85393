use crate::Locale;

/// One selectable entry of the language menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub locale: Locale,
    pub active: bool,
}

impl MenuOption {
    pub fn code(&self) -> &'static str {
        self.locale.code()
    }

    pub fn label(&self) -> &'static str {
        self.locale.label()
    }
}

/// What the language dropdown shows for a given selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherModel {
    pub current: Locale,
    pub options: Vec<MenuOption>,
}

impl SwitcherModel {
    pub fn new(current: Locale, locales: &[Locale]) -> Self {
        let options = locales
            .iter()
            .map(|&locale| MenuOption {
                locale,
                active: locale == current,
            })
            .collect();
        Self { current, options }
    }

    /// Text on the toggle.
    pub fn label(&self) -> &'static str {
        self.current.label()
    }

    pub fn active(&self) -> Option<&MenuOption> {
        self.options.iter().find(|option| option.active)
    }
}
