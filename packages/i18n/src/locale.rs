use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "zh_CN")]
    ZhCn,
}

impl Locale {
    /// Every locale the switcher offers, in menu order.
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::ZhCn];

    pub fn code(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::ZhCn => "zh_CN",
        }
    }

    /// Name of the language written in that language.
    pub fn label(self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::ZhCn => "中文",
        }
    }

    /// Exact match on the cookie code. Anything else is unknown.
    pub fn from_code(code: &str) -> Option<Self> {
        Locale::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale code {:?}", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}
