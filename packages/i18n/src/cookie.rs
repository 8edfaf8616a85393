//! `document.cookie` parsing and `Set-Cookie`-style formatting.

use chrono::{DateTime, Duration, Utc};

/// Lifetime used when the configured one does not fit in a date.
pub const DEFAULT_DAYS: i64 = 365;

/// Value of the first cookie called `name` in a `document.cookie` string.
pub fn read<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim_start().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// A cookie assignment as written to `document.cookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieWrite {
    pub name: String,
    pub value: String,
    pub expires: DateTime<Utc>,
    pub path: &'static str,
}

impl CookieWrite {
    /// Site-wide cookie expiring `days` after `now`.
    ///
    /// A `days` that overflows the calendar falls back to [`DEFAULT_DAYS`].
    pub fn new(name: &str, value: &str, days: i64, now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            expires: expiry(now, days),
            path: "/",
        }
    }

    /// `name=value;expires=<GMT date>;path=/`
    pub fn to_header(&self) -> String {
        format!(
            "{}={};expires={};path={}",
            self.name,
            self.value,
            self.expires.format("%a, %d %b %Y %H:%M:%S GMT"),
            self.path
        )
    }
}

fn expiry(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    if let Some(expires) = Duration::try_days(days).and_then(|span| now.checked_add_signed(span)) {
        return expires;
    }
    tracing::warn!(days, "cookie lifetime out of range, using {DEFAULT_DAYS} days");
    Duration::try_days(DEFAULT_DAYS)
        .and_then(|span| now.checked_add_signed(span))
        .unwrap_or(now)
}
