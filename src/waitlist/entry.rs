use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Source tag recorded for sign-ups coming from the tools page.
pub const TOOLS_PAGE_SOURCE: &str = "tools-page";

/// One waitlist record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    /// Normalized address.
    pub email: String,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
    /// Where the sign-up came from.
    pub source: String,
}

impl WaitlistEntry {
    /// Entry created at `now` from the tools page.
    pub fn new(email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            created_at: now,
            source: TOOLS_PAGE_SOURCE.to_string(),
        }
    }

    /// Admin table timestamp (`dd/mm/yyyy HH:MM:SS`).
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%d/%m/%Y %H:%M:%S").to_string()
    }
}

/// Trim and lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `local@domain.tld`: three non-empty runs without whitespace or `@`, the last two split by
/// a dot.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

// `\s` plus U+FEFF, which browsers treat as whitespace but Unicode does not.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

#[cfg(test)]
#[path = "../../tests/unit/waitlist/entry.rs"]
mod tests;
