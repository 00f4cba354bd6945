use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::{
    foundation::error::ScrollfxResult,
    waitlist::entry::{WaitlistEntry, is_valid_email, normalize_email},
};

/// Message returned with status 400.
pub const INVALID_EMAIL_MESSAGE: &str = "invalid email";
/// Message returned with status 500; storage details stay in the logs.
pub const STORE_FAILURE_MESSAGE: &str = "could not register this email right now";

/// Persistence collaborator for waitlist records.
pub trait WaitlistSink {
    /// Append one record.
    fn add(&mut self, entry: WaitlistEntry) -> ScrollfxResult<()>;
    /// Every stored record, in any order.
    fn entries(&self) -> ScrollfxResult<Vec<WaitlistEntry>>;
}

/// In-process sink.
#[derive(Clone, Debug, Default)]
pub struct MemoryWaitlist {
    entries: Vec<WaitlistEntry>,
}

impl MemoryWaitlist {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl WaitlistSink for MemoryWaitlist {
    fn add(&mut self, entry: WaitlistEntry) -> ScrollfxResult<()> {
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> ScrollfxResult<Vec<WaitlistEntry>> {
        Ok(self.entries.clone())
    }
}

/// HTTP-shaped result of a submission.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WaitlistResponse {
    /// Status code.
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl WaitlistResponse {
    fn ok() -> Self {
        Self {
            status: 200,
            body: json!({ "ok": true }),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

/// Handle a `{ "email": ... }` submission.
///
/// Missing or `null` emails count as empty; other scalars are stringified. Nothing is written
/// on a 400, and no retry is attempted on a 500.
pub fn submit(sink: &mut dyn WaitlistSink, body: &Value, now: DateTime<Utc>) -> WaitlistResponse {
    let raw = match body.get("email") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    let email = normalize_email(&raw);
    if !is_valid_email(&email) {
        tracing::debug!("waitlist: rejected invalid email");
        return WaitlistResponse::error(400, INVALID_EMAIL_MESSAGE);
    }

    match sink.add(WaitlistEntry::new(email, now)) {
        Ok(()) => WaitlistResponse::ok(),
        Err(e) => {
            tracing::error!(error = %e, "waitlist: store failed");
            WaitlistResponse::error(500, STORE_FAILURE_MESSAGE)
        }
    }
}

/// Handle a raw request body; malformed JSON is treated as an invalid email.
pub fn submit_json(sink: &mut dyn WaitlistSink, body: &str, now: DateTime<Utc>) -> WaitlistResponse {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => submit(sink, &value, now),
        Err(e) => {
            tracing::debug!(error = %e, "waitlist: unparseable body");
            WaitlistResponse::error(400, INVALID_EMAIL_MESSAGE)
        }
    }
}

/// Admin listing: newest first, ties in insertion order.
pub fn list_newest_first(sink: &dyn WaitlistSink) -> ScrollfxResult<Vec<WaitlistEntry>> {
    let mut entries = sink.entries()?;
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(entries)
}

#[cfg(test)]
#[path = "../../tests/unit/waitlist/store.rs"]
mod tests;
