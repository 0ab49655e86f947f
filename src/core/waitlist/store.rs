use std::cell::RefCell;
use std::collections::HashMap;

use super::record::SubmissionRecord;

/// Key set to `"true"` after a successful sign-up
pub const JOINED_KEY: &str = "waitlistJoined";
/// Key holding the ISO timestamp of the last successful sign-up
pub const JOINED_AT_KEY: &str = "waitlistJoinedAt";
/// Key holding a JSON array of every record submitted from this browser
pub const SUBMISSIONS_KEY: &str = "waitlistData";

/// Best-effort string key/value storage (browser `localStorage` or memory)
///
/// Writes may silently fail: nothing here ever gates a submission.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store a value; returns `false` when the backend refused the write
    fn set_item(&self, key: &str, value: &str) -> bool;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        (**self).set_item(key, value)
    }
}

/// In-memory store, used in tests and when `localStorage` is unavailable
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> bool {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }
}

/// Record a successful sign-up: joined flag, timestamp and cached copy
pub fn record_success<S: KeyValueStore + ?Sized>(store: &S, record: &SubmissionRecord) {
    store.set_item(JOINED_KEY, "true");
    store.set_item(JOINED_AT_KEY, &record.timestamp);
    cache_submission(store, record);
}

/// Append a record to the cached submission list
///
/// An unreadable cache is replaced rather than reported.
pub fn cache_submission<S: KeyValueStore + ?Sized>(store: &S, record: &SubmissionRecord) {
    let mut cached = cached_submissions(store);
    cached.push(record.clone());

    if let Ok(json) = serde_json::to_string(&cached) {
        store.set_item(SUBMISSIONS_KEY, &json);
    }
}

/// Records cached by earlier sign-ups from this browser
pub fn cached_submissions<S: KeyValueStore + ?Sized>(store: &S) -> Vec<SubmissionRecord> {
    store
        .get_item(SUBMISSIONS_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Whether this browser already joined the waitlist (advisory only)
pub fn has_joined<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store.get_item(JOINED_KEY).as_deref() == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::waitlist::WaitlistDraft;
    use chrono::{TimeZone, Utc};

    fn record(email: &str) -> SubmissionRecord {
        WaitlistDraft {
            full_name: "Test".to_string(),
            email: email.to_string(),
            ..Default::default()
        }
        .into_record(Utc.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap())
    }

    #[test]
    fn test_record_success_sets_flags() {
        let store = MemoryStore::new();
        assert!(!has_joined(&store));

        record_success(&store, &record("a@b.co"));

        assert!(has_joined(&store));
        assert_eq!(
            store.get_item(JOINED_AT_KEY).as_deref(),
            Some("2025-02-03T04:05:06.000Z")
        );
        assert_eq!(cached_submissions(&store).len(), 1);
    }

    #[test]
    fn test_cache_accumulates() {
        let store = MemoryStore::new();
        cache_submission(&store, &record("one@example.com"));
        cache_submission(&store, &record("two@example.com"));

        let cached = cached_submissions(&store);
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].email, "one@example.com");
        assert_eq!(cached[1].email, "two@example.com");
    }

    #[test]
    fn test_corrupt_cache_is_replaced() {
        let store = MemoryStore::new();
        store.set_item(SUBMISSIONS_KEY, "{not json");

        cache_submission(&store, &record("a@b.co"));

        let cached = cached_submissions(&store);
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].email, "a@b.co");
    }

    #[test]
    fn test_has_joined_requires_true() {
        let store = MemoryStore::new();
        store.set_item(JOINED_KEY, "yes");
        assert!(!has_joined(&store));
        store.set_item(JOINED_KEY, "true");
        assert!(has_joined(&store));
    }

    #[test]
    fn test_store_through_reference() {
        let store = MemoryStore::new();
        let by_ref = &store;
        assert!(by_ref.set_item("k", "v"));
        assert_eq!(store.get_item("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
