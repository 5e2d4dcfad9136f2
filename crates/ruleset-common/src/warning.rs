//! Parser warnings routed through [`tracing`].
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Nothing in the rule-set core fails on malformed input; it degrades instead,
//! and this module is how that degradation is reported.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about degraded input (emits once per unique message)
///
/// The event is logged at `WARN` level with `component` as a structured field,
/// so subscribers can filter on it.
///
/// # Example
/// ```
/// use ruleset_common::warning::warn_once;
///
/// warn_once("CSS", "margin: expected 1 to 4 box values, found 5");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_emit {
        tracing::warn!(component, "{message}");
    }
}

/// Whether `message` has already been emitted for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before processing a new stylesheet)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::MutexGuard;

    use super::*;

    /// `clear_warnings` empties the shared set, so tests touching it run one at a time.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_warn_once_records_message() {
        let _serial = serial();
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt().with_test_writer().finish(),
        );

        assert!(!has_warned("test-record", "first message"));
        warn_once("test-record", "first message");
        assert!(has_warned("test-record", "first message"));
        // Same text under another component is a different warning.
        assert!(!has_warned("test-other", "first message"));
    }

    #[test]
    fn test_warn_once_is_idempotent() {
        let _serial = serial();
        warn_once("test-idem", "repeated");
        warn_once("test-idem", "repeated");
        assert!(has_warned("test-idem", "repeated"));
    }

    #[test]
    fn test_clear_warnings_allows_reemission() {
        let _serial = serial();
        warn_once("test-clear", "stale");
        assert!(has_warned("test-clear", "stale"));

        clear_warnings();
        assert!(!has_warned("test-clear", "stale"));

        warn_once("test-clear", "stale");
        assert!(has_warned("test-clear", "stale"));
    }
}
