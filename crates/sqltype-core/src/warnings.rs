//! Deduplicated dialect warnings.
//!
//! Dialects warn when they silently drop an option they cannot render. Each
//! distinct message is logged once per [`WarningLog`]; the set is never
//! cleared. The process-wide instance from [`WarningLog::global`] lives as
//! long as the process, and tests can build their own.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, OnceLock};

/// A set of already emitted warning messages.
#[derive(Debug, Default)]
pub struct WarningLog {
    seen: Mutex<HashSet<String>>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide log.
    pub fn global() -> Arc<WarningLog> {
        static GLOBAL: OnceLock<Arc<WarningLog>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(WarningLog::new())).clone()
    }

    /// Log `text` with a reference `link` unless it was logged before.
    /// Returns whether the message was emitted.
    pub fn warn(&self, link: &str, text: &str) -> bool {
        let mut seen = self.seen.lock().unwrap_or_else(|e| e.into_inner());
        if !seen.insert(text.to_string()) {
            return false;
        }
        tracing::warn!("{text} \n>> Check: {link}");
        true
    }

    /// Whether `text` has been emitted.
    pub fn has_warned(&self, text: &str) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(text)
    }

    /// Number of distinct messages emitted.
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_each_message_is_emitted_once() {
        let log = WarningLog::new();
        assert!(log.warn("https://example.com", "first"));
        assert!(!log.warn("https://example.com/other", "first"));
        assert!(log.warn("https://example.com", "second"));
        assert_eq!(log.len(), 2);
        assert!(log.has_warned("first"));
    }

    #[test]
    fn test_concurrent_warnings_dedupe() {
        let log = Arc::new(WarningLog::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let log = Arc::clone(&log);
                thread::spawn(move || log.warn("link", "shared"))
            })
            .collect();
        let emitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|emitted| *emitted)
            .count();
        assert_eq!(emitted, 1);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(Arc::ptr_eq(&WarningLog::global(), &WarningLog::global()));
    }
}
