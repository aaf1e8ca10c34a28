//! Bounded, newest-first activity log.

use std::collections::VecDeque;

use serde::{Serialize, Serializer};

/// Player-facing activity log.
///
/// Entries are kept most-recent-first. Once more than `cap` entries exist the
/// oldest are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<String>,
    cap: usize,
}

impl ActivityLog {
    /// An empty log holding at most `cap` entries.
    pub const fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap,
        }
    }

    /// A log seeded with `entries`, given newest first.
    pub fn with_entries<I, S>(cap: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: VecDeque<String> = entries.into_iter().map(Into::into).collect();
        entries.truncate(cap);
        Self { entries, cap }
    }

    /// Record a new entry as the most recent.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        self.entries.truncate(self.cap);
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub const fn cap(&self) -> usize {
        self.cap
    }
}

impl Serialize for ActivityLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_comes_first() {
        let mut log = ActivityLog::new(3);
        log.push("a");
        log.push("b");
        assert_eq!(log.latest(), Some("b"));
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn oldest_entries_drop_past_cap() {
        let mut log = ActivityLog::with_entries(3, ["seed"]);
        for i in 0..10 {
            log.push(format!("entry {i}"));
            assert!(log.len() <= 3);
        }
        assert_eq!(
            log.entries().collect::<Vec<_>>(),
            vec!["entry 9", "entry 8", "entry 7"]
        );
    }

    #[test]
    fn seeding_respects_cap() {
        let log = ActivityLog::with_entries(1, ["new", "old"]);
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["new"]);
        assert_eq!(log.cap(), 1);
    }

    #[test]
    fn serializes_as_a_list() {
        let log = ActivityLog::with_entries(8, ["b", "a"]);
        let json = serde_json::to_string(&log).ok();
        assert_eq!(json.as_deref(), Some(r#"["b","a"]"#));
    }
}
