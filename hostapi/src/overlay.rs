//! Per-invocation state overlay.
//!
//! The overlay buffers writes during one invocation and makes them
//! visible to later reads within the same invocation. It also records
//! the version of every committed key the invocation looked at, so the
//! store can reject the commit if any of them changed in between.

use std::collections::BTreeMap;

use crate::state_store::Version;

/// Keys read from committed state and the version observed (`None` = absent).
pub type ReadSet = BTreeMap<String, Option<Version>>;

/// Buffered writes, applied in key order on commit.
pub type WriteSet = BTreeMap<String, Vec<u8>>;

/// Read set and write buffer for one invocation.
#[derive(Debug, Clone, Default)]
pub struct TxOverlay {
    reads: ReadSet,
    writes: WriteSet,
    /// Total bytes written (keys + values).
    total_write_bytes: u64,
}

impl TxOverlay {
    /// Create a new empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffered value for a key, if this invocation wrote it.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.writes.get(key).map(Vec::as_slice)
    }

    /// Record the committed version observed for `key`.
    ///
    /// Only the first observation counts: a later read of the same key
    /// must not hide a change that happened after the first one.
    pub fn record_read(&mut self, key: &str, version: Option<Version>) {
        if !self.reads.contains_key(key) {
            self.reads.insert(key.to_string(), version);
        }
    }

    /// Buffer a write. Replaces any earlier write to the same key.
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        if let Some(prev) = self.writes.get(&key) {
            let prev_bytes = (key.len() + prev.len()) as u64;
            self.total_write_bytes = self.total_write_bytes.saturating_sub(prev_bytes);
        }
        self.total_write_bytes = self
            .total_write_bytes
            .saturating_add((key.len() + value.len()) as u64);
        self.writes.insert(key, value);
    }

    pub fn reads(&self) -> &ReadSet {
        &self.reads
    }

    pub fn writes(&self) -> &WriteSet {
        &self.writes
    }

    /// Returns true if nothing has been written.
    pub fn is_read_only(&self) -> bool {
        self.writes.is_empty()
    }

    /// Returns the total bytes written (keys + values).
    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }

    /// Drop everything buffered. Used when an invocation fails.
    pub fn clear(&mut self) {
        self.reads.clear();
        self.writes.clear();
        self.total_write_bytes = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut overlay = TxOverlay::new();
        overlay.set("key1".into(), b"value1".to_vec());
        assert_eq!(overlay.get("key1"), Some(&b"value1"[..]));
        assert_eq!(overlay.get("key2"), None);
        assert!(!overlay.is_read_only());
    }

    #[test]
    fn test_first_read_wins() {
        let mut overlay = TxOverlay::new();
        overlay.record_read("k", None);
        overlay.record_read("k", Some(4));
        assert_eq!(overlay.reads().get("k"), Some(&None));
    }

    #[test]
    fn test_write_bytes_replace() {
        let mut overlay = TxOverlay::new();
        overlay.set("ab".into(), vec![0; 10]);
        assert_eq!(overlay.total_write_bytes(), 12);
        overlay.set("ab".into(), vec![0; 3]);
        assert_eq!(overlay.total_write_bytes(), 5);
    }

    #[test]
    fn test_clear() {
        let mut overlay = TxOverlay::new();
        overlay.record_read("a", None);
        overlay.set("a".into(), b"1".to_vec());
        overlay.clear();
        assert!(overlay.reads().is_empty());
        assert!(overlay.is_read_only());
        assert_eq!(overlay.total_write_bytes(), 0);
    }
}
