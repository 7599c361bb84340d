//! Insertion-ordered frequency counting.
//!
//! Rankings break count ties by first appearance, so the table keeps entries
//! in the order keys were first seen and ranks with a stable sort. Iteration
//! order never depends on hashing.

use std::collections::HashMap;

use super::models::RankedEntry;

/// Counts occurrences of string keys, remembering first-seen order.
///
/// ```
/// use chatlens::core::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
/// for word in ["cat", "dog", "dog", "cat", "emu"] {
///     table.increment(word);
/// }
///
/// let ranked: Vec<_> = table.ranked().into_iter().map(|e| (e.value, e.count)).collect();
/// // cat and dog tie at 2; cat was seen first
/// assert_eq!(
///     ranked,
///     vec![("cat".to_string(), 2), ("dog".to_string(), 2), ("emu".to_string(), 1)]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<RankedEntry>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Adds `n` occurrences of `key`.
    pub fn add(&mut self, key: &str, n: u64) {
        if let Some(&i) = self.index.get(key) {
            self.entries[i].count += n;
        } else {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push(RankedEntry::new(key, n));
        }
    }

    /// Count for `key`; `0` if never seen.
    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&i| self.entries[i].count)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter()
    }

    /// All entries, count descending, first-seen order on ties.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut ranked = self.entries.clone();
        // stable: equal counts keep insertion order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The first `n` entries of [`ranked`](Self::ranked).
    pub fn top(&self, n: usize) -> Vec<RankedEntry> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.value.as_str()).collect()
    }

    #[test]
    fn test_counts() {
        let mut table = FrequencyTable::new();
        table.extend(["a", "b", "a", "c", "a"]);
        assert_eq!(table.get("a"), 3);
        assert_eq!(table.get("b"), 1);
        assert_eq!(table.get("zzz"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let mut table = FrequencyTable::new();
        table.extend(["zebra", "apple", "mango", "apple", "zebra", "mango"]);
        assert_eq!(values(&table.ranked()), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_higher_count_overtakes() {
        let mut table = FrequencyTable::new();
        table.extend(["first", "second", "second"]);
        assert_eq!(values(&table.ranked()), vec!["second", "first"]);
    }

    #[test]
    fn test_top_truncates() {
        let mut table = FrequencyTable::new();
        table.extend(["a", "b", "c", "c"]);
        assert_eq!(values(&table.top(2)), vec!["c", "a"]);
        assert_eq!(table.top(10).len(), 3);
        assert!(table.top(0).is_empty());
    }

    #[test]
    fn test_add_many() {
        let mut table = FrequencyTable::new();
        table.add("x", 5);
        table.add("x", 2);
        assert_eq!(table.get("x"), 7);
    }

    #[test]
    fn test_iter_insertion_order() {
        let mut table = FrequencyTable::new();
        table.extend(["q", "p", "p"]);
        let order: Vec<&str> = table.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(order, vec!["q", "p"]);
    }
}
