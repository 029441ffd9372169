//! Frequency tables with deterministic tie-breaks
//!
//! Replaces the reference implementation's dataframe `mode`/`value_counts`
//! with an explicit value-to-count table. Insertion order is tracked so that
//! ties in `top` resolve to first-seen input order; `mode_min` resolves mode
//! ties to the smallest value.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Default)]
pub(crate) struct Counter<T: Eq + Hash + Clone> {
    counts: HashMap<T, u64>,
    order: Vec<T>,
}

impl<T: Eq + Hash + Clone> Counter<T> {
    pub(crate) fn new() -> Self {
        Counter {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub(crate) fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut counter = Counter::new();
        for value in values {
            counter.add(value);
        }
        counter
    }

    pub(crate) fn add(&mut self, value: T) {
        use std::collections::hash_map::Entry;
        match self.counts.entry(value) {
            Entry::Occupied(mut e) => *e.get_mut() += 1,
            Entry::Vacant(e) => {
                self.order.push(e.key().clone());
                e.insert(1);
            }
        }
    }

    /// All (value, count) pairs sorted descending by count. The sort is
    /// stable over insertion order, so ties keep first-seen input order.
    pub(crate) fn sorted(&self) -> Vec<(T, u64)> {
        let mut pairs: Vec<(T, u64)> = self
            .order
            .iter()
            .map(|v| (v.clone(), self.counts[v]))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }

    /// Top `n` entries of `sorted`
    pub(crate) fn top(&self, n: usize) -> Vec<(T, u64)> {
        let mut pairs = self.sorted();
        pairs.truncate(n);
        pairs
    }

    /// Most frequent value, ties broken by first-seen order
    pub(crate) fn mode_first(&self) -> Option<&T> {
        let mut best: Option<(&T, u64)> = None;
        for value in &self.order {
            let count = self.counts[value];
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((value, count));
            }
        }
        best.map(|(v, _)| v)
    }
}

impl<T: Eq + Hash + Clone + Ord> Counter<T> {
    /// Most frequent value, ties broken by the smallest value. Matches the
    /// reference behavior for ordered keys (months, hours, birth years).
    pub(crate) fn mode_min(&self) -> Option<&T> {
        let mut best: Option<(&T, u64)> = None;
        for value in &self.order {
            let count = self.counts[value];
            let better = match best {
                None => true,
                Some((v, c)) => count > c || (count == c && value < v),
            };
            if better {
                best = Some((value, count));
            }
        }
        best.map(|(v, _)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counter_has_no_mode() {
        let c: Counter<u32> = Counter::new();
        assert!(c.mode_first().is_none());
        assert!(c.mode_min().is_none());
        assert!(c.top(5).is_empty());
    }

    #[test]
    fn mode_first_picks_most_frequent() {
        let c = Counter::from_iter(["a", "b", "b", "c", "b"]);
        assert_eq!(c.mode_first(), Some(&"b"));
    }

    #[test]
    fn mode_first_breaks_ties_by_first_seen() {
        let c = Counter::from_iter(["z", "a", "z", "a"]);
        assert_eq!(c.mode_first(), Some(&"z"));
    }

    #[test]
    fn mode_min_breaks_ties_by_smallest_value() {
        // 9 and 2 both occur twice; smallest wins regardless of order
        let c = Counter::from_iter([9u32, 2, 9, 2]);
        assert_eq!(c.mode_min(), Some(&2));
    }

    #[test]
    fn mode_min_prefers_higher_count_over_smaller_value() {
        let c = Counter::from_iter([1u32, 5, 5]);
        assert_eq!(c.mode_min(), Some(&5));
    }

    #[test]
    fn top_sorts_descending_with_stable_ties() {
        let c = Counter::from_iter(["x", "y", "y", "z", "w", "z"]);
        // y and z have 2 each (y first seen), x and w have 1 each (x first)
        assert_eq!(
            c.top(4),
            vec![("y", 2), ("z", 2), ("x", 1), ("w", 1)]
        );
    }

    #[test]
    fn top_truncates_to_n() {
        let c = Counter::from_iter(1u32..=10);
        assert_eq!(c.top(5).len(), 5);
    }

    #[test]
    fn counts_accumulate() {
        let mut c = Counter::new();
        for _ in 0..3 {
            c.add("station");
        }
        assert_eq!(c.sorted(), vec![("station", 3)]);
    }
}
