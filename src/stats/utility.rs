use serde::Serialize;
use std::collections::BTreeMap;

/// Most frequent value of a field and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode<K> {
    pub value: K,
    pub count: usize,
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frequency<K> {
    pub value: K,
    pub count: usize,
}

fn tally<K: Ord, I: IntoIterator<Item = K>>(values: I) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Returns the most frequent value, or `None` for empty input.
///
/// Ties go to the smallest value under `K`'s ordering, so the result does not
/// depend on input order.
pub fn mode<K: Ord, I: IntoIterator<Item = K>>(values: I) -> Option<Mode<K>> {
    let mut best: Option<Mode<K>> = None;
    for (value, count) in tally(values) {
        // strict `>` keeps the earlier (smaller) key on ties
        if best.as_ref().is_none_or(|b| count > b.count) {
            best = Some(Mode { value, count });
        }
    }
    best
}

/// Counts every distinct value, most frequent first, ties in ascending key order.
pub fn frequencies<K: Ord, I: IntoIterator<Item = K>>(values: I) -> Vec<Frequency<K>> {
    let mut table: Vec<_> = tally(values)
        .into_iter()
        .map(|(value, count)| Frequency { value, count })
        .collect();
    // stable sort preserves the BTreeMap key order within equal counts
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// Number of distinct values.
pub fn distinct<K: Ord, I: IntoIterator<Item = K>>(values: I) -> usize {
    tally(values).len()
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
