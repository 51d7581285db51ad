//! Frequency counting
//!
//! Ties are broken by the smallest key in ascending order, so results do
//! not depend on hash iteration order.

use std::collections::BTreeMap;

/// Count occurrences; ordered by count descending, then key ascending
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ordered: Vec<(K, usize)> = counts.into_iter().collect();
    // Stable sort keeps ascending key order among equal counts
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered
}

/// Most frequent value and its count; `None` for empty input
pub fn plurality<K, I>(values: I) -> Option<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next()
}
