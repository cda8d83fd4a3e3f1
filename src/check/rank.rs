// ABOUTME: Ranking of fetched tags against the current one.
// ABOUTME: Tokenizes, filters, sorts and keeps only strictly newer tags.

use super::filters::TagFilters;
use crate::registry::TagRecord;
use crate::version::{VersionKey, tokenize};
use std::collections::HashMap;

/// Return every tag in `tags` that sorts strictly after `current_tag`.
///
/// The result is ascending by version key and never contains the current
/// tag. Names that tokenize to the same key collapse into one entry; the
/// record seen last wins.
pub fn rank_newer(
    current_tag: &str,
    tags: Vec<TagRecord>,
    filters: &TagFilters,
) -> Vec<TagRecord> {
    let current = tokenize(current_tag);

    let mut by_key: HashMap<VersionKey, TagRecord> = HashMap::with_capacity(tags.len());
    for tag in tags {
        by_key.insert(tokenize(&tag.name), tag);
    }

    let mut candidates: Vec<VersionKey> = by_key
        .keys()
        .filter(|key| filters.accepts(key, &current))
        .cloned()
        .collect();
    candidates.sort_unstable();

    let start = lower_bound(&candidates, &current);
    let mut newer = candidates.split_off(start);
    if newer.first() == Some(&current) {
        newer.remove(0);
    }

    newer
        .into_iter()
        .filter_map(|key| by_key.remove(&key))
        .collect()
}

/// Index of the first key in `sorted` that is not less than `target`.
///
/// Classic half-open binary search over `[low, high)`; returns
/// `sorted.len()` when every key is smaller.
pub fn lower_bound(sorted: &[VersionKey], target: &VersionKey) -> usize {
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if sorted[mid] < *target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low
}

/// Server-side name filter derived from a tag: its lowercase ASCII letters.
///
/// `3.9-alpine` narrows the listing to names containing `alpine`.
pub fn name_filter(tag: &str) -> String {
    tag.chars().filter(|c| c.is_ascii_lowercase()).collect()
}
