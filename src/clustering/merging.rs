use std::collections::HashMap;
use tracing::debug;

use crate::keyword::KeywordRecord;
use crate::TARGET_CLUSTERING;

/// Merges two keyword lists into one, de-duplicated by case-insensitive keyword
///
/// Every `primary` record is kept (a later duplicate inside `primary` replaces
/// an earlier one). A `secondary` record is added when its keyword is new and
/// replaces the existing record only when its search volume is strictly
/// greater.
///
/// The output is in first-seen key order, but callers should not depend on
/// it: clustering re-sorts everything.
pub fn merge(primary: Vec<KeywordRecord>, secondary: Vec<KeywordRecord>) -> Vec<KeywordRecord> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<KeywordRecord> = Vec::with_capacity(primary.len() + secondary.len());

    for record in primary {
        let key = record.key();
        match positions.get(&key) {
            Some(&position) => merged[position] = record,
            None => {
                positions.insert(key, merged.len());
                merged.push(record);
            }
        }
    }

    let mut replaced = 0;
    for record in secondary {
        let key = record.key();
        match positions.get(&key) {
            Some(&position) => {
                if record.search_volume > merged[position].search_volume {
                    merged[position] = record;
                    replaced += 1;
                }
            }
            None => {
                positions.insert(key, merged.len());
                merged.push(record);
            }
        }
    }

    debug!(
        target: TARGET_CLUSTERING,
        "Merged into {} keywords ({} replaced by higher-volume duplicates)",
        merged.len(),
        replaced
    );

    merged
}

/// Merges any number of sources, folding left to right
///
/// Earlier sources take the `primary` role for every later one.
pub fn merge_all<I>(sources: I) -> Vec<KeywordRecord>
where
    I: IntoIterator<Item = Vec<KeywordRecord>>,
{
    let mut sources = sources.into_iter();
    let Some(first) = sources.next() else {
        return Vec::new();
    };
    sources.fold(merge(first, Vec::new()), merge)
}
