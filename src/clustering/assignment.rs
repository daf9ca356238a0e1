use std::collections::HashSet;
use tracing::{debug, info, trace};

use super::relatedness::{related, shared_terms};
use super::types::{Cluster, TopicalMapResult};
use crate::keyword::KeywordRecord;
use crate::TARGET_CLUSTERING;

/// Groups keywords into parent/children clusters
///
/// This function:
/// 1. Orders keywords by connection strength, strongest first (stable)
/// 2. Sends keywords below `threshold` to the orphan list
/// 3. Adds every other keyword to the first cluster whose parent it is related
///    to, or opens a new cluster with it as parent
/// 4. Promotes the highest-volume member of each cluster to parent
/// 5. Orders clusters by parent search volume, highest first (stable)
///
/// A keyword whose key was already placed in a cluster is skipped. Orphans
/// keep the connection-strength order they were encountered in.
///
/// # Arguments
/// * `keywords` - Merged, de-duplicated keyword records
/// * `threshold` - Inclusive minimum connection strength for clustering
pub fn cluster(keywords: Vec<KeywordRecord>, threshold: f64) -> TopicalMapResult {
    if keywords.is_empty() {
        return TopicalMapResult::default();
    }

    let total = keywords.len();
    let mut ordered = keywords;
    ordered.sort_by(|a, b| b.connection_strength.total_cmp(&a.connection_strength));

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut orphans: Vec<KeywordRecord> = Vec::new();
    let mut assigned: HashSet<String> = HashSet::new();

    for record in ordered {
        let key = record.key();
        if assigned.contains(&key) {
            trace!(target: TARGET_CLUSTERING, "Skipping duplicate keyword '{}'", record.keyword);
            continue;
        }

        if record.connection_strength < threshold {
            orphans.push(record);
            continue;
        }

        match clusters
            .iter_mut()
            .find(|existing| related(&record, &existing.parent, threshold))
        {
            Some(existing) => {
                trace!(
                    target: TARGET_CLUSTERING,
                    "'{}' joins '{}' on {:?}",
                    record.keyword,
                    existing.parent.keyword,
                    shared_terms(&record.keyword, &existing.parent.keyword)
                );
                existing.children.push(record);
            }
            None => {
                trace!(target: TARGET_CLUSTERING, "'{}' opens a new cluster", record.keyword);
                clusters.push(Cluster::new(record));
            }
        }
        assigned.insert(key);
    }

    let mut clusters: Vec<Cluster> = clusters
        .into_iter()
        .map(Cluster::with_max_volume_parent)
        .collect();
    clusters.sort_by(|a, b| b.parent.search_volume.cmp(&a.parent.search_volume));

    info!(
        target: TARGET_CLUSTERING,
        "Clustered {} keywords into {} clusters with {} orphans",
        total,
        clusters.len(),
        orphans.len()
    );
    debug!(
        target: TARGET_CLUSTERING,
        "{} singleton clusters",
        clusters.iter().filter(|c| c.is_singleton()).count()
    );

    TopicalMapResult { clusters, orphans }
}
