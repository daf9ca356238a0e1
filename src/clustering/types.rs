use serde::{Deserialize, Serialize};

use crate::keyword::KeywordRecord;

/// A parent keyword and the children grouped under it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub parent: KeywordRecord,
    pub children: Vec<KeywordRecord>,
}

impl Cluster {
    /// Opens a singleton cluster
    pub fn new(parent: KeywordRecord) -> Self {
        Self {
            parent,
            children: Vec::new(),
        }
    }

    /// Number of keywords in the cluster, parent included
    pub fn keyword_count(&self) -> usize {
        self.children.len() + 1
    }

    pub fn is_singleton(&self) -> bool {
        self.children.is_empty()
    }

    /// All members, parent first
    pub fn members(&self) -> impl Iterator<Item = &KeywordRecord> {
        std::iter::once(&self.parent).chain(self.children.iter())
    }

    /// Lowercase keys of every member
    pub fn member_keys(&self) -> Vec<String> {
        self.members().map(KeywordRecord::key).collect()
    }

    /// Rebuilds the cluster around its highest-volume member.
    ///
    /// Members are considered in the order parent, then children as stored;
    /// on equal volume the earliest member wins, so an existing parent keeps
    /// its place against a child with the same volume. Remaining members
    /// become children sorted by volume descending, keeping their relative
    /// order on ties.
    pub fn with_max_volume_parent(self) -> Self {
        let Cluster { parent, children } = self;
        let mut members = Vec::with_capacity(children.len() + 1);
        members.push(parent);
        members.extend(children);

        let mut best = 0;
        for (index, member) in members.iter().enumerate().skip(1) {
            if member.search_volume > members[best].search_volume {
                best = index;
            }
        }

        let parent = members.remove(best);
        members.sort_by(|a, b| b.search_volume.cmp(&a.search_volume));

        Self {
            parent,
            children: members,
        }
    }
}

/// Clusters plus the keywords too weakly connected to join any of them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicalMapResult {
    pub clusters: Vec<Cluster>,
    pub orphans: Vec<KeywordRecord>,
}

impl TopicalMapResult {
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty() && self.orphans.is_empty()
    }

    pub fn total_keywords(&self) -> usize {
        self.clusters.iter().map(Cluster::keyword_count).sum::<usize>() + self.orphans.len()
    }

    /// Every keyword in the map (cluster members, then orphans)
    pub fn keywords(&self) -> impl Iterator<Item = &KeywordRecord> {
        self.clusters
            .iter()
            .flat_map(|c| c.members())
            .chain(self.orphans.iter())
    }
}
