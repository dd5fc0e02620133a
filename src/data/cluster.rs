use std::collections::BTreeSet;

use super::model::{Cluster, Record};

/// Labels `0..LABEL_SCAN_LIMIT` are considered for plotting.
pub const LABEL_SCAN_LIMIT: usize = 9;

// ---------------------------------------------------------------------------
// Label partitioning
// ---------------------------------------------------------------------------

/// Group records into clusters for labels `0, 1, 2, ...` below `limit`.
///
/// The scan stops at the first label with no records: with labels
/// `{0, 1, 2, 4}` present only clusters 0, 1 and 2 are returned.
pub fn partition(records: &[Record], limit: usize) -> Vec<Cluster> {
    let mut clusters = Vec::new();

    for label in 0..limit {
        let points: Vec<[f64; 2]> = records
            .iter()
            .filter(|r| r.label == label as i64)
            .map(Record::point)
            .collect();

        if points.is_empty() {
            break;
        }
        clusters.push(Cluster { label, points });
    }

    clusters
}

/// Labels present in `records` that have no cluster in `clusters`.
pub fn unrendered_labels(records: &[Record], clusters: &[Cluster]) -> Vec<i64> {
    let rendered: BTreeSet<i64> = clusters.iter().map(|c| c.label as i64).collect();
    let present: BTreeSet<i64> = records.iter().map(|r| r.label).collect();
    present.difference(&rendered).copied().collect()
}
