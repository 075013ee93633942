//! Cluster registry — per-ant membership bookkeeping.
//!
//! One bucket per live cluster plus one for absent pixels. Buckets are
//! plain `Vec`s addressed by label; aggregates such as the mean intensity
//! are recomputed from the members on demand, so a reset is just clearing
//! the buckets.

use acoseg_core::types::{ClusterLabel, ClusteredPixel};
use serde::Serialize;

/// Members of one cluster, in the order they were assigned.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cluster {
    members: Vec<ClusteredPixel>,
}

impl Cluster {
    pub fn members(&self) -> &[ClusteredPixel] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Arithmetic mean of member intensities; 0.0 when empty.
    pub fn mean_intensity(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let total: f64 = self.members.iter().map(|p| p.intensity).sum();
        total / self.members.len() as f64
    }
}

/// Label-indexed clusters for one ant.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterRegistry {
    clusters: Vec<Cluster>,
    absent: Cluster,
}

impl ClusterRegistry {
    /// `number_of_clusters` empty live clusters plus the absent bucket.
    pub fn new(number_of_clusters: usize) -> Self {
        Self {
            clusters: vec![Cluster::default(); number_of_clusters],
            absent: Cluster::default(),
        }
    }

    /// Empty every bucket and resize to `number_of_clusters` live clusters.
    pub fn reset(&mut self, number_of_clusters: usize) {
        self.clusters.clear();
        self.clusters.resize_with(number_of_clusters, Cluster::default);
        self.absent.members.clear();
    }

    pub fn number_of_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Whether `label` names a bucket of this registry.
    pub fn contains(&self, label: ClusterLabel) -> bool {
        match label {
            ClusterLabel::Absent => true,
            ClusterLabel::Cluster(index) => index < self.clusters.len(),
        }
    }

    /// File `pixel` under its own label.
    ///
    /// # Panics
    ///
    /// Panics if the label names a cluster outside `0..K`.
    pub fn add_member(&mut self, pixel: ClusteredPixel) {
        self.bucket_mut(pixel.label).members.push(pixel);
    }

    /// The bucket for `label`.
    ///
    /// # Panics
    ///
    /// Panics if the label names a cluster outside `0..K`.
    pub fn cluster(&self, label: ClusterLabel) -> &Cluster {
        match label {
            ClusterLabel::Absent => &self.absent,
            ClusterLabel::Cluster(index) => {
                self.check_range(index);
                &self.clusters[index]
            }
        }
    }

    fn bucket_mut(&mut self, label: ClusterLabel) -> &mut Cluster {
        match label {
            ClusterLabel::Absent => &mut self.absent,
            ClusterLabel::Cluster(index) => {
                self.check_range(index);
                &mut self.clusters[index]
            }
        }
    }

    fn check_range(&self, index: usize) {
        assert!(
            self.contains(ClusterLabel::Cluster(index)),
            "cluster label {} out of range for {} clusters",
            index,
            self.clusters.len()
        );
    }

    /// Mean intensity of the cluster; 0.0 when it has no members.
    pub fn mean_intensity(&self, label: ClusterLabel) -> f64 {
        self.cluster(label).mean_intensity()
    }

    /// Live clusters with their index, in label order.
    pub fn live(&self) -> impl Iterator<Item = (usize, &Cluster)> {
        self.clusters.iter().enumerate()
    }

    pub fn absent(&self) -> &Cluster {
        &self.absent
    }

    /// Member count of every live cluster, in label order.
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }

    /// Members across all buckets, absent included.
    pub fn total_members(&self) -> usize {
        self.clusters.iter().map(Cluster::len).sum::<usize>() + self.absent.len()
    }
}
