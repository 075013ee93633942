//! Segmentation parameters.
//!
//! An explicit value passed to each ant at construction. Loading it from a
//! file is left to the caller; the struct deserializes from any serde
//! format, and missing fields fall back to the defaults.

use crate::error::{Result, SegmentationError};
use serde::{Deserialize, Serialize};

/// Tunable parameters for a segmentation ant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Number of live clusters `K` (default: 3).
    pub number_of_clusters: usize,
    /// Weight of the contiguity term in the heuristic (default: 1.0).
    pub contiguity_weight: f64,
    /// Positive floor added to heuristic and pheromone values (default: 0.001).
    pub delta: f64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            number_of_clusters: 3,
            contiguity_weight: 1.0,
            delta: 0.001,
        }
    }
}

impl SegmentationConfig {
    /// Default parameters with `number_of_clusters` clusters.
    pub fn new(number_of_clusters: usize) -> Self {
        Self {
            number_of_clusters,
            ..Self::default()
        }
    }

    pub fn with_contiguity_weight(mut self, weight: f64) -> Self {
        self.contiguity_weight = weight;
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if self.number_of_clusters == 0 {
            return Err(SegmentationError::invalid_config(
                "number_of_clusters",
                "0",
                "at least one cluster is required",
            ));
        }
        if !self.contiguity_weight.is_finite() || self.contiguity_weight < 0.0 {
            return Err(SegmentationError::invalid_config(
                "contiguity_weight",
                self.contiguity_weight.to_string(),
                "must be finite and non-negative",
            ));
        }
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(SegmentationError::invalid_config(
                "delta",
                self.delta.to_string(),
                "must be finite and strictly positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SegmentationConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_clusters_is_rejected() {
        let err = SegmentationConfig::new(0).validate().unwrap_err();
        assert!(err.to_string().contains("number_of_clusters"));
    }

    #[test]
    fn delta_must_be_positive() {
        assert!(SegmentationConfig::new(2).with_delta(0.0).validate().is_err());
        assert!(SegmentationConfig::new(2).with_delta(f64::NAN).validate().is_err());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let config = SegmentationConfig::new(2).with_contiguity_weight(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: SegmentationConfig =
            serde_json::from_str(r#"{ "number_of_clusters": 5 }"#).unwrap();
        assert_eq!(config.number_of_clusters, 5);
        assert_eq!(config.contiguity_weight, 1.0);
        assert_eq!(config.delta, 0.001);
    }
}
