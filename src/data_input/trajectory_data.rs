// src/data_input/trajectory_data.rs

use ndarray::Array1;

use crate::axis_names::AXIS_COUNT;
use crate::types::{PlanarPoint, SpatialPoint};

/// Structure to hold data parsed from a single row of a TUM trajectory file.
/// A row is a timestamped pose: position plus orientation quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRecord {
    pub timestamp: f64,         // Timestamp (in seconds).
    pub position: [f64; 3],     // Position [x, y, z] (in meters).
    pub orientation: [f64; 4],  // Orientation quaternion [qx, qy, qz, qw].
}

/// A named sequence of trajectory records from one source file.
/// The label travels with the records so each dataset keeps its legend
/// entry and color through filtering and plotting.
#[derive(Debug, Clone)]
pub struct TrajectoryDataset {
    label: String,
    records: Vec<TrajectoryRecord>,
}

impl TrajectoryDataset {
    pub fn new(label: &str, records: Vec<TrajectoryRecord>) -> Self {
        Self {
            label: label.to_string(),
            records,
        }
    }

    /// Display label used in legends and status output
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn records(&self) -> &[TrajectoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Timestamps of all records, in file order
    pub fn timestamps(&self) -> Array1<f64> {
        self.records.iter().map(|r| r.timestamp).collect()
    }

    /// One position coordinate across all records (0=X, 1=Y, 2=Z)
    pub fn coords(&self, axis_index: usize) -> Array1<f64> {
        assert!(
            axis_index < AXIS_COUNT,
            "Invalid axis index: {}. Expected 0 (X), 1 (Y), or 2 (Z)",
            axis_index
        );
        self.records
            .iter()
            .map(|r| r.position[axis_index])
            .collect()
    }

    /// Ground-plane projection of the path, in record order
    pub fn path_xy(&self) -> Vec<PlanarPoint> {
        self.records
            .iter()
            .map(|r| (r.position[0], r.position[1]))
            .collect()
    }

    /// Full spatial path, in record order
    pub fn path_xyz(&self) -> Vec<SpatialPoint> {
        self.records
            .iter()
            .map(|r| (r.position[0], r.position[1], r.position[2]))
            .collect()
    }
}


// src/data_input/trajectory_data.rs
