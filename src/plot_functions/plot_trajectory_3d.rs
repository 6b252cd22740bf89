// src/plot_functions/plot_trajectory_3d.rs

use std::error::Error;

use crate::constants::{LINE_WIDTH_TRAJECTORY, OUTPUT_FILE_3D};
use crate::data_input::trajectory_data::TrajectoryDataset;
use crate::plot_framework::{draw_spatial_trajectory_plot, series_color, TracePath3d};

/// Builds one spatial trace per dataset, colored by load order.
pub fn spatial_traces(datasets: &[TrajectoryDataset]) -> Vec<TracePath3d> {
    datasets
        .iter()
        .enumerate()
        .map(|(dataset_index, dataset)| TracePath3d {
            points: dataset.path_xyz(),
            label: dataset.label().to_string(),
            color: series_color(dataset_index),
            stroke_width: LINE_WIDTH_TRAJECTORY,
        })
        .collect()
}

/// Generates the 3D trajectory comparison figure.
pub fn plot_trajectory_3d(datasets: &[TrajectoryDataset]) -> Result<(), Box<dyn Error>> {
    let traces = spatial_traces(datasets);
    draw_spatial_trajectory_plot(OUTPUT_FILE_3D, "3D Trajectories", &traces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SERIES_COLORS;
    use crate::data_input::trajectory_data::TrajectoryRecord;

    fn dataset(label: &str, positions: &[[f64; 3]]) -> TrajectoryDataset {
        let records = positions
            .iter()
            .enumerate()
            .map(|(i, p)| TrajectoryRecord {
                timestamp: i as f64,
                position: *p,
                orientation: [0.0, 0.0, 0.0, 1.0],
            })
            .collect();
        TrajectoryDataset::new(label, records)
    }

    #[test]
    fn test_traces_carry_full_positions() {
        let datasets = vec![
            dataset("GNSS1", &[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]),
            dataset("GNSS2", &[[9.0, 8.0, 7.0]]),
        ];
        let traces = spatial_traces(&datasets);

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].points, vec![(0.0, 1.0, 2.0), (3.0, 4.0, 5.0)]);
        assert_eq!(traces[0].color, SERIES_COLORS[0]);
        assert_eq!(traces[1].label, "GNSS2");
        assert_eq!(traces[1].start_marker(), Some((9.0, 8.0, 7.0)));
        assert_eq!(traces[1].start_marker(), traces[1].end_marker());
    }
}

// src/plot_functions/plot_trajectory_3d.rs
