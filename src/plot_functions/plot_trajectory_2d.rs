// src/plot_functions/plot_trajectory_2d.rs

use std::error::Error;

use crate::constants::{LINE_WIDTH_TRAJECTORY, OUTPUT_FILE_2D};
use crate::data_input::trajectory_data::TrajectoryDataset;
use crate::plot_framework::{draw_planar_trajectory_plot, series_color, TracePath2d};

/// Builds one ground-plane trace per dataset, colored by load order.
pub fn planar_traces(datasets: &[TrajectoryDataset]) -> Vec<TracePath2d> {
    datasets
        .iter()
        .enumerate()
        .map(|(dataset_index, dataset)| TracePath2d {
            points: dataset.path_xy(),
            label: dataset.label().to_string(),
            color: series_color(dataset_index),
            stroke_width: LINE_WIDTH_TRAJECTORY,
        })
        .collect()
}

/// Generates the top-down (X/Y) trajectory comparison figure.
pub fn plot_trajectory_2d(datasets: &[TrajectoryDataset]) -> Result<(), Box<dyn Error>> {
    let traces = planar_traces(datasets);
    draw_planar_trajectory_plot(OUTPUT_FILE_2D, "2D Trajectories", &traces)
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
    fn test_traces_follow_dataset_order() {
        let datasets = vec![
            dataset("GNSS1", &[[0.0, 0.0, 0.0], [1.0, 1.0, 0.0]]),
            dataset("INS", &[[5.0, 5.0, 1.0]]),
        ];
        let traces = planar_traces(&datasets);

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].label, "GNSS1");
        assert_eq!(traces[0].color, SERIES_COLORS[0]);
        assert_eq!(traces[0].points, vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(traces[1].label, "INS");
        assert_eq!(traces[1].color, SERIES_COLORS[1]);
    }

    #[test]
    fn test_single_pose_trace_has_coincident_markers() {
        let datasets = vec![dataset("SBG", &[[2.0, 3.0, 4.0]])];
        let traces = planar_traces(&datasets);

        assert_eq!(traces[0].start_marker(), Some((2.0, 3.0)));
        assert_eq!(traces[0].start_marker(), traces[0].end_marker());
    }
}

// src/plot_functions/plot_trajectory_2d.rs
