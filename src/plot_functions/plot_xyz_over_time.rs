// src/plot_functions/plot_xyz_over_time.rs

use std::error::Error;

use crate::axis_names::{axis_name, AXIS_COUNT};
use crate::constants::{LINE_WIDTH_TIME_SERIES, OUTPUT_FILE_XYZ};
use crate::data_input::trajectory_data::TrajectoryDataset;
use crate::plot_framework::{calculate_range, draw_stacked_plot, PlotSeries, series_color};
use crate::types::TimeSeriesRows;

/// Builds the per-axis (timestamp, coordinate) series for every dataset.
pub fn time_series_rows(datasets: &[TrajectoryDataset]) -> TimeSeriesRows {
    let mut rows: TimeSeriesRows = Default::default();
    for (dataset_index, dataset) in datasets.iter().enumerate() {
        let timestamps = dataset.timestamps();
        for (axis_index, row) in rows.iter_mut().enumerate() {
            let coords = dataset.coords(axis_index);
            let data: Vec<(f64, f64)> = timestamps
                .iter()
                .zip(coords.iter())
                .map(|(&time, &coord)| (time, coord))
                .collect();
            row.push(PlotSeries {
                data,
                label: dataset.label().to_string(),
                color: series_color(dataset_index),
                stroke_width: LINE_WIDTH_TIME_SERIES,
            });
        }
    }
    rows
}

/// Generates the stacked coordinate-over-time figure: one row per position
/// axis, every dataset overlaid in each row.
pub fn plot_xyz_over_time(
    datasets: &[TrajectoryDataset],
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let rows = time_series_rows(datasets);

    draw_stacked_plot(OUTPUT_FILE_XYZ, root_name, "Position", move |axis_index| {
        let series = rows[axis_index].clone();

        let mut time_min = f64::INFINITY;
        let mut time_max = f64::NEG_INFINITY;
        let mut value_min = f64::INFINITY;
        let mut value_max = f64::NEG_INFINITY;
        for s in &series {
            for &(time, value) in &s.data {
                if time.is_finite() && value.is_finite() {
                    time_min = time_min.min(time);
                    time_max = time_max.max(time);
                    value_min = value_min.min(value);
                    value_max = value_max.max(value);
                }
            }
        }
        if !time_min.is_finite() || !value_min.is_finite() {
            return None;
        }

        // Time runs edge to edge; a degenerate span still needs padding to
        // keep the range valid.
        let x_range = if (time_max - time_min).abs() < 1e-6 {
            let (lo, hi) = calculate_range(time_min, time_max);
            lo..hi
        } else {
            time_min..time_max
        };
        let (value_lo, value_hi) = calculate_range(value_min, value_max);

        // Only the bottom row labels the shared time axis.
        let x_label = if axis_index == AXIS_COUNT - 1 {
            "Timestamp".to_string()
        } else {
            String::new()
        };

        Some((
            axis_name(axis_index).to_string(),
            x_range,
            value_lo..value_hi,
            series,
            x_label,
            "Coordinate [m]".to_string(),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SERIES_COLORS;
    use crate::data_input::trajectory_data::TrajectoryRecord;

    fn dataset(label: &str, poses: &[(f64, [f64; 3])]) -> TrajectoryDataset {
        let records = poses
            .iter()
            .map(|&(timestamp, position)| TrajectoryRecord {
                timestamp,
                position,
                orientation: [0.0, 0.0, 0.0, 1.0],
            })
            .collect();
        TrajectoryDataset::new(label, records)
    }

    #[test]
    fn test_rows_hold_one_series_per_dataset() {
        let datasets = vec![
            dataset("GNSS1", &[(0.0, [1.0, 2.0, 3.0]), (1.0, [4.0, 5.0, 6.0])]),
            dataset("INS", &[(0.5, [7.0, 8.0, 9.0])]),
        ];
        let rows = time_series_rows(&datasets);

        for row in &rows {
            assert_eq!(row.len(), 2);
            assert_eq!(row[0].label, "GNSS1");
            assert_eq!(row[1].label, "INS");
            assert_eq!(row[0].color, SERIES_COLORS[0]);
            assert_eq!(row[1].color, SERIES_COLORS[1]);
        }
    }

    #[test]
    fn test_rows_pair_timestamps_with_axis_values() {
        let datasets = vec![dataset(
            "SBG",
            &[(10.0, [1.0, 2.0, 3.0]), (11.0, [4.0, 5.0, 6.0])],
        )];
        let rows = time_series_rows(&datasets);

        assert_eq!(rows[0][0].data, vec![(10.0, 1.0), (11.0, 4.0)]);
        assert_eq!(rows[1][0].data, vec![(10.0, 2.0), (11.0, 5.0)]);
        assert_eq!(rows[2][0].data, vec![(10.0, 3.0), (11.0, 6.0)]);
    }

    #[test]
    fn test_rows_are_empty_without_datasets() {
        let rows = time_series_rows(&[]);
        assert!(rows.iter().all(|row| row.is_empty()));
    }
}

// src/plot_functions/plot_xyz_over_time.rs
