// src/data_input/dataset_filter.rs

use crate::data_input::trajectory_data::TrajectoryDataset;

/// Drops datasets that contain no poses, keeping the rest in load order.
///
/// Legend labels and palette colors are carried inside each dataset, so
/// removing an empty one cannot shift the labels of those that remain.
pub fn discard_empty_datasets(datasets: Vec<TrajectoryDataset>) -> Vec<TrajectoryDataset> {
    datasets
        .into_iter()
        .filter(|dataset| {
            if dataset.is_empty() {
                println!("  Skipping empty dataset '{}'.", dataset.label());
                false
            } else {
                true
            }
        })
        .collect()
}


// src/data_input/dataset_filter.rs
