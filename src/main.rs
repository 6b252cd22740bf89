// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use ndarray_stats::QuantileExt; // Import QuantileExt for .min() and .max() on Array1

use tum_traj_render::constants::{DEFAULT_FILE_PREFIX, INPUT_FILE_SUFFIX, TRAJECTORY_SOURCES};
use tum_traj_render::data_input::dataset_filter::discard_empty_datasets;
use tum_traj_render::data_input::trajectory_data::TrajectoryDataset;
use tum_traj_render::data_input::tum_loader::load_tum_trajectory;
use tum_traj_render::plot_functions::plot_trajectory_2d::plot_trajectory_2d;
use tum_traj_render::plot_functions::plot_trajectory_3d::plot_trajectory_3d;
use tum_traj_render::plot_functions::plot_xyz_over_time::plot_xyz_over_time;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    let file_prefix = match args.len() {
        1 => DEFAULT_FILE_PREFIX.to_string(),
        2 => args[1].clone(),
        _ => {
            eprintln!("Usage: {} [file_prefix]", args[0]);
            std::process::exit(1);
        }
    };

    // --- Loading Trajectory Files ---
    println!("--- Loading Trajectory Files ---");
    let mut datasets: Vec<TrajectoryDataset> = Vec::new();
    for (label, file_tag) in TRAJECTORY_SOURCES {
        let input_file = format!("{}_{}{}", file_prefix, file_tag, INPUT_FILE_SUFFIX);
        let dataset = load_tum_trajectory(Path::new(&input_file), label)?;

        let timestamps = dataset.timestamps();
        match (timestamps.min(), timestamps.max()) {
            (Ok(&first), Ok(&last)) => {
                println!(
                    "  {}: {} poses from '{}' spanning {:.2} s.",
                    label,
                    dataset.len(),
                    input_file,
                    last - first
                );
            }
            _ => {
                println!("  {}: 0 poses from '{}'.", label, input_file);
            }
        }
        datasets.push(dataset);
    }

    // --- Filtering Empty Datasets ---
    let datasets = discard_empty_datasets(datasets);
    if datasets.is_empty() {
        return Err("Error: No non-empty trajectory datasets to plot. Aborting.".into());
    }

    // --- Generating Trajectory Figures ---
    println!("\n--- Generating 2D Trajectory Plot ---");
    plot_trajectory_2d(&datasets)?;

    println!("\n--- Generating 3D Trajectory Plot ---");
    plot_trajectory_3d(&datasets)?;

    println!("\n--- Generating XYZ Over Time Plot ---");
    plot_xyz_over_time(&datasets, &file_prefix)?;

    Ok(())
}

// src/main.rs
