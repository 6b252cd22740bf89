// src/plot_functions/mod.rs

pub mod plot_trajectory_2d;
pub mod plot_trajectory_3d;
pub mod plot_xyz_over_time;

// src/plot_functions/mod.rs
