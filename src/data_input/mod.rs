// src/data_input/mod.rs

pub mod dataset_filter;
pub mod trajectory_data;
pub mod tum_loader;

// src/data_input/mod.rs
