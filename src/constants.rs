// src/constants.rs

// Import specific colors needed
use plotters::style::colors::{BLUE, CYAN, GREEN, MAGENTA, RED};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Chart layout sizes (pixels).
pub const CHART_MARGIN: u32 = 5;
pub const STACKED_TOP_MARGIN: u32 = 50;
pub const CAPTION_AREA_SIZE: u32 = 40;
pub const X_LABEL_AREA_SIZE: u32 = 50;
pub const Y_LABEL_AREA_SIZE: u32 = 70;

// Input file naming: `<prefix>_<tag><suffix>` per trajectory source.
pub const DEFAULT_FILE_PREFIX: &str = "sample";
pub const INPUT_FILE_SUFFIX: &str = "_tum_format.txt";

/// (display label, file tag) for each trajectory source, in load order.
pub const TRAJECTORY_SOURCES: [(&str, &str); 4] = [
    ("GNSS1", "gnss1"),
    ("GNSS2", "gnss2"),
    ("SBG", "gnss_sbg"),
    ("INS", "ins"),
];

// Output file names (fixed, written to the working directory).
pub const OUTPUT_FILE_2D: &str = "2D_trajectory_visualization.png";
pub const OUTPUT_FILE_3D: &str = "3D_trajectory_visualization.png";
pub const OUTPUT_FILE_XYZ: &str = "XYZ_over_time_visualization.png";

// --- Plot Color Assignments ---
/// Per-dataset palette, assigned by load order. Each dataset keeps its
/// color across the 2D, 3D and time-series views.
pub const SERIES_COLORS: [RGBColor; 5] = [BLUE, GREEN, RED, CYAN, MAGENTA];

// Stroke widths for lines.
pub const LINE_WIDTH_TRAJECTORY: u32 = 2;
pub const LINE_WIDTH_TIME_SERIES: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Start/end marker sizing (pixels).
pub const MARKER_SIZE: i32 = 8;
pub const MARKER_SIZE_LEGEND: i32 = 6;

// 3D view projection.
pub const PLOT_3D_PITCH: f64 = 0.25;
pub const PLOT_3D_YAW: f64 = 0.6;
pub const PLOT_3D_SCALE: f64 = 0.8;

// Font sizes (pixels) for plot text elements.
pub const FONT_SIZE_MAIN_TITLE: i32 = 30;
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 18;
pub const FONT_SIZE_LEGEND: i32 = 18;
pub const FONT_SIZE_MESSAGE: i32 = 24;

// src/constants.rs
