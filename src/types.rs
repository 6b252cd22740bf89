// src/types.rs
// Type aliases to reduce complexity warnings

use crate::axis_names::AXIS_COUNT;
use std::ops::Range;

// Compile-time assertion: AXIS_COUNT must be 3.
// Trajectory positions are stored as [f64; 3] and the time-series figure
// splits its canvas into AXIS_COUNT rows. Changing AXIS_COUNT is a breaking
// change and requires API migration.
const _: () = assert!(AXIS_COUNT == 3, "AXIS_COUNT must be 3");

// Trajectory geometry types
pub type PlanarPoint = (f64, f64);
pub type SpatialPoint = (f64, f64, f64);

// Stacked plot row data
pub type RowPlotData = (
    String,                                 // title
    Range<f64>,                             // x_range
    Range<f64>,                             // y_range
    Vec<crate::plot_framework::PlotSeries>, // series
    String,                                 // x_label
    String,                                 // y_label
);

// Per-axis series collections for the time-series figure
pub type TimeSeriesRows = [Vec<crate::plot_framework::PlotSeries>; AXIS_COUNT];

// src/types.rs
