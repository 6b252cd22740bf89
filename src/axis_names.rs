/// Centralized axis naming utilities
///
/// Provides consistent position-axis names across all plot functions and
/// the stacked-plot framework.
/// Number of position axes in a trajectory record.
pub const AXIS_COUNT: usize = 3;

/// All axis names as a static array, indexed like `TrajectoryRecord::position`.
pub const AXIS_NAMES: [&str; AXIS_COUNT] = ["X", "Y", "Z"];

/// Get the standard axis name for a given index
///
/// # Arguments
/// * `index` - Axis index (0=X, 1=Y, 2=Z)
///
/// # Returns
/// Static string slice with the axis name
///
/// # Panics
/// Panics if index is greater than 2
pub fn axis_name(index: usize) -> &'static str {
    match index {
        0 => "X",
        1 => "Y",
        2 => "Z",
        _ => panic!(
            "Invalid axis index: {}. Expected 0 (X), 1 (Y), or 2 (Z)",
            index
        ),
    }
}
