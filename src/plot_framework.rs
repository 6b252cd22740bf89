// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::Circle;
use plotters::element::PathElement;
use plotters::element::Text;
use plotters::element::TriangleMarker;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::axis_names::{axis_name, AXIS_COUNT};
use crate::constants::{
    CAPTION_AREA_SIZE, CHART_MARGIN, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, MARKER_SIZE,
    MARKER_SIZE_LEGEND, PLOT_3D_PITCH, PLOT_3D_SCALE, PLOT_3D_YAW, PLOT_HEIGHT, PLOT_WIDTH,
    SERIES_COLORS, STACKED_TOP_MARGIN, X_LABEL_AREA_SIZE, Y_LABEL_AREA_SIZE,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};
use crate::types::{PlanarPoint, RowPlotData, SpatialPoint};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Widens one of two padded axis bounds so both axes render at the same
/// scale (data units per pixel) inside a plot area of the given pixel size.
/// The wider-scaled axis keeps its bounds; the other grows around its center.
pub fn equal_aspect_ranges(
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    plot_size_px: (u32, u32),
) -> (Range<f64>, Range<f64>) {
    let width_px = plot_size_px.0.max(1) as f64;
    let height_px = plot_size_px.1.max(1) as f64;
    let x_span = x_bounds.1 - x_bounds.0;
    let y_span = y_bounds.1 - y_bounds.0;
    let units_per_px = (x_span / width_px).max(y_span / height_px);
    let x_target = units_per_px * width_px;
    let y_target = units_per_px * height_px;
    let x_mid = (x_bounds.0 + x_bounds.1) / 2.0;
    let y_mid = (y_bounds.0 + y_bounds.1) / 2.0;
    (
        (x_mid - x_target / 2.0)..(x_mid + x_target / 2.0),
        (y_mid - y_target / 2.0)..(y_mid + y_target / 2.0),
    )
}

/// Palette color for a dataset, assigned by load order.
pub fn series_color(series_index: usize) -> RGBColor {
    SERIES_COLORS[series_index % SERIES_COLORS.len()]
}

/// Folds one value into running (min, max) bounds, starting them if needed.
fn expand_bounds(bounds: Option<(f64, f64)>, value: f64) -> Option<(f64, f64)> {
    Some(match bounds {
        Some((lo, hi)) => (lo.min(value), hi.max(value)),
        None => (value, value),
    })
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_label: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_pixels, y_pixels) = area.get_pixel_range();
    let (width, height) = (
        (x_pixels.end - x_pixels.start) as u32,
        (y_pixels.end - y_pixels.start) as u32,
    );
    let message = format!("{plot_label} Data Unavailable:\n{reason}");

    // Estimate text dimensions for centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// A trajectory rendered as a connected path on the ground plane.
#[derive(Clone)]
pub struct TracePath2d {
    pub points: Vec<PlanarPoint>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

impl TracePath2d {
    /// First pose of the path, marked with a triangle
    pub fn start_marker(&self) -> Option<PlanarPoint> {
        self.points.first().copied()
    }

    /// Last pose of the path, marked with a circle
    pub fn end_marker(&self) -> Option<PlanarPoint> {
        self.points.last().copied()
    }
}

/// A trajectory rendered as a connected path in 3D space.
#[derive(Clone)]
pub struct TracePath3d {
    pub points: Vec<SpatialPoint>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

impl TracePath3d {
    pub fn start_marker(&self) -> Option<SpatialPoint> {
        self.points.first().copied()
    }

    pub fn end_marker(&self) -> Option<SpatialPoint> {
        self.points.last().copied()
    }
}

/// Draws one row of a stacked figure: a titled chart with its own legend.
fn draw_row_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    title: &str,
    x_range: &Range<f64>,
    y_range: &Range<f64>,
    series: &[PlotSeries],
    x_label: &str,
    y_label: &str,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .x_labels(10)
        .y_labels(5)
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in series {
        let color = s.color;
        if s.data.is_empty() {
            if !s.label.is_empty() {
                // Legend-only entry: an invisible point carries the label.
                chart
                    .draw_series(std::iter::once(Circle::new(
                        (x_range.start, y_range.start),
                        0,
                        color.filled(),
                    )))?
                    .label(&s.label)
                    .legend(move |(x, y)| {
                        PathElement::new(
                            vec![(x, y), (x + 20, y)],
                            color.stroke_width(LINE_WIDTH_LEGEND),
                        )
                    });
                legend_series_count += 1;
            }
            continue;
        }

        let drawn = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            drawn.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }
    Ok(())
}

/// Creates a stacked plot image with one subplot per position axis (X, Y, Z).
pub fn draw_stacked_plot<'a, F>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    mut get_row_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<RowPlotData> + Send + Sync + 'static,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(STACKED_TOP_MARGIN, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((AXIS_COUNT, 1));
    let mut any_axis_plotted = false;

    #[allow(clippy::needless_range_loop)]
    for axis_index in 0..AXIS_COUNT {
        let area = &sub_plot_areas[axis_index];
        match get_row_plot_data(axis_index) {
            Some((chart_title, x_range, y_range, series_data, x_label, y_label)) => {
                let has_data = series_data.iter().any(|s| !s.data.is_empty());
                let valid_ranges = x_range.end > x_range.start && y_range.end > y_range.start;
                if has_data && valid_ranges {
                    draw_row_chart(
                        area,
                        &chart_title,
                        &x_range,
                        &y_range,
                        &series_data,
                        &x_label,
                        &y_label,
                    )?;
                    any_axis_plotted = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(
                        area,
                        &format!("{} {}", axis_name(axis_index), plot_type_name),
                        reason,
                    )?;
                }
            }
            None => {
                draw_unavailable_message(
                    area,
                    &format!("{} {}", axis_name(axis_index), plot_type_name),
                    "Data extraction failed",
                )?;
            }
        }
    }

    if any_axis_plotted {
        root_area.present()?;
        println!("  Stacked plot saved as '{output_filename}'.");
    } else {
        root_area.present()?;
        println!("  Skipping '{output_filename}' plot saving: No data available for any axis to plot, only placeholder messages shown.");
    }
    Ok(())
}

/// Creates a single top-down chart of all trajectories with equal-aspect
/// axes, start/end markers and a shared legend.
pub fn draw_planar_trajectory_plot(
    output_filename: &str,
    chart_title: &str,
    traces: &[TracePath2d],
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut x_bounds: Option<(f64, f64)> = None;
    let mut y_bounds: Option<(f64, f64)> = None;
    for trace in traces {
        for &(x, y) in &trace.points {
            if x.is_finite() && y.is_finite() {
                x_bounds = expand_bounds(x_bounds, x);
                y_bounds = expand_bounds(y_bounds, y);
            }
        }
    }

    let (x_bounds, y_bounds) = match (x_bounds, y_bounds) {
        (Some(x), Some(y)) => (x, y),
        _ => {
            draw_unavailable_message(&root_area, chart_title, "No data points")?;
            root_area.present()?;
            println!("  Skipping '{output_filename}' plot saving: No data available to plot, only a placeholder message shown.");
            return Ok(());
        }
    };

    // Pad, then equalize scale across the estimated plotting region so the
    // path geometry is not distorted.
    let x_padded = calculate_range(x_bounds.0, x_bounds.1);
    let y_padded = calculate_range(y_bounds.0, y_bounds.1);
    let plot_width_px = PLOT_WIDTH.saturating_sub(Y_LABEL_AREA_SIZE + 2 * CHART_MARGIN);
    let plot_height_px =
        PLOT_HEIGHT.saturating_sub(X_LABEL_AREA_SIZE + CAPTION_AREA_SIZE + 2 * CHART_MARGIN);
    let (x_range, y_range) =
        equal_aspect_ranges(x_padded, y_padded, (plot_width_px, plot_height_px));

    let mut chart = ChartBuilder::on(&root_area)
        .caption(chart_title, FONT_TUPLE_CHART_TITLE)
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc("X [m]")
        .y_desc("Y [m]")
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    for trace in traces {
        let color = trace.color;
        let drawn = chart.draw_series(LineSeries::new(
            trace
                .points
                .iter()
                .copied()
                .filter(|(x, y)| x.is_finite() && y.is_finite()),
            color.stroke_width(trace.stroke_width),
        ))?;
        if !trace.label.is_empty() {
            drawn.label(&trace.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
        }

        if let Some((x, y)) = trace.start_marker() {
            if x.is_finite() && y.is_finite() {
                chart.draw_series(std::iter::once(TriangleMarker::new(
                    (x, y),
                    MARKER_SIZE,
                    color.filled(),
                )))?;
            }
        }
        if let Some((x, y)) = trace.end_marker() {
            if x.is_finite() && y.is_finite() {
                chart.draw_series(std::iter::once(Circle::new(
                    (x, y),
                    MARKER_SIZE,
                    color.filled(),
                )))?;
            }
        }
    }

    // Shared start/end legend entries, colored like the first trajectory.
    if let Some(first_trace) = traces.first() {
        let marker_color = first_trace.color;
        chart
            .draw_series(std::iter::once(Circle::new(
                (x_range.start, y_range.start),
                0,
                marker_color.filled(),
            )))?
            .label("Start")
            .legend(move |(x, y)| {
                TriangleMarker::new((x + 10, y), MARKER_SIZE_LEGEND, marker_color.filled())
            });
        chart
            .draw_series(std::iter::once(Circle::new(
                (x_range.start, y_range.start),
                0,
                marker_color.filled(),
            )))?
            .label("End")
            .legend(move |(x, y)| {
                Circle::new((x + 10, y), MARKER_SIZE_LEGEND, marker_color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(FONT_TUPLE_LEGEND)
        .draw()?;

    root_area.present()?;
    println!("  Plot saved as '{output_filename}'.");
    Ok(())
}

/// Creates a single 3D chart of all trajectories with start/end markers
/// and a shared legend.
pub fn draw_spatial_trajectory_plot(
    output_filename: &str,
    chart_title: &str,
    traces: &[TracePath3d],
) -> Result<(), Box<dyn Error>> {
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut x_bounds: Option<(f64, f64)> = None;
    let mut y_bounds: Option<(f64, f64)> = None;
    let mut z_bounds: Option<(f64, f64)> = None;
    for trace in traces {
        for &(x, y, z) in &trace.points {
            if x.is_finite() && y.is_finite() && z.is_finite() {
                x_bounds = expand_bounds(x_bounds, x);
                y_bounds = expand_bounds(y_bounds, y);
                z_bounds = expand_bounds(z_bounds, z);
            }
        }
    }

    let (x_bounds, y_bounds, z_bounds) = match (x_bounds, y_bounds, z_bounds) {
        (Some(x), Some(y), Some(z)) => (x, y, z),
        _ => {
            draw_unavailable_message(&root_area, chart_title, "No data points")?;
            root_area.present()?;
            println!("  Skipping '{output_filename}' plot saving: No data available to plot, only a placeholder message shown.");
            return Ok(());
        }
    };

    let (x_min, x_max) = calculate_range(x_bounds.0, x_bounds.1);
    let (y_min, y_max) = calculate_range(y_bounds.0, y_bounds.1);
    let (z_min, z_max) = calculate_range(z_bounds.0, z_bounds.1);
    let x_range = x_min..x_max;
    let y_range = y_min..y_max;
    let z_range = z_min..z_max;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(chart_title, FONT_TUPLE_CHART_TITLE)
        .margin(CHART_MARGIN)
        .build_cartesian_3d(x_range.clone(), y_range.clone(), z_range.clone())?;

    chart.with_projection(|mut pb| {
        pb.pitch = PLOT_3D_PITCH;
        pb.yaw = PLOT_3D_YAW;
        pb.scale = PLOT_3D_SCALE;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    for trace in traces {
        let color = trace.color;
        let drawn = chart.draw_series(LineSeries::new(
            trace
                .points
                .iter()
                .copied()
                .filter(|(x, y, z)| x.is_finite() && y.is_finite() && z.is_finite()),
            color.stroke_width(trace.stroke_width),
        ))?;
        if !trace.label.is_empty() {
            drawn.label(&trace.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
        }

        if let Some((x, y, z)) = trace.start_marker() {
            if x.is_finite() && y.is_finite() && z.is_finite() {
                chart.draw_series(std::iter::once(TriangleMarker::new(
                    (x, y, z),
                    MARKER_SIZE,
                    color.filled(),
                )))?;
            }
        }
        if let Some((x, y, z)) = trace.end_marker() {
            if x.is_finite() && y.is_finite() && z.is_finite() {
                chart.draw_series(std::iter::once(Circle::new(
                    (x, y, z),
                    MARKER_SIZE,
                    color.filled(),
                )))?;
            }
        }
    }

    // Shared start/end legend entries, colored like the first trajectory.
    if let Some(first_trace) = traces.first() {
        let marker_color = first_trace.color;
        chart
            .draw_series(std::iter::once(Circle::new(
                (x_range.start, y_range.start, z_range.start),
                0,
                marker_color.filled(),
            )))?
            .label("Start")
            .legend(move |(x, y)| {
                TriangleMarker::new((x + 10, y), MARKER_SIZE_LEGEND, marker_color.filled())
            });
        chart
            .draw_series(std::iter::once(Circle::new(
                (x_range.start, y_range.start, z_range.start),
                0,
                marker_color.filled(),
            )))?
            .label("End")
            .legend(move |(x, y)| {
                Circle::new((x + 10, y), MARKER_SIZE_LEGEND, marker_color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(FONT_TUPLE_LEGEND)
        .draw()?;

    root_area.present()?;
    println!("  Plot saved as '{output_filename}'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LINE_WIDTH_TRAJECTORY;

    #[test]
    fn test_calculate_range_pads_by_fifteen_percent() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo - (-1.5)).abs() < 1e-9);
        assert!((hi - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_handles_degenerate_span() {
        let (lo, hi) = calculate_range(2.0, 2.0);
        assert!((lo - 1.5).abs() < 1e-9);
        assert!((hi - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_range_accepts_swapped_bounds() {
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!(lo < 0.0);
        assert!(hi > 10.0);
    }

    #[test]
    fn test_equal_aspect_ranges_keeps_coarser_axis() {
        let (x_range, y_range) = equal_aspect_ranges((0.0, 10.0), (0.0, 5.0), (100, 100));
        // X already has the coarser scale and stays put.
        assert!((x_range.start - 0.0).abs() < 1e-9);
        assert!((x_range.end - 10.0).abs() < 1e-9);
        // Y grows to the same units-per-pixel, centered on its midpoint.
        assert!((y_range.start - (-2.5)).abs() < 1e-9);
        assert!((y_range.end - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_equal_aspect_ranges_accounts_for_pixel_shape() {
        // Equal data spans in a plot area twice as wide as tall: the x axis
        // must cover twice the data span of the y axis.
        let (x_range, y_range) = equal_aspect_ranges((0.0, 10.0), (0.0, 10.0), (200, 100));
        let x_span = x_range.end - x_range.start;
        let y_span = y_range.end - y_range.start;
        assert!((x_span - 2.0 * y_span).abs() < 1e-9);
    }

    #[test]
    fn test_series_color_cycles_through_palette() {
        assert_eq!(series_color(0), SERIES_COLORS[0]);
        assert_eq!(series_color(4), SERIES_COLORS[4]);
        assert_eq!(series_color(5), SERIES_COLORS[0]);
    }

    #[test]
    fn test_trace_markers_take_path_endpoints() {
        let trace = TracePath2d {
            points: vec![(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)],
            label: "GNSS1".to_string(),
            color: SERIES_COLORS[0],
            stroke_width: LINE_WIDTH_TRAJECTORY,
        };
        assert_eq!(trace.start_marker(), Some((0.0, 1.0)));
        assert_eq!(trace.end_marker(), Some((4.0, 5.0)));

        let empty = TracePath2d {
            points: Vec::new(),
            label: String::new(),
            color: SERIES_COLORS[1],
            stroke_width: LINE_WIDTH_TRAJECTORY,
        };
        assert_eq!(empty.start_marker(), None);
        assert_eq!(empty.end_marker(), None);
    }

    #[test]
    fn test_single_point_trace_markers_coincide() {
        let trace = TracePath3d {
            points: vec![(1.0, 2.0, 3.0)],
            label: "INS".to_string(),
            color: SERIES_COLORS[3],
            stroke_width: LINE_WIDTH_TRAJECTORY,
        };
        assert_eq!(trace.start_marker(), trace.end_marker());
        assert_eq!(trace.start_marker(), Some((1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_expand_bounds_tracks_min_and_max() {
        let mut bounds = None;
        for value in [3.0, -1.0, 7.5] {
            bounds = expand_bounds(bounds, value);
        }
        assert_eq!(bounds, Some((-1.0, 7.5)));
    }
}

// src/plot_framework.rs
