//! Chart layout engine: map datasets onto a fixed-size drawing surface.
//!
//! Every function here is a pure transform from data values to pixel-space
//! shape descriptors (rects, point lists, gradient stops, label anchors).
//! Nothing depends on a rendering technology; the `render` module consumes
//! the output. Calling a function twice with identical inputs and the same
//! surface width yields identical output.
//!
//! Scaling model shared by all cartesian kinds: values map linearly from
//! `[0, axis_max]` onto the plot height, with bars and points anchored to the
//! bottom padding edge. Values above `axis_max` are not clamped.

pub mod types;

pub use types::{
    AxisTick, BarRect, CategoryAnchor, DonutLayout, DonutLegendEntry, DonutStop, GroupedBarLayout,
    LineChartLayout, Padding, Point, SeriesPolyline, Surface, TickRounding, ToggleBarLayout,
};

use crate::models::{CategoryAxis, DonutSegment, Series};
use thiserror::Error;

/// Headroom factor for toggle mode: the tallest bar fills 1/1.2 of the plot.
const AUTO_SCALE_HEADROOM: f64 = 1.2;

/// Slot fraction a toggle-mode bar occupies within its category slot.
const TOGGLE_BAR_FRACTION: f64 = 0.6;

/// Vertical offset of category labels below the plot's bottom edge.
const CATEGORY_LABEL_DROP: f64 = 15.0;

/// Validation failures raised at the geometry boundary. The engine never
/// recovers from these; callers get them before any geometry is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A series' value count does not match the category count.
    #[error("series `{series}` has {values} values for {categories} categories")]
    ShapeMismatch {
        series: String,
        values: usize,
        categories: usize,
    },
    /// Fewer categories than the chart kind requires.
    #[error("{chart} chart requires at least {required} categories, got {got}")]
    InsufficientCategories {
        chart: &'static str,
        required: usize,
        got: usize,
    },
}

fn check_shape(
    axis: &CategoryAxis,
    name: &str,
    values: usize,
) -> Result<(), GeometryError> {
    if values != axis.len() {
        return Err(GeometryError::ShapeMismatch {
            series: name.to_string(),
            values,
            categories: axis.len(),
        });
    }
    Ok(())
}

fn check_categories(
    axis: &CategoryAxis,
    chart: &'static str,
    required: usize,
) -> Result<(), GeometryError> {
    if axis.len() < required {
        return Err(GeometryError::InsufficientCategories {
            chart,
            required,
            got: axis.len(),
        });
    }
    Ok(())
}

/// Map a data value onto a pixel Y coordinate (bottom padding edge = 0).
fn value_to_y(value: f64, axis_max: f64, surface: &Surface) -> f64 {
    surface.height - surface.padding.bottom - (value / axis_max) * surface.chart_height()
}

/// Y-axis ticks, top to bottom.
///
/// Tick `i` sits at `top + i * chart_height / (tick_count - 1)` and labels
/// `axis_max * (1 - i / (tick_count - 1))`, so a 5-tick axis over maximum `M`
/// reads `M, 0.75M, 0.5M, 0.25M, 0`. `tick_count` below 2 is treated as 2.
pub fn axis_ticks(
    axis_max: f64,
    tick_count: usize,
    rounding: TickRounding,
    surface: &Surface,
) -> Vec<AxisTick> {
    let intervals = (tick_count.max(2) - 1) as f64;
    (0..tick_count.max(2))
        .map(|i| {
            let frac = i as f64 / intervals;
            let value = axis_max * (1.0 - frac);
            AxisTick {
                y: surface.padding.top + frac * surface.chart_height(),
                value: match rounding {
                    TickRounding::Exact => value,
                    TickRounding::Round => value.round(),
                },
            }
        })
        .collect()
}

/// Grouped bar chart: each category gets `chart_width / label_count` of
/// horizontal space, and each series a bar of width
/// `group_width / (series_count + 1)`, centered as a block within the group.
///
/// Bars never exceed the plot height while `0 <= value <= axis_max`; larger
/// values overflow upward unclamped.
pub fn grouped_bars(
    axis: &CategoryAxis,
    series: &[Series],
    axis_max: f64,
    surface: &Surface,
) -> Result<GroupedBarLayout, GeometryError> {
    check_categories(axis, "bar", 1)?;
    for s in series {
        check_shape(axis, &s.name, s.values.len())?;
    }

    let group_width = surface.chart_width() / axis.len() as f64;
    let bar_width = group_width / (series.len() + 1) as f64;
    let label_y = surface.height - surface.padding.bottom + CATEGORY_LABEL_DROP;

    let mut bars = Vec::with_capacity(series.len() * axis.len());
    let mut labels = Vec::with_capacity(axis.len());
    for i in 0..axis.len() {
        let group_x = surface.padding.left + i as f64 * group_width;
        labels.push(CategoryAnchor {
            category: i,
            x: group_x + group_width / 2.0,
            y: label_y,
        });
        for (j, s) in series.iter().enumerate() {
            let bar_height = (s.values[i] / axis_max) * surface.chart_height();
            let bar_x = group_x + group_width / 2.0 - bar_width * series.len() as f64 / 2.0
                + j as f64 * bar_width;
            bars.push(BarRect {
                series: j,
                category: i,
                x: bar_x,
                y: surface.height - surface.padding.bottom - bar_height,
                width: bar_width,
                height: bar_height,
            });
        }
    }
    Ok(GroupedBarLayout { bars, labels })
}

/// Target overlay for a grouped bar chart: one point per category at the
/// group's horizontal center, forming a connected polyline.
pub fn target_line(
    target_values: &[f64],
    axis: &CategoryAxis,
    axis_max: f64,
    surface: &Surface,
) -> Result<Vec<Point>, GeometryError> {
    check_categories(axis, "target-line", 1)?;
    check_shape(axis, "target", target_values.len())?;

    let group_width = surface.chart_width() / axis.len() as f64;
    Ok(target_values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point {
            x: surface.padding.left + i as f64 * group_width + group_width / 2.0,
            y: value_to_y(v, axis_max, surface),
        })
        .collect())
}

/// Line chart: point `i` of each series sits at
/// `left + i * chart_width / (label_count - 1)`, spanning the plot
/// edge-to-edge — intentionally unlike bar charts, which center within
/// category groups. Needs at least two categories.
pub fn line_series(
    axis: &CategoryAxis,
    series: &[Series],
    axis_max: f64,
    surface: &Surface,
) -> Result<LineChartLayout, GeometryError> {
    check_categories(axis, "line", 2)?;
    for s in series {
        check_shape(axis, &s.name, s.values.len())?;
    }

    let step = surface.chart_width() / (axis.len() - 1) as f64;
    let label_y = surface.height - surface.padding.bottom + CATEGORY_LABEL_DROP;

    let labels = (0..axis.len())
        .map(|i| CategoryAnchor {
            category: i,
            x: surface.padding.left + i as f64 * step,
            y: label_y,
        })
        .collect();

    let polylines = series
        .iter()
        .enumerate()
        .map(|(j, s)| SeriesPolyline {
            series: j,
            points: s
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| Point {
                    x: surface.padding.left + i as f64 * step,
                    y: value_to_y(v, axis_max, surface),
                })
                .collect(),
        })
        .collect();

    Ok(LineChartLayout { polylines, labels })
}

/// Donut chart: walk segments in input order accumulating a running
/// percentage; each occupies `[cumulative, cumulative + value)` of the
/// circle. Sums past 100 are emitted as given, not normalized; segment order
/// is preserved because it affects the visual stacking.
pub fn donut(segments: &[DonutSegment]) -> Result<DonutLayout, GeometryError> {
    if segments.is_empty() {
        return Err(GeometryError::InsufficientCategories {
            chart: "donut",
            required: 1,
            got: 0,
        });
    }

    let mut cumulative = 0.0;
    let mut stops = Vec::with_capacity(segments.len());
    let mut legend = Vec::with_capacity(segments.len());
    for seg in segments {
        stops.push(DonutStop {
            color: seg.color.clone(),
            start: cumulative,
            end: cumulative + seg.value,
        });
        legend.push(DonutLegendEntry {
            label: seg.label.clone(),
            value: seg.value,
            color: seg.color.clone(),
        });
        cumulative += seg.value;
    }
    Ok(DonutLayout { stops, legend })
}

/// Axis maximum for a single series shown in isolation: `max(values) * 1.2`,
/// leaving the tallest bar at roughly 83% of the plot height. Recompute this
/// every time the active series changes.
pub fn single_series_auto_scale(series: &Series) -> Result<f64, GeometryError> {
    if series.values.is_empty() {
        return Err(GeometryError::InsufficientCategories {
            chart: "toggle-bar",
            required: 1,
            got: 0,
        });
    }
    let max = series
        .values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    Ok(max * AUTO_SCALE_HEADROOM)
}

/// Toggle-mode bar chart for one series: auto-scaled axis, bars 60% of their
/// category slot, centered. Distinct from [`grouped_bars`] with a single
/// series, which yields half-slot bars.
///
/// Tick labels for this variant are rounded; pass [`TickRounding::Round`]
/// when building its axis.
pub fn toggle_bars(
    axis: &CategoryAxis,
    series: &Series,
    surface: &Surface,
) -> Result<ToggleBarLayout, GeometryError> {
    check_categories(axis, "toggle-bar", 1)?;
    check_shape(axis, &series.name, series.values.len())?;

    let axis_max = single_series_auto_scale(series)?;
    let slot_width = surface.chart_width() / axis.len() as f64;
    let bar_width = slot_width * TOGGLE_BAR_FRACTION;
    let label_y = surface.height - surface.padding.bottom + CATEGORY_LABEL_DROP;

    let mut bars = Vec::with_capacity(axis.len());
    let mut labels = Vec::with_capacity(axis.len());
    for (i, &v) in series.values.iter().enumerate() {
        let slot_x = surface.padding.left + i as f64 * slot_width;
        let bar_height = (v / axis_max) * surface.chart_height();
        bars.push(BarRect {
            series: 0,
            category: i,
            x: slot_x + (slot_width - bar_width) / 2.0,
            y: surface.height - surface.padding.bottom - bar_height,
            width: bar_width,
            height: bar_height,
        });
        labels.push(CategoryAnchor {
            category: i,
            x: slot_x + slot_width / 2.0,
            y: label_y,
        });
    }
    Ok(ToggleBarLayout {
        axis_max,
        bars,
        labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_derives_plot_extents() {
        let s = Surface::with_width(Some(310.0));
        assert!((s.chart_width() - 250.0).abs() < 1e-9);
        assert!((s.chart_height() - 230.0).abs() < 1e-9);

        let fallback = Surface::with_width(None);
        assert!((fallback.width - 300.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_series_is_rejected() {
        let axis = CategoryAxis::new(["Jan", "Feb"]);
        let series = [Series::new("Water", "#3b82f6", vec![1.0, 2.0, 3.0])];
        let err = grouped_bars(&axis, &series, 10.0, &Surface::default()).unwrap_err();
        assert_eq!(
            err,
            GeometryError::ShapeMismatch {
                series: "Water".into(),
                values: 3,
                categories: 2,
            }
        );
    }

    #[test]
    fn single_category_line_is_rejected() {
        let axis = CategoryAxis::new(["Jan"]);
        let series = [Series::new("Plastic", "#5e35b1", vec![1.0])];
        let err = line_series(&axis, &series, 10.0, &Surface::default()).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::InsufficientCategories {
                chart: "line",
                required: 2,
                got: 1,
            }
        ));
    }
}
