//! Public types for the chart layout engine.

/// Fixed padding insets around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// The drawing surface a chart is laid out on.
///
/// Width comes from the live container at render time; height and padding are
/// fixed. There is no resize reactivity: callers re-invoke the layout with the
/// new width when the container changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Surface {
    /// Width used when the container width is unknown.
    pub const FALLBACK_WIDTH: f64 = 300.0;
    pub const HEIGHT: f64 = 280.0;
    pub const PADDING: Padding = Padding {
        top: 20.0,
        right: 20.0,
        bottom: 30.0,
        left: 40.0,
    };

    /// Surface for a measured container width, falling back to
    /// [`Surface::FALLBACK_WIDTH`] when none is available.
    pub fn with_width(container_width: Option<f64>) -> Self {
        Self {
            width: container_width.unwrap_or(Self::FALLBACK_WIDTH),
            height: Self::HEIGHT,
            padding: Self::PADDING,
        }
    }

    /// Horizontal extent of the plot area.
    pub fn chart_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    /// Vertical extent of the plot area.
    pub fn chart_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::with_width(None)
    }
}

/// Whether tick label values are rounded to whole numbers.
///
/// The dashboard rounds tick labels only on the toggle-bar chart; grouped-bar
/// and line charts show exact values. The choice is made explicitly per call
/// rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickRounding {
    Exact,
    Round,
}

/// One Y-axis tick: pixel position and the value its label shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    pub value: f64,
}

/// A point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One bar of a bar chart, in surface pixel space. Indices refer back into
/// the caller's series/category lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub category: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Text anchor for one category label along the X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryAnchor {
    pub category: usize,
    pub x: f64,
    pub y: f64,
}

/// Grouped bar chart layout: bar rects plus category label anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarLayout {
    pub bars: Vec<BarRect>,
    pub labels: Vec<CategoryAnchor>,
}

/// One series' polyline of a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPolyline {
    pub series: usize,
    pub points: Vec<Point>,
}

/// Line chart layout: one polyline per series plus category label anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    pub polylines: Vec<SeriesPolyline>,
    pub labels: Vec<CategoryAnchor>,
}

/// One color stop pair of the donut's conic gradient, as percentages of the
/// full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutStop {
    pub color: String,
    pub start: f64,
    pub end: f64,
}

/// Donut legend entry, in segment order.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutLegendEntry {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Donut chart layout: gradient stops plus legend entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutLayout {
    pub stops: Vec<DonutStop>,
    pub legend: Vec<DonutLegendEntry>,
}

/// Toggle-mode single-series bar chart layout. The axis maximum is derived
/// from the active series and must be recomputed whenever the toggle changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleBarLayout {
    pub axis_max: f64,
    pub bars: Vec<BarRect>,
    pub labels: Vec<CategoryAnchor>,
}
