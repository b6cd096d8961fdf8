use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordered category labels along the horizontal axis of a bar/line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub labels: Vec<String>,
}

impl CategoryAxis {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One named, colored sequence of numeric values aligned with the category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    /// CSS color string, e.g. `"#3b82f6"`.
    pub color: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new<S: Into<String>, C: Into<String>>(name: S, color: C, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

/// Input for a bar or line chart: categories, one or more series, an optional
/// target overlay, and an optional explicit axis maximum.
///
/// `y_axis_max` is never derived for multi-series display; callers either set
/// it here or use the single-series auto-scale in toggle mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub axis: CategoryAxis,
    pub series: Vec<Series>,
    pub target_values: Option<Vec<f64>>,
    pub y_axis_max: Option<f64>,
}

/// One slice of a donut chart. Well-formed inputs sum to 100 but the geometry
/// does not enforce or normalize this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    pub label: String,
    /// Percentage of the circle occupied by this segment.
    pub value: f64,
    pub color: String,
}

/// A headline statistic card (value + unit, optional trend vs. last period,
/// optional progress bar for goal summaries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub trend: Option<f64>,
    pub icon: String,
    /// Reference value the date-picker randomization jitters around.
    pub base_value: Option<f64>,
    pub progress: Option<f64>,
    pub color: Option<String>,
}

impl StatCard {
    /// Direction shown next to the trend figure. Positive trends render with
    /// the upward arrow, everything else with the downward one.
    pub fn trend_direction(&self) -> Option<TrendDirection> {
        self.trend.map(|t| {
            if t > 0.0 {
                TrendDirection::Positive
            } else {
                TrendDirection::Negative
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Positive,
    Negative,
}

/// One row in the recent-activity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
}

/// One row in the waste-sources table; also what the waste-entry form appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEntry {
    pub process: String,
    pub waste_type: String,
    pub amount_kg: f64,
    pub method: String,
    pub recyclable: Recyclable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recyclable {
    Yes,
    No,
}

impl Recyclable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recyclable::Yes => "Yes",
            Recyclable::No => "No",
        }
    }
}

/// A goal progress card (label + percent complete + bar color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub label: String,
    pub progress: f64,
    pub color: String,
    pub icon: String,
}

/// A completed sustainability initiative shown on the goals page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Electricity,
    Water,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Electricity => "Electricity",
            ResourceKind::Water => "Water",
        }
    }
}

/// A usage reading appended by the resource-log form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLog {
    pub resource: ResourceKind,
    pub usage: f64,
}

/// A user-defined goal appended by the goal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target: String,
}

/// The dashboard's page sections. Exactly one page is active at a time;
/// switching pages re-renders that page from the current store contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    Resources,
    Analytics,
    Goals,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Resources, Page::Analytics, Page::Goals];

    /// Section id, the hash fragment the sidebar links point at.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Resources => "resource-management",
            Page::Analytics => "analytics",
            Page::Goals => "sustainability-goals",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Resources => "Resource Management",
            Page::Analytics => "Analytics",
            Page::Goals => "Sustainability Goals",
        }
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Page::Dashboard),
            "resources" | "resource-management" => Ok(Page::Resources),
            "analytics" => Ok(Page::Analytics),
            "goals" | "sustainability-goals" => Ok(Page::Goals),
            other => Err(format!("unknown page: {other}")),
        }
    }
}
