//! In-memory dashboard data, behind an explicit store value.
//!
//! The store replaces ambient globals: readers borrow a snapshot at call
//! time, and all mutation goes through the methods below. Everything runs on
//! one logical turn, so there is no locking and no diffing; each render
//! recomputes from whatever the store holds now.

use crate::models::{
    Achievement, ActivityEntry, CategoryAxis, ChartData, DonutSegment, Goal, GoalProgress,
    Recyclable, ResourceLog, Series, StatCard, WasteEntry,
};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStore {
    pub dashboard_stats: Vec<StatCard>,
    pub resource_stats: Vec<StatCard>,
    pub analytics_stats: Vec<StatCard>,
    pub goals_summary: Vec<StatCard>,
    pub goals_progress: Vec<GoalProgress>,
    pub achievements: Vec<Achievement>,
    pub recent_activity: Vec<ActivityEntry>,
    pub waste_sources: Vec<WasteEntry>,
    pub dashboard_bar_chart: ChartData,
    pub resource_bar_chart: ChartData,
    pub analytics_line_chart: ChartData,
    pub donut_segments: Vec<DonutSegment>,
    pub resource_logs: Vec<ResourceLog>,
    pub goals: Vec<Goal>,
}

fn stat(label: &str, value: f64, unit: &str, trend: f64, icon: &str) -> StatCard {
    StatCard {
        label: label.into(),
        value,
        unit: unit.into(),
        trend: Some(trend),
        icon: icon.into(),
        base_value: None,
        progress: None,
        color: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

impl DashboardStore {
    /// The built-in sample dataset every page renders from.
    pub fn sample() -> Self {
        let dashboard_stats = vec![
            StatCard {
                base_value: Some(320.0),
                ..stat("Resource Efficiency", 320.0, "kWh", -8.5, "public/electric.svg")
            },
            StatCard {
                base_value: Some(20.0),
                ..stat("Water Consumption", 20.0, "m³", -3.2, "public/waterbig.svg")
            },
            StatCard {
                base_value: Some(1200.0),
                ..stat("Waste Generated", 1200.0, "kg", 1.2, "public/recycle-sign.png")
            },
            StatCard {
                base_value: Some(85.0),
                ..stat("Resource Efficiency", 85.0, "%", 4.7, "public/industrial.svg")
            },
        ];
        let resource_stats = vec![
            stat("Electricity", 8750.0, "kWh", -8.5, "public/electric.svg"),
            stat("Water Consumption", 20.0, "m³", -6.3, "public/waterbig.svg"),
            stat("Waste Generated", 1200.0, "kg", 3.2, "public/recycle-sign.png"),
        ];
        let analytics_stats = vec![
            stat("Resource Efficiency", 320.0, "kWh", -8.5, "public/electric.svg"),
            stat("Water Consumption", 20.0, "m³", -3.2, "public/waterbig.svg"),
            stat("Waste Recycled", 1200.0, "kg", 1.2, "public/recycle-sign.png"),
            stat("Carbon Emmision", 85.0, "%", 4.7, "public/industrial.svg"),
        ];
        let goals_summary = vec![
            goal_stat("Energy Goals", 3.0, 60.0, "#f59e0b", "public/electric.svg"),
            goal_stat("Water Goals", 2.0, 40.0, "#3b82f6", "public/waterbig.svg"),
            goal_stat("Waste Goals", 4.0, 80.0, "#10b981", "public/recycle-sign.png"),
            goal_stat("Carbon Goals", 2.0, 50.0, "#6b7280", "public/industrial.svg"),
        ];
        let goals_progress = vec![
            goal_progress("Energy Goals", 75.0, "#f59e0b", "public/electric.svg"),
            goal_progress("Waste Goals", 85.0, "#10b981", "public/recycle-sign.png"),
            goal_progress("Water Goals", 50.0, "#3b82f6", "public/waterbig.svg"),
            goal_progress("Carbon Goals", 60.0, "#6b7280", "public/industrial.svg"),
        ];
        let achievements = vec![
            achievement(
                "Water Recycling System",
                "Implemented closed-loop water recycling for Production Line A",
                "public/waterbig.svg",
            ),
            achievement(
                "Solar Panel Installation",
                "Completed installation of roof mounted solar panels",
                "public/electric.svg",
            ),
            achievement(
                "Paper Usage Reduction",
                "Reduced paper consumption by 25% through digitalization initiatives",
                "public/box.svg",
            ),
        ];
        let recent_activity = vec![
            activity(date(2025, 5, 15), "Energy", "HVAC system optimization completed"),
            activity(date(2025, 5, 16), "Water", "Water recycling system maintenance"),
            activity(date(2025, 5, 17), "Waste", "Plasting recycling target updated"),
        ];
        let waste_sources = vec![
            waste("Packaging", "Plastic", 180.0, "Mechanical Recycling"),
            waste("Assembly", "Metal", 120.0, "Metal recovery"),
            waste("Office Operations", "Paper", 150.0, "Pulping"),
        ];

        let months12 = CategoryAxis::new([
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ]);
        let months6 = CategoryAxis::new(["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);

        let dashboard_bar_chart = ChartData {
            axis: months12,
            series: vec![
                Series::new(
                    "Water",
                    "#3b82f6",
                    vec![
                        400.0, 420.0, 390.0, 380.0, 410.0, 390.0, 350.0, 330.0, 320.0, 340.0,
                        310.0, 290.0,
                    ],
                ),
                Series::new(
                    "Electricity",
                    "#f59e0b",
                    vec![
                        380.0, 350.0, 340.0, 330.0, 320.0, 310.0, 290.0, 270.0, 260.0, 250.0,
                        240.0, 220.0,
                    ],
                ),
            ],
            target_values: Some(vec![
                450.0, 440.0, 430.0, 435.0, 420.0, 425.0, 410.0, 400.0, 395.0, 390.0, 380.0, 370.0,
            ]),
            y_axis_max: Some(600.0),
        };
        let resource_bar_chart = ChartData {
            axis: months6.clone(),
            series: vec![
                Series::new(
                    "Electricity",
                    "#f59e0b",
                    vec![8750.0, 8600.0, 8800.0, 8700.0, 8900.0, 8850.0],
                ),
                Series::new("Water", "#3b82f6", vec![20.0, 22.0, 21.0, 23.0, 20.0, 24.0]),
                Series::new(
                    "Waste",
                    "#10b981",
                    vec![1200.0, 1250.0, 1150.0, 1300.0, 1220.0, 1280.0],
                ),
            ],
            target_values: None,
            // Toggle mode: the axis maximum comes from the active series.
            y_axis_max: None,
        };
        let analytics_line_chart = ChartData {
            axis: months6,
            series: vec![
                Series::new(
                    "Plastic",
                    "#5e35b1",
                    vec![180.0, 190.0, 170.0, 200.0, 180.0, 210.0],
                ),
                Series::new(
                    "Paper",
                    "#1e88e5",
                    vec![150.0, 160.0, 155.0, 165.0, 170.0, 160.0],
                ),
                Series::new(
                    "Metal",
                    "#fb8c00",
                    vec![120.0, 110.0, 130.0, 125.0, 140.0, 135.0],
                ),
            ],
            target_values: None,
            y_axis_max: Some(250.0),
        };
        let donut_segments = vec![
            donut_segment("Plastic", 38.0, "#5e35b1"),
            donut_segment("Paper", 30.0, "#1e88e5"),
            donut_segment("Metal", 20.0, "#fb8c00"),
            donut_segment("Organic", 7.0, "#43a047"),
            donut_segment("Electronic", 5.0, "#e53935"),
        ];

        Self {
            dashboard_stats,
            resource_stats,
            analytics_stats,
            goals_summary,
            goals_progress,
            achievements,
            recent_activity,
            waste_sources,
            dashboard_bar_chart,
            resource_bar_chart,
            analytics_line_chart,
            donut_segments,
            resource_logs: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Append a waste entry; it shows up in the waste-sources table on the
    /// next render call.
    pub fn append_waste_entry(&mut self, entry: WasteEntry) {
        self.waste_sources.push(entry);
    }

    pub fn append_resource_log(&mut self, log: ResourceLog) {
        self.resource_logs.push(log);
    }

    pub fn append_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Date-picker behavior: jitter every stat that carries a base value by
    /// up to ±10% of it, rounded to a whole number. Stats without a base
    /// value are left alone.
    pub fn randomize_stats<R: Rng>(&mut self, rng: &mut R) {
        for card in self
            .dashboard_stats
            .iter_mut()
            .chain(self.resource_stats.iter_mut())
            .chain(self.analytics_stats.iter_mut())
            .chain(self.goals_summary.iter_mut())
        {
            if let Some(base) = card.base_value {
                let factor = (rng.r#gen::<f64>() - 0.5) * 0.2;
                card.value = (base * (1.0 + factor)).round();
            }
        }
    }
}

fn goal_stat(label: &str, value: f64, progress: f64, color: &str, icon: &str) -> StatCard {
    StatCard {
        label: label.into(),
        value,
        unit: "goals".into(),
        trend: None,
        icon: icon.into(),
        base_value: None,
        progress: Some(progress),
        color: Some(color.into()),
    }
}

fn goal_progress(label: &str, progress: f64, color: &str, icon: &str) -> GoalProgress {
    GoalProgress {
        label: label.into(),
        progress,
        color: color.into(),
        icon: icon.into(),
    }
}

fn achievement(title: &str, description: &str, icon: &str) -> Achievement {
    Achievement {
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn activity(date: NaiveDate, category: &str, description: &str) -> ActivityEntry {
    ActivityEntry {
        date,
        category: category.into(),
        description: description.into(),
    }
}

fn waste(process: &str, waste_type: &str, amount_kg: f64, method: &str) -> WasteEntry {
    WasteEntry {
        process: process.into(),
        waste_type: waste_type.into(),
        amount_kg,
        method: method.into(),
        recyclable: Recyclable::Yes,
    }
}

fn donut_segment(label: &str, value: f64, color: &str) -> DonutSegment {
    DonutSegment {
        label: label.into(),
        value,
        color: color.into(),
    }
}
