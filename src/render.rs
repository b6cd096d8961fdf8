//! Presentation layer: turn computed geometry into SVG documents and HTML
//! fragments.
//!
//! The geometry module stays rendering-free; everything markup-shaped lives
//! here. Charts become standalone SVG text, the donut becomes a CSS
//! conic-gradient, and the card/table sections become HTML fragments a host
//! page can drop in.

use crate::geometry::{self, DonutLayout, Surface, TickRounding};
use crate::models::{
    Achievement, ActivityEntry, ChartData, DonutSegment, GoalProgress, Page, Series, StatCard,
    TrendDirection, WasteEntry,
};
use crate::store::DashboardStore;
use anyhow::{Result, bail};
use num_format::{Locale, ToFormattedString};
use std::fmt::Write as _;

/// Map a user-provided locale tag to a num-format locale.
/// Supported tags (case-insensitive): "en", "us", "en_US", "de", "de_DE", "fr". Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        _ => &Locale::en,
    }
}

/// Axis label text: whole values get thousands separators, fractional values
/// print as-is.
fn fmt_axis_value(value: f64, locale: &Locale) -> String {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        (value as i64).to_formatted_string(locale)
    } else {
        format!("{value}")
    }
}

/// Escape text/attribute content for XML and HTML output.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn svg_open(out: &mut String, surface: &Surface) {
    let _ = writeln!(
        out,
        r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        surface.width, surface.height
    );
}

fn write_axis_ticks(out: &mut String, surface: &Surface, ticks: &[geometry::AxisTick], locale: &Locale) {
    for tick in ticks {
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" class="axis-label">{}</text>"#,
            surface.padding.left - 5.0,
            tick.y + 4.0,
            fmt_axis_value(tick.value, locale)
        );
    }
}

fn write_category_labels(
    out: &mut String,
    anchors: &[geometry::CategoryAnchor],
    labels: &[String],
) {
    for anchor in anchors {
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" class="axis-label">{}</text>"#,
            anchor.x,
            anchor.y,
            escape(&labels[anchor.category])
        );
    }
}

fn points_attr(points: &[geometry::Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Grouped bar chart with optional target-line overlay, as an SVG document.
pub fn render_bar_chart_svg(
    data: &ChartData,
    container_width: Option<f64>,
    locale_tag: &str,
) -> Result<String> {
    let Some(axis_max) = data.y_axis_max else {
        bail!("bar chart needs an explicit y-axis maximum");
    };
    let surface = Surface::with_width(container_width);
    let locale = map_locale(locale_tag);
    let ticks = geometry::axis_ticks(axis_max, 5, TickRounding::Exact, &surface);
    let layout = geometry::grouped_bars(&data.axis, &data.series, axis_max, &surface)?;

    let mut svg = String::new();
    svg_open(&mut svg, &surface);
    write_axis_ticks(&mut svg, &surface, &ticks, locale);
    write_category_labels(&mut svg, &layout.labels, &data.axis.labels);
    for bar in &layout.bars {
        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" class="bar"></rect>"#,
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            escape(&data.series[bar.series].color)
        );
    }
    if let Some(targets) = &data.target_values {
        let points = geometry::target_line(targets, &data.axis, axis_max, &surface)?;
        let _ = writeln!(
            svg,
            r#"  <polyline points="{}" class="target-line-svg"></polyline>"#,
            points_attr(&points)
        );
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Multi-series line chart as an SVG document.
pub fn render_line_chart_svg(
    data: &ChartData,
    container_width: Option<f64>,
    locale_tag: &str,
) -> Result<String> {
    let Some(axis_max) = data.y_axis_max else {
        bail!("line chart needs an explicit y-axis maximum");
    };
    let surface = Surface::with_width(container_width);
    let locale = map_locale(locale_tag);
    let ticks = geometry::axis_ticks(axis_max, 5, TickRounding::Exact, &surface);
    let layout = geometry::line_series(&data.axis, &data.series, axis_max, &surface)?;

    let mut svg = String::new();
    svg_open(&mut svg, &surface);
    write_axis_ticks(&mut svg, &surface, &ticks, locale);
    write_category_labels(&mut svg, &layout.labels, &data.axis.labels);
    for line in &layout.polylines {
        let _ = writeln!(
            svg,
            r#"  <polyline points="{}" class="line-chart-svg" style="stroke:{}"></polyline>"#,
            points_attr(&line.points),
            escape(&data.series[line.series].color)
        );
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Toggle-mode chart for one series of a multi-series dataset: auto-scaled
/// axis, rounded tick labels. Must be re-rendered whenever the active series
/// changes.
pub fn render_toggle_chart_svg(
    data: &ChartData,
    active_series: usize,
    container_width: Option<f64>,
    locale_tag: &str,
) -> Result<String> {
    let Some(series) = data.series.get(active_series) else {
        bail!(
            "no series at index {active_series} (chart has {})",
            data.series.len()
        );
    };
    let surface = Surface::with_width(container_width);
    let locale = map_locale(locale_tag);
    let layout = geometry::toggle_bars(&data.axis, series, &surface)?;
    let ticks = geometry::axis_ticks(layout.axis_max, 5, TickRounding::Round, &surface);

    let mut svg = String::new();
    svg_open(&mut svg, &surface);
    write_axis_ticks(&mut svg, &surface, &ticks, locale);
    write_category_labels(&mut svg, &layout.labels, &data.axis.labels);
    for bar in &layout.bars {
        let _ = writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" class="bar"></rect>"#,
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            escape(&series.color)
        );
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// CSS `conic-gradient(...)` value for a donut layout.
pub fn donut_gradient_css(layout: &DonutLayout) -> String {
    let stops = layout
        .stops
        .iter()
        .map(|s| format!("{} {}% {}%", s.color, s.start, s.end))
        .collect::<Vec<_>>()
        .join(", ");
    format!("conic-gradient({stops})")
}

/// Donut chart plus its legend, as an HTML fragment.
pub fn donut_markup(segments: &[DonutSegment]) -> Result<String> {
    let layout = geometry::donut(segments)?;
    let mut html = String::new();
    let _ = writeln!(
        html,
        r#"<div class="donut-chart" style="background: {};"></div>"#,
        donut_gradient_css(&layout)
    );
    html.push_str("<div class=\"donut-legend\">\n");
    for entry in &layout.legend {
        let _ = writeln!(
            html,
            r#"  <div class="legend-item"><span class="legend-dot" style="background-color:{};"></span>{}: {}%</div>"#,
            escape(&entry.color),
            escape(&entry.label),
            entry.value
        );
    }
    html.push_str("</div>\n");
    Ok(html)
}

/// Series legend shown next to a bar/line chart.
pub fn chart_legend_html(series: &[Series], include_target: bool) -> String {
    let mut html = String::new();
    for s in series {
        let _ = writeln!(
            html,
            r#"<div class="legend-item"><span class="legend-dot" style="background-color:{};"></span>{}</div>"#,
            escape(&s.color),
            escape(&s.name)
        );
    }
    if include_target {
        html.push_str("<div class=\"legend-item\"><span class=\"legend-dot target\"></span>Target</div>\n");
    }
    html
}

/// Statistic cards, as an HTML fragment.
pub fn stat_cards_html(cards: &[StatCard]) -> String {
    let mut html = String::new();
    for card in cards {
        html.push_str("<div class=\"stat-card\">\n");
        let _ = writeln!(
            html,
            r#"  <div class="card-header"><h3>{}</h3><img src="{}" alt="icon"></div>"#,
            escape(&card.label),
            escape(&card.icon)
        );
        let _ = writeln!(
            html,
            r#"  <div class="card-value">{} <span class="unit">{}</span></div>"#,
            card.value,
            escape(&card.unit)
        );
        if let (Some(trend), Some(direction)) = (card.trend, card.trend_direction()) {
            let (class, arrow) = match direction {
                TrendDirection::Positive => ("positive", "public/arrowup.svg"),
                TrendDirection::Negative => ("negative", "public/arrowdown.svg"),
            };
            let _ = writeln!(
                html,
                r#"  <div class="card-trend {class}"><img src="{arrow}" alt="trend"> {trend}% vs. last period</div>"#
            );
        }
        if let Some(progress) = card.progress {
            let _ = writeln!(
                html,
                r#"  <div class="progress-bar-container-small"><div class="progress-bar" style="width: {}%; background-color: {};"></div></div>"#,
                progress,
                escape(card.color.as_deref().unwrap_or_default())
            );
        }
        html.push_str("</div>\n");
    }
    html
}

/// Recent-activity table rows.
pub fn activity_table_html(entries: &[ActivityEntry]) -> String {
    let mut html = String::new();
    for e in entries {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            e.date,
            escape(&e.category),
            escape(&e.description)
        );
    }
    html
}

/// Waste-sources table rows.
pub fn waste_table_html(entries: &[WasteEntry]) -> String {
    let mut html = String::new();
    for e in entries {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}kg</td><td>{}</td><td>{}</td></tr>",
            escape(&e.process),
            escape(&e.waste_type),
            e.amount_kg,
            escape(&e.method),
            e.recyclable.as_str()
        );
    }
    html
}

/// Goal progress cards with embedded percent labels.
pub fn goal_progress_html(goals: &[GoalProgress]) -> String {
    let mut html = String::new();
    for goal in goals {
        let _ = writeln!(
            html,
            r#"<div class="goal-card"><div class="card-header"><h3>{}</h3><img src="{}" alt=""></div><div class="progress-bar-container"><div class="progress-bar" style="width: {}%; background-color: {};"><span>{}%</span></div></div></div>"#,
            escape(&goal.label),
            escape(&goal.icon),
            goal.progress,
            escape(&goal.color),
            goal.progress
        );
    }
    html
}

/// Achievement cards.
pub fn achievements_html(achievements: &[Achievement]) -> String {
    let mut html = String::new();
    for ach in achievements {
        let _ = writeln!(
            html,
            r#"<div class="achievement-card"><img src="{}" class="achievement-card-icon" alt="achievement icon"><h4>{}</h4><p>{}</p></div>"#,
            escape(&ach.icon),
            escape(&ach.title),
            escape(&ach.description)
        );
    }
    html
}

/// One rendered section of a page: a file name plus its SVG/HTML contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFragment {
    pub file_name: String,
    pub markup: String,
}

fn fragment(file_name: impl Into<String>, markup: String) -> PageFragment {
    PageFragment {
        file_name: file_name.into(),
        markup,
    }
}

/// Render every section of one page from the current store contents.
///
/// The page argument plays the role of the sidebar navigation: exactly one
/// section is produced per call, always recomputed from scratch.
pub fn render_page(
    page: Page,
    store: &DashboardStore,
    container_width: Option<f64>,
    locale_tag: &str,
) -> Result<Vec<PageFragment>> {
    let mut fragments = Vec::new();
    match page {
        Page::Dashboard => {
            fragments.push(fragment(
                "dashboard-stats.html",
                stat_cards_html(&store.dashboard_stats),
            ));
            fragments.push(fragment(
                "recent-activity-table.html",
                activity_table_html(&store.recent_activity),
            ));
            fragments.push(fragment(
                "dashboard-bar-chart.svg",
                render_bar_chart_svg(&store.dashboard_bar_chart, container_width, locale_tag)?,
            ));
            fragments.push(fragment(
                "dashboard-bar-chart-legend.html",
                chart_legend_html(
                    &store.dashboard_bar_chart.series,
                    store.dashboard_bar_chart.target_values.is_some(),
                ),
            ));
            fragments.push(fragment(
                "dashboard-donut-chart.html",
                donut_markup(&store.donut_segments)?,
            ));
        }
        Page::Resources => {
            fragments.push(fragment(
                "resource-stats.html",
                stat_cards_html(&store.resource_stats),
            ));
            // One file per toggle choice; the axis max is re-derived for each.
            for (idx, series) in store.resource_bar_chart.series.iter().enumerate() {
                fragments.push(fragment(
                    format!("resource-bar-chart-{}.svg", series.name.to_lowercase()),
                    render_toggle_chart_svg(
                        &store.resource_bar_chart,
                        idx,
                        container_width,
                        locale_tag,
                    )?,
                ));
            }
        }
        Page::Analytics => {
            fragments.push(fragment(
                "analytics-stats.html",
                stat_cards_html(&store.analytics_stats),
            ));
            fragments.push(fragment(
                "waste-sources-table.html",
                waste_table_html(&store.waste_sources),
            ));
            fragments.push(fragment(
                "analytics-donut-chart.html",
                donut_markup(&store.donut_segments)?,
            ));
            fragments.push(fragment(
                "analytics-line-chart.svg",
                render_line_chart_svg(&store.analytics_line_chart, container_width, locale_tag)?,
            ));
            fragments.push(fragment(
                "analytics-line-chart-legend.html",
                chart_legend_html(&store.analytics_line_chart.series, false),
            ));
        }
        Page::Goals => {
            fragments.push(fragment(
                "goals-summary-stats.html",
                stat_cards_html(&store.goals_summary),
            ));
            fragments.push(fragment(
                "goals-progress-cards.html",
                goal_progress_html(&store.goals_progress),
            ));
            fragments.push(fragment(
                "achievements.html",
                achievements_html(&store.achievements),
            ));
        }
    }
    Ok(fragments)
}
