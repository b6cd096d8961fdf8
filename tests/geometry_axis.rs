use ecoinsight::geometry::{Surface, TickRounding, axis_ticks, single_series_auto_scale};
use ecoinsight::models::Series;

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

#[test]
fn five_ticks_divide_the_axis_top_to_bottom() {
    let surface = Surface::with_width(Some(310.0));
    let ticks = axis_ticks(600.0, 5, TickRounding::Exact, &surface);
    assert_eq!(ticks.len(), 5);

    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    for (got, want) in values.iter().zip([600.0, 450.0, 300.0, 150.0, 0.0]) {
        approx(*got, want);
    }

    // Pixel positions run top to bottom in equal steps of chart_height / 4.
    approx(ticks[0].y, 20.0);
    approx(ticks[1].y, 20.0 + 230.0 / 4.0);
    approx(ticks[4].y, 250.0);
}

#[test]
fn exact_ticks_keep_fractional_values() {
    let surface = Surface::default();
    let ticks = axis_ticks(250.0, 5, TickRounding::Exact, &surface);
    approx(ticks[1].value, 187.5);
}

#[test]
fn rounded_ticks_snap_to_whole_numbers() {
    let surface = Surface::default();
    let ticks = axis_ticks(100.5, 5, TickRounding::Round, &surface);
    let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![101.0, 75.0, 50.0, 25.0, 0.0]);
}

#[test]
fn auto_scale_adds_twenty_percent_headroom() {
    let series = Series::new("Electricity", "#f59e0b", vec![10.0, 20.0, 30.0]);
    approx(single_series_auto_scale(&series).unwrap(), 36.0);
}

#[test]
fn auto_scale_rejects_empty_series() {
    let series = Series::new("Empty", "#000000", vec![]);
    assert!(single_series_auto_scale(&series).is_err());
}

#[test]
fn ticks_are_deterministic_for_identical_inputs() {
    let surface = Surface::with_width(Some(500.0));
    let a = axis_ticks(600.0, 5, TickRounding::Exact, &surface);
    let b = axis_ticks(600.0, 5, TickRounding::Exact, &surface);
    assert_eq!(a, b);
}
