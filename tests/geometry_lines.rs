use ecoinsight::geometry::{GeometryError, Surface, line_series};
use ecoinsight::models::{CategoryAxis, Series};

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

fn half_year() -> CategoryAxis {
    CategoryAxis::new(["Jan", "Feb", "Mar", "Apr", "May", "Jun"])
}

#[test]
fn points_span_the_plot_edge_to_edge() {
    let surface = Surface::with_width(Some(310.0));
    let series = [Series::new(
        "Plastic",
        "#5e35b1",
        vec![180.0, 190.0, 170.0, 200.0, 180.0, 210.0],
    )];
    let layout = line_series(&half_year(), &series, 250.0, &surface).unwrap();

    let points = &layout.polylines[0].points;
    assert_eq!(points.len(), 6);
    approx(points[0].x, surface.padding.left);
    approx(
        points[5].x,
        surface.padding.left + surface.chart_width(),
    );
    // Evenly spaced at chart_width / (n - 1).
    let step = surface.chart_width() / 5.0;
    for (i, p) in points.iter().enumerate() {
        approx(p.x, surface.padding.left + i as f64 * step);
    }
}

#[test]
fn values_map_onto_the_shared_axis_scale() {
    let surface = Surface::with_width(Some(310.0));
    let axis = CategoryAxis::new(["Jan", "Feb"]);
    let series = [Series::new("A", "#111111", vec![0.0, 250.0])];
    let layout = line_series(&axis, &series, 250.0, &surface).unwrap();

    let points = &layout.polylines[0].points;
    approx(points[0].y, surface.height - surface.padding.bottom);
    approx(points[1].y, surface.padding.top);
}

#[test]
fn every_series_gets_its_own_polyline() {
    let surface = Surface::default();
    let series = [
        Series::new("Plastic", "#5e35b1", vec![1.0; 6]),
        Series::new("Paper", "#1e88e5", vec![2.0; 6]),
        Series::new("Metal", "#fb8c00", vec![3.0; 6]),
    ];
    let layout = line_series(&half_year(), &series, 10.0, &surface).unwrap();
    assert_eq!(layout.polylines.len(), 3);
    for (i, line) in layout.polylines.iter().enumerate() {
        assert_eq!(line.series, i);
        assert_eq!(line.points.len(), 6);
    }
}

#[test]
fn one_category_cannot_make_a_line() {
    let axis = CategoryAxis::new(["Jan"]);
    let series = [Series::new("A", "#111111", vec![1.0])];
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

#[test]
fn mismatched_series_length_is_rejected() {
    let axis = CategoryAxis::new(["Jan", "Feb", "Mar"]);
    let series = [Series::new("Paper", "#1e88e5", vec![1.0, 2.0])];
    let err = line_series(&axis, &series, 10.0, &Surface::default()).unwrap_err();
    assert_eq!(
        err,
        GeometryError::ShapeMismatch {
            series: "Paper".into(),
            values: 2,
            categories: 3,
        }
    );
}
