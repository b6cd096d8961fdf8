use ecoinsight::models::{Goal, Recyclable, ResourceKind, ResourceLog, WasteEntry};
use ecoinsight::render::waste_table_html;
use ecoinsight::store::DashboardStore;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn sample_dataset_is_well_formed() {
    let store = DashboardStore::sample();

    assert_eq!(store.dashboard_bar_chart.axis.len(), 12);
    for s in &store.dashboard_bar_chart.series {
        assert_eq!(s.values.len(), 12);
    }
    assert_eq!(
        store
            .dashboard_bar_chart
            .target_values
            .as_ref()
            .map(Vec::len),
        Some(12)
    );

    assert_eq!(store.analytics_line_chart.axis.len(), 6);
    assert_eq!(store.analytics_line_chart.y_axis_max, Some(250.0));

    // The resource chart is toggle-mode: no explicit axis maximum.
    assert_eq!(store.resource_bar_chart.y_axis_max, None);

    let donut_total: f64 = store.donut_segments.iter().map(|s| s.value).sum();
    assert!((donut_total - 100.0).abs() < 1e-9);

    assert!(store.resource_logs.is_empty());
    assert!(store.goals.is_empty());
}

#[test]
fn appended_waste_entry_is_visible_to_the_next_render() {
    let mut store = DashboardStore::sample();
    let before = store.waste_sources.len();
    store.append_waste_entry(WasteEntry {
        process: "Finishing".into(),
        waste_type: "Solvent".into(),
        amount_kg: 42.0,
        method: "Distillation".into(),
        recyclable: Recyclable::No,
    });
    assert_eq!(store.waste_sources.len(), before + 1);

    let table = waste_table_html(&store.waste_sources);
    assert!(table.contains("Finishing"));
    assert!(table.contains("42kg"));
    assert!(table.contains("<td>No</td>"));
}

#[test]
fn appended_logs_and_goals_accumulate() {
    let mut store = DashboardStore::sample();
    store.append_resource_log(ResourceLog {
        resource: ResourceKind::Water,
        usage: 17.5,
    });
    store.append_goal(Goal {
        name: "Cut standby power".into(),
        target: "5% by Q4".into(),
    });
    assert_eq!(store.resource_logs.len(), 1);
    assert_eq!(store.goals.len(), 1);
}

#[test]
fn randomize_jitters_only_stats_with_a_base_value() {
    let mut store = DashboardStore::sample();
    let resource_before = store.resource_stats.clone();
    let goals_before = store.goals_summary.clone();

    let mut rng = StdRng::seed_from_u64(7);
    store.randomize_stats(&mut rng);

    for card in &store.dashboard_stats {
        let base = card.base_value.expect("dashboard stats carry base values");
        // Rounded, and within ±10% of the base.
        assert_eq!(card.value.fract(), 0.0);
        assert!(card.value >= (base * 0.9).floor());
        assert!(card.value <= (base * 1.1).ceil());
    }

    // No base value, no jitter.
    assert_eq!(store.resource_stats, resource_before);
    assert_eq!(store.goals_summary, goals_before);
}

#[test]
fn randomize_is_reproducible_with_a_seeded_rng() {
    let mut a = DashboardStore::sample();
    let mut b = DashboardStore::sample();
    a.randomize_stats(&mut StdRng::seed_from_u64(99));
    b.randomize_stats(&mut StdRng::seed_from_u64(99));
    assert_eq!(a.dashboard_stats, b.dashboard_stats);
}
