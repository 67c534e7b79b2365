// File: crates/stepline-core/tests/range.rs
// Purpose: Range resolution across axis groups, sorted shortcuts and explicit bounds.

use stepline_core::{resolve_range, AxisGroup, AxisOptions, AxisRole, ChartError, Dimension, Series};

fn mixed_groups() -> Vec<Series> {
    vec![
        Series::new((0..=10).map(|i| (i as f64, (i * i) as f64)).collect()),
        Series::new((100..=110).map(|i| (i as f64, -(i as f64))).collect())
            .with_groups(AxisGroup::Secondary, AxisGroup::Secondary),
    ]
}

#[test]
fn primary_axis_ignores_secondary_series() {
    let series = mixed_groups();
    let x = resolve_range(&AxisOptions::for_role(AxisRole::X), &series, Dimension::X);
    assert_eq!((x.min, x.max), (Some(0.0), Some(10.0)));

    let x2 = resolve_range(&AxisOptions::for_role(AxisRole::X2), &series, Dimension::X);
    assert_eq!((x2.min, x2.max), (Some(100.0), Some(110.0)));

    let y2 = resolve_range(&AxisOptions::for_role(AxisRole::Y2), &series, Dimension::Y);
    assert_eq!((y2.min, y2.max), (Some(-110.0), Some(-100.0)));
}

#[test]
fn sorted_shortcut_matches_full_scan_on_sorted_data() {
    let data: Vec<(f64, f64)> = (0..500).map(|i| (i as f64 * 0.5 - 40.0, (i as f64).sin())).collect();
    let scanned = resolve_range(&AxisOptions::for_role(AxisRole::X), &[Series::new(data.clone())], Dimension::X);

    let mut sorted_axis = AxisOptions::for_role(AxisRole::X);
    sorted_axis.sorted = true;
    let via_axis = resolve_range(&sorted_axis, &[Series::new(data.clone())], Dimension::X);
    let via_series = resolve_range(
        &AxisOptions::for_role(AxisRole::X),
        &[Series::new(data).with_sorted(true, false)],
        Dimension::X,
    );

    assert_eq!(scanned, via_axis);
    assert_eq!(scanned, via_series);
    assert_eq!(scanned.min, Some(-40.0));
}

#[test]
fn explicit_bounds_override_independently() {
    let series = mixed_groups();
    let mut axis = AxisOptions::for_role(AxisRole::Y);
    axis.min = Some(-5.0);
    let y = resolve_range(&axis, &series, Dimension::Y);
    assert_eq!((y.min, y.max), (Some(-5.0), Some(100.0)));

    axis.max = Some(50.0);
    let y = resolve_range(&axis, &[], Dimension::Y);
    assert_eq!((y.min, y.max), (Some(-5.0), Some(50.0)));
}

#[test]
fn empty_series_leave_domain_unresolved() {
    let series = vec![Series::new(Vec::new()), Series::new(Vec::new())];
    let y = resolve_range(&AxisOptions::for_role(AxisRole::Y), &series, Dimension::Y);
    assert!(!y.is_resolved());
    let err = y.require(AxisRole::Y).expect_err("no data");
    assert!(matches!(err, ChartError::UnresolvableDomain { axis: AxisRole::Y }));
}

#[test]
fn non_finite_bound_is_unresolvable() {
    let mut axis = AxisOptions::for_role(AxisRole::X);
    axis.min = Some(f64::NAN);
    let x = resolve_range(&axis, &mixed_groups(), Dimension::X);
    assert!(x.require(AxisRole::X).is_err());
}
