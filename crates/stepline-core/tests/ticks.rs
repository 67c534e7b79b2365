// File: crates/stepline-core/tests/ticks.rs
// Purpose: Tick planning under each policy, label/mark membership and mark lengths.

use std::sync::Arc;

use stepline_core::ticks::{interval_walk, TickSize};
use stepline_core::{plan_ticks, ChartError, Domain, TickFormat, TickOptions, TickPolicy};

fn domain(min: f64, max: f64) -> Domain {
    Domain::new(min, max)
}

#[test]
fn fixed_interval_walks_domain() {
    let plan = plan_ticks(domain(0.0, 100.0), &TickPolicy::Interval(25.0)).expect("plan");
    assert_eq!(plan.positions(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(plan.precision(), 0);
    for &v in plan.positions() {
        assert!(plan.is_labeled(v));
        assert!(plan.is_marked(v));
    }
}

#[test]
fn reversed_domain_walks_down_and_sorts() {
    let plan = plan_ticks(domain(100.0, 0.0), &TickPolicy::Interval(25.0)).expect("plan");
    assert_eq!(plan.positions(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn fractional_interval_is_rounded_to_its_digits() {
    let plan = plan_ticks(domain(0.0, 1.0), &TickPolicy::Interval(0.1)).expect("plan");
    assert_eq!(plan.positions().len(), 11);
    assert_eq!(plan.positions()[3], 0.3);
    assert_eq!(plan.positions()[7], 0.7);
    assert_eq!(plan.precision(), 1);
    assert_eq!(plan.text(0.3, &TickFormat::Default), "0.3");
    assert_eq!(plan.text(1.0, &TickFormat::Default), "1.0");
}

#[test]
fn replanning_over_own_extent_is_idempotent() {
    let first = plan_ticks(domain(0.3, 9.7), &TickPolicy::Interval(0.5)).expect("plan");
    let positions = first.positions();
    assert_eq!(positions[0], 0.5);
    assert_eq!(positions[positions.len() - 1], 9.5);

    let again = plan_ticks(domain(positions[0], positions[positions.len() - 1]), &TickPolicy::Interval(0.5))
        .expect("replan");
    assert_eq!(first, again);
}

#[test]
fn dual_policy_labels_subset_of_gridlines() {
    let plan = plan_ticks(domain(0.0, 100.0), &TickPolicy::Dual { label: 50.0, grid: 10.0 }).expect("plan");
    let expected: Vec<f64> = (0..=10).map(|k| k as f64 * 10.0).collect();
    assert_eq!(plan.positions(), expected.as_slice());
    assert_eq!(plan.labeled_positions(), vec![0.0, 50.0, 100.0]);

    for &v in plan.positions() {
        let text = plan.text(v, &TickFormat::Default);
        if plan.is_labeled(v) {
            assert!(!text.is_empty(), "labeled tick {v} must have text");
        } else {
            assert!(text.is_empty(), "gridline tick {v} must be blank");
        }
    }
    for v in plan.labeled_positions() {
        assert!(plan.positions().contains(&v));
    }
}

#[test]
fn dual_policy_with_unaligned_label_interval_adds_positions() {
    let plan = plan_ticks(domain(0.0, 100.0), &TickPolicy::Dual { label: 25.0, grid: 10.0 }).expect("plan");
    assert!(plan.positions().contains(&25.0));
    assert!(plan.positions().contains(&30.0));
    assert!(plan.is_labeled(25.0));
    assert!(!plan.is_marked(25.0));
    assert!(plan.is_marked(30.0));
    assert!(!plan.is_labeled(30.0));
    // 0, 50 and 100 appear once despite being in both sets.
    assert_eq!(plan.positions().iter().filter(|&&v| v == 50.0).count(), 1);
}

#[test]
fn explicit_values_are_sorted_and_all_labeled() {
    let plan = plan_ticks(domain(0.0, 10.0), &TickPolicy::Values(vec![7.5, 1.0, 3.0])).expect("plan");
    assert_eq!(plan.positions(), &[1.0, 3.0, 7.5]);
    assert_eq!(plan.precision(), 1);
    assert_eq!(plan.text(3.0, &TickFormat::Default), "3.0");
}

#[test]
fn count_and_auto_produce_nice_steps() {
    let plan = plan_ticks(domain(0.0, 100.0), &TickPolicy::Count(5)).expect("plan");
    assert_eq!(plan.positions(), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

    let auto = plan_ticks(domain(0.0, 100.0), &TickPolicy::Auto).expect("plan");
    assert_eq!(auto.positions().len(), 11);
    assert_eq!(auto.positions()[1], 10.0);
}

#[test]
fn invalid_policies_are_rejected() {
    let d = domain(0.0, 100.0);
    for policy in [
        TickPolicy::Interval(0.0),
        TickPolicy::Interval(-5.0),
        TickPolicy::Interval(f64::NAN),
        TickPolicy::Count(0),
        TickPolicy::Interval(1e-6),
        TickPolicy::Values(vec![1.0, f64::INFINITY]),
        TickPolicy::Dual { label: 10.0, grid: 0.0 },
    ] {
        let err = plan_ticks(d, &policy).expect_err("policy must be rejected");
        assert!(matches!(err, ChartError::InvalidTickPolicy { .. }), "{policy:?} -> {err:?}");
    }
}

#[test]
fn interval_without_multiple_in_domain_is_empty() {
    let walk = interval_walk(domain(1.0, 4.0), 5.0).expect("walk");
    assert!(walk.is_empty());
}

#[test]
fn policy_follows_most_specific_option() {
    let mut tick = TickOptions::default();
    assert_eq!(tick.policy(), TickPolicy::Auto);
    tick.count = Some(4);
    assert_eq!(tick.policy(), TickPolicy::Count(4));
    tick.interval = Some(10.0);
    assert_eq!(tick.policy(), TickPolicy::Interval(10.0));
    tick.label_interval = Some(50.0);
    assert_eq!(tick.policy(), TickPolicy::Dual { label: 50.0, grid: 10.0 });
    tick.values = Some(vec![1.0]);
    assert_eq!(tick.policy(), TickPolicy::Values(vec![1.0]));
}

#[test]
fn mark_lengths_follow_label_and_grid_sets() {
    let plan = plan_ticks(domain(0.0, 100.0), &TickPolicy::Dual { label: 25.0, grid: 10.0 }).expect("plan");

    let mut tick = TickOptions::default();
    assert_eq!(tick.mark_lengths(&plan, 10.0), (6.0, 0.0));
    // Label-only positions carry text but no mark.
    assert_eq!(tick.mark_lengths(&plan, 25.0), (0.0, 0.0));

    tick.scale_size = Some(10.0);
    tick.inner_size = TickSize::Constant(3.0);
    assert_eq!(tick.mark_lengths(&plan, 50.0), (10.0, 10.0));
    assert_eq!(tick.mark_lengths(&plan, 20.0), (6.0, 3.0));

    tick.scale_size = None;
    tick.size = TickSize::Function(Arc::new(|v: f64| v / 10.0));
    assert_eq!(tick.mark_lengths(&plan, 30.0), (3.0, 3.0));
}

#[test]
fn custom_format_applies_only_to_labels() {
    let plan = plan_ticks(domain(0.0, 100.0), &TickPolicy::Dual { label: 50.0, grid: 10.0 }).expect("plan");
    let format = TickFormat::Custom(Arc::new(|v: f64| format!("{v}%")));
    assert_eq!(plan.text(50.0, &format), "50%");
    assert_eq!(plan.text(20.0, &format), "");
}

#[test]
fn interval_walk_keeps_the_closing_multiple() {
    // 0.3 / 0.1 is a hair under 3 in binary floating point.
    let plan = plan_ticks(domain(0.0, 0.3), &TickPolicy::Interval(0.1)).expect("plan");
    assert_eq!(plan.positions(), &[0.0, 0.1, 0.2, 0.3]);

    let walk = interval_walk(domain(0.7, 1.0), 0.1).expect("walk");
    assert_eq!(walk, vec![0.7, 0.8, 0.9, 1.0]);
}

#[test]
fn nice_ticks_reject_spans_below_precision() {
    for policy in [TickPolicy::Auto, TickPolicy::Count(5)] {
        let err = plan_ticks(domain(0.0, 1e-20), &policy).expect_err("span too small");
        assert!(matches!(err, ChartError::InvalidTickPolicy { .. }), "{policy:?} -> {err:?}");
    }
    let plan = plan_ticks(domain(0.0, 1e-12), &TickPolicy::Auto).expect("plan");
    assert!(!plan.positions().is_empty());
}
