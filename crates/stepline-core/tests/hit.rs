// File: crates/stepline-core/tests/hit.rs
// Purpose: Pointer hit testing and tooltip formatting.

use stepline_core::{
    hit_test, tooltip_text, Domain, HitPolicy, LinearScale, PixelPoint, ScalePair, Series, TooltipFormat,
};

fn pair() -> ScalePair {
    ScalePair {
        x: LinearScale::new(Domain::new(0.0, 10.0), (0.0, 100.0)),
        y: LinearScale::new(Domain::new(0.0, 10.0), (100.0, 0.0)),
    }
}

fn diagonal() -> Series {
    Series::new(vec![(0.0, 0.0), (5.0, 5.0), (10.0, 10.0)]).with_title("diag")
}

#[test]
fn pointer_on_point_matches_its_index() {
    let pair = pair();
    let at = PixelPoint::new(pair.x.map(5.0), pair.y.map(5.0));
    assert_eq!(at, PixelPoint::new(50.0, 50.0));
    assert_eq!(hit_test(at, &diagonal(), &pair, HitPolicy::default()), Some(1));

    let near = PixelPoint::new(52.0, 47.0);
    assert_eq!(hit_test(near, &diagonal(), &pair, HitPolicy::default()), Some(1));
}

#[test]
fn pointer_far_away_matches_nothing() {
    let pair = pair();
    let policy = HitPolicy::default();
    assert_eq!(hit_test(PixelPoint::new(150.0, 50.0), &diagonal(), &pair, policy), None);
    assert_eq!(hit_test(PixelPoint::new(50.0, 150.0), &diagonal(), &pair, policy), None);
}

#[test]
fn grouped_policy_matches_on_x_alone() {
    let pair = pair();
    let policy = HitPolicy { grouped: true, ..HitPolicy::default() };
    assert_eq!(hit_test(PixelPoint::new(50.0, 95.0), &diagonal(), &pair, policy), Some(1));
}

#[test]
fn only_first_x_candidate_is_considered() {
    let pair = pair();
    let series = Series::new(vec![(5.0, 0.0), (5.0, 5.0)]);
    // The second point sits under the pointer but the first x match wins.
    assert_eq!(hit_test(PixelPoint::new(50.0, 50.0), &series, &pair, HitPolicy::default()), None);
    assert_eq!(hit_test(PixelPoint::new(50.0, 100.0), &series, &pair, HitPolicy::default()), Some(0));
}

#[test]
fn larger_radius_widens_the_box() {
    let pair = pair();
    let pointer = PixelPoint::new(58.0, 50.0);
    assert_eq!(hit_test(pointer, &diagonal(), &pair, HitPolicy::default()), None);
    let wide = HitPolicy { radius: 10.0, grouped: false };
    assert_eq!(hit_test(pointer, &diagonal(), &pair, wide), Some(1));
}

#[test]
fn tooltip_text_default_and_custom() {
    let series = diagonal();
    assert_eq!(tooltip_text(&series, 1, &TooltipFormat::Default), "x:5 y:5");
    assert_eq!(tooltip_text(&series, 7, &TooltipFormat::Default), "");

    let custom = TooltipFormat::custom(|p| format!("{} #{}: {:.1}", p.series.display_name(), p.index, p.y));
    assert_eq!(tooltip_text(&series, 2, &custom), "diag #2: 10.0");
}
