// File: crates/stepline-core/tests/series_render.rs
// Purpose: Curve selection and marker emission for rendered series.

use stepline_core::options::PointOptions;
use stepline_core::series_render::curve_for;
use stepline_core::{
    render_series, Curve, Domain, DrawCommand, LinearScale, PixelPoint, ScalePair, Series, SeriesDefaults,
    SeriesType, StepType, Theme,
};

fn defaults(point: &PointOptions, tooltip: bool) -> SeriesDefaults<'_> {
    SeriesDefaults { series_type: SeriesType::Line, step: None, point, tooltip }
}

fn pair() -> ScalePair {
    ScalePair {
        x: LinearScale::new(Domain::new(0.0, 2.0), (0.0, 200.0)),
        y: LinearScale::new(Domain::new(0.0, 2.0), (200.0, 0.0)),
    }
}

#[test]
fn series_type_overrides_chart_default() {
    let point = PointOptions::default();
    let mut d = defaults(&point, false);
    let plain = Series::new(vec![(0.0, 0.0)]);

    assert_eq!(curve_for(&plain, &d), Curve::Linear);
    assert_eq!(curve_for(&plain.clone().with_type(SeriesType::Spline), &d), Curve::Spline);
    assert_eq!(curve_for(&plain.clone().with_step(StepType::StepAfter), &d), Curve::StepAfter);

    d.series_type = SeriesType::Step;
    assert_eq!(curve_for(&plain, &d), Curve::Step);
    d.step = Some(StepType::StepBefore);
    assert_eq!(curve_for(&plain, &d), Curve::StepBefore);
    assert_eq!(curve_for(&plain.clone().with_type(SeriesType::Line), &d), Curve::Linear);
}

#[test]
fn points_map_through_the_pair() {
    let point = PointOptions::default();
    let series = Series::new(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)]);
    let out = render_series(0, &series, &pair(), &defaults(&point, false), &Theme::light());

    assert_eq!(
        out.points,
        vec![PixelPoint::new(0.0, 200.0), PixelPoint::new(100.0, 0.0), PixelPoint::new(200.0, 100.0)]
    );
    match &out.path {
        DrawCommand::Path { points, curve, style, class_name } => {
            assert_eq!(points, &out.points);
            assert_eq!(*curve, Curve::Linear);
            assert_eq!(style.color, Theme::light().series_color(0));
            assert!(class_name.is_none());
        }
        other => panic!("expected path, got {other:?}"),
    }
    assert!(out.markers.is_none());
}

#[test]
fn markers_exist_for_tooltips_but_stay_hidden() {
    let point = PointOptions::default();
    let series = Series::new(vec![(0.0, 0.0), (1.0, 1.0)]);
    let out = render_series(1, &series, &pair(), &defaults(&point, true), &Theme::light());
    match out.markers {
        Some(DrawCommand::Markers { points, style, visible }) => {
            assert_eq!(points.len(), 2);
            assert!(!visible);
            assert_eq!(style.size, 4.0);
            assert_eq!(style.color, Theme::light().series_color(1));
        }
        other => panic!("expected markers, got {other:?}"),
    }
}

#[test]
fn shown_points_use_point_style() {
    let mut point = PointOptions::default();
    point.show = true;
    point.style.size = 6.0;
    let series = Series::new(vec![(0.0, 0.0)]).with_color(stepline_core::Color::WHITE);
    let out = render_series(0, &series, &pair(), &defaults(&point, false), &Theme::dark());
    match out.markers {
        Some(DrawCommand::Markers { style, visible, .. }) => {
            assert!(visible);
            assert_eq!(style.size, 6.0);
            assert_eq!(style.color, stepline_core::Color::WHITE);
        }
        other => panic!("expected markers, got {other:?}"),
    }
}

#[test]
fn series_class_reaches_the_path() {
    let point = PointOptions::default();
    let series = Series::new(vec![(0.0, 0.0), (1.0, 1.0)]).with_class("price");
    let out = render_series(0, &series, &pair(), &defaults(&point, false), &Theme::light());
    assert!(matches!(
        &out.path,
        DrawCommand::Path { class_name: Some(c), .. } if c == "price"
    ));
}

#[test]
fn scale_type_resolves_through_chart_default() {
    let plain = Series::new(vec![(0.0, 0.0)]);
    assert_eq!(plain.effective_type(SeriesType::Scale), SeriesType::Scale);
    assert_eq!(plain.clone().with_type(SeriesType::Line).effective_type(SeriesType::Scale), SeriesType::Line);
}
