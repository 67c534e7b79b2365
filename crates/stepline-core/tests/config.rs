// File: crates/stepline-core/tests/config.rs
// Purpose: JSON patches and typed updates merged onto the default option tree.

use stepline_core::merge::{AxisPatch, AxesPatch, PaddingPatch, TickPatch};
use stepline_core::{AxisGroup, ChartOptions, ChartPatch, Merge, Position, SeriesType, StepType, TickPolicy, Update};

#[test]
fn defaults_mirror_the_library_tree() {
    let o = ChartOptions::default();
    assert_eq!(o.bindto.body, "chart");
    assert!(o.axis.x.show && o.axis.y.show);
    assert!(!o.axis.x2.show && !o.axis.y2.show);
    assert_eq!(o.axis.x.position, Position::Bottom);
    assert_eq!(o.axis.y2.position, Position::Right);
    assert_eq!(o.axis.x2.scale_group, AxisGroup::Secondary);
    assert_eq!((o.padding.top, o.padding.left, o.padding.bottom, o.padding.right), (20, 40, 40, 20));
    assert_eq!(o.tooltip.radius, 4.0);
    assert!(!o.tooltip.show && !o.point.show);
    assert!(o.auto_resize);
    assert_eq!(o.axis.y.tick.policy(), TickPolicy::Auto);
}

#[test]
fn json_patch_merges_field_by_field() {
    let json = r#"{
        "bindto": { "body": "plot" },
        "type": "step",
        "step": "step-after",
        "data": [
            { "title": "a", "values": [[0, 1], [1, 2]], "y_scale": 2 }
        ],
        "axis": {
            "y2": { "show": true },
            "x": { "label": "time", "tick": { "interval": 0.5, "scale_interval": 1 } }
        },
        "padding": { "left": 60 },
        "tooltip": { "show": true, "grouped": true },
        "point": { "hover_style": { "size": 7, "class": "hot" } },
        "theme": "dark"
    }"#;
    let o = ChartOptions::from_json(json).expect("valid config");

    assert_eq!(o.bindto.body, "plot");
    assert_eq!(o.series_type, SeriesType::Step);
    assert_eq!(o.step, Some(StepType::StepAfter));
    assert_eq!(o.data.len(), 1);
    assert_eq!(o.data[0].values, vec![(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(o.data[0].y_group, AxisGroup::Secondary);
    assert_eq!(o.data[0].x_group, AxisGroup::Primary);

    assert!(o.axis.y2.show);
    assert_eq!(o.axis.y2.position, Position::Right);
    assert_eq!(o.axis.x.label.as_deref(), Some("time"));
    assert_eq!(o.axis.x.tick.policy(), TickPolicy::Dual { label: 1.0, grid: 0.5 });
    assert_eq!(o.axis.x.tick.size.eval(0.0), 6.0);

    assert_eq!(o.padding.left, 60);
    assert_eq!(o.padding.right, 20);
    assert!(o.tooltip.show && o.tooltip.grouped);
    assert_eq!(o.tooltip.radius, 4.0);
    assert_eq!(o.point.hover_style.size, 7.0);
    assert_eq!(o.point.hover_style.class_name.as_deref(), Some("hot"));
    assert_eq!(o.point.style.size, 4.0);
    assert_eq!(o.theme.name, "dark");
}

#[test]
fn invalid_group_is_rejected() {
    let err = ChartOptions::from_json(r#"{ "data": [ { "values": [], "x_scale": 3 } ] }"#)
        .expect_err("group 3 does not exist");
    assert!(err.to_string().contains("axis group must be 1 or 2"), "{err}");
}

#[test]
fn unknown_sections_are_rejected() {
    assert!(ChartOptions::from_json(r#"{ "paddin": { "left": 1 } }"#).is_err());
}

#[test]
fn vectors_replace_and_structs_recurse() {
    let mut o = ChartOptions::default();
    o.merge(Update::Axis(AxesPatch {
        y: Some(AxisPatch {
            min: Some(0.0),
            tick: Some(TickPatch { values: Some(vec![1.0, 2.0, 3.0]), ..TickPatch::default() }),
            ..AxisPatch::default()
        }),
        ..AxesPatch::default()
    }));
    o.merge(Update::Axis(AxesPatch {
        y: Some(AxisPatch {
            max: Some(9.0),
            tick: Some(TickPatch { values: Some(vec![4.0]), ..TickPatch::default() }),
            ..AxisPatch::default()
        }),
        ..AxesPatch::default()
    }));

    assert_eq!(o.axis.y.min, Some(0.0));
    assert_eq!(o.axis.y.max, Some(9.0));
    assert_eq!(o.axis.y.tick.values, Some(vec![4.0]));
    assert_eq!(o.axis.y.position, Position::Left);

    o.merge(Update::Padding(PaddingPatch { top: Some(5), ..PaddingPatch::default() }));
    assert_eq!((o.padding.top, o.padding.bottom), (5, 40));
}

#[test]
fn chart_patch_merges_over_existing_options() {
    let base = ChartOptions::default().with_body("one");
    let patch: ChartPatch = serde_json::from_str(r#"{ "auto_resize": false, "size": { "margin": { "x": 10 } } }"#)
        .expect("patch");
    let o = base.merged(patch);
    assert_eq!(o.bindto.body, "one");
    assert!(!o.auto_resize);
    let margin = o.size.margin.expect("margin set");
    assert_eq!((margin.x, margin.y), (Some(10.0), None));
}
