// File: crates/stepline-core/src/axis.rs
// Summary: Axis drawing: domain line, tick marks and tick labels for one axis role.
// Notes:
// - `position` places the axis line, `direction` orients the tick marks and
//   labels. Outer marks grow away from the plot, inner marks into it.

use crate::geometry::PixelPoint;
use crate::options::AxisOptions;
use crate::render::{Baseline, DrawCommand, Group, GroupKind, LineStyle, TextAnchor, TextStyle};
use crate::scale::LinearScale;
use crate::theme::Theme;
use crate::ticks::TickPlan;
use crate::types::{AxisRole, Dimension, Position};

const LABEL_GAP: f64 = 3.0;
const TICK_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 12.0;

/// One drawn tick: data value plus resolved mark lengths and text.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub outer: f64,
    pub inner: f64,
    /// Empty for gridline-only ticks.
    pub text: String,
}

/// Ticks of `plan` that fall inside the scale's domain.
pub fn tick_marks(axis: &AxisOptions, scale: &LinearScale, plan: &TickPlan) -> Vec<TickMark> {
    let domain = scale.domain();
    let tolerance = domain.span().abs() * 1e-9;
    plan.positions()
        .iter()
        .copied()
        .filter(|&v| domain.contains(v, tolerance))
        .map(|value| {
            let (outer, inner) = axis.tick.mark_lengths(plan, value);
            TickMark { value, outer, inner, text: plan.text(value, &axis.tick.format) }
        })
        .collect()
}

/// Build the axis group. `origin` is where the axis line crosses its target:
/// the y coordinate for X roles, the x coordinate for Y roles.
pub fn axis_group(
    role: AxisRole,
    axis: &AxisOptions,
    scale: &LinearScale,
    marks: &[TickMark],
    origin: (f64, f64),
    theme: &Theme,
) -> Group {
    let mut group = Group::new(GroupKind::Axis(role));
    let direction = axis.direction();
    let sign = direction.outward_sign();
    let (r0, r1) = scale.range();

    // Places a point `offset` pixels across the axis line at pixel `along`.
    let at = |along: f64, offset: f64| match role.dimension() {
        Dimension::X => PixelPoint::new(along, origin.1 + offset),
        Dimension::Y => PixelPoint::new(origin.0 + offset, along),
    };

    group.push(DrawCommand::Line {
        from: at(r0, 0.0),
        to: at(r1, 0.0),
        style: LineStyle { color: theme.axis_line, width: 1.0 },
    });

    let tick_style = LineStyle { color: theme.tick, width: 1.0 };
    let (anchor, baseline) = label_alignment(direction);
    for mark in marks {
        let px = scale.map(mark.value);
        if mark.outer != 0.0 || mark.inner != 0.0 {
            group.push(DrawCommand::Line {
                from: at(px, -sign * mark.inner),
                to: at(px, sign * mark.outer),
                style: tick_style,
            });
        }
        if !mark.text.is_empty() {
            group.push(DrawCommand::Text {
                position: at(px, sign * (mark.outer.max(0.0) + LABEL_GAP)),
                text: mark.text.clone(),
                style: TextStyle { color: theme.axis_label, size: TICK_FONT_SIZE, anchor, baseline },
            });
        }
    }

    if let Some(label) = axis.label.as_deref().filter(|l| !l.is_empty()) {
        // X titles sit right-aligned below the labels, Y titles at the top end.
        let (along, offset, title_anchor) = match role.dimension() {
            Dimension::X => (r0.max(r1), sign * (TITLE_FONT_SIZE as f64 * 2.0 + LABEL_GAP), TextAnchor::End),
            Dimension::Y if sign < 0.0 => (r0.min(r1), LABEL_GAP, TextAnchor::Start),
            Dimension::Y => (r0.min(r1), -LABEL_GAP, TextAnchor::End),
        };
        group.push(DrawCommand::Text {
            position: at(along, offset),
            text: label.to_string(),
            style: TextStyle {
                color: theme.axis_label,
                size: TITLE_FONT_SIZE,
                anchor: title_anchor,
                baseline: Baseline::Top,
            },
        });
    }

    group
}

fn label_alignment(direction: Position) -> (TextAnchor, Baseline) {
    match direction {
        Position::Bottom => (TextAnchor::Middle, Baseline::Top),
        Position::Top => (TextAnchor::Middle, Baseline::Bottom),
        Position::Left => (TextAnchor::End, Baseline::Middle),
        Position::Right => (TextAnchor::Start, Baseline::Middle),
    }
}
