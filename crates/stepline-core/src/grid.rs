// File: crates/stepline-core/src/grid.rs
// Summary: Gridline placement and the grid groups of the body scene.

use crate::geometry::{PixelPoint, PixelRect};
use crate::options::GridOptions;
use crate::range::Domain;
use crate::render::{DrawCommand, Group, GroupKind, LineStyle};
use crate::scale::LinearScale;
use crate::ticks::{TickPlan, MAX_TICKS};
use crate::types::Dimension;

/// Multiples of `step` past the domain start: `min + k*step` for k >= 1,
/// walking toward `max` and stopping at it.
pub fn stepped(domain: Domain, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let direction = if domain.max >= domain.min { 1.0 } else { -1.0 };
    let count = ((domain.span().abs() / step) + 1e-9).floor().min(MAX_TICKS as f64) as usize;
    (1..=count).map(|k| domain.min + direction * step * k as f64).collect()
}

/// Data values a grid draws lines at. Without a step the grid follows the
/// marked ticks of the axis plan.
pub fn grid_values(options: &GridOptions, domain: Domain, plan: &TickPlan) -> Vec<f64> {
    match options.step {
        Some(step) => stepped(domain, step),
        None => plan.positions().iter().copied().filter(|&v| plan.is_marked(v)).collect(),
    }
}

/// Gridlines across the plot for `dimension`: vertical lines for X, horizontal for Y.
pub fn grid_group(dimension: Dimension, values: &[f64], scale: &LinearScale, plot: PixelRect, style: LineStyle) -> Group {
    let kind = match dimension {
        Dimension::X => GroupKind::GridX,
        Dimension::Y => GroupKind::GridY,
    };
    let mut group = Group::new(kind);
    for &v in values {
        let px = scale.map(v);
        let (from, to) = match dimension {
            Dimension::X => (PixelPoint::new(px, plot.top), PixelPoint::new(px, plot.bottom)),
            Dimension::Y => (PixelPoint::new(plot.left, px), PixelPoint::new(plot.right, px)),
        };
        group.push(DrawCommand::Line { from, to, style });
    }
    group
}
