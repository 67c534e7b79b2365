// File: crates/stepline-core/src/hit.rs
// Summary: Pointer hit testing in data space and tooltip text formatting.
// Notes:
// - The hit box is the pointer square of side 2*radius inverted through the
//   series' scales; a reversed scale yields a reversed interval, so bounds
//   are always compared unordered.
// - The first point whose x falls inside the box is the only candidate.
//   Points further along are never considered, even if they would match y.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::geometry::{within, PixelPoint};
use crate::scale::ScalePair;
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitPolicy {
    /// Half-size of the hit box in pixels.
    pub radius: f64,
    /// Match on x alone.
    pub grouped: bool,
}

impl Default for HitPolicy {
    fn default() -> Self {
        Self { radius: 4.0, grouped: false }
    }
}

/// Index of the point of `series` under `pointer`, if any.
pub fn hit_test(pointer: PixelPoint, series: &Series, pair: &ScalePair, policy: HitPolicy) -> Option<usize> {
    let x0 = pair.x.invert(pointer.x - policy.radius);
    let x1 = pair.x.invert(pointer.x + policy.radius);
    let y0 = pair.y.invert(pointer.y - policy.radius);
    let y1 = pair.y.invert(pointer.y + policy.radius);

    let (index, &(_, y)) = series.values.iter().enumerate().find(|(_, (x, _))| within(*x, x0, x1))?;
    let hit = policy.grouped || within(y, y0, y1);
    trace!(series = series.display_name(), index, hit, "hit test candidate");
    hit.then_some(index)
}

/// A matched point handed to tooltip formatters.
#[derive(Clone, Copy, Debug)]
pub struct TooltipPoint<'a> {
    pub series: &'a Series,
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Formatter for tooltip text.
#[derive(Clone, Default)]
pub enum TooltipFormat {
    /// `x:{x} y:{y}`
    #[default]
    Default,
    Custom(Arc<dyn Fn(&TooltipPoint<'_>) -> String + Send + Sync>),
}

impl TooltipFormat {
    pub fn custom(f: impl Fn(&TooltipPoint<'_>) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn format(&self, point: &TooltipPoint<'_>) -> String {
        match self {
            Self::Default => format!("x:{} y:{}", point.x, point.y),
            Self::Custom(f) => f(point),
        }
    }
}

impl fmt::Debug for TooltipFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "TooltipFormat::Default"),
            Self::Custom(_) => write!(f, "TooltipFormat::Custom(..)"),
        }
    }
}

/// Tooltip text for the point at `index`; empty when out of range.
pub fn tooltip_text(series: &Series, index: usize, format: &TooltipFormat) -> String {
    match series.values.get(index) {
        Some(&(x, y)) => format.format(&TooltipPoint { series, index, x, y }),
        None => String::new(),
    }
}
