// File: crates/stepline-core/src/scale.rs
// Summary: Linear data->pixel scales for the four axis roles and per-series scale pair selection.

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::geometry::PixelRect;
use crate::options::Axes;
use crate::range::{resolve_range, Domain};
use crate::series::Series;
use crate::ticks::{interval_walk, round_to, MAX_PRECISION};
use crate::types::{AxisGroup, AxisRole, Dimension};

/// Affine map from a data domain onto a pixel range. The range may be
/// descending (Y scales put the domain minimum at the bottom pixel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: Domain,
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> Domain { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    /// Data value -> pixel. A zero-span domain maps to the range midpoint.
    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return (self.range.0 + self.range.1) * 0.5;
        }
        self.range.0 + (value - self.domain.min) / span * (self.range.1 - self.range.0)
    }

    /// Pixel -> data value.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let extent = self.range.1 - self.range.0;
        if extent == 0.0 {
            return self.domain.min;
        }
        self.domain.min + (px - self.range.0) / extent * self.domain.span()
    }

    /// Evenly spaced "nice" ticks across the domain.
    pub fn ticks(&self, count: usize) -> Result<Vec<f64>> {
        nice_ticks(self.domain, count)
    }
}

/// Approximately `count` ticks at 1, 2 or 5 times a power of ten. Spans whose
/// step would need more than `MAX_PRECISION` fractional digits are rejected.
pub fn nice_ticks(domain: Domain, count: usize) -> Result<Vec<f64>> {
    let (lo, hi) = domain.sorted();
    if count == 0 || !lo.is_finite() || !hi.is_finite() {
        return Ok(Vec::new());
    }
    if lo == hi {
        return Ok(vec![lo]);
    }
    let step = tick_step(lo, hi, count)
        .ok_or_else(|| ChartError::tick_policy(format!("span {} is below tick precision", hi - lo)))?;
    // Step is at least span / count, so the walk stays under the tick cap
    // for any count the planner accepts.
    interval_walk(Domain::new(lo, hi), step)
}

fn tick_step(lo: f64, hi: f64, count: usize) -> Option<f64> {
    let raw = (hi - lo) / count as f64;
    let exponent = raw.log10().floor();
    let base = 10f64.powf(exponent);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    let digits = if exponent < 0.0 { (-exponent) as u32 } else { 0 };
    if digits > MAX_PRECISION {
        return None;
    }
    Some(round_to(base * factor, digits)).filter(|s| s.is_finite() && *s > 0.0)
}

/// The scales a series is drawn against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePair {
    pub x: LinearScale,
    pub y: LinearScale,
}

/// The four role scales built for one render pass. A role whose domain could
/// not be resolved stays empty and errors only when something uses it.
#[derive(Clone, Debug, Default)]
pub struct ScaleSet {
    scales: [Option<LinearScale>; 4],
    groups: [AxisGroup; 4],
}

impl ScaleSet {
    pub fn build(axes: &Axes, series: &[Series], plot: PixelRect) -> Self {
        let mut set = ScaleSet::default();
        for role in AxisRole::ALL {
            let axis = axes.get(role);
            set.groups[role.index()] = axis.scale_group;
            let range = match role.dimension() {
                Dimension::X => (plot.left, plot.right),
                Dimension::Y => (plot.bottom, plot.top),
            };
            let domain = resolve_range(axis, series, role.dimension()).require(role).ok();
            debug!(axis = %role, ?domain, ?range, "resolved axis domain");
            set.scales[role.index()] = domain.map(|d| LinearScale::new(d, range));
        }
        set
    }

    pub fn try_get(&self, role: AxisRole) -> Option<&LinearScale> {
        self.scales[role.index()].as_ref()
    }

    pub fn get(&self, role: AxisRole) -> Result<&LinearScale> {
        self.try_get(role).ok_or(ChartError::UnresolvableDomain { axis: role })
    }

    /// Role whose scale draws `group` along `dimension`: the first axis
    /// (primary before secondary) visualizing that group.
    pub fn role_for(&self, dimension: Dimension, group: AxisGroup) -> AxisRole {
        let primary = AxisRole::primary(dimension);
        let secondary = AxisRole::secondary(dimension);
        if self.groups[primary.index()] == group {
            primary
        } else if self.groups[secondary.index()] == group {
            secondary
        } else {
            match group {
                AxisGroup::Primary => primary,
                AxisGroup::Secondary => secondary,
            }
        }
    }

    /// Whether some axis visualizes `group` along `dimension`.
    pub fn has_axis_for(&self, dimension: Dimension, group: AxisGroup) -> bool {
        [AxisRole::primary(dimension), AxisRole::secondary(dimension)]
            .iter()
            .any(|r| self.groups[r.index()] == group)
    }

    pub fn pair(&self, x_group: AxisGroup, y_group: AxisGroup) -> Result<ScalePair> {
        let x = *self.get(self.role_for(Dimension::X, x_group))?;
        let y = *self.get(self.role_for(Dimension::Y, y_group))?;
        Ok(ScalePair { x, y })
    }

    pub fn pair_for(&self, series: &Series) -> Result<ScalePair> {
        self.pair(series.x_group, series.y_group)
    }
}
