// File: crates/stepline-core/src/range.rs
// Summary: Range resolution: effective [min, max] of an axis from overrides and grouped series data.

use crate::error::{ChartError, Result};
use crate::options::AxisOptions;
use crate::series::Series;
use crate::types::{AxisRole, Dimension};

/// Resolved data-space interval of an axis. `min` may exceed `max` when the
/// caller set reversed explicit bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Bounds in ascending order.
    pub fn sorted(&self) -> (f64, f64) {
        if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) }
    }

    pub fn contains(&self, v: f64, tolerance: f64) -> bool {
        let (lo, hi) = self.sorted();
        v >= lo - tolerance && v <= hi + tolerance
    }
}

/// Per-bound outcome of range resolution; a bound is `None` when no
/// qualifying series contributed to it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialDomain {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PartialDomain {
    pub fn is_resolved(&self) -> bool {
        matches!((self.min, self.max), (Some(a), Some(b)) if a.is_finite() && b.is_finite())
    }

    /// Require both bounds; undefined or non-finite bounds fail for `axis`.
    pub fn require(&self, axis: AxisRole) -> Result<Domain> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min.is_finite() && max.is_finite() => Ok(Domain::new(min, max)),
            _ => Err(ChartError::UnresolvableDomain { axis }),
        }
    }
}

/// Resolve the domain of `axis` along `dimension` from the series tagged
/// with the axis' scale group.
pub fn resolve_range(axis: &AxisOptions, series: &[Series], dimension: Dimension) -> PartialDomain {
    let qualifying = || {
        series
            .iter()
            .filter(move |s| s.group(dimension) == axis.scale_group && !s.values.is_empty())
    };

    let min = axis.min.or_else(|| {
        qualifying()
            .map(|s| series_min(s, dimension, axis.sorted))
            .reduce(f64::min)
    });
    let max = axis.max.or_else(|| {
        qualifying()
            .map(|s| series_max(s, dimension, axis.sorted))
            .reduce(f64::max)
    });

    PartialDomain { min, max }
}

// Callers guarantee `values` is non-empty.
fn series_min(series: &Series, dimension: Dimension, axis_sorted: bool) -> f64 {
    if axis_sorted || series.sorted.get(dimension) {
        dimension.pick(series.values[0])
    } else {
        series.values.iter().map(|&v| dimension.pick(v)).fold(f64::INFINITY, f64::min)
    }
}

fn series_max(series: &Series, dimension: Dimension, axis_sorted: bool) -> f64 {
    if axis_sorted || series.sorted.get(dimension) {
        dimension.pick(series.values[series.values.len() - 1])
    } else {
        series.values.iter().map(|&v| dimension.pick(v)).fold(f64::NEG_INFINITY, f64::max)
    }
}
