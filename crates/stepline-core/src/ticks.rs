// File: crates/stepline-core/src/ticks.rs
// Summary: Tick planning: positions, labeled subset, decimal precision, tick text and mark lengths.
// Notes:
// - Interval walks are index based (lo + k * step) and rounded to the
//   interval's own fractional digits, so long walks do not accumulate drift.
// - Membership of a drawn value in the label/gridline sets is always decided
//   at the plan's precision, never by raw float equality.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::error::{ChartError, Result};
use crate::range::Domain;
use crate::scale::nice_ticks;

/// Tick count used when an axis sets no policy at all.
pub const DEFAULT_TICK_COUNT: usize = 10;
/// Upper bound on generated positions per walk; larger walks are rejected.
pub const MAX_TICKS: usize = 10_000;
/// Fractional digits are capped here; beyond it the value is float noise.
pub const MAX_PRECISION: u32 = 15;
const WALK_EPSILON: f64 = 1e-9;

/// How tick positions are derived for an axis.
#[derive(Clone, Debug, PartialEq)]
pub enum TickPolicy {
    /// Scale default: nice ticks for [`DEFAULT_TICK_COUNT`].
    Auto,
    Values(Vec<f64>),
    Interval(f64),
    Count(usize),
    /// Labels every `label` units, marks every `grid` units.
    Dual { label: f64, grid: f64 },
}

/// Length of a tick mark, fixed or computed from the tick value.
#[derive(Clone)]
pub enum TickSize {
    Constant(f64),
    Function(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl TickSize {
    pub fn eval(&self, value: f64) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::Function(f) => f(value),
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Constant(v) if *v == 0.0)
    }
}

impl fmt::Debug for TickSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => write!(f, "TickSize::Constant({v})"),
            Self::Function(_) => write!(f, "TickSize::Function(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for TickSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::Constant)
    }
}

/// Formatter for tick labels.
#[derive(Clone, Default)]
pub enum TickFormat {
    /// Value printed at the plan's precision.
    #[default]
    Default,
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl TickFormat {
    pub fn format(&self, value: f64, precision: u32) -> String {
        match self {
            Self::Default => format!("{:.*}", precision as usize, value),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "TickFormat::Default"),
            Self::Custom(_) => write!(f, "TickFormat::Custom(..)"),
        }
    }
}

/// Per-axis tick configuration.
#[derive(Clone, Debug)]
pub struct TickOptions {
    pub values: Option<Vec<f64>>,
    /// Gridline interval: every multiple gets a mark.
    pub interval: Option<f64>,
    /// Label interval: every multiple gets a mark and text.
    pub label_interval: Option<f64>,
    pub count: Option<usize>,
    pub format: TickFormat,
    pub size: TickSize,
    pub inner_size: TickSize,
    /// Length override for labeled ticks.
    pub scale_size: Option<f64>,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            values: None,
            interval: None,
            label_interval: None,
            count: None,
            format: TickFormat::Default,
            size: TickSize::Constant(6.0),
            inner_size: TickSize::Constant(0.0),
            scale_size: None,
        }
    }
}

impl TickOptions {
    /// Policy implied by the configured fields, most specific first.
    pub fn policy(&self) -> TickPolicy {
        if let Some(values) = &self.values {
            return TickPolicy::Values(values.clone());
        }
        match (self.label_interval, self.interval, self.count) {
            (Some(label), Some(grid), _) => TickPolicy::Dual { label, grid },
            (Some(i), None, _) | (None, Some(i), _) => TickPolicy::Interval(i),
            (None, None, Some(n)) => TickPolicy::Count(n),
            (None, None, None) => TickPolicy::Auto,
        }
    }

    /// Outer and inner mark lengths for a drawn tick at `value`.
    pub fn mark_lengths(&self, plan: &TickPlan, value: f64) -> (f64, f64) {
        if !plan.is_marked(value) {
            return (0.0, 0.0);
        }
        let scaled = plan.is_labeled(value).then_some(self.scale_size).flatten();
        let outer = scaled.unwrap_or_else(|| self.size.eval(value));
        let inner = if self.inner_size.is_zero() {
            0.0
        } else {
            scaled.unwrap_or_else(|| self.inner_size.eval(value))
        };
        (outer, inner)
    }
}

/// Output of the tick planner for one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TickPlan {
    positions: Vec<f64>,
    /// `None` means every position is labeled.
    labeled: Option<Vec<f64>>,
    /// `None` means every position gets a mark.
    marked: Option<Vec<f64>>,
    precision: u32,
}

impl TickPlan {
    fn all(positions: Vec<f64>) -> Self {
        let precision = max_precision(&positions);
        Self { positions, labeled: None, marked: None, precision }
    }

    pub fn positions(&self) -> &[f64] { &self.positions }

    pub fn precision(&self) -> u32 { self.precision }

    /// Labeled subset, in ascending order.
    pub fn labeled_positions(&self) -> Vec<f64> {
        match &self.labeled {
            Some(labels) => labels.clone(),
            None => self.positions.clone(),
        }
    }

    pub fn is_labeled(&self, value: f64) -> bool {
        match &self.labeled {
            Some(labels) => labels.iter().any(|&l| same_at(l, value, self.precision)),
            None => true,
        }
    }

    pub fn is_marked(&self, value: f64) -> bool {
        match &self.marked {
            Some(marks) => marks.iter().any(|&m| same_at(m, value, self.precision)),
            None => true,
        }
    }

    /// Label text at `value`; empty for gridline-only ticks.
    pub fn text(&self, value: f64, format: &TickFormat) -> String {
        if self.is_labeled(value) {
            format.format(value, self.precision)
        } else {
            String::new()
        }
    }
}

/// Derive tick positions for `domain` under `policy`.
pub fn plan_ticks(domain: Domain, policy: &TickPolicy) -> Result<TickPlan> {
    if !domain.min.is_finite() || !domain.max.is_finite() {
        return Err(ChartError::tick_policy("domain bounds are not finite"));
    }
    let plan = match policy {
        TickPolicy::Auto => TickPlan::all(nice_ticks(domain, DEFAULT_TICK_COUNT)?),
        TickPolicy::Count(0) => return Err(ChartError::tick_policy("tick count must be positive")),
        TickPolicy::Count(n) if *n > MAX_TICKS / 2 => {
            return Err(ChartError::tick_policy(format!("tick count {n} exceeds {}", MAX_TICKS / 2)))
        }
        TickPolicy::Count(n) => TickPlan::all(nice_ticks(domain, *n)?),
        TickPolicy::Values(values) => {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(ChartError::tick_policy("explicit tick values must be finite"));
            }
            let mut positions = values.clone();
            positions.sort_by(f64::total_cmp);
            TickPlan::all(positions)
        }
        TickPolicy::Interval(interval) => TickPlan::all(interval_walk(domain, *interval)?),
        TickPolicy::Dual { label, grid } => {
            let grid_set = interval_walk(domain, *grid)?;
            let label_set = interval_walk(domain, *label)?;
            let precision = max_precision(&grid_set).max(max_precision(&label_set));

            let mut positions = grid_set.clone();
            for &v in &label_set {
                if !positions.iter().any(|&p| same_at(p, v, precision)) {
                    positions.push(v);
                }
            }
            positions.sort_by(f64::total_cmp);

            TickPlan { positions, labeled: Some(label_set), marked: Some(grid_set), precision }
        }
    };
    Ok(plan)
}

/// Multiples of `interval` contained in `domain`, ascending.
pub fn interval_walk(domain: Domain, interval: f64) -> Result<Vec<f64>> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ChartError::tick_policy(format!("interval must be a positive number, got {interval}")));
    }
    let digits = fractional_digits(interval);
    // Quotients within float noise of an integer count as that multiple.
    let lo = (domain.min / interval - WALK_EPSILON).ceil() * interval;
    let hi = (domain.max / interval + WALK_EPSILON).floor() * interval;
    let step = if hi >= lo { interval } else { -interval };

    let steps = ((hi - lo) / interval).abs().round();
    if !steps.is_finite() || steps >= MAX_TICKS as f64 {
        return Err(ChartError::tick_policy(format!(
            "interval {interval} yields more than {MAX_TICKS} ticks"
        )));
    }

    let tolerance = interval * 1e-9;
    let mut out: Vec<f64> = (0..=steps as usize)
        .map(|k| round_to(lo + step * k as f64, digits))
        .filter(|&v| domain.contains(v, tolerance))
        .collect();
    out.sort_by(f64::total_cmp);
    Ok(out)
}

/// Number of fractional digits in the shortest decimal form of `value`.
pub fn fractional_digits(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, frac)) => (frac.len() as u32).min(MAX_PRECISION),
        None => 0,
    }
}

pub fn max_precision(values: &[f64]) -> u32 {
    values.iter().map(|&v| fractional_digits(v)).max().unwrap_or(0)
}

/// Round to `digits` fractional digits; negative zero becomes zero.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor + 0.0
}

/// Equality at a fixed decimal precision.
pub fn same_at(a: f64, b: f64, precision: u32) -> bool {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (a * factor).round() == (b * factor).round()
}
