// File: crates/stepline-core/src/series.rs
// Summary: Series model: ordered (x, y) values, curve selection and axis-group tags.
// Notes:
// - `values` is owned by the series and never rewritten by the engine; the
//   renderer and hit tester only read it.

use serde::Deserialize;

use crate::render::Color;
use crate::types::{AxisGroup, Dimension};

/// Curve family requested for a series (or as the chart-wide default).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    #[default]
    Line,
    Step,
    Spline,
    /// Never drawn; the values only widen the axis domains.
    Scale,
}

/// Sub-style of a step curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepType {
    /// Vertical riser halfway between points.
    #[default]
    Step,
    StepBefore,
    StepAfter,
}

/// Caller assertion that a dimension is already ordered ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Sorted {
    pub x: bool,
    pub y: bool,
}

impl Sorted {
    pub fn get(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::X => self.x,
            Dimension::Y => self.y,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Series {
    pub id: Option<String>,
    pub title: String,
    pub values: Vec<(f64, f64)>,
    /// `None` inherits the chart default.
    #[serde(rename = "type")]
    pub series_type: Option<SeriesType>,
    pub step: Option<StepType>,
    pub sorted: Sorted,
    pub color: Option<Color>,
    /// Extra class attached to the series path.
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    #[serde(rename = "x_scale")]
    pub x_group: AxisGroup,
    #[serde(rename = "y_scale")]
    pub y_group: AxisGroup,
}

impl Series {
    pub fn new(values: Vec<(f64, f64)>) -> Self {
        Self { values, ..Self::default() }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_type(mut self, series_type: SeriesType) -> Self {
        self.series_type = Some(series_type);
        self
    }

    pub fn with_step(mut self, step: StepType) -> Self {
        self.series_type = Some(SeriesType::Step);
        self.step = Some(step);
        self
    }

    pub fn with_groups(mut self, x_group: AxisGroup, y_group: AxisGroup) -> Self {
        self.x_group = x_group;
        self.y_group = y_group;
        self
    }

    pub fn with_sorted(mut self, x: bool, y: bool) -> Self {
        self.sorted = Sorted { x, y };
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Axis group the series is drawn against in `dimension`.
    pub fn group(&self, dimension: Dimension) -> AxisGroup {
        match dimension {
            Dimension::X => self.x_group,
            Dimension::Y => self.y_group,
        }
    }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Curve family after falling back to the chart-wide `default`.
    pub fn effective_type(&self, default: SeriesType) -> SeriesType {
        self.series_type.unwrap_or(default)
    }

    /// Label used by tooltips: title, then id, then empty.
    pub fn display_name(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else {
            self.id.as_deref().unwrap_or("")
        }
    }
}
