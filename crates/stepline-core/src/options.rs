// File: crates/stepline-core/src/options.rs
// Summary: Typed configuration tree with the library defaults (axes, grids, tooltip, points, size, bindings).

use crate::hit::TooltipFormat;
use crate::series::{Series, SeriesType, StepType};
use crate::theme::Theme;
use crate::ticks::TickOptions;
use crate::types::{AxisGroup, AxisRole, Insets, Position};

/// Drawing targets the chart renders into. Axis targets left unset share
/// the body target.
#[derive(Clone, Debug, PartialEq)]
pub struct Bindings {
    pub body: String,
    pub x: Option<String>,
    pub x2: Option<String>,
    pub y: Option<String>,
    pub y2: Option<String>,
}

impl Bindings {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into(), x: None, x2: None, y: None, y2: None }
    }

    /// Target an axis renders into.
    pub fn target(&self, role: AxisRole) -> &str {
        let explicit = match role {
            AxisRole::X => &self.x,
            AxisRole::X2 => &self.x2,
            AxisRole::Y => &self.y,
            AxisRole::Y2 => &self.y2,
        };
        explicit.as_deref().unwrap_or(&self.body)
    }

    /// Whether the axis renders into its own target instead of the body.
    pub fn is_split(&self, role: AxisRole) -> bool {
        self.target(role) != self.body
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new("chart")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margin {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Explicit chart size; unset dimensions come from the body container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Subtracted from the resolved size.
    pub margin: Option<Margin>,
}

#[derive(Clone, Debug)]
pub struct AxisOptions {
    pub show: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Asserts every series is sorted along this axis' dimension.
    pub sorted: bool,
    pub label: Option<String>,
    pub tick: TickOptions,
    /// Where the axis line sits.
    pub position: Position,
    /// Which way tick marks point; defaults to `position`.
    pub direction: Option<Position>,
    pub scale_group: AxisGroup,
}

impl AxisOptions {
    pub fn for_role(role: AxisRole) -> Self {
        let (show, position, scale_group) = match role {
            AxisRole::X => (true, Position::Bottom, AxisGroup::Primary),
            AxisRole::X2 => (false, Position::Top, AxisGroup::Secondary),
            AxisRole::Y => (true, Position::Left, AxisGroup::Primary),
            AxisRole::Y2 => (false, Position::Right, AxisGroup::Secondary),
        };
        Self {
            show,
            min: None,
            max: None,
            sorted: false,
            label: None,
            tick: TickOptions::default(),
            position,
            direction: None,
            scale_group,
        }
    }

    pub fn direction(&self) -> Position {
        self.direction.unwrap_or(self.position)
    }
}

#[derive(Clone, Debug)]
pub struct Axes {
    pub x: AxisOptions,
    pub x2: AxisOptions,
    pub y: AxisOptions,
    pub y2: AxisOptions,
}

impl Axes {
    pub fn get(&self, role: AxisRole) -> &AxisOptions {
        match role {
            AxisRole::X => &self.x,
            AxisRole::X2 => &self.x2,
            AxisRole::Y => &self.y,
            AxisRole::Y2 => &self.y2,
        }
    }

    pub fn get_mut(&mut self, role: AxisRole) -> &mut AxisOptions {
        match role {
            AxisRole::X => &mut self.x,
            AxisRole::X2 => &mut self.x2,
            AxisRole::Y => &mut self.y,
            AxisRole::Y2 => &mut self.y2,
        }
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            x: AxisOptions::for_role(AxisRole::X),
            x2: AxisOptions::for_role(AxisRole::X2),
            y: AxisOptions::for_role(AxisRole::Y),
            y2: AxisOptions::for_role(AxisRole::Y2),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridOptions {
    pub show: bool,
    /// Spacing in data units; unset follows the axis' marked ticks.
    pub step: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Grids {
    pub x: GridOptions,
    pub y: GridOptions,
}

#[derive(Clone, Debug)]
pub struct TooltipOptions {
    pub show: bool,
    /// Show every series' x-matched point regardless of y proximity.
    pub grouped: bool,
    /// Hit radius around the pointer, in pixels.
    pub radius: f64,
    pub format: TooltipFormat,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self { show: false, grouped: false, radius: 4.0, format: TooltipFormat::Default }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointStyle {
    pub size: f32,
    pub class_name: Option<String>,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self { size: 4.0, class_name: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointOptions {
    pub show: bool,
    pub style: PointStyle,
    pub hover_style: PointStyle,
}

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub bindto: Bindings,
    pub size: SizeOptions,
    /// Curve used by series that set none.
    pub series_type: SeriesType,
    pub step: Option<StepType>,
    pub data: Vec<Series>,
    pub axis: Axes,
    pub grid: Grids,
    pub padding: Insets,
    pub tooltip: TooltipOptions,
    pub point: PointOptions,
    pub auto_resize: bool,
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            bindto: Bindings::default(),
            size: SizeOptions::default(),
            series_type: SeriesType::Line,
            step: None,
            data: Vec::new(),
            axis: Axes::default(),
            grid: Grids::default(),
            padding: Insets::default(),
            tooltip: TooltipOptions::default(),
            point: PointOptions::default(),
            auto_resize: true,
            theme: Theme::default(),
        }
    }
}

impl ChartOptions {
    pub fn with_body(mut self, target: impl Into<String>) -> Self {
        self.bindto.body = target.into();
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.data.push(series);
        self
    }
}
