// File: crates/stepline-core/src/render.rs
// Summary: Backend-agnostic scene model: draw commands grouped the way the chart exposes them for styling.
// Notes:
// - A scene is rebuilt from scratch on every render pass and handed to the
//   host; backends never see options, scales or series.

use serde::Deserialize;

use crate::geometry::{PixelPoint, PixelRect};
use crate::types::AxisRole;

/// RGBA color, components in 0.0..=1.0.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 { 1.0 }

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

/// Interpolation the backend uses between consecutive path vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    Linear,
    /// Catmull-Rom spline through every vertex.
    Spline,
    /// Riser halfway between vertices.
    Step,
    /// Riser at the start of each segment.
    StepBefore,
    /// Riser at the end of each segment.
    StepAfter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { color: Color::BLACK, width: 1.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    /// Radius in pixels.
    pub size: f32,
    pub class_name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub anchor: TextAnchor,
    pub baseline: Baseline,
}

/// A single drawing instruction in target pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: PixelPoint,
        to: PixelPoint,
        style: LineStyle,
    },
    Path {
        points: Vec<PixelPoint>,
        curve: Curve,
        style: LineStyle,
        class_name: Option<String>,
    },
    Markers {
        points: Vec<PixelPoint>,
        style: MarkerStyle,
        /// Hidden markers are kept for hover feedback but not painted.
        visible: bool,
    },
    Rect {
        rect: PixelRect,
        fill: Color,
        stroke: Option<LineStyle>,
    },
    Text {
        position: PixelPoint,
        text: String,
        style: TextStyle,
    },
}

/// Named group of commands; mirrors the element groups a styled chart exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    GridX,
    GridY,
    Axis(AxisRole),
    Chart,
    Points,
    Tooltip,
}

impl GroupKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::GridX => "stepline-grid stepline-gridx",
            Self::GridY => "stepline-grid stepline-gridy",
            Self::Axis(role) => role.class_name(),
            Self::Chart => "stepline-chart",
            Self::Points => "stepline-point",
            Self::Tooltip => "stepline-tooltip",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub kind: GroupKind,
    pub commands: Vec<DrawCommand>,
}

impl Group {
    pub fn new(kind: GroupKind) -> Self {
        Self { kind, commands: Vec::new() }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Everything drawn into one target during a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub groups: Vec<Group>,
}

impl Scene {
    pub fn new(width: f64, height: f64, background: Color) -> Self {
        Self { width, height, background, groups: Vec::new() }
    }

    pub fn push(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn group(&self, kind: GroupKind) -> Option<&Group> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.groups.iter().flat_map(|g| g.commands.iter())
    }
}
