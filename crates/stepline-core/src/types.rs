// File: crates/stepline-core/src/types.rs
// Summary: Shared small types (padding insets, axis roles/groups, positions).

use std::fmt;

use serde::Deserialize;

use crate::error::ChartError;

/// Screen padding around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Padding on the given side.
    pub const fn side(&self, position: Position) -> u32 {
        match position {
            Position::Top => self.top,
            Position::Bottom => self.bottom,
            Position::Left => self.left,
            Position::Right => self.right,
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 20, 20, 40)
    }
}

/// Which of the two scale pairs a series (or an axis) belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum AxisGroup {
    #[default]
    Primary,
    Secondary,
}

impl AxisGroup {
    pub const fn number(self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
        }
    }
}

impl TryFrom<u8> for AxisGroup {
    type Error = ChartError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Primary),
            2 => Ok(Self::Secondary),
            other => Err(ChartError::InvalidGroup(other)),
        }
    }
}

/// Data dimension of a value pair: `x` is index 0, `y` index 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    X,
    Y,
}

impl Dimension {
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }

    #[inline]
    pub fn pick(self, value: (f64, f64)) -> f64 {
        match self {
            Self::X => value.0,
            Self::Y => value.1,
        }
    }
}

/// The four axis lines a chart can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    X,
    X2,
    Y,
    Y2,
}

impl AxisRole {
    pub const ALL: [AxisRole; 4] = [AxisRole::X, AxisRole::X2, AxisRole::Y, AxisRole::Y2];

    pub const fn dimension(self) -> Dimension {
        match self {
            Self::X | Self::X2 => Dimension::X,
            Self::Y | Self::Y2 => Dimension::Y,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::X2 => 1,
            Self::Y => 2,
            Self::Y2 => 3,
        }
    }

    /// Primary role of a dimension (X or Y).
    pub const fn primary(dimension: Dimension) -> Self {
        match dimension {
            Dimension::X => Self::X,
            Dimension::Y => Self::Y,
        }
    }

    /// Secondary role of a dimension (X2 or Y2).
    pub const fn secondary(dimension: Dimension) -> Self {
        match dimension {
            Dimension::X => Self::X2,
            Dimension::Y => Self::Y2,
        }
    }

    pub const fn class_name(self) -> &'static str {
        match self {
            Self::X => "stepline-axisx",
            Self::X2 => "stepline-axisx2",
            Self::Y => "stepline-axisy",
            Self::Y2 => "stepline-axisy2",
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::X2 => "x2",
            Self::Y => "y",
            Self::Y2 => "y2",
        };
        f.write_str(name)
    }
}

/// Side of the plot an axis line sits on, or the side its ticks point to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
    Left,
    Right,
}

impl Position {
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Sign applied to outer tick lengths: ticks grow away from the plot.
    pub const fn outward_sign(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }
}
