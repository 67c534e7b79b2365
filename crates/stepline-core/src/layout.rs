// File: crates/stepline-core/src/layout.rs
// Summary: Drawable size resolution and the plot / axis-strip rectangles derived from it.

use crate::geometry::PixelRect;
use crate::options::{AxisOptions, SizeOptions};
use crate::types::{AxisRole, Dimension, Insets, Position};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Geometry of one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub size: Size,
    pub padding: Insets,
}

impl Layout {
    /// Explicit dimensions win over the container's client size; the size
    /// margin is subtracted afterwards.
    pub fn resolve(options: &SizeOptions, client: Size, padding: Insets) -> Self {
        let mut width = options.width.unwrap_or(client.width);
        let mut height = options.height.unwrap_or(client.height);
        if let Some(margin) = options.margin {
            width -= margin.x.unwrap_or(0.0);
            height -= margin.y.unwrap_or(0.0);
        }
        Self { size: Size::new(width, height), padding }
    }

    pub fn width(&self) -> f64 { self.size.width }
    pub fn height(&self) -> f64 { self.size.height }

    /// Area inside the padding where series are drawn.
    pub fn plot(&self) -> PixelRect {
        let p = self.padding;
        PixelRect::from_ltrb(
            p.left as f64,
            p.top as f64,
            self.size.width - p.right as f64,
            self.size.height - p.bottom as f64,
        )
    }

    /// Size of a target holding only `role`'s axis: the padding strip on the
    /// axis' side plus one pixel.
    pub fn axis_strip(&self, role: AxisRole, axis: &AxisOptions) -> Size {
        let thickness = self.strip_thickness(role, axis.position) + 1.0;
        match role.dimension() {
            Dimension::X => Size::new(self.size.width, thickness),
            Dimension::Y => Size::new(thickness, self.size.height),
        }
    }

    // Only the padding on a side matching the axis' orientation counts.
    fn strip_thickness(&self, role: AxisRole, position: Position) -> f64 {
        if position.is_horizontal() == (role.dimension() == Dimension::X) {
            self.padding.side(position) as f64
        } else {
            0.0
        }
    }

    /// Where the axis line sits inside its target.
    pub fn axis_origin(&self, position: Position, split: bool) -> (f64, f64) {
        let p = self.padding;
        match (position, split) {
            (Position::Top, _) => (0.0, p.top as f64),
            (Position::Left, _) => (p.left as f64, 0.0),
            (Position::Bottom, false) => (0.0, self.size.height - p.bottom as f64),
            (Position::Right, false) => (self.size.width - p.right as f64, 0.0),
            (Position::Bottom, true) | (Position::Right, true) => (0.0, 0.0),
        }
    }
}
