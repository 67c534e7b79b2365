// File: crates/stepline-core/src/theme.rs
// Summary: Light/Dark theming for scene colors and the per-series palette.

use crate::render::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub tooltip_fill: Color,
    pub tooltip_text: Color,
    pub highlight: Color,
    /// Series colors, cycled by series index when a series sets none.
    pub palette: Vec<Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb8(250, 250, 252),
            grid: Color::from_rgb8(230, 230, 235),
            axis_line: Color::from_rgb8(60, 60, 70),
            axis_label: Color::from_rgb8(20, 20, 30),
            tick: Color::from_rgb8(100, 100, 110),
            tooltip_fill: Color::new(1.0, 1.0, 1.0, 0.92),
            tooltip_text: Color::from_rgb8(20, 20, 30),
            highlight: Color::from_rgb8(30, 120, 240),
            palette: vec![
                Color::from_rgb8(32, 120, 200),
                Color::from_rgb8(220, 80, 80),
                Color::from_rgb8(20, 160, 90),
                Color::from_rgb8(230, 150, 30),
                Color::from_rgb8(140, 90, 200),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb8(18, 18, 20),
            grid: Color::from_rgb8(40, 40, 45),
            axis_line: Color::from_rgb8(180, 180, 190),
            axis_label: Color::from_rgb8(235, 235, 245),
            tick: Color::from_rgb8(150, 150, 160),
            tooltip_fill: Color::new(0.12, 0.12, 0.14, 0.92),
            tooltip_text: Color::from_rgb8(235, 235, 245),
            highlight: Color::from_rgb8(255, 230, 70),
            palette: vec![
                Color::from_rgb8(64, 160, 255),
                Color::from_rgb8(220, 80, 80),
                Color::from_rgb8(40, 200, 120),
                Color::from_rgb8(255, 180, 60),
                Color::from_rgb8(180, 130, 255),
            ],
        }
    }

    /// Palette entry for the series at `index`.
    pub fn series_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return self.axis_line;
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
