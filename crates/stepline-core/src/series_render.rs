// File: crates/stepline-core/src/series_render.rs
// Summary: Series -> path and marker commands through the series' own scale pair.

use crate::geometry::PixelPoint;
use crate::options::{ChartOptions, PointOptions};
use crate::render::{Curve, DrawCommand, LineStyle, MarkerStyle};
use crate::scale::ScalePair;
use crate::series::{Series, SeriesType, StepType};
use crate::theme::Theme;

const LINE_WIDTH: f32 = 2.0;
/// Radius of markers that exist only for hover feedback.
const HIDDEN_MARKER_SIZE: f32 = 4.0;

/// Chart-wide settings a series falls back to.
#[derive(Clone, Copy, Debug)]
pub struct SeriesDefaults<'a> {
    pub series_type: SeriesType,
    pub step: Option<StepType>,
    pub point: &'a PointOptions,
    /// Emit markers even when points are hidden, for tooltip feedback.
    pub tooltip: bool,
}

impl<'a> SeriesDefaults<'a> {
    pub fn from_options(options: &'a ChartOptions) -> Self {
        Self {
            series_type: options.series_type,
            step: options.step,
            point: &options.point,
            tooltip: options.tooltip.show,
        }
    }
}

/// Output of [`render_series`] for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedSeries {
    pub index: usize,
    pub curve: Curve,
    /// Pixel position of every value, in order.
    pub points: Vec<PixelPoint>,
    pub path: DrawCommand,
    /// `None` when neither points nor tooltips are enabled.
    pub markers: Option<DrawCommand>,
}

/// Interpolation for a series: its own type, else the chart default.
pub fn curve_for(series: &Series, defaults: &SeriesDefaults<'_>) -> Curve {
    match series.effective_type(defaults.series_type) {
        // Range-only series are never stroked.
        SeriesType::Line | SeriesType::Scale => Curve::Linear,
        SeriesType::Spline => Curve::Spline,
        SeriesType::Step => match series.step.or(defaults.step).unwrap_or_default() {
            StepType::Step => Curve::Step,
            StepType::StepBefore => Curve::StepBefore,
            StepType::StepAfter => Curve::StepAfter,
        },
    }
}

pub fn render_series(
    index: usize,
    series: &Series,
    pair: &ScalePair,
    defaults: &SeriesDefaults<'_>,
    theme: &Theme,
) -> RenderedSeries {
    let color = series.color.unwrap_or_else(|| theme.series_color(index));
    let curve = curve_for(series, defaults);
    let points: Vec<PixelPoint> = series
        .values
        .iter()
        .map(|&(x, y)| PixelPoint::new(pair.x.map(x), pair.y.map(y)))
        .collect();

    let path = DrawCommand::Path {
        points: points.clone(),
        curve,
        style: LineStyle { color, width: LINE_WIDTH },
        class_name: series.class_name.clone(),
    };

    let visible = defaults.point.show;
    let markers = (visible || defaults.tooltip).then(|| DrawCommand::Markers {
        points: points.clone(),
        style: MarkerStyle {
            color,
            size: if visible { defaults.point.style.size } else { HIDDEN_MARKER_SIZE },
            class_name: defaults.point.style.class_name.clone(),
        },
        visible,
    });

    RenderedSeries { index, curve, points, path, markers }
}
