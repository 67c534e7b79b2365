// File: crates/stepline-core/src/chart.rs
// Summary: Chart controller: configuration lifecycle, render passes into the host, resize and pointer handling.
// Notes:
// - Every render pass rebuilds all scenes from the current options and
//   replaces what the host shows; nothing is patched in place.
// - Pointer handling reuses the scales of the last pass and only touches the
//   overlay layer.

use tracing::{debug, warn};

use crate::axis::{axis_group, tick_marks};
use crate::error::{ChartError, Result};
use crate::geometry::{PixelPoint, PixelRect};
use crate::grid::{grid_group, grid_values};
use crate::hit::{hit_test, tooltip_text, HitPolicy};
use crate::host::{Host, ResizeSubscription};
use crate::layout::{Layout, Size};
use crate::merge::{Merge, Update};
use crate::options::ChartOptions;
use crate::render::{
    Baseline, Color, DrawCommand, Group, GroupKind, LineStyle, MarkerStyle, Scene, TextAnchor, TextStyle,
};
use crate::scale::{ScalePair, ScaleSet};
use crate::series::{Series, SeriesType};
use crate::series_render::{render_series, RenderedSeries, SeriesDefaults};
use crate::ticks::{plan_ticks, TickPlan};
use crate::types::{AxisRole, Dimension};

const TOOLTIP_OFFSET: (f64, f64) = (10.0, -20.0);
const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_LINE_HEIGHT: f64 = 15.0;
const TOOLTIP_CHAR_WIDTH: f64 = 7.0;
const TOOLTIP_PADDING: f64 = 4.0;

/// A matched point under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverMatch {
    pub series: usize,
    pub index: usize,
    pub position: PixelPoint,
}

/// Result of the last pointer move that matched something.
#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    pub pointer: PixelPoint,
    pub matches: Vec<HoverMatch>,
    /// Tooltip text, one line per matched series; empty when tooltips are off.
    pub text: String,
}

/// A drawn series as of its render pass. Hover reads these values, not the
/// live options, which may change while batching.
#[derive(Clone, Debug)]
struct SeriesPass {
    series: Series,
    pair: ScalePair,
    rendered: RenderedSeries,
}

/// State captured by the last render pass.
#[derive(Clone, Debug)]
struct RenderPass {
    layout: Layout,
    scales: ScaleSet,
    plans: [Option<TickPlan>; 4],
    series: Vec<SeriesPass>,
    scenes: Vec<(String, Scene)>,
}

pub struct Chart<H: Host> {
    options: ChartOptions,
    host: H,
    batching: bool,
    pending: bool,
    resize: Option<ResizeSubscription>,
    pass: Option<RenderPass>,
    hover: Option<Hover>,
}

impl<H: Host> Chart<H> {
    /// Bind `options` to `host` and render once.
    pub fn new(options: ChartOptions, host: H) -> Result<Self> {
        let mut chart = Self {
            options,
            host,
            batching: false,
            pending: false,
            resize: None,
            pass: None,
            hover: None,
        };
        chart.bind()?;
        chart.render()?;
        Ok(chart)
    }

    /// Validate targets and (re)register the resize subscription.
    pub fn bind(&mut self) -> Result<()> {
        for target in self.targets() {
            if self.host.client_size(&target).is_none() {
                return Err(ChartError::MissingTarget { target });
            }
        }
        // Drop the old subscription first so rebinding never stacks listeners.
        self.resize = None;
        if self.options.auto_resize {
            self.resize = self.host.subscribe_resize();
        }
        Ok(())
    }

    /// Apply one configuration change, then render unless batching.
    pub fn update(&mut self, update: Update) -> Result<()> {
        self.options.merge(update);
        self.bind()?;
        if self.batching {
            self.pending = true;
            Ok(())
        } else {
            self.render()
        }
    }

    pub fn begin_update(&mut self) {
        self.batching = true;
    }

    /// Leave batching mode; renders once when `render` is set.
    pub fn end_update(&mut self, render: bool) -> Result<()> {
        self.batching = false;
        if render {
            self.pending = false;
            self.render()?;
        }
        Ok(())
    }

    /// Render now regardless of batching.
    pub fn flush(&mut self) -> Result<()> {
        self.pending = false;
        self.render()
    }

    pub fn render(&mut self) -> Result<()> {
        let options = &self.options;
        let body = options.bindto.body.clone();
        let client = self
            .host
            .client_size(&body)
            .ok_or_else(|| ChartError::MissingTarget { target: body.clone() })?;
        let layout = Layout::resolve(&options.size, client, options.padding);
        let plot = layout.plot();
        let scales = ScaleSet::build(&options.axis, &options.data, plot);

        let mut plans: [Option<TickPlan>; 4] = Default::default();
        for role in AxisRole::ALL {
            if options.axis.get(role).show || grid_uses(options, role) {
                let scale = scales.get(role)?;
                plans[role.index()] = Some(plan_ticks(scale.domain(), &options.axis.get(role).tick.policy())?);
            }
        }

        let theme = &options.theme;
        let mut scenes: Vec<(String, Scene)> =
            vec![(body.clone(), Scene::new(layout.width(), layout.height(), theme.background))];

        let grid_style = LineStyle { color: theme.grid, width: 1.0 };
        for (dimension, grid) in [(Dimension::X, options.grid.x), (Dimension::Y, options.grid.y)] {
            if !grid.show {
                continue;
            }
            let role = AxisRole::primary(dimension);
            let scale = scales.get(role)?;
            let values = match &plans[role.index()] {
                Some(plan) => grid_values(&grid, scale.domain(), plan),
                None => Vec::new(),
            };
            scenes[0].1.push(grid_group(dimension, &values, scale, plot, grid_style));
        }

        for role in AxisRole::ALL {
            let axis = options.axis.get(role);
            let Some(plan) = plans[role.index()].as_ref().filter(|_| axis.show) else {
                continue;
            };
            let scale = scales.get(role)?;
            let target = options.bindto.target(role);
            let split = options.bindto.is_split(role);
            let marks = tick_marks(axis, scale, plan);
            let group = axis_group(role, axis, scale, &marks, layout.axis_origin(axis.position, split), theme);

            match scenes.iter_mut().find(|(name, _)| name == target) {
                Some((_, scene)) => scene.push(group),
                None => {
                    let strip = layout.axis_strip(role, axis);
                    let mut scene = Scene::new(strip.width, strip.height, theme.background);
                    scene.push(group);
                    scenes.push((target.to_string(), scene));
                }
            }
        }

        let defaults = SeriesDefaults::from_options(options);
        let mut chart_group = Group::new(GroupKind::Chart);
        let mut points_group = Group::new(GroupKind::Points);
        let mut series_passes = Vec::with_capacity(options.data.len());
        for (index, series) in options.data.iter().enumerate() {
            if !scales.has_axis_for(Dimension::X, series.x_group) || !scales.has_axis_for(Dimension::Y, series.y_group) {
                warn!(
                    series = series.display_name(),
                    x_group = series.x_group.number(),
                    y_group = series.y_group.number(),
                    "series references an axis group no axis visualizes"
                );
            }
            if series.is_empty() || series.effective_type(options.series_type) == SeriesType::Scale {
                continue;
            }
            let pair = scales.pair_for(series)?;
            let rendered = render_series(index, series, &pair, &defaults, theme);
            chart_group.push(rendered.path.clone());
            if let Some(markers) = &rendered.markers {
                points_group.push(markers.clone());
            }
            series_passes.push(SeriesPass { series: series.clone(), pair, rendered });
        }
        scenes[0].1.push(chart_group);
        scenes[0].1.push(points_group);

        debug!(
            width = layout.width(),
            height = layout.height(),
            series = options.data.len(),
            targets = scenes.len(),
            "render pass"
        );

        for (target, scene) in &scenes {
            self.host.present(target, scene)?;
        }
        self.host.present_overlay(&body, None)?;

        self.hover = None;
        self.pass = Some(RenderPass { layout, scales, plans, series: series_passes, scenes });
        Ok(())
    }

    /// Re-render when the body size changed since the last pass. Returns
    /// whether a render happened. While batching the render is deferred to
    /// `end_update` or `flush`.
    pub fn on_viewport_resize(&mut self) -> Result<bool> {
        if self.resize.is_none() {
            return Ok(false);
        }
        if self.batching {
            self.pending = true;
            return Ok(false);
        }
        let body = &self.options.bindto.body;
        let client = self
            .host
            .client_size(body)
            .ok_or_else(|| ChartError::MissingTarget { target: body.clone() })?;
        let size = Layout::resolve(&self.options.size, client, self.options.padding).size;
        let changed = self.pass.as_ref().map_or(true, |p| p.layout.size != size);
        if changed {
            debug!(width = size.width, height = size.height, "viewport resized");
            self.render()?;
        }
        Ok(changed)
    }

    /// Hit test every series at `pointer` and present the hover overlay.
    pub fn pointer_move(&mut self, pointer: PixelPoint) -> Result<Option<&Hover>> {
        let options = &self.options;
        let Some(pass) = self.pass.as_ref() else {
            return Ok(None);
        };
        if !options.tooltip.show && !options.point.show {
            return Ok(None);
        }

        let policy = HitPolicy { radius: options.tooltip.radius, grouped: options.tooltip.grouped };
        let mut matches = Vec::new();
        let mut lines = Vec::new();
        for sp in &pass.series {
            let series = &sp.series;
            let Some(index) = hit_test(pointer, series, &sp.pair, policy) else {
                continue;
            };
            let Some(&position) = sp.rendered.points.get(index) else {
                continue;
            };
            matches.push(HoverMatch { series: sp.rendered.index, index, position });
            if options.tooltip.show {
                let text = tooltip_text(series, index, &options.tooltip.format);
                if !text.is_empty() {
                    lines.push(text);
                }
            }
        }

        let body = options.bindto.body.clone();
        if matches.is_empty() {
            self.hover = None;
            self.host.present_overlay(&body, None)?;
            return Ok(None);
        }

        let hover = Hover { pointer, matches, text: lines.join("\n") };
        let overlay = self.overlay_scene(pass, &hover);
        self.host.present_overlay(&body, Some(&overlay))?;
        self.hover = Some(hover);
        Ok(self.hover.as_ref())
    }

    /// Clear hover highlights and the tooltip.
    pub fn pointer_out(&mut self) -> Result<()> {
        if self.hover.take().is_some() {
            let body = self.options.bindto.body.clone();
            self.host.present_overlay(&body, None)?;
        }
        Ok(())
    }

    fn overlay_scene(&self, pass: &RenderPass, hover: &Hover) -> Scene {
        let options = &self.options;
        let theme = &options.theme;
        let mut scene = Scene::new(pass.layout.width(), pass.layout.height(), Color::TRANSPARENT);

        if options.point.show {
            let mut points = Group::new(GroupKind::Points);
            for m in &hover.matches {
                let color = pass
                    .series
                    .iter()
                    .find(|sp| sp.rendered.index == m.series)
                    .and_then(|sp| sp.series.color)
                    .unwrap_or_else(|| theme.series_color(m.series));
                points.push(DrawCommand::Markers {
                    points: vec![m.position],
                    style: MarkerStyle {
                        color,
                        size: options.point.hover_style.size,
                        class_name: options.point.hover_style.class_name.clone(),
                    },
                    visible: true,
                });
            }
            scene.push(points);
        }

        if options.tooltip.show && !hover.text.is_empty() {
            let mut tooltip = Group::new(GroupKind::Tooltip);
            let lines: Vec<&str> = hover.text.lines().collect();
            let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            let rect = PixelRect::from_ltwh(
                hover.pointer.x + TOOLTIP_OFFSET.0,
                hover.pointer.y + TOOLTIP_OFFSET.1,
                widest as f64 * TOOLTIP_CHAR_WIDTH + TOOLTIP_PADDING * 2.0,
                lines.len() as f64 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 2.0,
            );
            tooltip.push(DrawCommand::Rect {
                rect,
                fill: theme.tooltip_fill,
                stroke: Some(LineStyle { color: theme.axis_line, width: 1.0 }),
            });
            let style = TextStyle {
                color: theme.tooltip_text,
                size: TOOLTIP_FONT_SIZE,
                anchor: TextAnchor::Start,
                baseline: Baseline::Top,
            };
            for (i, line) in lines.iter().enumerate() {
                tooltip.push(DrawCommand::Text {
                    position: PixelPoint::new(
                        rect.left + TOOLTIP_PADDING,
                        rect.top + TOOLTIP_PADDING + i as f64 * TOOLTIP_LINE_HEIGHT,
                    ),
                    text: line.to_string(),
                    style,
                });
            }
            scene.push(tooltip);
        }
        scene
    }

    /// Every distinct target the current bindings name, body first.
    fn targets(&self) -> Vec<String> {
        let mut targets = vec![self.options.bindto.body.clone()];
        for role in AxisRole::ALL {
            let target = self.options.bindto.target(role);
            if !targets.iter().any(|t| t == target) {
                targets.push(target.to_string());
            }
        }
        targets
    }

    pub fn options(&self) -> &ChartOptions { &self.options }

    /// Drawable width of the last pass.
    pub fn width(&self) -> f64 {
        self.pass.as_ref().map_or(0.0, |p| p.layout.width())
    }

    /// Drawable height of the last pass.
    pub fn height(&self) -> f64 {
        self.pass.as_ref().map_or(0.0, |p| p.layout.height())
    }

    pub fn size(&self) -> Option<Size> {
        self.pass.as_ref().map(|p| p.layout.size)
    }

    pub fn scales(&self) -> Option<&ScaleSet> {
        self.pass.as_ref().map(|p| &p.scales)
    }

    pub fn tick_plan(&self, role: AxisRole) -> Option<&TickPlan> {
        self.pass.as_ref().and_then(|p| p.plans[role.index()].as_ref())
    }

    /// Scene presented to `target` by the last pass.
    pub fn scene(&self, target: &str) -> Option<&Scene> {
        let pass = self.pass.as_ref()?;
        pass.scenes.iter().find(|(name, _)| name == target).map(|(_, scene)| scene)
    }

    pub fn hover(&self) -> Option<&Hover> { self.hover.as_ref() }

    pub fn is_batching(&self) -> bool { self.batching }

    /// An update arrived while batching and has not been rendered yet.
    pub fn has_pending_render(&self) -> bool { self.pending }

    pub fn has_resize_subscription(&self) -> bool { self.resize.is_some() }

    pub fn host(&self) -> &H { &self.host }

    pub fn host_mut(&mut self) -> &mut H { &mut self.host }
}

fn grid_uses(options: &ChartOptions, role: AxisRole) -> bool {
    match role {
        AxisRole::X => options.grid.x.show,
        AxisRole::Y => options.grid.y.show,
        AxisRole::X2 | AxisRole::Y2 => false,
    }
}
