// File: crates/stepline-core/src/merge.rs
// Summary: Typed partial updates: serde patches merged field-by-field onto ChartOptions.
// Notes:
// - Structured sections recurse; vectors and primitives replace the old value.
// - Callback fields (tick format, tooltip format, functional tick sizes) are
//   never deserialized and can only be set from code.

use serde::Deserialize;

use crate::hit::TooltipFormat;
use crate::options::{
    Axes, AxisOptions, Bindings, ChartOptions, GridOptions, Grids, Margin, PointOptions, PointStyle,
    SizeOptions, TooltipOptions,
};
use crate::series::{Series, SeriesType, StepType};
use crate::theme::{self, Theme};
use crate::ticks::{TickFormat, TickOptions, TickSize};
use crate::types::{AxisGroup, Insets, Position};

/// Apply a partial value onto a complete one.
pub trait Merge<P> {
    fn merge(&mut self, patch: P);
}

/// Copy every `Some` field of the patch onto the target.
macro_rules! replace_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

/// Recurse into every `Some` nested patch.
macro_rules! merge_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field.merge(value);
            }
        )+
    };
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingsPatch {
    pub body: Option<String>,
    pub x: Option<String>,
    pub x2: Option<String>,
    pub y: Option<String>,
    pub y2: Option<String>,
}

impl Merge<BindingsPatch> for Bindings {
    fn merge(&mut self, patch: BindingsPatch) {
        replace_fields!(self, patch; body);
        for (slot, value) in [
            (&mut self.x, patch.x),
            (&mut self.x2, patch.x2),
            (&mut self.y, patch.y),
            (&mut self.y2, patch.y2),
        ] {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarginPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Merge<MarginPatch> for Margin {
    fn merge(&mut self, patch: MarginPatch) {
        if patch.x.is_some() {
            self.x = patch.x;
        }
        if patch.y.is_some() {
            self.y = patch.y;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizePatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<MarginPatch>,
}

impl Merge<SizePatch> for SizeOptions {
    fn merge(&mut self, patch: SizePatch) {
        if patch.width.is_some() {
            self.width = patch.width;
        }
        if patch.height.is_some() {
            self.height = patch.height;
        }
        if let Some(margin) = patch.margin {
            self.margin.get_or_insert_with(Margin::default).merge(margin);
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TickPatch {
    pub values: Option<Vec<f64>>,
    pub interval: Option<f64>,
    #[serde(alias = "scale_interval")]
    pub label_interval: Option<f64>,
    pub count: Option<usize>,
    #[serde(skip)]
    pub format: Option<TickFormat>,
    pub size: Option<TickSize>,
    pub inner_size: Option<TickSize>,
    pub scale_size: Option<f64>,
}

impl Merge<TickPatch> for TickOptions {
    fn merge(&mut self, patch: TickPatch) {
        if patch.values.is_some() {
            self.values = patch.values;
        }
        if patch.interval.is_some() {
            self.interval = patch.interval;
        }
        if patch.label_interval.is_some() {
            self.label_interval = patch.label_interval;
        }
        if patch.count.is_some() {
            self.count = patch.count;
        }
        if patch.scale_size.is_some() {
            self.scale_size = patch.scale_size;
        }
        replace_fields!(self, patch; format, size, inner_size);
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisPatch {
    pub show: Option<bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub sorted: Option<bool>,
    pub label: Option<String>,
    pub tick: Option<TickPatch>,
    pub position: Option<Position>,
    pub direction: Option<Position>,
    pub scale_group: Option<AxisGroup>,
}

impl Merge<AxisPatch> for AxisOptions {
    fn merge(&mut self, patch: AxisPatch) {
        replace_fields!(self, patch; show, sorted, position, scale_group);
        if patch.min.is_some() {
            self.min = patch.min;
        }
        if patch.max.is_some() {
            self.max = patch.max;
        }
        if patch.label.is_some() {
            self.label = patch.label;
        }
        if patch.direction.is_some() {
            self.direction = patch.direction;
        }
        merge_fields!(self, patch; tick);
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxesPatch {
    pub x: Option<AxisPatch>,
    pub x2: Option<AxisPatch>,
    pub y: Option<AxisPatch>,
    pub y2: Option<AxisPatch>,
}

impl Merge<AxesPatch> for Axes {
    fn merge(&mut self, patch: AxesPatch) {
        merge_fields!(self, patch; x, x2, y, y2);
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridPatch {
    pub show: Option<bool>,
    pub step: Option<f64>,
}

impl Merge<GridPatch> for GridOptions {
    fn merge(&mut self, patch: GridPatch) {
        replace_fields!(self, patch; show);
        if patch.step.is_some() {
            self.step = patch.step;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridsPatch {
    pub x: Option<GridPatch>,
    pub y: Option<GridPatch>,
}

impl Merge<GridsPatch> for Grids {
    fn merge(&mut self, patch: GridsPatch) {
        merge_fields!(self, patch; x, y);
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaddingPatch {
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub top: Option<u32>,
    pub bottom: Option<u32>,
}

impl Merge<PaddingPatch> for Insets {
    fn merge(&mut self, patch: PaddingPatch) {
        replace_fields!(self, patch; left, right, top, bottom);
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipPatch {
    pub show: Option<bool>,
    pub grouped: Option<bool>,
    pub radius: Option<f64>,
    #[serde(skip)]
    pub format: Option<TooltipFormat>,
}

impl Merge<TooltipPatch> for TooltipOptions {
    fn merge(&mut self, patch: TooltipPatch) {
        replace_fields!(self, patch; show, grouped, radius, format);
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointStylePatch {
    pub size: Option<f32>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
}

impl Merge<PointStylePatch> for PointStyle {
    fn merge(&mut self, patch: PointStylePatch) {
        replace_fields!(self, patch; size);
        if patch.class_name.is_some() {
            self.class_name = patch.class_name;
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointPatch {
    pub show: Option<bool>,
    pub style: Option<PointStylePatch>,
    pub hover_style: Option<PointStylePatch>,
}

impl Merge<PointPatch> for PointOptions {
    fn merge(&mut self, patch: PointPatch) {
        replace_fields!(self, patch; show);
        merge_fields!(self, patch; style, hover_style);
    }
}

/// Partial chart configuration, as read from JSON.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartPatch {
    pub bindto: Option<BindingsPatch>,
    pub size: Option<SizePatch>,
    #[serde(rename = "type")]
    pub series_type: Option<SeriesType>,
    pub step: Option<StepType>,
    pub data: Option<Vec<Series>>,
    pub axis: Option<AxesPatch>,
    pub grid: Option<GridsPatch>,
    pub padding: Option<PaddingPatch>,
    pub tooltip: Option<TooltipPatch>,
    pub point: Option<PointPatch>,
    pub auto_resize: Option<bool>,
    /// Preset name, see [`theme::presets`].
    pub theme: Option<String>,
}

impl Merge<ChartPatch> for ChartOptions {
    fn merge(&mut self, patch: ChartPatch) {
        merge_fields!(self, patch; bindto, size, axis, grid, padding, tooltip, point);
        replace_fields!(self, patch; series_type, data, auto_resize);
        if patch.step.is_some() {
            self.step = patch.step;
        }
        if let Some(name) = patch.theme {
            self.theme = theme::find(&name);
        }
    }
}

/// One configuration section to change on a live chart.
#[derive(Clone, Debug)]
pub enum Update {
    Bindto(BindingsPatch),
    Size(SizePatch),
    SeriesType(SeriesType),
    Step(StepType),
    /// Replaces every series.
    Data(Vec<Series>),
    Axis(AxesPatch),
    Grid(GridsPatch),
    Padding(PaddingPatch),
    Tooltip(TooltipPatch),
    Point(PointPatch),
    AutoResize(bool),
    Theme(Theme),
}

impl Merge<Update> for ChartOptions {
    fn merge(&mut self, update: Update) {
        match update {
            Update::Bindto(p) => self.bindto.merge(p),
            Update::Size(p) => self.size.merge(p),
            Update::SeriesType(t) => self.series_type = t,
            Update::Step(s) => self.step = Some(s),
            Update::Data(data) => self.data = data,
            Update::Axis(p) => self.axis.merge(p),
            Update::Grid(p) => self.grid.merge(p),
            Update::Padding(p) => self.padding.merge(p),
            Update::Tooltip(p) => self.tooltip.merge(p),
            Update::Point(p) => self.point.merge(p),
            Update::AutoResize(on) => self.auto_resize = on,
            Update::Theme(theme) => self.theme = theme,
        }
    }
}

impl ChartOptions {
    /// Defaults overlaid with `patch`.
    pub fn merged(mut self, patch: ChartPatch) -> Self {
        self.merge(patch);
        self
    }

    /// Parse a JSON patch and merge it onto the defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let patch: ChartPatch = serde_json::from_str(text)?;
        Ok(Self::default().merged(patch))
    }
}
