// File: crates/stepline-core/src/lib.rs
// Summary: Core library entry point; exports the layout, scale and chart controller API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hit;
pub mod host;
pub mod layout;
pub mod merge;
pub mod options;
pub mod range;
pub mod render;
pub mod scale;
pub mod series;
pub mod series_render;
pub mod theme;
pub mod ticks;
pub mod types;

pub use chart::{Chart, Hover, HoverMatch};
pub use error::{ChartError, Result};
pub use geometry::{PixelPoint, PixelRect};
pub use hit::{hit_test, tooltip_text, HitPolicy, TooltipFormat, TooltipPoint};
pub use host::{Host, RecordingHost, ResizeHub, ResizeSubscription};
pub use layout::{Layout, Size};
pub use merge::{ChartPatch, Merge, Update};
pub use options::{AxisOptions, ChartOptions};
pub use range::{resolve_range, Domain, PartialDomain};
pub use render::{Color, Curve, DrawCommand, GroupKind, Scene};
pub use scale::{LinearScale, ScalePair, ScaleSet};
pub use series::{Series, SeriesType, StepType};
pub use series_render::{render_series, RenderedSeries, SeriesDefaults};
pub use theme::Theme;
pub use ticks::{plan_ticks, TickFormat, TickOptions, TickPlan, TickPolicy, TickSize};
pub use types::{AxisGroup, AxisRole, Dimension, Insets, Position};
