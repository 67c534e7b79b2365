// File: crates/window-demo/src/main.rs
// Summary: Windowed demo blitting the Skia raster through softbuffer; resize and hover go through the chart controller.

use anyhow::{anyhow, Context, Result};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use stepline_core::merge::{PointPatch, TooltipPatch};
use stepline_core::{Chart, ChartOptions, PixelPoint, Series, SeriesType, StepType, Theme, Update};
use stepline_render_skia::SkiaHost;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

const TARGET: &str = "chart";
const CURVES: [(SeriesType, StepType); 5] = [
    (SeriesType::Line, StepType::Step),
    (SeriesType::Spline, StepType::Step),
    (SeriesType::Step, StepType::Step),
    (SeriesType::Step, StepType::StepBefore),
    (SeriesType::Step, StepType::StepAfter),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Arg: optional CSV path (supports .csv/.cvs swap)
    let data = match std::env::args().nth(1) {
        Some(raw) => {
            let path = resolve_path_simple(&raw);
            load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_series(),
    };
    if data.is_empty() {
        anyhow::bail!("no series loaded");
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Stepline Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let size = window.inner_size();
    let host = SkiaHost::default().with_target(TARGET, size.width as f64, size.height as f64);
    let mut options = ChartOptions::default();
    options.data = data;
    options.tooltip.show = true;
    options.grid.y.show = true;
    let mut chart = Chart::new(options, host)?;
    info!("keys: C cycles curves, T toggles theme, G groups tooltips, P toggles points");

    let mut curve = 0usize;
    let mut dark = false;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let outcome: Result<()> = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    Ok(())
                }
                WindowEvent::Resized(new_size) => {
                    chart.host_mut().set_size(TARGET, new_size.width as f64, new_size.height as f64);
                    chart.on_viewport_resize().map(|_| ()).map_err(Into::into)
                }
                WindowEvent::CursorMoved { position, .. } => chart
                    .pointer_move(PixelPoint::new(position.x, position.y))
                    .map(|_| ())
                    .map_err(Into::into),
                WindowEvent::CursorLeft { .. } => chart.pointer_out().map_err(Into::into),
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    let update = match key {
                        VirtualKeyCode::C => {
                            curve = (curve + 1) % CURVES.len();
                            let (series_type, step) = CURVES[curve];
                            chart.begin_update();
                            let staged = chart
                                .update(Update::SeriesType(series_type))
                                .and_then(|_| chart.update(Update::Step(step)));
                            Some(staged.and_then(|_| chart.end_update(true)))
                        }
                        VirtualKeyCode::T => {
                            dark = !dark;
                            let theme = if dark { Theme::dark() } else { Theme::light() };
                            Some(chart.update(Update::Theme(theme)))
                        }
                        VirtualKeyCode::G => {
                            let grouped = !chart.options().tooltip.grouped;
                            Some(chart.update(Update::Tooltip(TooltipPatch {
                                grouped: Some(grouped),
                                ..TooltipPatch::default()
                            })))
                        }
                        VirtualKeyCode::P => {
                            let show = !chart.options().point.show;
                            Some(chart.update(Update::Point(PointPatch { show: Some(show), ..PointPatch::default() })))
                        }
                        _ => None,
                    };
                    update.unwrap_or(Ok(())).map_err(Into::into)
                }
                _ => Ok(()),
            },
            Event::MainEventsCleared => {
                if chart.host_mut().take_dirty(TARGET) {
                    window.request_redraw();
                }
                Ok(())
            }
            Event::RedrawRequested(_) => draw(&chart, &mut surface),
            _ => Ok(()),
        };
        if let Err(e) = outcome {
            error!("{e:#}");
        }
    });
}

/// Rasterize the presented scene plus hover layer and copy it into the window buffer.
fn draw(chart: &Chart<SkiaHost>, surface: &mut softbuffer::Surface) -> Result<()> {
    let rgba = chart.host().rgba(TARGET)?;
    let (w, h) = rgba.dimensions();
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize surface: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    // softbuffer wants 0RGB in the low three bytes.
    for (dst, px) in frame.iter_mut().zip(rgba.pixels()) {
        let [r, g, b, _] = px.0;
        *dst = (r as u32) << 16 | (g as u32) << 8 | b as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))
}

/// A damped wave and a staircase so every curve family has something to show.
fn sample_series() -> Vec<Series> {
    let wave = (0..=60)
        .map(|i| {
            let x = i as f64 * 0.25;
            (x, (x * 0.8).sin() * 40.0 * (-x / 20.0).exp() + 50.0)
        })
        .collect();
    let stairs = (0..=15).map(|i| (i as f64, ((i * 7) % 11) as f64 * 8.0 + 10.0)).collect();
    vec![
        Series::new(wave).with_title("wave").with_sorted(true, false),
        Series::new(stairs).with_title("stairs").with_sorted(true, false),
    ]
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path_simple(raw: &str) -> PathBuf {
    let p = Path::new(raw);
    if p.exists() {
        return p.to_path_buf();
    }
    match swap_ext(p) {
        Some(alt) if alt.exists() => {
            warn!(path = %alt.display(), "extension swapped between .csv/.cvs");
            alt
        }
        _ => p.to_path_buf(),
    }
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => Some(p.with_extension("csv")),
        "csv" => Some(p.with_extension("cvs")),
        _ => None,
    }
}

/// First column is x; each further column becomes a series titled by its header.
fn load_csv(path: &Path) -> Result<Vec<Series>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;
    let titles: Vec<String> = rdr.headers()?.iter().skip(1).map(str::to_string).collect();
    let mut columns = vec![Vec::new(); titles.len()];
    for rec in rdr.records() {
        let rec = rec?;
        let Some(x) = rec.get(0).and_then(|s| s.parse::<f64>().ok()) else { continue };
        for (i, col) in columns.iter_mut().enumerate() {
            if let Some(y) = rec.get(i + 1).and_then(|s| s.parse::<f64>().ok()) {
                col.push((x, y));
            }
        }
    }
    Ok(titles
        .into_iter()
        .zip(columns)
        .filter(|(_, col)| !col.is_empty())
        .map(|(title, col)| Series::new(col).with_title(title))
        .collect())
}
