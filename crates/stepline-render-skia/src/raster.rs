// File: crates/stepline-render-skia/src/raster.rs
// Summary: Scene rasterization on Skia CPU raster surfaces; RGBA buffers and PNG output.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use image::{ImageFormat, RgbaImage};
use skia_safe as skia;
use tracing::debug;

use stepline_core::render::{DrawCommand, LineStyle};
use stepline_core::{Color, PixelPoint, Scene};

use crate::curve::{segments, Segment};
use crate::text::TextShaper;

pub struct RasterOptions {
    /// Text is off in snapshot tests to avoid font variance across platforms.
    pub draw_text: bool,
    /// Device pixel ratio applied to every coordinate.
    pub scale: f32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { draw_text: true, scale: 1.0 }
    }
}

/// Paints scenes with Skia. Holds the shaped font collection so repeated
/// renders do not rebuild it.
pub struct SkiaRaster {
    shaper: TextShaper,
    pub options: RasterOptions,
}

impl SkiaRaster {
    pub fn new(options: RasterOptions) -> Self {
        Self { shaper: TextShaper::new(), options }
    }

    /// Rasterize `base` with an optional hover layer on top.
    pub fn render_rgba(&self, base: &Scene, overlay: Option<&Scene>) -> Result<RgbaImage> {
        let scale = self.options.scale.max(0.1);
        let w = ((base.width as f32 * scale).round() as i32).max(1);
        let h = ((base.height as f32 * scale).round() as i32).max(1);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;

        let canvas = surface.canvas();
        canvas.clear(to_skia(base.background));
        canvas.save();
        canvas.scale((scale, scale));
        self.paint(canvas, base);
        if let Some(layer) = overlay {
            self.paint(canvas, layer);
        }
        canvas.restore();

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("reading back {w}x{h} pixels failed"));
        }
        debug!(width = w, height = h, groups = base.groups.len(), "rasterized scene");
        RgbaImage::from_raw(w as u32, h as u32, pixels).ok_or_else(|| anyhow!("pixel buffer size mismatch"))
    }

    pub fn render_png(&self, base: &Scene, overlay: Option<&Scene>) -> Result<Vec<u8>> {
        let img = self.render_rgba(base, overlay)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }

    pub fn write_png(&self, base: &Scene, overlay: Option<&Scene>, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.render_png(base, overlay)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Draw every group of `scene` in order, without clearing.
    pub fn paint(&self, canvas: &skia::Canvas, scene: &Scene) {
        for command in scene.commands() {
            self.paint_command(canvas, command);
        }
    }

    fn paint_command(&self, canvas: &skia::Canvas, command: &DrawCommand) {
        match command {
            DrawCommand::Line { from, to, style } => {
                canvas.draw_line(pt(*from), pt(*to), &stroke(style));
            }
            DrawCommand::Path { points, curve, style, .. } => {
                let mut path = skia::Path::new();
                for seg in segments(points, *curve) {
                    match seg {
                        Segment::MoveTo(p) => { path.move_to(pt(p)); }
                        Segment::LineTo(p) => { path.line_to(pt(p)); }
                        Segment::CubicTo(c1, c2, p) => { path.cubic_to(pt(c1), pt(c2), pt(p)); }
                    }
                }
                canvas.draw_path(&path, &stroke(style));
            }
            DrawCommand::Markers { points, style, visible } => {
                if !*visible {
                    return;
                }
                let paint = fill(style.color);
                for &p in points {
                    canvas.draw_circle(pt(p), style.size, &paint);
                }
            }
            DrawCommand::Rect { rect, fill: color, stroke: outline } => {
                let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                canvas.draw_rect(r, &fill(*color));
                if let Some(style) = outline {
                    canvas.draw_rect(r, &stroke(style));
                }
            }
            DrawCommand::Text { position, text, style } => {
                if self.options.draw_text {
                    self.shaper.draw(
                        canvas,
                        text,
                        position.x as f32,
                        position.y as f32,
                        style.size,
                        to_skia(style.color),
                        style.anchor,
                        style.baseline,
                    );
                }
            }
        }
    }
}

impl Default for SkiaRaster {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}

pub fn to_skia(c: Color) -> skia::Color {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(byte(c.a), byte(c.r), byte(c.g), byte(c.b))
}

fn pt(p: PixelPoint) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

fn stroke(style: &LineStyle) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.width);
    paint.set_color(to_skia(style.color));
    paint
}

fn fill(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(color));
    paint
}
