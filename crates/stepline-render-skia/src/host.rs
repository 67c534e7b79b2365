// File: crates/stepline-render-skia/src/host.rs
// Summary: Host implementation backed by Skia raster surfaces, one per named target.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use image::RgbaImage;

use stepline_core::{Host, ResizeHub, ResizeSubscription, Scene, Size};

use crate::raster::{RasterOptions, SkiaRaster};

#[derive(Default)]
struct Target {
    size: Size,
    scene: Option<Scene>,
    overlay: Option<Scene>,
    dirty: bool,
}

/// Keeps the latest scene per target and rasterizes on demand.
pub struct SkiaHost {
    raster: SkiaRaster,
    targets: HashMap<String, Target>,
    resize: ResizeHub,
}

impl SkiaHost {
    pub fn new(options: RasterOptions) -> Self {
        Self { raster: SkiaRaster::new(options), targets: HashMap::new(), resize: ResizeHub::new() }
    }

    pub fn with_target(mut self, name: impl Into<String>, width: f64, height: f64) -> Self {
        self.set_size(name, width, height);
        self
    }

    pub fn set_size(&mut self, name: impl Into<String>, width: f64, height: f64) {
        self.targets.entry(name.into()).or_default().size = Size::new(width, height);
    }

    pub fn raster(&self) -> &SkiaRaster {
        &self.raster
    }

    /// Whether `target` changed since the last call; clears the flag.
    pub fn take_dirty(&mut self, target: &str) -> bool {
        self.targets.get_mut(target).map_or(false, |t| std::mem::take(&mut t.dirty))
    }

    /// Composite of the last scene and hover layer presented to `target`.
    pub fn rgba(&self, target: &str) -> Result<RgbaImage> {
        let (scene, overlay) = self.layers(target)?;
        self.raster.render_rgba(scene, overlay)
    }

    pub fn png(&self, target: &str) -> Result<Vec<u8>> {
        let (scene, overlay) = self.layers(target)?;
        self.raster.render_png(scene, overlay)
    }

    pub fn save_png(&self, target: &str, path: impl AsRef<Path>) -> Result<()> {
        let (scene, overlay) = self.layers(target)?;
        self.raster.write_png(scene, overlay, path)
    }

    fn layers(&self, target: &str) -> Result<(&Scene, Option<&Scene>)> {
        let t = self.targets.get(target).ok_or_else(|| anyhow!("unknown target '{target}'"))?;
        let scene = t.scene.as_ref().ok_or_else(|| anyhow!("nothing presented to '{target}' yet"))?;
        Ok((scene, t.overlay.as_ref()))
    }
}

impl Default for SkiaHost {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}

impl Host for SkiaHost {
    fn client_size(&self, target: &str) -> Option<Size> {
        self.targets.get(target).map(|t| t.size)
    }

    fn present(&mut self, target: &str, scene: &Scene) -> Result<()> {
        let t = self.targets.get_mut(target).ok_or_else(|| anyhow!("unknown target '{target}'"))?;
        t.scene = Some(scene.clone());
        t.overlay = None;
        t.dirty = true;
        Ok(())
    }

    fn present_overlay(&mut self, target: &str, overlay: Option<&Scene>) -> Result<()> {
        let t = self.targets.get_mut(target).ok_or_else(|| anyhow!("unknown target '{target}'"))?;
        t.overlay = overlay.cloned();
        t.dirty = true;
        Ok(())
    }

    fn subscribe_resize(&mut self) -> Option<ResizeSubscription> {
        Some(self.resize.subscribe())
    }
}
