// File: crates/stepline-core/src/host.rs
// Summary: Host seam (drawing targets, scene presentation, resize notifications) and an in-memory host.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::layout::Size;
use crate::render::Scene;

/// Environment a chart renders into. Targets are named surfaces; the chart
/// never draws itself, it hands finished scenes over.
pub trait Host {
    /// Client size of `target`, or `None` if the host does not know it.
    fn client_size(&self, target: &str) -> Option<Size>;

    /// Replace everything drawn in `target` with `scene`.
    fn present(&mut self, target: &str, scene: &Scene) -> anyhow::Result<()>;

    /// Draw (or clear, with `None`) the hover layer above `target`.
    fn present_overlay(&mut self, _target: &str, _overlay: Option<&Scene>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Register for viewport resize notifications. Hosts without a resize
    /// source return `None`.
    fn subscribe_resize(&mut self) -> Option<ResizeSubscription> {
        None
    }
}

/// Registry of live resize listeners.
#[derive(Clone, Debug, Default)]
pub struct ResizeHub {
    inner: Rc<RefCell<HubState>>,
}

#[derive(Debug, Default)]
struct HubState {
    next_id: u64,
    live: Vec<u64>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> ResizeSubscription {
        let mut state = self.inner.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.live.push(id);
        ResizeSubscription { hub: Rc::clone(&self.inner), id }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().live.len()
    }
}

/// Live registration; dropping it deregisters.
#[derive(Debug)]
pub struct ResizeSubscription {
    hub: Rc<RefCell<HubState>>,
    id: u64,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        let mut state = self.hub.borrow_mut();
        state.live.retain(|&id| id != self.id);
    }
}

/// Host keeping the last scene per target in memory.
#[derive(Debug, Default)]
pub struct RecordingHost {
    sizes: HashMap<String, Size>,
    scenes: HashMap<String, Scene>,
    overlays: HashMap<String, Scene>,
    presents: usize,
    resize: ResizeHub,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target(mut self, name: impl Into<String>, width: f64, height: f64) -> Self {
        self.set_size(name, width, height);
        self
    }

    /// Add or resize a target.
    pub fn set_size(&mut self, name: impl Into<String>, width: f64, height: f64) {
        self.sizes.insert(name.into(), Size::new(width, height));
    }

    pub fn scene(&self, target: &str) -> Option<&Scene> {
        self.scenes.get(target)
    }

    pub fn overlay(&self, target: &str) -> Option<&Scene> {
        self.overlays.get(target)
    }

    /// Number of `present` calls so far, across targets.
    pub fn present_count(&self) -> usize {
        self.presents
    }

    pub fn resize_hub(&self) -> &ResizeHub {
        &self.resize
    }
}

impl Host for RecordingHost {
    fn client_size(&self, target: &str) -> Option<Size> {
        self.sizes.get(target).copied()
    }

    fn present(&mut self, target: &str, scene: &Scene) -> anyhow::Result<()> {
        self.presents += 1;
        self.scenes.insert(target.to_string(), scene.clone());
        Ok(())
    }

    fn present_overlay(&mut self, target: &str, overlay: Option<&Scene>) -> anyhow::Result<()> {
        match overlay {
            Some(scene) => {
                self.overlays.insert(target.to_string(), scene.clone());
            }
            None => {
                self.overlays.remove(target);
            }
        }
        Ok(())
    }

    fn subscribe_resize(&mut self) -> Option<ResizeSubscription> {
        Some(self.resize.subscribe())
    }
}
