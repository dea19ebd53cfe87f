use glam::Vec2;
use log::debug;

use crate::{
    Result,
    error::{LayoutError, finite},
    layout::{Child, ChildId, Dirty, Layout, Placement, pack, place},
    measure::Measure,
    style::LayoutConfig,
};

/// A horizontal stack that wraps its children onto new rows.
///
/// Owns the last container width reported by the host. Until a real width
/// arrives the stack is provisional and packs one child per row; once the
/// width is known the host must call [`WrapStack::layout`] again and redraw.
#[derive(Clone, Debug, Default)]
pub struct WrapStack {
    config: LayoutConfig,
    children: Vec<ChildId>,
    container_width: f32,

    cached: Option<Layout>,
    dirty: Dirty,
}

impl WrapStack {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ChildId>) -> Self {
        self.children.extend(children);
        self.dirty.measure_dirty = true;
        self
    }

    pub fn push(&mut self, child: ChildId) {
        self.children.push(child);
        self.dirty.measure_dirty = true;
    }

    pub fn children(&self) -> &[ChildId] {
        &self.children
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// True until the host reports a non-zero container width.
    pub fn is_provisional(&self) -> bool {
        self.container_width == 0.0
    }

    /// Records the available width. Returns whether the rows must be re-packed.
    pub fn set_container_width(&mut self, width: f32) -> Result<bool> {
        let width = finite(width, "container width")?;
        if width < 0.0 {
            return Err(LayoutError::NegativeContainerWidth(width));
        }
        if width == self.container_width {
            return Ok(false);
        }

        debug!("container width {} -> {}", self.container_width, width);
        self.container_width = width;
        self.dirty.pack_dirty = true;
        Ok(true)
    }

    /// Child content changed; sizes are re-measured on the next pass.
    pub fn invalidate(&mut self) {
        self.dirty.measure_dirty = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.dirty.any() || self.cached.is_none()
    }

    /// Last computed layout, if any pass has run.
    pub fn cached_layout(&self) -> Option<&Layout> {
        self.cached.as_ref()
    }

    /// Measures every child against the current width and packs them, unless
    /// nothing changed since the last pass.
    pub fn layout(&mut self, measurer: &impl Measure) -> Result<&Layout> {
        if let Some(layout) = self.cached.take_if(|_| !self.dirty.any()) {
            return Ok(&*self.cached.insert(layout));
        }

        let width = self.container_width;
        let measured = self
            .children
            .iter()
            .map(|&id| Child::new(id, measurer.measure(id, width)))
            .collect::<Result<Vec<_>>>()?;

        let layout = pack(&measured, width, &self.config);
        debug!(
            "packed {} children into {} rows at width {}{}",
            layout.child_count(),
            layout.row_count(),
            width,
            if self.is_provisional() {
                " (provisional)"
            } else {
                ""
            }
        );

        self.dirty.clear();
        Ok(&*self.cached.insert(layout))
    }

    pub fn placements(&mut self, measurer: &impl Measure, origin: Vec2) -> Result<Vec<Placement>> {
        let config = self.config;
        let layout = self.layout(measurer)?;
        Ok(place(layout, &config, origin))
    }
}
