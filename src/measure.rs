use glam::Vec2;

use crate::layout::ChildId;

/// Reports the intrinsic size of a child. Implemented by the host toolkit;
/// the packer never measures anything itself.
///
/// Must be deterministic for a given child and `max_width`. Called once per
/// child per packing pass.
pub trait Measure {
    fn measure(&self, child: ChildId, max_width: f32) -> Vec2;
}

impl<F> Measure for F
where
    F: Fn(ChildId, f32) -> Vec2,
{
    fn measure(&self, child: ChildId, max_width: f32) -> Vec2 {
        self(child, max_width)
    }
}
