#[derive(Debug, Copy, Clone)]
pub struct Dirty {
    pub measure_dirty: bool, // children need re-measuring
    pub pack_dirty: bool,    // rows need re-packing (width or config changed)
}

impl Default for Dirty {
    fn default() -> Self {
        Self {
            measure_dirty: true,
            pack_dirty: true,
        }
    }
}

impl Dirty {
    pub fn any(&self) -> bool {
        self.measure_dirty || self.pack_dirty
    }

    pub fn clear(&mut self) {
        self.measure_dirty = false;
        self.pack_dirty = false;
    }
}
