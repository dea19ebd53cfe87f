pub mod debug;
pub mod error;
pub mod layout;
pub mod measure;
pub mod style;
pub mod widgets;

pub use error::LayoutError;
pub use layout::{Child, ChildId, Layout, Placement, Rect, Row, pack, place};
pub use measure::Measure;
pub use style::{HorizontalAlignment, LayoutConfig, LineHeight, Spacing, VerticalAlignment};
pub use widgets::WrapStack;

pub use glam::{Vec2, vec2};

pub type Result<T> = std::result::Result<T, LayoutError>;

pub fn init_logging() {
    env_logger::init();
}
