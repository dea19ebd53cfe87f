pub mod properties;

pub use properties::{HorizontalAlignment, LayoutConfig, LineHeight, Spacing, VerticalAlignment};
