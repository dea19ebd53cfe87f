pub mod child;
pub mod dirty;
pub mod place;
pub mod rect;
pub mod wrap;

pub use child::{Child, ChildId};
pub use dirty::Dirty;
pub use place::{Placement, place};
pub use rect::Rect;
pub use wrap::{Layout, Row, pack};
