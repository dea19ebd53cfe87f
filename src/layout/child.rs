use std::fmt;

use glam::Vec2;

use crate::{
    Result,
    error::{LayoutError, finite},
};

/// Opaque handle the renderer uses to find the real element again.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ChildId(pub usize);

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A child handle together with its measured intrinsic size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Child {
    pub id: ChildId,
    size: Vec2,
}

impl Child {
    pub fn new(id: ChildId, size: Vec2) -> Result<Self> {
        let width = finite(size.x, "child width")?;
        let height = finite(size.y, "child height")?;
        if width < 0.0 || height < 0.0 {
            return Err(LayoutError::NegativeSize { width, height });
        }
        Ok(Self { id, size })
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn accepts_zero_size() {
        let child = Child::new(ChildId(3), Vec2::ZERO).unwrap();
        assert_eq!(child.width(), 0.0);
        assert_eq!(child.height(), 0.0);
        assert_eq!(child.id.to_string(), "#3");
    }

    #[rstest]
    #[case(vec2(-1.0, 4.0), LayoutError::NegativeSize { width: -1.0, height: 4.0 })]
    #[case(vec2(4.0, -0.5), LayoutError::NegativeSize { width: 4.0, height: -0.5 })]
    #[case(vec2(f32::NAN, 4.0), LayoutError::NonFiniteValue { what: "child width" })]
    #[case(vec2(4.0, f32::INFINITY), LayoutError::NonFiniteValue { what: "child height" })]
    fn rejects_out_of_contract_sizes(#[case] size: Vec2, #[case] expected: LayoutError) {
        assert_eq!(Child::new(ChildId(0), size), Err(expected));
    }
}
