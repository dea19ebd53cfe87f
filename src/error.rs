use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("spacing must be non-negative, got {0}")]
    NegativeSpacing(f32),

    #[error("{what} must be finite")]
    NonFiniteValue { what: &'static str },

    #[error("measured size must be non-negative, got {width}x{height}")]
    NegativeSize { width: f32, height: f32 },

    #[error("container width must be non-negative, got {0}")]
    NegativeContainerWidth(f32),
}

pub(crate) fn finite(value: f32, what: &'static str) -> Result<f32, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::NonFiniteValue { what })
    }
}
