use crate::{
    Result,
    error::{LayoutError, finite},
};

/// Where the block of rows sits inside the container, and where each row
/// sits inside that block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl HorizontalAlignment {
    /// Fraction of the free space placed before the content.
    pub fn factor(self) -> f32 {
        match self {
            HorizontalAlignment::Leading => 0.0,
            HorizontalAlignment::Center => 0.5,
            HorizontalAlignment::Trailing => 1.0,
        }
    }
}

/// Cross-axis alignment of children inside a row. Has no effect on packing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    pub fn factor(self) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => 0.5,
            VerticalAlignment::Bottom => 1.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineHeight {
    /// Every row is as tall as the tallest row.
    Equal,
    /// Every row is as tall as its own tallest child.
    #[default]
    Variable,
}

/// A non-negative, finite gap between children or rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Spacing(f32);

impl Spacing {
    pub const DEFAULT: Spacing = Spacing(5.0);
    pub const ZERO: Spacing = Spacing(0.0);

    pub fn new(value: f32) -> Result<Self> {
        let value = finite(value, "spacing")?;
        if value < 0.0 {
            return Err(LayoutError::NegativeSpacing(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Spacing {
    type Error = LayoutError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub horizontal_spacing: Spacing,
    pub vertical_spacing: Spacing,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub line_height: LineHeight,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: Spacing::DEFAULT,
            vertical_spacing: Spacing::DEFAULT,
            horizontal_alignment: HorizontalAlignment::Leading,
            vertical_alignment: VerticalAlignment::Top,
            line_height: LineHeight::Variable,
        }
    }
}

impl LayoutConfig {
    /// Default configuration with the given spacings, rejecting negative or
    /// non-finite values.
    pub fn new(horizontal_spacing: f32, vertical_spacing: f32) -> Result<Self> {
        Ok(Self {
            horizontal_spacing: Spacing::new(horizontal_spacing)?,
            vertical_spacing: Spacing::new(vertical_spacing)?,
            ..Self::default()
        })
    }

    pub fn horizontal_spacing(mut self, spacing: Spacing) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    pub fn vertical_spacing(mut self, spacing: Spacing) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    pub fn line_height(mut self, line_height: LineHeight) -> Self {
        self.line_height = line_height;
        self
    }
}
