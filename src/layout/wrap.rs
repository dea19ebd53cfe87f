use std::mem;

use glam::{Vec2, vec2};
use log::trace;

use super::child::{Child, ChildId};
use crate::style::{LayoutConfig, LineHeight};

/// A maximal run of consecutive children sharing one visual line.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    children: Vec<Child>,
    width: f32,
    height: f32,
}

impl Row {
    fn close(children: Vec<Child>, width: f32) -> Self {
        let height = tallest(&children);
        Self {
            children,
            width,
            height,
        }
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn ids(&self) -> impl Iterator<Item = ChildId> + '_ {
        self.children.iter().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Sum of child widths plus the horizontal spacing between them.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height the row is laid out with; depends on the line height mode.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Height of the tallest child in this row, whatever the line height mode.
    pub fn natural_height(&self) -> f32 {
        tallest(&self.children)
    }
}

fn tallest(children: &[Child]) -> f32 {
    children.iter().map(Child::height).fold(0.0, f32::max)
}

/// Result of one packing pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    rows: Vec<Row>,
    size: Vec2,
}

impl Layout {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Overall size. The width is always the container width, even when a
    /// single oversized child spills past it.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn child_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the widest row.
    pub fn content_width(&self) -> f32 {
        self.rows.iter().map(Row::width).fold(0.0, f32::max)
    }
}

/// Greedily packs `children` into rows no wider than `container_width`.
///
/// A child that does not fit on the current row starts a new one. A row is
/// never left empty, so a child wider than the container gets a row to itself.
/// A container width of zero means the host has not measured yet and yields
/// one child per row.
pub fn pack(children: &[Child], container_width: f32, config: &LayoutConfig) -> Layout {
    let spacing = config.horizontal_spacing.get();

    let mut rows: Vec<Row> = Vec::new();
    let mut current: Vec<Child> = Vec::new();
    let mut row_width = 0.0f32;

    for &child in children {
        let fits = current.is_empty()
            || (container_width > 0.0 && row_width + spacing + child.width() <= container_width);

        if !fits {
            trace!(
                "row {} closed with {} children, width {}",
                rows.len(),
                current.len(),
                row_width
            );
            rows.push(Row::close(mem::take(&mut current), row_width));
            row_width = 0.0;
        }

        if !current.is_empty() {
            row_width += spacing;
        }
        row_width += child.width();
        current.push(child);
    }

    if !current.is_empty() {
        trace!(
            "row {} closed with {} children, width {}",
            rows.len(),
            current.len(),
            row_width
        );
        rows.push(Row::close(current, row_width));
    }

    if config.line_height == LineHeight::Equal {
        let tallest_row = rows.iter().map(Row::height).fold(0.0, f32::max);
        for row in &mut rows {
            row.height = tallest_row;
        }
    }

    let gaps = rows.len().saturating_sub(1) as f32;
    let height = rows.iter().map(Row::height).sum::<f32>() + config.vertical_spacing.get() * gaps;

    Layout {
        rows,
        size: vec2(container_width, height),
    }
}
