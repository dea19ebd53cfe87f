use glam::{Vec2, vec2};

use super::{ChildId, Layout, Rect};
use crate::style::LayoutConfig;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub id: ChildId,
    pub rect: Rect,
}

/// Turns packed rows into absolute rects, in the same order the children were
/// packed.
///
/// The rows form a block as wide as the widest row. Horizontal alignment
/// positions that block inside the container and each row inside the block;
/// vertical alignment positions each child inside its row.
pub fn place(layout: &Layout, config: &LayoutConfig, origin: Vec2) -> Vec<Placement> {
    let h_factor = config.horizontal_alignment.factor();
    let v_factor = config.vertical_alignment.factor();
    let h_spacing = config.horizontal_spacing.get();
    let v_spacing = config.vertical_spacing.get();

    let block_width = layout.content_width();
    // overflowing content spills to the right
    let block_x = (layout.width() - block_width).max(0.0) * h_factor;

    let mut placements = Vec::with_capacity(layout.child_count());
    let mut y = 0.0;

    for row in layout.rows() {
        let mut x = block_x + (block_width - row.width()) * h_factor;
        for child in row.children() {
            let cross_offset = (row.height() - child.height()).max(0.0) * v_factor;
            placements.push(Placement {
                id: child.id,
                rect: Rect::new(origin + vec2(x, y + cross_offset), child.size()),
            });
            x += child.width() + h_spacing;
        }
        y += row.height() + v_spacing;
    }

    placements
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        layout::{Child, pack},
        style::{HorizontalAlignment, LineHeight, VerticalAlignment},
    };

    fn children(sizes: &[(f32, f32)]) -> Vec<Child> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| Child::new(ChildId(i), vec2(w, h)).unwrap())
            .collect()
    }

    fn origins(placements: &[Placement]) -> Vec<(f32, f32)> {
        placements
            .iter()
            .map(|p| (p.rect.origin.x, p.rect.origin.y))
            .collect()
    }

    #[rstest]
    #[case::leading(HorizontalAlignment::Leading, vec![(0.0, 0.0), (55.0, 0.0), (0.0, 15.0)])]
    #[case::center(HorizontalAlignment::Center, vec![(7.5, 0.0), (62.5, 0.0), (35.0, 15.0)])]
    #[case::trailing(HorizontalAlignment::Trailing, vec![(15.0, 0.0), (70.0, 0.0), (70.0, 15.0)])]
    fn horizontal_alignment(
        #[case] alignment: HorizontalAlignment,
        #[case] expected: Vec<(f32, f32)>,
    ) {
        let config = LayoutConfig::default().horizontal_alignment(alignment);
        let layout = pack(&children(&[(50.0, 10.0); 3]), 120.0, &config);
        assert_eq!(origins(&place(&layout, &config, Vec2::ZERO)), expected);
    }

    #[rstest]
    #[case::top(VerticalAlignment::Top, 0.0)]
    #[case::center(VerticalAlignment::Center, 10.0)]
    #[case::bottom(VerticalAlignment::Bottom, 20.0)]
    fn vertical_alignment(#[case] alignment: VerticalAlignment, #[case] expected_y: f32) {
        let config = LayoutConfig::default().vertical_alignment(alignment);
        let layout = pack(&children(&[(20.0, 10.0), (20.0, 30.0)]), 100.0, &config);
        let placements = place(&layout, &config, Vec2::ZERO);
        assert_eq!(placements[0].rect.origin.y, expected_y);
        assert_eq!(placements[1].rect.origin.y, 0.0);
    }

    #[test]
    fn equal_rows_stack_with_tallest_height() {
        let config = LayoutConfig::default()
            .line_height(LineHeight::Equal)
            .vertical_alignment(VerticalAlignment::Bottom);
        let layout = pack(&children(&[(60.0, 10.0), (60.0, 30.0)]), 100.0, &config);
        let placements = place(&layout, &config, vec2(4.0, 8.0));
        assert_eq!(origins(&placements), vec![(4.0, 28.0), (4.0, 43.0)]);
        assert_eq!(placements[1].rect.size, vec2(60.0, 30.0));
        assert_eq!(placements[0].rect.width(), 60.0);
        assert_eq!(placements[0].rect.height(), 10.0);
    }

    #[test]
    fn oversized_child_is_not_shifted_left() {
        let config = LayoutConfig::default().horizontal_alignment(HorizontalAlignment::Trailing);
        let layout = pack(&children(&[(150.0, 10.0), (20.0, 10.0)]), 100.0, &config);
        let placements = place(&layout, &config, Vec2::ZERO);
        assert_eq!(origins(&placements), vec![(0.0, 0.0), (130.0, 15.0)]);
    }

    #[test]
    fn keeps_input_order() {
        let config = LayoutConfig::default();
        let layout = pack(&children(&[(40.0, 10.0); 7]), 100.0, &config);
        let ids: Vec<usize> = place(&layout, &config, Vec2::ZERO)
            .iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, (0..7).collect::<Vec<_>>());
    }
}
