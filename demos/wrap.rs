use anyhow::Context;
use glam::{Vec2, vec2};
use log::info;

use wrapstack::{
    ChildId, HorizontalAlignment, LayoutConfig, LineHeight, Spacing, VerticalAlignment, WrapStack,
    debug,
};

const TAGS: &[&str] = &[
    "rust", "layout", "flex-wrap", "ui", "greedy", "rows", "spacing", "alignment", "equal",
    "variable", "measure", "render",
];

const FONT_SIZE: f32 = 14.0;
const CHIP_PADDING: Vec2 = Vec2::new(12.0, 6.0);

// Same rough text metric as a label widget: 0.6em per character.
fn measure_chip(id: ChildId, _max_width: f32) -> Vec2 {
    let text = TAGS.get(id.0).copied().unwrap_or_default();
    vec2(text.len() as f32 * FONT_SIZE * 0.6, FONT_SIZE) + CHIP_PADDING * 2.0
}

fn main() -> anyhow::Result<()> {
    wrapstack::init_logging();

    let width: f32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<f32>())
        .transpose()
        .context("container width must be a number")?
        .unwrap_or(320.0);

    let config = LayoutConfig::default()
        .horizontal_spacing(Spacing::new(8.0)?)
        .horizontal_alignment(HorizontalAlignment::Center)
        .vertical_alignment(VerticalAlignment::Center)
        .line_height(LineHeight::Equal);

    let mut stack = WrapStack::new(config).with_children((0..TAGS.len()).map(ChildId));

    // First pass runs before the host knows its width.
    let provisional = stack.layout(&measure_chip)?;
    info!("provisional pass: {} rows", provisional.row_count());

    stack.set_container_width(width)?;
    let layout = stack.layout(&measure_chip)?;
    print!("{}", debug::dump(layout));

    for placement in stack.placements(&measure_chip, Vec2::ZERO)? {
        let r = placement.rect;
        println!(
            "{:>10} at ({:6.1}, {:6.1}) size {:5.1}x{:4.1}",
            TAGS[placement.id.0],
            r.origin.x,
            r.origin.y,
            r.width(),
            r.height()
        );
    }

    Ok(())
}
