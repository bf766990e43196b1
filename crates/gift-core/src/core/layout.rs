use glam::Vec2;

use crate::error::LayoutError;

/// Number of gifts per round. The placement table below is a fixed design
/// artifact for exactly this count.
pub const GIFT_COUNT: usize = 10;

/// One fixed placement slot: a normalized position (percent of viewport
/// width/height) and a depth scale used purely for visual sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSlot {
    /// Position in percent units, both axes in [0, 100].
    pub pos: Vec2,
    /// Size multiplier; rows nearer the bottom of the screen are nearer the
    /// viewer and scale up.
    pub depth_scale: f32,
}

const fn slot(x: f32, y: f32, depth_scale: f32) -> LayoutSlot {
    LayoutSlot {
        pos: Vec2::new(x, y),
        depth_scale,
    }
}

// 3-4-3 arrangement, centered. Back row first so slot index == object id
// matches left-to-right, top-to-bottom reading order.
const SLOTS: [LayoutSlot; GIFT_COUNT] = [
    // Back row
    slot(35.0, 55.0, 0.8),
    slot(50.0, 55.0, 0.8),
    slot(65.0, 55.0, 0.8),
    // Middle row
    slot(28.0, 70.0, 0.9),
    slot(43.0, 70.0, 0.9),
    slot(57.0, 70.0, 0.9),
    slot(72.0, 70.0, 0.9),
    // Front row
    slot(35.0, 88.0, 1.0),
    slot(50.0, 88.0, 1.0),
    slot(65.0, 88.0, 1.0),
];

/// The placement table for a round of `count` gifts. Defined only for
/// [`GIFT_COUNT`]; other counts are an error, never a truncation.
pub fn layout_for(count: usize) -> Result<&'static [LayoutSlot], LayoutError> {
    if count == GIFT_COUNT {
        Ok(&SLOTS)
    } else {
        Err(LayoutError::UnsupportedCount(count))
    }
}

/// Infallible access for the round builder, which always uses the
/// supported count.
pub(crate) fn table() -> &'static [LayoutSlot; GIFT_COUNT] {
    &SLOTS
}

/// Render order derived from vertical position: higher `y` (lower on
/// screen) draws later, so front-row gifts never hide behind back-row ones
/// regardless of open state.
pub fn stack_order(y: f32) -> i32 {
    (y * 10.0).floor() as i32
}
