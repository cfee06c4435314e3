//! Popup placement relative to the caret anchor

/// Height reserved for the preedit line when the popup is flipped above the
/// anchor. The engine does not send the real preedit height, so this is an
/// approximation.
pub const PREEDIT_HEIGHT_ESTIMATE: i32 = 20;

/// Default popup width before the renderer reports a real size
pub const DEFAULT_WIDTH: i32 = 80;

/// Minimal height the window is shrunk to before it is refitted
pub const SHRINK_HEIGHT: i32 = 1;

/// Screen bounds used until the renderer reports real ones
pub const DEFAULT_SCREEN: Size = Size {
    width: 1024,
    height: 768,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Top-left corner for a popup of `size` anchored at `anchor`.
///
/// The popup opens right of and below the anchor, and flips to the other
/// side of an axis when it would cross the screen edge. The result is then
/// clamped to the screen.
pub fn place(anchor: Point, size: Size, screen: Size) -> Point {
    // Wide enough that no sum of two i32 extents overflows
    let (ax, ay) = (i64::from(anchor.x), i64::from(anchor.y));
    let (w, h) = (i64::from(size.width), i64::from(size.height));
    let (sw, sh) = (i64::from(screen.width), i64::from(screen.height));

    let x = if ax + w <= sw { ax } else { ax - w };
    let y = if ay + h <= sh {
        ay
    } else {
        ay - h - i64::from(PREEDIT_HEIGHT_ESTIMATE)
    };

    Point {
        x: clamp_axis(x, w, sw),
        y: clamp_axis(y, h, sh),
    }
}

fn clamp_axis(pos: i64, extent: i64, screen_extent: i64) -> i32 {
    let clamped = pos.min(screen_extent - extent).max(0);
    i32::try_from(clamped).unwrap_or(i32::MAX)
}
