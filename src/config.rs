/// Scroll offset in pixels past which the navbar swaps to its solid
/// background.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 40.0;

/// Fraction of a content block that must enter the viewport before its
/// reveal transition runs.
pub const REVEAL_THRESHOLD: f64 = 0.12;
