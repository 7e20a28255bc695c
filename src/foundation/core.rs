use crate::foundation::error::{IconError, IconResult};

/// Largest accepted icon edge in pixels.
pub const MAX_ICON_SIZE: u32 = 16_384;

/// Edge length of a square icon, in pixels.
///
/// Always in `1..=MAX_ICON_SIZE`. Sizes below 8 are accepted but render degenerate shapes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct IconSize(u32);

impl IconSize {
    /// Validate and wrap a pixel size.
    pub fn new(px: u32) -> IconResult<Self> {
        if px == 0 {
            return Err(IconError::validation("icon size must be > 0"));
        }
        if px > MAX_ICON_SIZE {
            return Err(IconError::validation(format!(
                "icon size {px} exceeds the {MAX_ICON_SIZE}px limit"
            )));
        }
        Ok(Self(px))
    }

    /// Edge length in pixels.
    pub fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl TryFrom<u32> for IconSize {
    type Error = IconError;

    fn try_from(px: u32) -> IconResult<Self> {
        Self::new(px)
    }
}

impl From<IconSize> for u32 {
    fn from(s: IconSize) -> Self {
        s.0
    }
}

impl std::fmt::Display for IconSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 0 is fully transparent.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in memory order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Inverse of [`Rgba8::to_array`].
    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }
}

/// Color of untouched pixels.
pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);
/// Badge fill.
pub const BADGE_BLUE: Rgba8 = Rgba8::new(52, 152, 219, 255);
/// Arrow fill.
pub const ARROW_WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

/// Integer pixel coordinate. May lie outside the canvas for degenerate sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelPoint {
    /// Column, growing rightwards.
    pub x: i64,
    /// Row, growing downwards.
    pub y: i64,
}

impl PixelPoint {
    /// Build a point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    /// Left column.
    pub x0: i64,
    /// Top row.
    pub y0: i64,
    /// Right column (inclusive).
    pub x1: i64,
    /// Bottom row (inclusive).
    pub y1: i64,
}

impl PixelRect {
    /// Build a rectangle from inclusive corners.
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whether the rectangle covers no pixel.
    pub fn is_empty(self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Width in pixels, 0 when empty.
    pub fn width(self) -> i64 {
        (self.x1 - self.x0 + 1).max(0)
    }

    /// Height in pixels, 0 when empty.
    pub fn height(self) -> i64 {
        (self.y1 - self.y0 + 1).max(0)
    }

    /// Inclusive containment test.
    pub fn contains(self, p: PixelPoint) -> bool {
        self.x0 <= p.x && p.x <= self.x1 && self.y0 <= p.y && p.y <= self.y1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
