use crate::foundation::core::{IconSize, PixelPoint, PixelRect};

/// Everything the renderer derives from the icon size.
///
/// All values come from integer floor division on the size, so two sizes that are exact multiples
/// of each other only scale proportionally up to rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IconGeometry {
    /// Canvas edge length.
    pub size: u32,
    /// Gap between the canvas edge and the badge, `size / 8`.
    pub padding: i64,
    /// Badge bounds, inclusive, from `(padding, padding)` to `(size - padding, size - padding)`.
    pub rect: PixelRect,
    /// Badge corner radius, `size / 8`.
    pub corner_radius: i64,
    /// `size - 2 * padding`; only used to size the arrow.
    pub rect_size: i64,
    /// `rect_size / 3`.
    pub arrow_width: i64,
    /// `rect_size / 2`.
    pub arrow_height: i64,
    /// `(size / 2, size / 2)`.
    pub center: PixelPoint,
    /// Bottom-left, bottom-right, top-center.
    pub arrow: [PixelPoint; 3],
}

impl IconGeometry {
    /// Derive the geometry for `size`.
    pub fn for_size(size: IconSize) -> Self {
        let s = size.as_i64();

        let padding = s / 8;
        let corner_radius = s / 8;
        let rect = PixelRect::new(padding, padding, s - padding, s - padding);
        let rect_size = s - 2 * padding;

        let arrow_width = rect_size / 3;
        let arrow_height = rect_size / 2;
        let center = PixelPoint::new(s / 2, s / 2);

        let half_w = arrow_width / 2;
        let quarter_h = arrow_height / 4;
        let arrow = [
            PixelPoint::new(center.x - half_w, center.y + quarter_h),
            PixelPoint::new(center.x + half_w, center.y + quarter_h),
            PixelPoint::new(center.x, center.y - quarter_h),
        ];

        Self {
            size: size.get(),
            padding,
            rect,
            corner_radius,
            rect_size,
            arrow_width,
            arrow_height,
            center,
            arrow,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
