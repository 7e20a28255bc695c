use crate::foundation::core::{IconSize, PixelPoint, PixelRect, Rgba8, TRANSPARENT};

/// A rendered icon as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, origin top-left.
    pub data: Vec<u8>,
}

impl IconImage {
    /// A fully transparent square canvas.
    pub fn transparent(size: IconSize) -> Self {
        let px = size.get();
        let pixels = (px as usize) * (px as usize);
        Self {
            width: px,
            height: px,
            data: TRANSPARENT.to_array().repeat(pixels),
        }
    }

    /// Color at `(x, y)`, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x as usize, y as usize);
        Some(Rgba8::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count(&self, color: Rgba8) -> usize {
        let want = color.to_array();
        self.data.chunks_exact(4).filter(|px| **px == want).count()
    }

    /// Consume the image, returning its RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * 4
    }

    /// Paint the inclusive span `x0..=x1` of row `y`, clipped to the canvas.
    pub(crate) fn fill_span(&mut self, y: i64, x0: i64, x1: i64, color: Rgba8) {
        if y < 0 || y >= i64::from(self.height) {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(i64::from(self.width) - 1);
        if x0 > x1 {
            return;
        }

        let start = self.offset(x0 as usize, y as usize);
        let end = self.offset(x1 as usize, y as usize) + 4;
        let px = color.to_array();
        for chunk in self.data[start..end].chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Fill a rounded rectangle with hard edges.
    ///
    /// A pixel is inside when it lies within the inclusive `rect` and, inside a corner square,
    /// within `radius` of that corner's arc center (`dx² + dy² <= r²`). The radius is clamped to
    /// half the shorter side.
    pub fn fill_rounded_rect(&mut self, rect: PixelRect, radius: i64, color: Rgba8) {
        if rect.is_empty() {
            return;
        }

        let r = radius.clamp(0, rect.width().min(rect.height()) / 2);
        let top = rect.y0 + r;
        let bottom = rect.y1 - r;
        let r2 = r * r;

        let y_start = rect.y0.max(0);
        let y_end = rect.y1.min(i64::from(self.height) - 1);
        for y in y_start..=y_end {
            let dy = if y < top {
                top - y
            } else if y > bottom {
                y - bottom
            } else {
                0
            };
            let inset = if dy == 0 {
                0
            } else {
                r - (r2 - dy * dy).isqrt()
            };
            self.fill_span(y, rect.x0 + inset, rect.x1 - inset, color);
        }
    }

    /// Fill a convex polygon with hard, inclusive edges.
    ///
    /// Each row between the lowest and highest vertex is filled from the ceiling of its leftmost
    /// edge crossing to the floor of its rightmost one. Crossings are computed as exact rationals.
    /// Horizontal edges contribute both endpoints.
    pub fn fill_convex_polygon(&mut self, points: &[PixelPoint], color: Rgba8) {
        let (Some(y_min), Some(y_max)) = (
            points.iter().map(|p| p.y).min(),
            points.iter().map(|p| p.y).max(),
        ) else {
            return;
        };

        let y_start = y_min.max(0);
        let y_end = y_max.min(i64::from(self.height) - 1);
        for y in y_start..=y_end {
            if let Some((lo, hi)) = row_extent(points, y) {
                self.fill_span(y, lo, hi, color);
            }
        }
    }
}

/// Inclusive pixel extent of a convex polygon on row `y`.
fn row_extent(points: &[PixelPoint], y: i64) -> Option<(i64, i64)> {
    let mut extent: Option<(i64, i64)> = None;
    let n = points.len();

    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if y < a.y.min(b.y) || y > a.y.max(b.y) {
            continue;
        }

        let (lo, hi) = if a.y == b.y {
            (a.x.min(b.x), a.x.max(b.x))
        } else {
            let mut num = a.x * (b.y - a.y) + (y - a.y) * (b.x - a.x);
            let mut den = b.y - a.y;
            if den < 0 {
                num = -num;
                den = -den;
            }
            (-(-num).div_euclid(den), num.div_euclid(den))
        };

        extent = Some(match extent {
            Some((l, h)) => (l.min(lo), h.max(hi)),
            None => (lo, hi),
        });
    }

    extent
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
