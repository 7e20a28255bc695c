use crate::foundation::core::{ARROW_WHITE, BADGE_BLUE, IconSize};
use crate::render::geometry::IconGeometry;
use crate::render::raster::IconImage;

/// Stateless icon renderer.
///
/// Rendering is a pure function of the size: no I/O, no shared state, and repeated calls return
/// byte-identical images.
#[derive(Clone, Copy, Debug, Default)]
pub struct IconRenderer;

impl IconRenderer {
    /// Draw the badge and arrow at `size`.
    ///
    /// The canvas starts transparent, the badge is filled blue, then the arrow is painted white on
    /// top of it. The arrow replaces the badge color; nothing is blended.
    #[tracing::instrument(level = "debug", skip_all, fields(size = size.get()))]
    pub fn render(&self, size: IconSize) -> IconImage {
        let geom = IconGeometry::for_size(size);
        tracing::debug!(
            padding = geom.padding,
            radius = geom.corner_radius,
            arrow_width = geom.arrow_width,
            arrow_height = geom.arrow_height,
            "icon geometry"
        );

        let mut image = IconImage::transparent(size);
        image.fill_rounded_rect(geom.rect, geom.corner_radius, BADGE_BLUE);
        image.fill_convex_polygon(&geom.arrow, ARROW_WHITE);
        image
    }
}

/// Shorthand for [`IconRenderer::render`].
pub fn render_icon(size: IconSize) -> IconImage {
    IconRenderer.render(size)
}

#[cfg(test)]
#[path = "../../tests/unit/render/icon.rs"]
mod tests;
