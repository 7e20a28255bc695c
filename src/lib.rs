//! appicon draws the application icon set procedurally.
//!
//! Every icon is a rounded blue badge with a white upward arrow, rendered with integer-only
//! geometry so that a given size always produces the same pixels:
//!
//! - Pick an [`IconSize`]
//! - Render it with [`render_icon`] into an [`IconImage`]
//! - Hand the image to an [`IconSink`] (usually a [`PngDirSink`])
//!
//! [`generate_default_icons`] does all three for the fixed `32x32`, `128x128` and `128x128@2x`
//! set.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// PNG encoding and icon sinks.
pub mod encode;
/// The fixed icon set and the driver that renders it.
pub mod icon_set;
/// Geometry, raster buffer and the icon renderer.
pub mod render;

pub use crate::foundation::core::{
    ARROW_WHITE, BADGE_BLUE, IconSize, MAX_ICON_SIZE, PixelPoint, PixelRect, Rgba8, TRANSPARENT,
};
pub use crate::foundation::error::{IconError, IconResult};

pub use crate::encode::png::encode_png;
pub use crate::encode::sink::{IconSink, InMemorySink, PngDirSink};
pub use crate::icon_set::{
    DEFAULT_ICON_SET, IconSpec, WrittenIcon, generate_default_icons, generate_icon_set,
};
pub use crate::render::geometry::IconGeometry;
pub use crate::render::icon::{IconRenderer, render_icon};
pub use crate::render::raster::IconImage;
