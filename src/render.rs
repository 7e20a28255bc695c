/// Integer geometry derived from an icon size.
pub mod geometry;
/// The icon renderer.
pub mod icon;
/// Owned RGBA8 pixel buffer and hard-edged fill primitives.
pub mod raster;
