use std::path::{Path, PathBuf};

use crate::encode::sink::{IconSink, PngDirSink};
use crate::foundation::core::IconSize;
use crate::foundation::error::IconResult;
use crate::render::icon::IconRenderer;

/// One entry of an icon set: output name and edge length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IconSpec {
    /// Output name without extension, e.g. `128x128@2x`.
    pub name: &'static str,
    /// Edge length in pixels.
    pub size: u32,
}

impl IconSpec {
    /// Validated size of this entry.
    pub fn icon_size(self) -> IconResult<IconSize> {
        IconSize::new(self.size)
    }
}

/// The application icon set, in write order.
pub const DEFAULT_ICON_SET: [IconSpec; 3] = [
    IconSpec {
        name: "32x32",
        size: 32,
    },
    IconSpec {
        name: "128x128",
        size: 128,
    },
    IconSpec {
        name: "128x128@2x",
        size: 256,
    },
];

/// Record of one saved icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenIcon {
    /// Output name.
    pub name: String,
    /// Rendered size.
    pub size: IconSize,
    /// Where the sink put it.
    pub path: PathBuf,
}

/// Render every entry of `specs` and hand it to `sink`, in order.
///
/// Stops at the first failure. Icons saved before the failure are left in place.
#[tracing::instrument(level = "debug", skip_all, fields(count = specs.len()))]
pub fn generate_icon_set(
    specs: &[IconSpec],
    sink: &mut dyn IconSink,
) -> IconResult<Vec<WrittenIcon>> {
    let renderer = IconRenderer;
    let mut written = Vec::with_capacity(specs.len());

    for spec in specs {
        let size = spec.icon_size()?;
        let image = renderer.render(size);
        let path = sink.save(spec.name, &image)?;
        written.push(WrittenIcon {
            name: spec.name.to_string(),
            size,
            path,
        });
    }

    Ok(written)
}

/// Write [`DEFAULT_ICON_SET`] as PNG files into `out_dir`, which must already exist.
pub fn generate_default_icons(out_dir: impl AsRef<Path>) -> IconResult<Vec<WrittenIcon>> {
    let mut sink = PngDirSink::new(out_dir.as_ref());
    generate_icon_set(&DEFAULT_ICON_SET, &mut sink)
}

#[cfg(test)]
#[path = "../tests/unit/icon_set.rs"]
mod tests;
