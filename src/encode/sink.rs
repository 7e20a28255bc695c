use std::path::{Path, PathBuf};

use crate::encode::png::encode_png;
use crate::foundation::error::{IconError, IconResult};
use crate::render::raster::IconImage;

/// Destination for rendered icons.
///
/// Sinks are called once per icon, in icon-set order. A failing `save` aborts the whole run; sinks
/// do not retry and do not roll back icons that were already saved.
pub trait IconSink {
    /// Persist `image` under `name` and return where it went.
    fn save(&mut self, name: &str, image: &IconImage) -> IconResult<PathBuf>;
}

/// Writes `<dir>/<name>.png`.
///
/// The directory must already exist; it is never created. Existing files are overwritten.
#[derive(Clone, Debug)]
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    /// Sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path `save` would write for `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.png"))
    }
}

impl IconSink for PngDirSink {
    #[tracing::instrument(level = "debug", skip(self, image), fields(dir = %self.dir.display()))]
    fn save(&mut self, name: &str, image: &IconImage) -> IconResult<PathBuf> {
        let path = self.path_for(name);
        let bytes = encode_png(image)?;
        std::fs::write(&path, &bytes).map_err(|e| IconError::io(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote icon");
        Ok(path)
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Saved icons in call order.
    pub icons: Vec<(String, IconImage)>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a saved icon by name.
    pub fn get(&self, name: &str) -> Option<&IconImage> {
        self.icons.iter().find(|(n, _)| n == name).map(|(_, img)| img)
    }
}

impl IconSink for InMemorySink {
    /// The returned path is just `name`; nothing touches the filesystem.
    fn save(&mut self, name: &str, image: &IconImage) -> IconResult<PathBuf> {
        self.icons.push((name.to_string(), image.clone()));
        Ok(PathBuf::from(name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
