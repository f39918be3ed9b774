use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;

use crate::foundation::error::{CardError, CardResult};

/// Normalize and validate catalogue-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> CardResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CardError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(CardError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CardError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CardError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

/// Outcome of loading one background bitmap.
#[derive(Clone, Debug)]
pub enum BackgroundSlot {
    Ready(Arc<RgbaImage>),
    Unavailable(String),
}

/// Background bitmaps keyed by normalized relative path, decoded once.
#[derive(Clone, Debug, Default)]
pub struct BackgroundStore {
    root: PathBuf,
    slots: BTreeMap<String, BackgroundSlot>,
}

impl BackgroundStore {
    /// Empty store resolving paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Decode `rel` from disk unless already attempted. Failures are kept, not returned.
    pub fn load(&mut self, rel: &str) -> CardResult<&BackgroundSlot> {
        let key = normalize_rel_path(rel)?;
        let root = &self.root;
        Ok(self.slots.entry(key).or_insert_with_key(|key| {
            let path = root.join(key);
            match decode_file(&path) {
                Ok(img) => BackgroundSlot::Ready(Arc::new(img)),
                Err(reason) => {
                    tracing::warn!(path = %path.display(), %reason, "background unavailable");
                    BackgroundSlot::Unavailable(reason)
                }
            }
        }))
    }

    /// Register an in-memory bitmap under `rel`, replacing any earlier slot.
    pub fn insert(&mut self, rel: &str, img: RgbaImage) -> CardResult<()> {
        let key = normalize_rel_path(rel)?;
        self.slots.insert(key, BackgroundSlot::Ready(Arc::new(img)));
        Ok(())
    }

    pub fn get(&self, rel: &str) -> Option<&BackgroundSlot> {
        let key = normalize_rel_path(rel).ok()?;
        self.slots.get(&key)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn decode_file(path: &Path) -> Result<RgbaImage, String> {
    let img = image::open(path).map_err(|e| format!("open '{}': {e}", path.display()))?;
    let rgba = img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(format!("'{}' has zero size", path.display()));
    }
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
