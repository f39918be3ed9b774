use std::path::{Path, PathBuf};

use crate::foundation::error::{CardError, CardResult};

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Recursively find image files under `root` whose file name contains `query`.
///
/// Matching is case-insensitive; results are sorted by path. Symlinked directories are not
/// followed.
pub fn search_icon_pack(root: impl AsRef<Path>, query: &str) -> CardResult<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(CardError::io(format!(
            "icon pack root '{}' is not a directory",
            root.display()
        )));
    }

    let needle = query.trim().to_lowercase();
    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| CardError::io(format!("read dir '{}': {e}", dir.display())))?;
        for entry in entries {
            let entry = entry.map_err(|e| CardError::io(e.to_string()))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| CardError::io(format!("stat '{}': {e}", path.display())))?;
            if file_type.is_dir() {
                pending.push(path);
                continue;
            }
            // Symlinked directories are skipped, not walked.
            if file_type.is_symlink() && path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let name = name.to_lowercase();
            if is_image_name(&name) && name.contains(&needle) {
                found.push(path);
            }
        }
    }

    found.sort();
    tracing::debug!(root = %root.display(), query, hits = found.len(), "icon pack search");
    Ok(found)
}

fn is_image_name(lower_name: &str) -> bool {
    Path::new(lower_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icon_pack.rs"]
mod tests;
