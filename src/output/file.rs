use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use image::RgbaImage;
use sha2::Digest as _;

use crate::foundation::error::{CardError, CardResult};

/// File stem used when a title sanitizes to nothing.
pub const FALLBACK_STEM: &str = "nfc_card";

const FORBIDDEN: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strip characters illegal in file names and collapse whitespace runs.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name.chars().filter(|c| !FORBIDDEN.contains(c)).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `{title}_{YYYYmmdd_HHMMSS}.png`, falling back to [`FALLBACK_STEM`] for empty titles.
pub fn output_file_name(title: Option<&str>, at: NaiveDateTime) -> String {
    let stem = title.map(sanitize_filename).unwrap_or_default();
    let stem = if stem.is_empty() {
        FALLBACK_STEM
    } else {
        stem.as_str()
    };
    format!("{stem}_{}.png", at.format("%Y%m%d_%H%M%S"))
}

/// Encode `img` as PNG at exactly `path`, creating parent directories.
pub fn write_png(img: &RgbaImage, path: &Path) -> CardResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CardError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::info!(path = %path.display(), w = img.width(), h = img.height(), "wrote card");
    Ok(())
}

/// Write `img` into `dir` under a timestamped name derived from `title`.
pub fn write_card(
    img: &RgbaImage,
    dir: &Path,
    title: Option<&str>,
    at: NaiveDateTime,
) -> CardResult<PathBuf> {
    let path = dir.join(output_file_name(title, at));
    write_png(img, &path)?;
    Ok(path)
}

/// Hex SHA-256 over dimensions and pixel bytes; equal digests mean pixel-identical cards.
pub fn pixel_digest(img: &RgbaImage) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(img.width().to_le_bytes());
    hasher.update(img.height().to_le_bytes());
    hasher.update(img.as_raw());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/output/file.rs"]
mod tests;
