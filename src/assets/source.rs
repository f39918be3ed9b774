use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::core::{Orientation, Size};
use crate::foundation::error::{CardError, CardResult};

/// Decoded poster or logo bitmap handed to a render call.
///
/// The engine only ever borrows the pixels; every transform produces a new buffer.
#[derive(Clone, Debug)]
pub struct SourceImage {
    rgba: RgbaImage,
}

impl SourceImage {
    /// Wrap an already-decoded RGBA8 bitmap.
    pub fn from_rgba(rgba: RgbaImage) -> CardResult<Self> {
        let (w, h) = rgba.dimensions();
        Size::new(w, h).validate("source image")?;
        Ok(Self { rgba })
    }

    /// Build from a raw row-major RGBA8 buffer.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> CardResult<Self> {
        let rgba = RgbaImage::from_raw(width, height, data).ok_or_else(|| {
            CardError::validation(format!(
                "rgba buffer does not match {width}x{height}x4 bytes"
            ))
        })?;
        Self::from_rgba(rgba)
    }

    /// Decode any format supported by `image` (PNG, JPEG, WebP, ...).
    pub fn from_bytes(bytes: &[u8]) -> CardResult<Self> {
        let img = image::load_from_memory(bytes).context("decode image from memory")?;
        Self::from_rgba(img.to_rgba8())
    }

    pub fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| CardError::io(format!("read image '{}': {e}", path.display())))?;
        Self::from_bytes(&bytes)
    }

    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.rgba.width(), self.rgba.height())
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.rgba.width(), self.rgba.height())
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.rgba
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.rgba
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
