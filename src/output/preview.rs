//! Display-only scaling of rendered cards. Never crops.

use image::{RgbaImage, imageops};

use crate::engine::crop::RESAMPLE_FILTER;
use crate::foundation::core::Size;
use crate::foundation::error::CardResult;
use crate::foundation::math::{centered_offset, scale_len};

/// Largest uniform scale of `src` that fits inside `max_w x max_h`.
pub fn fit_size(src: Size, max_w: u32, max_h: u32) -> CardResult<Size> {
    src.validate("preview source")?;
    Size::new(max_w, max_h).validate("preview viewport")?;

    let scale = f64::min(
        f64::from(max_w) / f64::from(src.width),
        f64::from(max_h) / f64::from(src.height),
    );
    Ok(Size::new(
        scale_len(src.width, scale).min(max_w),
        scale_len(src.height, scale).min(max_h),
    ))
}

/// Uniformly scale `img` to fit the viewport; the result is at most `max_w x max_h`.
pub fn fit_preview(img: &RgbaImage, max_w: u32, max_h: u32) -> CardResult<RgbaImage> {
    let size = fit_size(Size::new(img.width(), img.height()), max_w, max_h)?;
    if (size.width, size.height) == img.dimensions() {
        return Ok(img.clone());
    }
    Ok(imageops::resize(img, size.width, size.height, RESAMPLE_FILTER))
}

/// Fit `img` inside `w x h` and center it on a transparent canvas of exactly that size.
pub fn letterbox(img: &RgbaImage, w: u32, h: u32) -> CardResult<RgbaImage> {
    let fitted = fit_preview(img, w, h)?;
    let mut canvas = RgbaImage::new(w, h);
    imageops::overlay(
        &mut canvas,
        &fitted,
        centered_offset(w, fitted.width()),
        centered_offset(h, fitted.height()),
    );
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/output/preview.rs"]
mod tests;
