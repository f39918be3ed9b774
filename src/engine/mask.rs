use image::{GrayImage, Luma, Rgba, RgbaImage};
use kurbo::{Point, Rect, RoundedRect, Shape};

use crate::foundation::core::Size;
use crate::foundation::error::{CardError, CardResult};

/// Single-channel mask: 255 inside a rounded rectangle inset from every edge, 0 outside.
///
/// The corner radius shrinks by `inset` so that the arc stays concentric with an un-inset one.
/// Pixels are classified by their centers.
pub fn rounded_rect_mask(size: Size, radius: u32, inset: u32) -> CardResult<GrayImage> {
    size.validate("mask")?;
    if inset.saturating_mul(2) >= size.width.min(size.height) {
        return Err(CardError::invalid_geometry(format!(
            "mask inset {inset} leaves no area inside {}x{}",
            size.width, size.height
        )));
    }

    let rect = Rect::new(
        f64::from(inset),
        f64::from(inset),
        f64::from(size.width - inset),
        f64::from(size.height - inset),
    );
    let r = f64::from(radius.saturating_sub(inset)).min(rect.width().min(rect.height()) / 2.0);
    let shape = RoundedRect::from_rect(rect, r);

    Ok(GrayImage::from_fn(size.width, size.height, |x, y| {
        let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        if shape.contains(center) {
            Luma([255])
        } else {
            Luma([0])
        }
    }))
}

/// Clip `bitmap` to a rounded rectangle, returning a new bitmap of the same size.
///
/// Pixels outside the mask become fully transparent; pixels inside are copied unchanged.
pub fn round_mask(bitmap: &RgbaImage, radius: u32, inset: u32) -> CardResult<RgbaImage> {
    let (w, h) = bitmap.dimensions();
    let mask = rounded_rect_mask(Size::new(w, h), radius, inset)?;

    tracing::debug!(w, h, radius, inset, "round mask");

    Ok(RgbaImage::from_fn(w, h, |x, y| {
        if mask.get_pixel(x, y)[0] == 0 {
            Rgba([0, 0, 0, 0])
        } else {
            *bitmap.get_pixel(x, y)
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/mask.rs"]
mod tests;
