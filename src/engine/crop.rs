//! Cover-and-crop fitting of arbitrary-aspect sources into fixed target rectangles.
//!
//! Every function here is pure: the source bitmap is borrowed and a new bitmap is returned.

use image::{RgbaImage, imageops};

use crate::foundation::core::{CropPolicy, CropRequest, Orientation, PixelRect, Size};
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::{denormalize, scale_len};

/// Resampling filter used for every scale in the engine.
pub const RESAMPLE_FILTER: imageops::FilterType = imageops::FilterType::Lanczos3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Geometry of one cover crop: the uniformly scaled source size and the window kept from it.
pub struct CoverPlan {
    /// Source size after uniform scaling; at least the target on both axes.
    pub scaled: Size,
    /// Window inside `scaled`, always exactly the target size.
    pub window: PixelRect,
    /// Smallest whole-pixel region of the unscaled source that covers `window`.
    pub source: PixelRect,
}

/// Compute the cover geometry without touching pixels.
pub fn plan_cover(src: Size, target: Size, request: &CropRequest) -> CardResult<CoverPlan> {
    src.validate("source image")?;
    target.validate("cover target")?;

    let ratio = f64::max(
        f64::from(target.width) / f64::from(src.width),
        f64::from(target.height) / f64::from(src.height),
    );
    let scaled = Size::new(
        scale_len(src.width, ratio).max(target.width),
        scale_len(src.height, ratio).max(target.height),
    );

    let max_x = scaled.width - target.width;
    let max_y = scaled.height - target.height;
    let (cx, cy) = (max_x / 2, max_y / 2);

    let (x, y) = match (request.policy, request.orientation) {
        (CropPolicy::Center, _) => (cx, cy),
        (CropPolicy::EdgeA, Orientation::Vertical) => (cx, 0),
        (CropPolicy::EdgeB, Orientation::Vertical) => (cx, max_y),
        (CropPolicy::EdgeA, Orientation::Horizontal) => (0, cy),
        (CropPolicy::EdgeB, Orientation::Horizontal) => (max_x, cy),
        (CropPolicy::Manual, Orientation::Vertical) => (
            cx,
            denormalize(request.offset, CropRequest::OFFSET_MAX, max_y),
        ),
        (CropPolicy::Manual, Orientation::Horizontal) => (
            denormalize(request.offset, CropRequest::OFFSET_MAX, max_x),
            cy,
        ),
    };

    let (sx, sw) = source_span(x, target.width, scaled.width, src.width);
    let (sy, sh) = source_span(y, target.height, scaled.height, src.height);
    Ok(CoverPlan {
        scaled,
        window: PixelRect::new(x, y, target.width, target.height),
        source: PixelRect::new(sx, sy, sw, sh),
    })
}

/// Map `[start, start + len)` on a `scaled`-long axis back onto a `src`-long one, rounding outward.
fn source_span(start: u32, len: u32, scaled: u32, src: u32) -> (u32, u32) {
    let k = f64::from(src) / f64::from(scaled);
    let lo = ((f64::from(start) * k).floor() as u32).min(src - 1);
    let hi = ((f64::from(start + len) * k).ceil() as u32).clamp(lo + 1, src);
    (lo, hi - lo)
}

/// Cut the source region selected by `request` and scale it to exactly `target_w x target_h`.
///
/// Never letterboxes: the result is exactly the target size and fully covered.
pub fn cover(
    src: &RgbaImage,
    target_w: u32,
    target_h: u32,
    request: &CropRequest,
) -> CardResult<RgbaImage> {
    let (src_w, src_h) = src.dimensions();
    let plan = plan_cover(
        Size::new(src_w, src_h),
        Size::new(target_w, target_h),
        request,
    )?;

    tracing::debug!(
        policy = ?request.policy,
        orientation = ?request.orientation,
        scaled_w = plan.scaled.width,
        scaled_h = plan.scaled.height,
        x = plan.window.x,
        y = plan.window.y,
        "cover crop"
    );

    // Only the covered source region is resampled, never the whole scaled source.
    let target = Size::new(target_w, target_h);
    let r = plan.source;
    if (r.width, r.height) == (src_w, src_h) {
        return Ok(resize_to(src, target));
    }
    let region = imageops::crop_imm(src, r.x, r.y, r.width, r.height).to_image();
    Ok(resize_to(&region, target))
}

/// Uniformly scale so that `width == target_width`; no cropping.
pub fn fit_to_width(src: &RgbaImage, target_width: u32) -> CardResult<RgbaImage> {
    let (w, h) = src.dimensions();
    Size::new(w, h).validate("source image")?;
    if target_width == 0 {
        return Err(CardError::invalid_geometry("fit_to_width target must be > 0"));
    }

    let scale = f64::from(target_width) / f64::from(w);
    Ok(resize_to(
        src,
        Size::new(target_width, scale_len(h, scale)),
    ))
}

/// Uniformly upscale until `height == min_height`; sources already tall enough are returned as-is.
pub fn force_vertical_overflow(src: &RgbaImage, min_height: u32) -> CardResult<RgbaImage> {
    let (w, h) = src.dimensions();
    Size::new(w, h).validate("source image")?;
    if h >= min_height {
        return Ok(src.clone());
    }

    let scale = f64::from(min_height) / f64::from(h);
    Ok(resize_to(src, Size::new(scale_len(w, scale), min_height)))
}

fn resize_to(src: &RgbaImage, size: Size) -> RgbaImage {
    if src.dimensions() == (size.width, size.height) {
        return src.clone();
    }
    imageops::resize(src, size.width, size.height, RESAMPLE_FILTER)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/crop.rs"]
mod tests;
