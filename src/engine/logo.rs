//! Logo scaling and placement rules.
//!
//! Every rule scales by a reference dimension first and then clamps by a secondary one, always
//! uniformly. Pasting is plain alpha-over, so the logo's own transparency is respected.

use image::{RgbaImage, imageops};

use crate::engine::crop::RESAMPLE_FILTER;
use crate::foundation::core::Size;
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::{centered_offset, scale_len};

/// Logo band along the bottom edge of a framed background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FooterBand {
    /// Band height measured up from the bottom of the canvas.
    pub height: u32,
    /// Logo height before any width clamp.
    pub logo_height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    /// Distance from the left canvas edge.
    pub logo_margin: u32,
}

/// Left-aligned logo inside a header band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeaderLogo {
    pub height: u32,
    pub max_width: u32,
    pub top_margin: u32,
    pub left_margin: u32,
}

/// Horizontally centered logo near the top edge; only ever scaled down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TopCenterLogo {
    pub max_height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    pub top_margin: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoPlacement {
    Footer(FooterBand),
    HeaderLeft(HeaderLogo),
    TopCenter(TopCenterLogo),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Final logo rectangle on the canvas. The origin may be negative when a logo overflows.
pub struct PlacedLogo {
    pub x: i64,
    pub y: i64,
    pub size: Size,
}

impl LogoPlacement {
    /// Compute the scaled logo size and its position on a canvas of `canvas` size.
    pub fn plan(&self, logo: Size, canvas: Size) -> CardResult<PlacedLogo> {
        logo.validate("logo image")?;
        canvas.validate("logo canvas")?;

        match *self {
            Self::Footer(band) => {
                nonzero(band.logo_height, "footer logo_height")?;
                if band.height > canvas.height {
                    return Err(CardError::invalid_geometry(format!(
                        "footer band height {} exceeds canvas height {}",
                        band.height, canvas.height
                    )));
                }
                let size = scale_to_height(logo, band.logo_height, band.max_width)?;
                let band_top = i64::from(canvas.height - band.height);
                Ok(PlacedLogo {
                    x: i64::from(band.logo_margin),
                    y: band_top + centered_offset(band.height, size.height),
                    size,
                })
            }
            Self::HeaderLeft(h) => {
                nonzero(h.height, "header logo height")?;
                let size = scale_to_height(logo, h.height, Some(h.max_width))?;
                Ok(PlacedLogo {
                    x: i64::from(h.left_margin),
                    y: i64::from(h.top_margin) + centered_offset(h.height, size.height),
                    size,
                })
            }
            Self::TopCenter(t) => {
                nonzero(t.max_height, "top logo max_height")?;
                let size = if logo.height > t.max_height {
                    scale_to_height(logo, t.max_height, t.max_width)?
                } else {
                    clamp_width(logo, t.max_width)?
                };
                Ok(PlacedLogo {
                    x: centered_offset(canvas.width, size.width),
                    y: i64::from(t.top_margin) + centered_offset(t.max_height, size.height),
                    size,
                })
            }
        }
    }
}

/// Scale `logo` per `placement` and alpha-composite it onto `canvas`.
pub fn place_logo(
    canvas: &mut RgbaImage,
    logo: &RgbaImage,
    placement: &LogoPlacement,
) -> CardResult<PlacedLogo> {
    let (lw, lh) = logo.dimensions();
    let (cw, ch) = canvas.dimensions();
    let placed = placement.plan(Size::new(lw, lh), Size::new(cw, ch))?;

    tracing::debug!(
        x = placed.x,
        y = placed.y,
        w = placed.size.width,
        h = placed.size.height,
        "place logo"
    );

    if (lw, lh) == (placed.size.width, placed.size.height) {
        imageops::overlay(canvas, logo, placed.x, placed.y);
    } else {
        let scaled = imageops::resize(logo, placed.size.width, placed.size.height, RESAMPLE_FILTER);
        imageops::overlay(canvas, &scaled, placed.x, placed.y);
    }
    Ok(placed)
}

fn scale_to_height(logo: Size, height: u32, max_width: Option<u32>) -> CardResult<Size> {
    let scale = f64::from(height) / f64::from(logo.height);
    clamp_width(Size::new(scale_len(logo.width, scale), height), max_width)
}

fn clamp_width(size: Size, max_width: Option<u32>) -> CardResult<Size> {
    let Some(max) = max_width else {
        return Ok(size);
    };
    nonzero(max, "logo max_width")?;
    if size.width <= max {
        return Ok(size);
    }
    let scale = f64::from(max) / f64::from(size.width);
    Ok(Size::new(max, scale_len(size.height, scale)))
}

fn nonzero(v: u32, what: &str) -> CardResult<()> {
    if v == 0 {
        return Err(CardError::invalid_geometry(format!("{what} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/engine/logo.rs"]
mod tests;
