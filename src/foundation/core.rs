use std::str::FromStr;

use crate::foundation::error::{CardError, CardResult};

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Construct a size without validation.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject sizes with a zero axis.
    pub fn validate(self, what: &str) -> CardResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CardError::invalid_geometry(format!(
                "{what} must have width and height > 0 (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in canvas pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    #[serde(rename = "w")]
    pub width: u32,
    /// Height in pixels.
    #[serde(rename = "h")]
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Aspect classification of a source bitmap.
///
/// Square images are vertical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if width > height {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Which part of an oversized (scaled) source survives a cover crop.
///
/// `EdgeA`/`EdgeB` are top/bottom for vertical sources and left/right for horizontal ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropPolicy {
    #[default]
    Center,
    EdgeA,
    EdgeB,
    Manual,
}

impl CropPolicy {
    /// Label shown for this policy under a given orientation.
    pub fn label(self, orientation: Orientation) -> &'static str {
        match (self, orientation) {
            (Self::Center, _) => "center",
            (Self::EdgeA, Orientation::Vertical) => "top",
            (Self::EdgeB, Orientation::Vertical) => "bottom",
            (Self::EdgeA, Orientation::Horizontal) => "left",
            (Self::EdgeB, Orientation::Horizontal) => "right",
            (Self::Manual, _) => "manual",
        }
    }
}

impl FromStr for CropPolicy {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" => Ok(Self::Center),
            "edge-a" | "top" | "left" => Ok(Self::EdgeA),
            "edge-b" | "bottom" | "right" => Ok(Self::EdgeB),
            "manual" => Ok(Self::Manual),
            other => Err(CardError::validation(format!(
                "unknown crop policy '{other}'"
            ))),
        }
    }
}

/// Crop policy resolved against the orientation of the image being cropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CropRequest {
    pub policy: CropPolicy,
    pub orientation: Orientation,
    /// Manual offset in `[0, OFFSET_MAX]`; ignored by the other policies.
    pub offset: u16,
}

impl CropRequest {
    /// Upper bound of the normalized manual offset.
    pub const OFFSET_MAX: u16 = 1000;

    /// Build a request, clamping `offset` into `[0, OFFSET_MAX]`.
    pub fn new(policy: CropPolicy, orientation: Orientation, offset: u16) -> Self {
        Self {
            policy,
            orientation,
            offset: offset.min(Self::OFFSET_MAX),
        }
    }

    pub fn center(orientation: Orientation) -> Self {
        Self::new(CropPolicy::Center, orientation, 0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
