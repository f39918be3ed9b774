use image::{RgbaImage, imageops};

use crate::assets::source::SourceImage;
use crate::compose::plan::{CanvasBase, LayerOp, layer_plan};
use crate::engine::crop::{cover, fit_to_width, force_vertical_overflow};
use crate::engine::logo::{LogoPlacement, place_logo};
use crate::engine::mask::round_mask;
use crate::foundation::core::{CropPolicy, CropRequest};
use crate::foundation::error::{CardError, CardResult};
use crate::foundation::math::centered_offset;
use crate::template::model::Layout;
use crate::template::registry::TemplateRegistry;

/// Inputs of one render call. Poster and logo are optional layers.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest<'a> {
    pub template_id: &'a str,
    pub poster: Option<&'a SourceImage>,
    pub logo: Option<&'a SourceImage>,
    pub crop_policy: CropPolicy,
    /// Manual crop offset in `[0, 1000]`, normalized against the available range.
    pub crop_offset: u16,
}

impl<'a> RenderRequest<'a> {
    /// Request with no poster, no logo and a centered crop.
    pub fn new(template_id: &'a str) -> Self {
        Self {
            template_id,
            poster: None,
            logo: None,
            crop_policy: CropPolicy::Center,
            crop_offset: 0,
        }
    }

    pub fn poster(mut self, poster: &'a SourceImage) -> Self {
        self.poster = Some(poster);
        self
    }

    pub fn logo(mut self, logo: &'a SourceImage) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn crop(mut self, policy: CropPolicy, offset: u16) -> Self {
        self.crop_policy = policy;
        self.crop_offset = offset;
        self
    }

    fn crop_request(&self, src: &SourceImage) -> CropRequest {
        CropRequest::new(self.crop_policy, src.orientation(), self.crop_offset)
    }
}

/// Stateless template renderer over a shared registry.
#[derive(Clone, Copy, Debug)]
pub struct Compositor<'r> {
    registry: &'r TemplateRegistry,
}

impl<'r> Compositor<'r> {
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Render one card.
    ///
    /// Returns `Ok(None)` only for a poster-only template invoked without a poster. Every other
    /// success is a bitmap at the template's output resolution.
    #[tracing::instrument(
        skip_all,
        fields(
            template = request.template_id,
            poster = request.poster.is_some(),
            logo = request.logo.is_some(),
            policy = ?request.crop_policy,
        )
    )]
    pub fn render(&self, request: &RenderRequest<'_>) -> CardResult<Option<RgbaImage>> {
        let template = self.registry.get(request.template_id)?;
        let layout = &template.descriptor().layout;
        let plan = layer_plan(layout.mode());

        let mut canvas = match plan.base {
            CanvasBase::Background => template.background()?.clone(),
            CanvasBase::Transparent => {
                let bg = template.background()?;
                RgbaImage::new(bg.width(), bg.height())
            }
            CanvasBase::Poster => {
                let Some(poster) = request.poster else {
                    tracing::debug!("no poster for poster-only template; nothing to render");
                    return Ok(None);
                };
                let size = template.output_size()?;
                cover(
                    poster.as_rgba(),
                    size.width,
                    size.height,
                    &request.crop_request(poster),
                )?
            }
        };

        for op in plan.ops {
            match op {
                LayerOp::Poster => {
                    if let Some(poster) = request.poster {
                        paint_poster(&mut canvas, layout, poster, request)?;
                    }
                }
                LayerOp::Logo => {
                    if let (Some(logo), Some(placement)) = (request.logo, logo_placement(layout)) {
                        place_logo(&mut canvas, logo.as_rgba(), &placement)?;
                    }
                }
                LayerOp::OverlayBackground => {
                    imageops::overlay(&mut canvas, template.background()?, 0, 0);
                }
                LayerOp::RoundCorners => {
                    if let Some((radius, inset)) = corner_rounding(layout) {
                        canvas = round_mask(&canvas, radius, inset)?;
                    }
                }
            }
        }

        Ok(Some(canvas))
    }
}

/// Render `template_id` against `registry` in one call.
pub fn render(
    registry: &TemplateRegistry,
    template_id: &str,
    poster: Option<&SourceImage>,
    logo: Option<&SourceImage>,
    crop_policy: CropPolicy,
    crop_offset: u16,
) -> CardResult<Option<RgbaImage>> {
    let request = RenderRequest {
        template_id,
        poster,
        logo,
        crop_policy,
        crop_offset,
    };
    Compositor::new(registry).render(&request)
}

/// Render and treat the poster-only no-op as an error, for callers that must produce a file.
pub fn render_required(
    registry: &TemplateRegistry,
    request: &RenderRequest<'_>,
) -> CardResult<RgbaImage> {
    Compositor::new(registry).render(request)?.ok_or_else(|| {
        CardError::missing_input(format!(
            "template '{}' renders nothing without a poster",
            request.template_id
        ))
    })
}

fn paint_poster(
    canvas: &mut RgbaImage,
    layout: &Layout,
    poster: &SourceImage,
    request: &RenderRequest<'_>,
) -> CardResult<()> {
    let crop = request.crop_request(poster);
    match layout {
        Layout::Framed(g) => {
            let c = g.center;
            let fitted = cover(poster.as_rgba(), c.width, c.height, &crop)?;
            imageops::overlay(canvas, &fitted, i64::from(c.x), i64::from(c.y));
        }
        Layout::Layered(g) => {
            let band = canvas
                .height()
                .checked_sub(g.poster_y)
                .filter(|&b| b > 0)
                .ok_or_else(|| {
                    CardError::invalid_geometry(format!(
                        "poster_y {} leaves no band in a {}px tall background",
                        g.poster_y,
                        canvas.height()
                    ))
                })?;

            let fitted = if request.crop_policy == CropPolicy::Center {
                fit_to_width(poster.as_rgba(), g.poster_width)?
            } else {
                let cropped = cover(poster.as_rgba(), g.poster_width, band, &crop)?;
                force_vertical_overflow(&cropped, band + g.overflow_pad)?
            };

            let x = centered_offset(canvas.width(), fitted.width());
            tracing::debug!(band, x, w = fitted.width(), h = fitted.height(), "band poster");
            imageops::replace(canvas, &fitted, x, i64::from(g.poster_y));
        }
        Layout::FramedTopLogo(g) => {
            let slot = g.poster;
            let fitted = cover(poster.as_rgba(), slot.width, slot.height, &crop)?;
            let x = centered_offset(canvas.width(), slot.width);
            imageops::overlay(canvas, &fitted, x, i64::from(slot.y));
        }
        Layout::FullPosterRounded(_) => {}
    }
    Ok(())
}

fn logo_placement(layout: &Layout) -> Option<LogoPlacement> {
    match layout {
        Layout::Framed(g) => Some(LogoPlacement::Footer(g.footer)),
        Layout::Layered(g) => Some(LogoPlacement::HeaderLeft(g.header_logo)),
        Layout::FramedTopLogo(g) => Some(LogoPlacement::TopCenter(g.header_logo)),
        Layout::FullPosterRounded(_) => None,
    }
}

fn corner_rounding(layout: &Layout) -> Option<(u32, u32)> {
    match layout {
        Layout::Layered(g) => Some((g.corner_radius, g.mask_inset)),
        Layout::FullPosterRounded(g) => Some((g.corner_radius, 0)),
        Layout::Framed(_) | Layout::FramedTopLogo(_) => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
