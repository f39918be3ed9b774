use crate::template::model::LayoutMode;

/// How the canvas for a render is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasBase {
    /// Copy of the template background.
    Background,
    /// Fully transparent canvas the size of the background.
    Transparent,
    /// The poster itself, cover-cropped to the declared output size. No poster means no output.
    Poster,
}

/// One paint step, applied in order on top of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerOp {
    /// Fit the poster into the mode's slot and paint it. Skipped without a poster.
    Poster,
    /// Scale and place the logo with the mode's rule. Skipped without a logo.
    Logo,
    /// Alpha-composite the background over everything painted so far.
    OverlayBackground,
    /// Clip the whole canvas to the mode's rounded rectangle.
    RoundCorners,
}

/// Fixed paint order for one layout mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerPlan {
    pub base: CanvasBase,
    pub ops: &'static [LayerOp],
}

/// The paint order of every layout mode.
///
/// Framed paints the footer logo before the poster so the poster always wins inside the
/// center rect. Layered rounds the composite before the logo so the logo is never clipped.
pub const fn layer_plan(mode: LayoutMode) -> LayerPlan {
    match mode {
        LayoutMode::Framed => LayerPlan {
            base: CanvasBase::Background,
            ops: &[LayerOp::Logo, LayerOp::Poster],
        },
        LayoutMode::Layered => LayerPlan {
            base: CanvasBase::Transparent,
            ops: &[
                LayerOp::Poster,
                LayerOp::OverlayBackground,
                LayerOp::RoundCorners,
                LayerOp::Logo,
            ],
        },
        LayoutMode::FramedTopLogo => LayerPlan {
            base: CanvasBase::Background,
            ops: &[LayerOp::Poster, LayerOp::Logo],
        },
        LayoutMode::FullPosterRounded => LayerPlan {
            base: CanvasBase::Poster,
            ops: &[LayerOp::RoundCorners],
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/plan.rs"]
mod tests;
