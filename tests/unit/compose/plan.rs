use super::*;

#[test]
fn framed_paints_logo_under_poster() {
    let plan = layer_plan(LayoutMode::Framed);
    assert_eq!(plan.base, CanvasBase::Background);
    assert_eq!(plan.ops, &[LayerOp::Logo, LayerOp::Poster]);
}

#[test]
fn layered_masks_before_logo() {
    let plan = layer_plan(LayoutMode::Layered);
    assert_eq!(plan.base, CanvasBase::Transparent);
    let mask = plan.ops.iter().position(|op| *op == LayerOp::RoundCorners).unwrap();
    let logo = plan.ops.iter().position(|op| *op == LayerOp::Logo).unwrap();
    let frame = plan
        .ops
        .iter()
        .position(|op| *op == LayerOp::OverlayBackground)
        .unwrap();
    assert!(frame < mask);
    assert!(mask < logo);
    assert_eq!(plan.ops.last(), Some(&LayerOp::Logo));
}

#[test]
fn top_logo_is_always_last() {
    let plan = layer_plan(LayoutMode::FramedTopLogo);
    assert_eq!(plan.ops.last(), Some(&LayerOp::Logo));
}

#[test]
fn rounded_poster_has_no_logo_or_background() {
    let plan = layer_plan(LayoutMode::FullPosterRounded);
    assert_eq!(plan.base, CanvasBase::Poster);
    assert!(!plan.ops.contains(&LayerOp::Logo));
    assert!(!plan.ops.contains(&LayerOp::OverlayBackground));
}
