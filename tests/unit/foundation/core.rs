use super::*;

#[test]
fn orientation_ties_resolve_to_vertical() {
    assert_eq!(Orientation::of(100, 100), Orientation::Vertical);
    assert_eq!(Orientation::of(99, 100), Orientation::Vertical);
    assert_eq!(Orientation::of(101, 100), Orientation::Horizontal);
}

#[test]
fn crop_policy_parses_orientation_aliases() {
    assert_eq!("top".parse::<CropPolicy>().unwrap(), CropPolicy::EdgeA);
    assert_eq!("Left".parse::<CropPolicy>().unwrap(), CropPolicy::EdgeA);
    assert_eq!("bottom".parse::<CropPolicy>().unwrap(), CropPolicy::EdgeB);
    assert_eq!("edge-b".parse::<CropPolicy>().unwrap(), CropPolicy::EdgeB);
    assert_eq!(" manual ".parse::<CropPolicy>().unwrap(), CropPolicy::Manual);
    assert!("sideways".parse::<CropPolicy>().is_err());
}

#[test]
fn crop_policy_labels_follow_orientation() {
    assert_eq!(CropPolicy::EdgeA.label(Orientation::Vertical), "top");
    assert_eq!(CropPolicy::EdgeA.label(Orientation::Horizontal), "left");
    assert_eq!(CropPolicy::EdgeB.label(Orientation::Horizontal), "right");
}

#[test]
fn crop_request_clamps_offset() {
    let r = CropRequest::new(CropPolicy::Manual, Orientation::Vertical, 5000);
    assert_eq!(r.offset, CropRequest::OFFSET_MAX);
}

#[test]
fn size_validate_rejects_zero_axis() {
    assert!(Size::new(0, 10).validate("target").is_err());
    assert!(Size::new(10, 0).validate("target").is_err());
    Size::new(1, 1).validate("target").unwrap();
}

#[test]
fn pixel_rect_serde_uses_short_keys() {
    let r: PixelRect = serde_json::from_str(r#"{"x":10,"y":59,"w":597,"h":855}"#).unwrap();
    assert_eq!(r, PixelRect::new(10, 59, 597, 855));
    assert_eq!(r.size(), Size::new(597, 855));
}
