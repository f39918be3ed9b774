use super::*;

#[test]
fn scale_len_rounds_and_floors_at_one() {
    assert_eq!(scale_len(800, 46.0 / 200.0), 184);
    assert_eq!(scale_len(1200, 0.534375), 641);
    assert_eq!(scale_len(3, 0.01), 1);
}

#[test]
fn centered_offset_goes_negative_on_overflow() {
    assert_eq!(centered_offset(609, 597), 6);
    assert_eq!(centered_offset(609, 697), -44);
}

#[test]
fn denormalize_maps_endpoints() {
    assert_eq!(denormalize(0, 1000, 345), 0);
    assert_eq!(denormalize(1000, 1000, 345), 345);
    assert_eq!(denormalize(500, 1000, 200), 100);
    assert_eq!(denormalize(700, 1000, 0), 0);
}
