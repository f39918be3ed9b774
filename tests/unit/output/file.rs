use chrono::NaiveDate;
use image::Rgba;

use super::*;

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(7, 5, 1)
        .unwrap()
}

#[test]
fn sanitize_strips_forbidden_and_collapses_whitespace() {
    assert_eq!(
        sanitize_filename("  Zelda: Breath   of the\tWild?  "),
        "Zelda Breath of the Wild"
    );
    assert_eq!(sanitize_filename(r#"a<b>c"d/e\f|g*h"#), "abcdefgh");
    assert_eq!(sanitize_filename("???"), "");
}

#[test]
fn file_name_carries_timestamp_and_fallback() {
    assert_eq!(
        output_file_name(Some("Halo (2001)"), at()),
        "Halo (2001)_20240309_070501.png"
    );
    assert_eq!(output_file_name(None, at()), "nfc_card_20240309_070501.png");
    assert_eq!(
        output_file_name(Some(":/"), at()),
        "nfc_card_20240309_070501.png"
    );
}

#[test]
fn write_card_creates_directory_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("cards/nested");
    let img = RgbaImage::from_pixel(3, 4, Rgba([1, 2, 3, 4]));

    let path = write_card(&img, &out_dir, Some("Metroid"), at()).unwrap();
    assert_eq!(path, out_dir.join("Metroid_20240309_070501.png"));

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.as_raw(), img.as_raw());
}

#[test]
fn digest_tracks_pixels_and_shape() {
    let a = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    let b = RgbaImage::from_pixel(4, 1, Rgba([0, 0, 0, 255]));
    assert_eq!(pixel_digest(&a), pixel_digest(&a.clone()));
    assert_ne!(pixel_digest(&a), pixel_digest(&b));
    assert_eq!(pixel_digest(&a).len(), 64);
}
