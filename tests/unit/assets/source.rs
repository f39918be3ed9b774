use std::io::Cursor;

use super::*;

fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_keeps_pixels_and_orientation() {
    let img = RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 255]).unwrap();
    let src = SourceImage::from_bytes(&png_bytes(&img)).unwrap();
    assert_eq!(src.size(), Size::new(2, 1));
    assert_eq!(src.orientation(), Orientation::Horizontal);
    assert_eq!(src.as_rgba().as_raw(), img.as_raw());
}

#[test]
fn square_sources_are_vertical() {
    let src = SourceImage::from_rgba(RgbaImage::new(5, 5)).unwrap();
    assert_eq!(src.orientation(), Orientation::Vertical);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(SourceImage::from_bytes(b"not an image").is_err());
}

#[test]
fn raw_buffer_length_is_checked() {
    assert!(SourceImage::from_raw(2, 2, vec![0; 15]).is_err());
    SourceImage::from_raw(2, 2, vec![0; 16]).unwrap();
}

#[test]
fn empty_bitmaps_are_rejected() {
    assert!(matches!(
        SourceImage::from_rgba(RgbaImage::new(0, 3)),
        Err(CardError::InvalidGeometry(_))
    ));
}

#[test]
fn from_path_reports_missing_files() {
    let err = SourceImage::from_path("definitely/not/here.png").unwrap_err();
    assert!(matches!(err, CardError::Io(_)));
}
