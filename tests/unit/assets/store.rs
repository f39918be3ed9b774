use image::Rgba;

use super::*;

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(
        normalize_rel_path("templates/template_1.png").unwrap(),
        "templates/template_1.png"
    );
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn load_decodes_once_and_shares_the_bitmap() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("templates")).unwrap();
    RgbaImage::from_pixel(3, 2, Rgba([9, 8, 7, 255]))
        .save(dir.path().join("templates/bg.png"))
        .unwrap();

    let mut store = BackgroundStore::new(dir.path());
    let first = match store.load("templates/bg.png").unwrap() {
        BackgroundSlot::Ready(img) => Arc::clone(img),
        BackgroundSlot::Unavailable(reason) => panic!("unexpected: {reason}"),
    };
    assert_eq!(first.dimensions(), (3, 2));

    let second = match store.load("./templates/bg.png").unwrap() {
        BackgroundSlot::Ready(img) => Arc::clone(img),
        BackgroundSlot::Unavailable(reason) => panic!("unexpected: {reason}"),
    };
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn missing_file_becomes_unavailable_slot() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = BackgroundStore::new(dir.path());
    let slot = store.load("nope.png").unwrap();
    let BackgroundSlot::Unavailable(reason) = slot else {
        panic!("expected unavailable slot");
    };
    assert!(reason.contains("nope.png"));
}

#[test]
fn insert_overrides_disk() {
    let mut store = BackgroundStore::new("does-not-exist");
    store
        .insert("t.png", RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255])))
        .unwrap();
    assert!(matches!(store.get("t.png"), Some(BackgroundSlot::Ready(_))));
    assert!(matches!(
        store.load("t.png").unwrap(),
        BackgroundSlot::Ready(_)
    ));
    assert!(store.get("other.png").is_none());
}
