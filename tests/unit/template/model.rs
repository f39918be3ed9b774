use super::*;

#[test]
fn builtin_catalogue_is_valid_and_ordered() {
    let cat = TemplateCatalog::builtin();
    cat.validate().unwrap();
    let ids: Vec<_> = cat.templates.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "Template 1",
            "Template 2",
            "Template 3",
            "Template 4",
            "Template 5",
            "Template 6"
        ]
    );
    assert_eq!(cat.get("Template 3").unwrap().mode(), LayoutMode::Layered);
    assert_eq!(
        cat.get("Template 6").unwrap().mode(),
        LayoutMode::FullPosterRounded
    );
}

#[test]
fn json_round_trips_through_the_mode_tag() {
    let json = r#"{
        "templates": [
            {
                "id": "Framed",
                "background": "templates/template_1.png",
                "mode": "framed",
                "center": {"x": 10, "y": 59, "w": 597, "h": 855},
                "footer": {"height": 90, "logo_height": 46, "logo_margin": 25}
            },
            {
                "id": "Layered",
                "background": "templates/template_3.png",
                "mode": "layered",
                "poster_y": 120,
                "header_logo": {"height": 63, "max_width": 250, "top_margin": 62, "left_margin": 24}
            },
            {
                "id": "Top",
                "background": "templates/template_4.png",
                "mode": "framed-top-logo",
                "header_logo": {"max_height": 62, "top_margin": 10}
            },
            {
                "id": "Rounded",
                "mode": "full-poster-rounded",
                "output": {"width": 619, "height": 994},
                "corner_radius": 22
            }
        ]
    }"#;

    let cat = TemplateCatalog::from_reader(json.as_bytes()).unwrap();
    cat.validate().unwrap();

    let Layout::Layered(g) = cat.templates[1].layout else {
        panic!("expected layered layout");
    };
    assert_eq!(g.poster_width, 609);
    assert_eq!(g.overflow_pad, 120);
    assert_eq!(g.mask_inset, 2);

    let Layout::FramedTopLogo(t) = cat.templates[2].layout else {
        panic!("expected framed-top-logo layout");
    };
    assert_eq!(t.poster, PosterSlot::default());

    let text = serde_json::to_string(&cat).unwrap();
    let back = TemplateCatalog::from_reader(text.as_bytes()).unwrap();
    assert_eq!(back, cat);
}

#[test]
fn unknown_mode_is_a_serde_error() {
    let json = r#"{"templates":[{"id":"x","background":"a.png","mode":"collage"}]}"#;
    assert!(matches!(
        TemplateCatalog::from_reader(json.as_bytes()),
        Err(CardError::Serde(_))
    ));
}

#[test]
fn validation_rejects_bad_descriptors() {
    let mut cat = TemplateCatalog::builtin();
    cat.templates[1].id = "Template 1".to_string();
    assert!(cat.validate().unwrap_err().to_string().contains("duplicate"));

    let mut cat = TemplateCatalog::builtin();
    cat.templates[0].background = None;
    assert!(cat.validate().is_err());

    let mut cat = TemplateCatalog::builtin();
    cat.templates[5].background = Some("templates/x.png".to_string());
    assert!(cat.validate().is_err());

    let mut cat = TemplateCatalog::builtin();
    cat.templates[0].background = Some("../escape.png".to_string());
    assert!(cat.validate().is_err());

    let mut cat = TemplateCatalog::builtin();
    if let Layout::FullPosterRounded(g) = &mut cat.templates[5].layout {
        g.corner_radius = 400;
    }
    assert!(cat.validate().is_err());

    let mut cat = TemplateCatalog::builtin();
    if let Layout::Framed(g) = &mut cat.templates[0].layout {
        g.center.width = 0;
    }
    assert!(cat.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    assert!(matches!(
        TemplateCatalog::from_path("missing/catalogue.json"),
        Err(CardError::Io(_))
    ));
}
