use super::*;
use crate::foundation::core::FillRule;

fn cfg() -> EngineConfig {
    EngineConfig::default()
}

#[test]
fn classification_is_two_families() {
    assert_eq!(classify(CutoutKind::None), Some(Family::Bar));
    assert_eq!(classify(CutoutKind::Notch), Some(Family::Bar));
    assert_eq!(classify(CutoutKind::PunchHole), Some(Family::Orbit));
    assert_eq!(classify(CutoutKind::Teardrop), Some(Family::Orbit));
    assert_eq!(classify(CutoutKind::Island), Some(Family::Orbit));
    assert_eq!(classify(CutoutKind::Unknown), None);
}

#[test]
fn none_is_a_straight_line_with_mask_below() {
    let spec = build_path_spec(&Cutout::none(), 0.0, &cfg()).unwrap();
    assert_eq!(spec.path_d, "M 0,0 L 390,0");
    assert_eq!(spec.perimeter, 390.0);
    assert_eq!(spec.mask_d.as_deref(), Some("M 0,0 L 390,0 L 390,20 L 0,20 Z"));
    assert_eq!(spec.mask_fill_rule, Some(FillRule::NonZero));
    assert_eq!(
        (spec.svg_left, spec.svg_top, spec.svg_width, spec.svg_height),
        (0.0, 0.0, 390.0, 20.0)
    );
}

#[test]
fn punch_hole_is_a_local_circle() {
    let spec = build_path_spec(&Cutout::punch_hole(194.0, 14.0, 24.0, 24.0), 2.0, &cfg()).unwrap();
    assert_eq!(spec.path_d, "M 48,26 A 14,14 0 1,1 20,26 A 14,14 0 1,1 48,26 Z");
    assert_eq!(
        (spec.svg_left, spec.svg_top, spec.svg_width, spec.svg_height),
        (172.0, 0.0, 68.0, 60.0)
    );
    assert_eq!(
        spec.mask_d.as_deref(),
        Some("M 0,0 L 68,0 L 68,60 L 0,60 Z M 48,26 A 14,14 0 1,1 20,26 A 14,14 0 1,1 48,26 Z")
    );
    assert_eq!(spec.mask_fill_rule, Some(FillRule::EvenOdd));
    assert!((spec.perimeter - 2.0 * std::f64::consts::PI * 14.0).abs() < 1e-9);
}

#[test]
fn teardrop_encloses_the_larger_side() {
    let spec = build_path_spec(&Cutout::teardrop(176.0, 0.0, 41.0, 24.0), 0.0, &cfg()).unwrap();
    assert!((spec.perimeter - 2.0 * std::f64::consts::PI * 20.5).abs() < 1e-9);
}

#[test]
fn island_defaults_to_a_pill() {
    let spec = build_path_spec(&Cutout::island(134.0, 11.0, 125.0, 37.0), 0.0, &cfg()).unwrap();
    assert!(spec.path_d.contains("A 18.5,18.5 0 0,1"));
}

#[test]
fn island_radius_falls_back_to_config_then_cutout_wins() {
    let config = EngineConfig {
        island_radius: Some(6.0),
        ..cfg()
    };
    let island = Cutout::island(134.0, 11.0, 125.0, 37.0);
    let spec = build_path_spec(&island, 0.0, &config).unwrap();
    assert!(spec.path_d.contains("A 6,6 0 0,1"));

    let spec = build_path_spec(&island.with_radius(10.0), 2.0, &config).unwrap();
    assert!(spec.path_d.contains("A 12,12 0 0,1"));
}

#[test]
fn notch_canvas_reaches_below_the_detour() {
    let notch = Cutout::notch(117.0, 0.0, 156.0, 33.0).with_radius(20.0);
    let spec = build_path_spec(&notch, 4.0, &cfg()).unwrap();
    assert_eq!(spec.svg_left, 0.0);
    assert_eq!(spec.svg_width, 390.0);
    assert_eq!(spec.svg_height, 4.0 + 33.0 + 4.0 + 20.0);
    assert!(spec.path_d.starts_with("M 0,4 L "));
    assert!(spec.path_d.ends_with(" L 390,4"));
}

#[test]
fn glow_off_drops_the_mask() {
    let config = cfg().with_directional_glow(false);
    let spec = build_path_spec(&Cutout::island(10.0, 10.0, 50.0, 20.0), 0.0, &config).unwrap();
    assert_eq!(spec.mask_d, None);
    assert_eq!(spec.mask_fill_rule, None);
}

#[test]
fn no_result_cases() {
    let missing = Cutout {
        kind: CutoutKind::Island,
        ..Cutout::default()
    };
    assert_eq!(build_path_spec(&missing, 0.0, &cfg()), None);

    let unknown = Cutout {
        kind: CutoutKind::Unknown,
        width: Some(10.0),
        height: Some(10.0),
        ..Cutout::default()
    };
    assert_eq!(build_path_spec(&unknown, 0.0, &cfg()), None);

    let ok = Cutout::punch_hole(10.0, 10.0, 10.0, 10.0);
    assert_eq!(build_path_spec(&ok, f64::NAN, &cfg()), None);
    assert_eq!(build_path_spec(&ok, 0.0, &cfg().with_bleed(-1.0)), None);
}

#[test]
fn collapsed_shapes_keep_a_positive_perimeter() {
    for cutout in [
        Cutout::island(50.0, 10.0, 0.0, 0.0),
        Cutout::punch_hole(50.0, 10.0, 0.0, 0.0),
        Cutout::island(50.0, 10.0, 10.0, 10.0),
    ] {
        let spec = build_path_spec(&cutout, -30.0, &cfg()).unwrap();
        assert!(spec.perimeter > 0.0, "{cutout:?}");
    }
}

#[test]
fn engine_wraps_its_config() {
    let engine = PathEngine::new(cfg().with_screen_width(400.0));
    let spec = engine.build(&Cutout::none(), 0.0).unwrap();
    assert_eq!(spec.path_d, "M 0,0 L 400,0");
    assert_eq!(engine.config().screen_width, 400.0);
}

#[test]
fn notch_close_to_left_edge_covers_full_width() {
    let notch = Cutout::notch(6.0, 0.0, 100.0, 30.0).with_radius(10.0);
    let spec = build_path_spec(&notch, 0.0, &cfg()).unwrap();
    assert!(spec.path_d.starts_with("M 0,0 "), "{}", spec.path_d);
    assert!(spec.path_d.ends_with(" L 390,0"), "{}", spec.path_d);
    let mask = spec.mask_d.unwrap();
    assert!(mask.ends_with("L 390,50 L 0,50 Z"), "{mask}");
}
