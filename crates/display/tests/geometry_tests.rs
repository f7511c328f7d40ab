use {
    base::Vec2,
    display::{BoundingBox, CrosshairConfig, MilScaleConfig, TickKind, crosshair, mil_ticks},
};

#[test]
fn test_crosshair_defaults_to_panel_center() {
    let config = CrosshairConfig::ten_inch();
    let c = crosshair(Vec2::new(800, 480), Some(Vec2::new(640, 480)), None, &config);
    assert_eq!(c.anchor, Vec2::new(400.0, 240.0));
    assert_eq!(c.half_length, 30);
}

#[test]
fn test_crosshair_follows_box_in_panel_space() {
    let config = CrosshairConfig::ten_inch();
    let c = crosshair(
        Vec2::new(800, 480),
        Some(Vec2::new(640, 480)),
        Some(BoundingBox::new(100, 100, 100, 100)),
        &config,
    );
    assert_eq!(c.anchor, Vec2::new(187.5, 150.0));
    assert_eq!(c.pixel(), Vec2::new(188, 150));
    assert_eq!(c.half_length, 45);
}

#[test]
fn test_crosshair_half_length_is_clamped() {
    let config = CrosshairConfig::seven_inch();
    let frame = Some(Vec2::new(640, 480));
    let panel = Vec2::new(640, 480);

    let small = crosshair(panel, frame, Some(BoundingBox::new(0, 0, 4, 4)), &config);
    assert_eq!(small.half_length, 10);

    let medium = crosshair(panel, frame, Some(BoundingBox::new(0, 0, 40, 60)), &config);
    assert_eq!(medium.half_length, 25);

    let large = crosshair(panel, frame, Some(BoundingBox::new(0, 0, 400, 400)), &config);
    assert_eq!(large.half_length, 30);
}

#[test]
fn test_crosshair_ignores_box_without_frame() {
    let config = CrosshairConfig::ten_inch();
    let c = crosshair(
        Vec2::new(800, 480),
        None,
        Some(BoundingBox::new(100, 100, 100, 100)),
        &config,
    );
    assert_eq!(c.anchor, Vec2::new(400.0, 240.0));
    assert_eq!(c.half_length, 30);
}

#[test]
fn test_crosshair_ignores_box_outside_frame() {
    let config = CrosshairConfig::ten_inch();
    let panel = Vec2::new(800, 480);
    let frame = Some(Vec2::new(640, 480));

    let off = crosshair(panel, frame, Some(BoundingBox::new(5000, 3000, 100, 100)), &config);
    assert_eq!(off.anchor, Vec2::new(400.0, 240.0));
    assert_eq!(off.half_length, 30);

    let huge = crosshair(
        panel,
        frame,
        Some(BoundingBox::new(0, 0, i32::MAX, i32::MAX)),
        &config,
    );
    assert_eq!(huge.anchor, Vec2::new(400.0, 240.0));
    assert_eq!(huge.half_length, 30);
}

#[test]
fn test_crosshair_half_length_for_frame_sized_box() {
    let config = CrosshairConfig::ten_inch();
    let frame = Vec2::new(40_000, 40_000);
    let c = crosshair(
        Vec2::new(800, 480),
        Some(frame),
        Some(BoundingBox::new(0, 0, 40_000, 40_000)),
        &config,
    );
    assert_eq!(c.half_length, 45);
}

// one pixel per mil, so +-200 mil fits around the center
fn wide_scale() -> MilScaleConfig {
    MilScaleConfig {
        fov_mil: 698.0,
        ..MilScaleConfig::ten_inch()
    }
}

#[test]
fn test_ticks_cover_full_range_on_wide_field() {
    let scale = wide_scale();
    let ticks = mil_ticks(349.0, 698, &scale);
    assert_eq!(ticks.len(), 401);
    assert_eq!(ticks.first().map(|t| t.offset), Some(-200));
    assert_eq!(ticks.last().map(|t| t.offset), Some(200));
}

#[test]
fn test_tick_positions() {
    let scale = MilScaleConfig::ten_inch();
    let ticks = mil_ticks(400.0, 698, &scale);
    // 2 pixels per mil
    let zero = ticks.iter().find(|t| t.offset == 0).unwrap();
    assert_eq!(zero.x, 400);
    let ten = ticks.iter().find(|t| t.offset == 10).unwrap();
    assert_eq!(ten.x, 420);
    let minus_three = ticks.iter().find(|t| t.offset == -3).unwrap();
    assert_eq!(minus_three.x, 394);
}

#[test]
fn test_ticks_outside_panel_are_omitted() {
    let scale = MilScaleConfig::ten_inch();
    let ticks = mil_ticks(0.0, 698, &scale);
    assert!(ticks.iter().all(|t| t.offset >= 0));
    assert!(ticks.iter().all(|t| t.x >= 0 && t.x <= 698));
    // 0..=200 all fit: 200 mil is 400 px
    assert_eq!(ticks.len(), 201);
}

#[test]
fn test_tick_kinds_and_labels() {
    let scale = wide_scale();
    let ticks = mil_ticks(349.0, 698, &scale);
    for tick in &ticks {
        let expected = if tick.offset % 10 == 0 { TickKind::Major } else { TickKind::Minor };
        assert_eq!(tick.kind, expected, "offset {}", tick.offset);
        assert_eq!(tick.labeled, tick.offset % 50 == 0, "offset {}", tick.offset);
    }
    let labeled: Vec<i32> = ticks.iter().filter(|t| t.labeled).map(|t| t.offset).collect();
    assert_eq!(labeled, vec![-200, -150, -100, -50, 0, 50, 100, 150, 200]);
}

#[test]
fn test_tick_lengths() {
    let scale = MilScaleConfig::seven_inch();
    let ticks = mil_ticks(100.0, 349, &scale);
    let major = ticks.iter().find(|t| t.offset == 0).unwrap();
    let minor = ticks.iter().find(|t| t.offset == 1).unwrap();
    assert_eq!(major.length(&scale), 8);
    assert_eq!(minor.length(&scale), 4);
}
