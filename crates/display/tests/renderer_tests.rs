use {
    base::Vec2,
    display::{
        BoundingBox, Canvas, DisplayMode, DisplayState, OverlayConfig, OverlayRenderer, PanelState,
    },
    video::{CaptureError, Frame},
};

const RED: [u8; 3] = [255, 0, 0];
const GREEN: [u8; 3] = [0, 255, 0];
const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

fn solid_frame(size: Vec2<usize>, color: [u8; 3]) -> Frame {
    Frame::new(size, color.repeat(size.area())).unwrap()
}

fn red_in(canvas: &Canvas, xs: std::ops::Range<i32>, ys: std::ops::Range<i32>) -> usize {
    let mut n = 0;
    for y in ys {
        for x in xs.clone() {
            if canvas.pixel(x, y) == Some(RED) {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn test_empty_panel_is_black_with_centered_crosshair() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    let mut canvas = Canvas::new(Vec2::new(200, 100));
    let crosshair = renderer.render(&PanelState::default(), &mut canvas);

    assert_eq!(crosshair.anchor, Vec2::new(100.0, 50.0));
    assert_eq!(canvas.pixel(100, 50), Some(RED));
    assert_eq!(canvas.pixel(130, 50), Some(RED));
    assert_eq!(canvas.pixel(100, 80), Some(RED));
    assert_eq!(canvas.pixel(131, 50), Some(BLACK));
    assert_eq!(canvas.pixel(199, 99), Some(BLACK));
}

#[test]
fn test_error_banner_is_drawn() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    let mut canvas = Canvas::new(Vec2::new(200, 100));

    renderer.render(&PanelState::default(), &mut canvas);
    assert_eq!(red_in(&canvas, 10..90, 41..49), 0);

    let state = PanelState::default()
        .with_capture(Err(CaptureError::DeviceUnavailable("no device".to_string())));
    renderer.render(&state, &mut canvas);
    assert!(red_in(&canvas, 10..90, 41..49) > 0);
}

#[test]
fn test_frame_fills_panel() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    let mut canvas = Canvas::new(Vec2::new(200, 100));
    let state = PanelState::default().with_capture(Ok(solid_frame(Vec2::new(4, 2), GREEN)));
    renderer.render(&state, &mut canvas);

    assert_eq!(canvas.pixel(5, 95), Some(GREEN));
    assert_eq!(canvas.pixel(195, 95), Some(GREEN));
}

#[test]
fn test_letterbox_uses_mode_background() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    let mut canvas = Canvas::new(Vec2::new(200, 100));
    let state = PanelState::default().with_capture(Ok(solid_frame(Vec2::new(2, 2), GREEN)));

    renderer.render(&state, &mut canvas);
    assert_eq!(canvas.pixel(10, 90), Some(BLACK));
    assert_eq!(canvas.pixel(60, 90), Some(GREEN));

    renderer.render(&state.with_mode(DisplayMode::Night), &mut canvas);
    assert_eq!(canvas.pixel(10, 90), Some(WHITE));
    assert_eq!(canvas.pixel(60, 90), Some(GREEN));
}

#[test]
fn test_ruler_follows_crosshair() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    // 2 pixels per mil
    let mut canvas = Canvas::new(Vec2::new(698, 100));
    let state = PanelState::default()
        .with_capture(Ok(solid_frame(Vec2::new(698, 100), BLACK)))
        .with_bounding_box(Some(BoundingBox::new(100, 40, 20, 20)));
    let crosshair = renderer.render(&state, &mut canvas);

    assert_eq!(crosshair.anchor, Vec2::new(110.0, 50.0));
    assert_eq!(crosshair.half_length, 15);
    // zero tick at the crosshair
    assert_eq!(canvas.pixel(110, 0), Some(RED));
    assert_eq!(canvas.pixel(110, 10), Some(RED));
    // major tick at +10 mil
    assert_eq!(canvas.pixel(130, 9), Some(RED));
    // minor tick at +1 mil is short
    assert_eq!(canvas.pixel(112, 4), Some(RED));
    assert_eq!(canvas.pixel(112, 7), Some(BLACK));
}

#[test]
fn test_scenario_anchor_and_half_length() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    let mut canvas = Canvas::new(Vec2::new(800, 480));
    let state = PanelState::default()
        .with_capture(Ok(solid_frame(Vec2::new(640, 480), BLACK)))
        .with_bounding_box(Some(BoundingBox::new(100, 100, 100, 100)));
    let crosshair = renderer.render(&state, &mut canvas);

    assert_eq!(crosshair.anchor, Vec2::new(187.5, 150.0));
    assert_eq!(crosshair.half_length, 45);
}

#[test]
fn test_rejected_box_keeps_center() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    let mut canvas = Canvas::new(Vec2::new(800, 480));
    let state = PanelState::default()
        .with_capture(Ok(solid_frame(Vec2::new(640, 480), BLACK)))
        .with_bounding_box(Some(BoundingBox::new(600, 0, 100, 100)));
    assert_eq!(state.bounding_box, None);

    let crosshair = renderer.render(&state, &mut canvas);
    assert_eq!(crosshair.anchor, Vec2::new(400.0, 240.0));
    assert_eq!(crosshair.half_length, 30);
}

#[test]
fn test_box_set_before_frame_is_rechecked() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    let mut canvas = Canvas::new(Vec2::new(800, 480));
    let state = PanelState::default()
        .with_bounding_box(Some(BoundingBox::new(5000, 3000, 100, 100)))
        .with_capture(Ok(solid_frame(Vec2::new(640, 480), BLACK)));
    assert_eq!(state.bounding_box, None);

    let crosshair = renderer.render(&state, &mut canvas);
    assert_eq!(crosshair.anchor, Vec2::new(400.0, 240.0));
    assert_eq!(canvas.pixel(400, 240), Some(RED));
}

#[test]
fn test_unchecked_box_in_state_falls_back_to_center() {
    let renderer = OverlayRenderer::new(OverlayConfig::ten_inch());
    let mut canvas = Canvas::new(Vec2::new(800, 480));
    let mut state = PanelState::default().with_capture(Ok(solid_frame(Vec2::new(640, 480), BLACK)));
    state.bounding_box = Some(BoundingBox::new(2_000_000_000, 0, 100, 100));

    let crosshair = renderer.render(&state, &mut canvas);
    assert_eq!(crosshair.anchor, Vec2::new(400.0, 240.0));
    assert_eq!(crosshair.half_length, 30);
}

#[test]
fn test_render_does_not_change_state() {
    let renderer = OverlayRenderer::new(OverlayConfig::seven_inch());
    let state = PanelState::default().with_capture(Ok(solid_frame(Vec2::new(8, 8), GREEN)));
    let before = state.clone();
    let mut a = Canvas::new(Vec2::new(120, 60));
    let mut b = Canvas::new(Vec2::new(120, 60));
    renderer.render(&state, &mut a);
    renderer.render(&state, &mut b);
    assert_eq!(state, before);
    assert_eq!(a.data(), b.data());
    assert!(matches!(state.display, DisplayState::Frame(_)));
}
