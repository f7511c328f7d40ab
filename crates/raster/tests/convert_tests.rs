use base::Vec2;
use raster::{bgr_to_rgb, rgb_to_u32, yuyv_to_rgb};

#[test]
fn test_yuyv_to_rgb_gray() {
    // Y=128, U=128, V=128 (mid-gray, no chroma)
    let rgb = yuyv_to_rgb(Vec2::new(2, 1), &[128, 128, 128, 128]);
    assert_eq!(rgb, vec![128, 128, 128, 128, 128, 128]);
}

#[test]
fn test_yuyv_to_rgb_white_and_black() {
    // Y0=255, Y1=0 sharing neutral chroma
    let rgb = yuyv_to_rgb(Vec2::new(2, 1), &[255, 128, 0, 128]);
    assert_eq!(rgb, vec![255, 255, 255, 0, 0, 0]);
}

#[test]
fn test_yuyv_to_rgb_multiline() {
    let yuyv = vec![
        128, 128, 128, 128, // row 0: gray, gray
        255, 128, 0, 128, // row 1: white, black
    ];
    let rgb = yuyv_to_rgb(Vec2::new(2, 2), &yuyv);
    assert_eq!(rgb.len(), 12);
    assert_eq!(&rgb[0..6], &[128, 128, 128, 128, 128, 128]);
    assert_eq!(&rgb[6..12], &[255, 255, 255, 0, 0, 0]);
}

#[test]
fn test_yuyv_to_rgb_strong_red_chroma() {
    // V well above neutral pushes red up and green down
    let rgb = yuyv_to_rgb(Vec2::new(2, 1), &[128, 128, 128, 255]);
    assert!(rgb[0] > 200);
    assert!(rgb[1] < 128);
    assert_eq!(rgb[2], 128);
}

#[test]
fn test_bgr_to_rgb_swaps_channels() {
    let bgr = [10, 20, 30, 40, 50, 60];
    assert_eq!(bgr_to_rgb(&bgr), vec![30, 20, 10, 60, 50, 40]);
}

#[test]
fn test_bgr_to_rgb_ignores_trailing_bytes() {
    assert_eq!(bgr_to_rgb(&[1, 2, 3, 4]), vec![3, 2, 1]);
}

#[test]
fn test_rgb_to_u32_single_pixel() {
    // Red pixel: R=255, G=0, B=0 -> 0x00FF0000
    assert_eq!(rgb_to_u32(Vec2::new(1, 1), &[255, 0, 0]), vec![0x00FF0000]);
}

#[test]
fn test_rgb_to_u32_2x1() {
    let buf = [255, 0, 0, 0, 0, 255];
    assert_eq!(
        rgb_to_u32(Vec2::new(2, 1), &buf),
        vec![0x00FF0000, 0x000000FF]
    );
}
