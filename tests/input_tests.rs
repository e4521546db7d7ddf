// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn pixel_to_ndc_maps_corners_and_center() {
    let (w, h) = (800.0, 600.0);
    assert!(approx(pixel_to_ndc(Vec2::new(0.0, 0.0), w, h), Vec2::new(-1.0, 1.0)));
    assert!(approx(pixel_to_ndc(Vec2::new(w, h), w, h), Vec2::new(1.0, -1.0)));
    assert!(approx(pixel_to_ndc(Vec2::new(400.0, 300.0), w, h), Vec2::ZERO));
}

#[test]
fn pixel_to_ndc_survives_zero_sized_canvas() {
    let ndc = pixel_to_ndc(Vec2::new(0.5, 0.5), 0.0, 0.0);
    assert!(ndc.is_finite());
}

#[test]
fn ndc_to_pixel_inverts_pixel_to_ndc() {
    let (w, h) = (640.0, 480.0);
    for px in [Vec2::ZERO, Vec2::new(320.0, 240.0), Vec2::new(17.0, 400.0)] {
        let back = ndc_to_pixel(pixel_to_ndc(px, w, h), w, h);
        assert!((back - px).length() < 1e-3, "{:?} -> {:?}", px, back);
    }
}

#[test]
fn css_offsets_scale_to_backing_pixels() {
    // 2x device pixel ratio
    let px = css_to_backing_px(
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert!(approx(px, Vec2::new(200.0, 100.0)));
}

#[test]
fn css_offsets_on_collapsed_element_are_zero() {
    let px = css_to_backing_px(Vec2::new(10.0, 10.0), Vec2::new(0.0, 300.0), Vec2::new(800.0, 600.0));
    assert_eq!(px, Vec2::ZERO);
}

#[test]
fn aspect_ratio_never_divides_by_zero() {
    assert!((aspect_ratio(1600, 800) - 2.0).abs() < 1e-6);
    assert!((aspect_ratio(0, 0) - 1.0).abs() < 1e-6);
    assert!(aspect_ratio(300, 0).is_finite());
}

#[test]
fn shortcut_keys_map_to_commands() {
    assert_eq!(key_command("Delete"), Some(KeyCommand::RemoveSelected));
    assert_eq!(key_command("Backspace"), Some(KeyCommand::RemoveSelected));
    assert_eq!(key_command("g"), Some(KeyCommand::ToggleSnap));
    assert_eq!(key_command("G"), Some(KeyCommand::ToggleSnap));
    assert_eq!(key_command("Escape"), Some(KeyCommand::ClearSelection));
    assert_eq!(key_command("a"), Some(KeyCommand::ToggleAxis));
    assert_eq!(key_command("A"), Some(KeyCommand::ToggleAxis));
    assert_eq!(key_command("z"), None);
    assert_eq!(key_command("Enter"), None);
}
