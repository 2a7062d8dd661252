// Host-side tests for the parallax field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod parallax {
    include!("../src/core/parallax.rs");
}

use glam::DVec2;
use parallax::*;

fn moving_at(x: f64, y: f64) -> PointerState {
    PointerState {
        position: DVec2::new(x, y),
        moving: true,
    }
}

fn translation(field: &ParallaxField, i: usize) -> DVec2 {
    match field.layer(i) {
        Some(LayerTransform::Translate(v)) => v,
        other => panic!("layer {i} not translated: {other:?}"),
    }
}

#[test]
fn pointer_fraction_is_centred_on_viewport() {
    assert_eq!(pointer_fraction(0.0, 1000.0), -0.5);
    assert_eq!(pointer_fraction(500.0, 1000.0), 0.0);
    assert_eq!(pointer_fraction(1000.0, 1000.0), 0.5);
    assert_eq!(pointer_fraction(250.0, 0.0), 0.0);
}

#[test]
fn on_move_sets_position_and_moving_flag() {
    let mut pointer = PointerState::default();
    assert!(!pointer.moving);
    pointer.on_move(200.0, 600.0, 800.0, 800.0);
    assert!(pointer.moving);
    assert!((pointer.position.x - (-0.25)).abs() < 1e-12);
    assert!((pointer.position.y - 0.25).abs() < 1e-12);
    pointer.on_leave();
    assert!(!pointer.moving);
    // leave keeps the last position
    assert!((pointer.position.y - 0.25).abs() < 1e-12);
}

#[test]
fn layer_speed_grows_linearly_with_index() {
    let p = ParallaxParams::default();
    assert!((p.speed_for_layer(0) - 0.5).abs() < 1e-12);
    assert!((p.speed_for_layer(1) - 0.8).abs() < 1e-12);
    assert!((p.speed_for_layer(4) - 1.7).abs() < 1e-12);
}

#[test]
fn moving_pointer_translates_each_layer_by_its_speed() {
    let mut field = ParallaxField::new(4, ParallaxParams::default());
    let (x, y) = (0.3, -0.2);
    let changed = field.step(&moving_at(x, y));
    assert_eq!(changed, vec![0, 1, 2, 3]);
    for i in 0..4 {
        let speed = 0.5 + 0.3 * i as f64;
        let v = translation(&field, i);
        assert!((v.x - x * speed * 10.0).abs() < 1e-9, "x of layer {i}");
        assert!((v.y - y * speed * 10.0).abs() < 1e-9, "y of layer {i}");
    }
}

#[test]
fn unchanged_pointer_produces_no_writes() {
    let mut field = ParallaxField::new(3, ParallaxParams::default());
    let pointer = moving_at(0.1, 0.1);
    assert_eq!(field.step(&pointer).len(), 3);
    assert!(field.step(&pointer).is_empty());
}

#[test]
fn leave_snaps_translated_layers_to_origin_on_next_frame() {
    let mut field = ParallaxField::new(2, ParallaxParams::default());
    let mut pointer = moving_at(0.4, 0.4);
    field.step(&pointer);
    pointer.on_leave();
    let changed = field.step(&pointer);
    assert_eq!(changed, vec![0, 1]);
    assert_eq!(field.layer(0), Some(LayerTransform::Translate(DVec2::ZERO)));
    assert_eq!(
        field.layer(1).and_then(|t| t.to_css()).as_deref(),
        Some("translate(0px, 0px)")
    );
    // already at rest
    assert!(field.step(&pointer).is_empty());
}

#[test]
fn idle_pointer_leaves_untouched_layers_alone() {
    let mut field = ParallaxField::new(3, ParallaxParams::default());
    let changed = field.step(&PointerState::default());
    assert!(changed.is_empty());
    assert_eq!(field.layer(2), Some(LayerTransform::Untouched));
    assert_eq!(LayerTransform::Untouched.to_css(), None);
}

#[test]
fn suspend_clears_every_layer_and_ignores_pointer() {
    let mut field = ParallaxField::new(3, ParallaxParams::default());
    field.step(&moving_at(0.2, 0.2));
    assert_eq!(field.suspend(), 3);
    assert!(field.is_suspended());
    for i in 0..3 {
        assert_eq!(field.layer(i), Some(LayerTransform::Cleared));
        assert_eq!(field.layer(i).and_then(|t| t.to_css()).as_deref(), Some("none"));
    }
    assert!(field.step(&moving_at(-0.4, 0.1)).is_empty());
    assert_eq!(field.layer(0), Some(LayerTransform::Cleared));
}

#[test]
fn translate_css_matches_rendered_form() {
    let css = LayerTransform::Translate(DVec2::new(1.5, -2.0)).to_css();
    assert_eq!(css.as_deref(), Some("translate(1.5px, -2px)"));
}

#[test]
fn empty_field_is_a_no_op() {
    let mut field = ParallaxField::new(0, ParallaxParams::default());
    assert!(field.is_empty());
    assert!(field.step(&moving_at(0.5, 0.5)).is_empty());
    assert_eq!(field.suspend(), 0);
}
