// Host-side tests for drag/pinch gestures and their broadcast to every scene.

mod common;

use common::*;
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use story_core::*;

fn g(input: GestureInput) -> InputEvent {
    InputEvent::Gesture(input)
}

#[test]
fn pinch_100_to_150_scales_to_1_25() {
    let mut s = GestureState::default();
    assert_eq!(s.apply(&GestureInput::TouchStart(touches(&[(0.0, 0.0), (100.0, 0.0)]))), None);
    assert_eq!(s.pinch_distance, Some(100.0));
    let fx = s.apply(&GestureInput::TouchMove(touches(&[(0.0, 0.0), (150.0, 0.0)])));
    assert_eq!(fx, Some(GestureEffect::Scale(1.25)));
    assert_eq!(s.pinch_distance, Some(150.0));
}

#[test]
fn pinch_is_incremental() {
    let mut s = GestureState::default();
    s.apply(&GestureInput::TouchStart(touches(&[(0.0, 0.0), (100.0, 0.0)])));
    s.apply(&GestureInput::TouchMove(touches(&[(0.0, 0.0), (140.0, 0.0)])));
    s.apply(&GestureInput::TouchMove(touches(&[(0.0, 0.0), (140.0, 0.0)])));
    assert!((s.scale - 1.2).abs() < 1e-5);
}

#[test]
fn pinch_scale_stays_clamped_for_any_sequence() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut s = GestureState::default();
        s.apply(&GestureInput::TouchStart(touches(&[(0.0, 0.0), (200.0, 0.0)])));
        for _ in 0..100 {
            let d: f32 = rng.gen_range(0.0..2000.0);
            s.apply(&GestureInput::TouchMove(touches(&[(0.0, 0.0), (d, 0.0)])));
            assert!(s.scale >= MIN_SCALE && s.scale <= MAX_SCALE, "scale {}", s.scale);
        }
    }
}

#[test]
fn pinch_clamps_at_both_ends() {
    let mut s = GestureState::default();
    s.apply(&GestureInput::TouchStart(touches(&[(0.0, 0.0), (10.0, 0.0)])));
    s.apply(&GestureInput::TouchMove(touches(&[(0.0, 0.0), (5000.0, 0.0)])));
    assert_eq!(s.scale, MAX_SCALE);
    s.apply(&GestureInput::TouchMove(touches(&[(0.0, 0.0), (1.0, 0.0)])));
    assert_eq!(s.scale, MIN_SCALE);
}

#[test]
fn pinch_needs_a_reference_distance() {
    let mut s = GestureState::default();
    let fx = s.apply(&GestureInput::TouchMove(touches(&[(0.0, 0.0), (150.0, 0.0)])));
    assert_eq!(fx, None);
    s.apply(&GestureInput::TouchStart(touches(&[(5.0, 5.0), (5.0, 5.0)])));
    let fx = s.apply(&GestureInput::TouchMove(touches(&[(0.0, 0.0), (150.0, 0.0)])));
    assert_eq!(fx, None);
    assert_eq!(s.scale, INITIAL_GESTURE_SCALE);
}

#[test]
fn mouse_drag_rotates_by_delta() {
    let mut s = GestureState::default();
    assert_eq!(s.apply(&GestureInput::MouseMove(Vec2::new(50.0, 50.0))), None);
    s.apply(&GestureInput::MouseDown(Vec2::new(100.0, 100.0)));
    let fx = s.apply(&GestureInput::MouseMove(Vec2::new(130.0, 90.0)));
    match fx {
        Some(GestureEffect::Rotate { yaw, pitch }) => {
            assert!((yaw - 0.3).abs() < 1e-6);
            assert!((pitch + 0.1).abs() < 1e-6);
        }
        other => panic!("expected rotation, got {other:?}"),
    }
    assert_eq!(s.last, Vec2::new(130.0, 90.0));
    s.apply(&GestureInput::MouseUp);
    assert!(!s.dragging);
    assert_eq!(s.apply(&GestureInput::MouseMove(Vec2::new(0.0, 0.0))), None);
}

#[test]
fn single_finger_drag_rotates_by_delta() {
    let mut s = GestureState::default();
    s.apply(&GestureInput::TouchStart(touches(&[(0.0, 0.0)])));
    assert!(s.dragging);
    let fx = s.apply(&GestureInput::TouchMove(touches(&[(20.0, -10.0)])));
    match fx {
        Some(GestureEffect::Rotate { yaw, pitch }) => {
            assert!((yaw - 0.2).abs() < 1e-6);
            assert!((pitch + 0.1).abs() < 1e-6);
        }
        other => panic!("expected rotation, got {other:?}"),
    }
    assert_eq!(s.last, Vec2::new(20.0, -10.0));
    s.apply(&GestureInput::TouchEnd);
    assert_eq!(s.apply(&GestureInput::TouchMove(touches(&[(40.0, 0.0)]))), None);
}

#[test]
fn second_finger_cancels_drag() {
    let mut s = GestureState::default();
    s.apply(&GestureInput::TouchStart(touches(&[(10.0, 10.0)])));
    assert!(s.dragging);
    s.apply(&GestureInput::TouchStart(touches(&[(10.0, 10.0), (60.0, 10.0)])));
    assert!(!s.dragging);
    assert_eq!(s.apply(&GestureInput::TouchMove(touches(&[(20.0, 10.0)]))), None);
}

#[test]
fn three_finger_start_changes_nothing() {
    let mut s = GestureState::default();
    let before = s;
    s.apply(&GestureInput::TouchStart(touches(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])));
    assert_eq!(s, before);
}

#[test]
fn release_clears_drag_and_pinch() {
    let mut s = GestureState::default();
    s.apply(&GestureInput::TouchStart(touches(&[(0.0, 0.0), (100.0, 0.0)])));
    s.apply(&GestureInput::TouchEnd);
    assert_eq!(s.pinch_distance, None);
    assert!(!s.dragging);
}

#[test]
fn every_scene_rotates_on_one_drag() {
    let (mut book, _) = full_book();
    book.target_found(0).unwrap();
    let picker = FakePicker::default();
    book.handle_input(&g(GestureInput::MouseDown(Vec2::new(0.0, 0.0))), &picker);
    let changed = book.handle_input(&g(GestureInput::MouseMove(Vec2::new(10.0, 0.0))), &picker);
    assert_eq!(changed, MAX_ANCHORS);
    for b in book.bindings() {
        assert!((b.node().yaw - 0.1).abs() < 1e-6, "anchor {}", b.index);
        assert_eq!(b.node().pitch, 0.0);
    }
}

#[test]
fn every_scene_rotates_on_one_finger_drag() {
    let (mut book, _) = full_book();
    let picker = FakePicker::default();
    book.handle_input(&g(GestureInput::TouchStart(touches(&[(0.0, 0.0)]))), &picker);
    let changed = book.handle_input(
        &g(GestureInput::TouchMove(touches(&[(20.0, -10.0)]))),
        &picker,
    );
    assert_eq!(changed, MAX_ANCHORS);
    for b in book.bindings() {
        assert!((b.node().yaw - 0.2).abs() < 1e-6, "anchor {}", b.index);
        assert!((b.node().pitch + 0.1).abs() < 1e-6, "anchor {}", b.index);
        assert_eq!(
            book.input.gesture(b.index).map(|s| s.last),
            Some(Vec2::new(20.0, -10.0))
        );
    }
}

#[test]
fn every_scene_scales_on_one_pinch() {
    let (mut book, _) = full_book();
    let picker = FakePicker::default();
    book.handle_input(&g(GestureInput::TouchStart(touches(&[(0.0, 0.0), (100.0, 0.0)]))), &picker);
    book.handle_input(&g(GestureInput::TouchMove(touches(&[(0.0, 0.0), (150.0, 0.0)]))), &picker);
    for b in book.bindings() {
        assert_eq!(b.node().scale, 1.25);
        assert_eq!(book.input.gesture(b.index).map(|s| s.scale), Some(1.25));
    }
}

#[test]
fn dispatcher_registers_one_entry_per_scene() {
    let (book, _) = full_book();
    let anchors: Vec<u8> = book.input.entries().iter().map(|e| e.anchor).collect();
    assert_eq!(anchors, (0..MAX_ANCHORS as u8).collect::<Vec<_>>());
}
