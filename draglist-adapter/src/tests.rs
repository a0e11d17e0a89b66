use crate::*;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use draglist::{Item, ListController};

fn key(name: &str) -> String {
    name.to_string()
}

fn measured_abc() -> ListController<String> {
    let items = ["A", "B", "C"].map(|n| Item::from(n.to_string()));
    let mut c = ListController::new(items).unwrap();
    c.on_heights_measured([(key("A"), 50.0), (key("B"), 30.0), (key("C"), 40.0)])
        .unwrap();
    c
}

fn linear(duration_ms: u64) -> AnimatorOptions {
    AnimatorOptions::default()
        .with_duration_ms(duration_ms)
        .with_easing(Easing::Linear)
}

#[test]
fn tween_reaches_target_and_stays() {
    let t = Tween::new(0.0, 100.0, 10, 100, Easing::Linear);
    assert_eq!(t.sample(10), 0.0);
    assert_eq!(t.sample(60), 50.0);
    assert_eq!(t.sample(110), 100.0);
    assert_eq!(t.sample(500), 100.0);
    assert!(!t.is_done(109));
    assert!(t.is_done(110));
}

#[test]
fn tween_handles_negative_values() {
    let t = Tween::new(20.0, -20.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50), 0.0);
    assert_eq!(t.sample(100), -20.0);
}

#[test]
fn tween_retarget_continues_from_current_value() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    t.retarget(50, 0.0, 100);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.sample(50), 50.0);
    assert_eq!(t.sample(100), 25.0);
    assert_eq!(t.sample(150), 0.0);
}

#[test]
fn easings_fix_endpoints() {
    for e in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutCubic,
    ] {
        assert_eq!(e.sample(0.0), 0.0);
        assert_eq!(e.sample(1.0), 1.0);
    }
}

#[test]
fn first_target_is_applied_without_animation() {
    let mut a = TweenAnimator::<u32>::new(linear(100));
    a.set_target(&1, 42.0, 0);
    assert_eq!(a.sample(&1, 0), Some(42.0));
    assert!(!a.is_animating(0));
    assert_eq!(a.sample(&2, 0), None);
}

#[test]
fn same_target_does_not_restart_the_tween() {
    let mut a = TweenAnimator::<u32>::new(linear(100));
    a.set_target(&1, 0.0, 0);
    a.set_target(&1, 100.0, 0);
    a.set_target(&1, 100.0, 50);
    assert_eq!(a.tween(&1).unwrap().start_ms, 0);
    assert_eq!(a.sample(&1, 50), Some(50.0));
}

#[test]
fn animator_retain_drops_state() {
    let mut a = TweenAnimator::<u32>::default();
    a.set_target(&1, 0.0, 0);
    a.set_target(&2, 0.0, 0);
    a.retain(&|id: &u32| *id == 2);
    assert_eq!(a.len(), 1);
    assert_eq!(a.sample(&1, 0), None);
}

#[test]
fn frames_start_settled_on_the_initial_layout() {
    let mut list = AnimatedList::new(measured_abc(), linear(100), 0);
    let tops: Vec<_> = list.tick(0).iter().map(|f| f.top).collect();
    assert_eq!(tops, [0.0, 50.0, 80.0]);
    assert!(list.tick(0).iter().all(Frame::is_settled));
    assert!(!list.is_animating(0));
}

#[test]
fn drag_animates_toward_the_live_offset_and_back() {
    let mut list = AnimatedList::new(measured_abc(), linear(100), 0);

    assert!(list.on_drag_start(&key("B"), 200.0, 0));
    assert!(list.on_drag_move(&key("B"), 220.0, 0));
    let b = list.tick(50)[1].clone();
    assert_eq!(b.target, 70.0);
    assert_eq!(b.top, 60.0);
    assert!(b.is_active);
    assert_eq!(b.z_index(), 1);
    assert!(list.is_animating(50));

    let b = list.tick(100)[1].clone();
    assert_eq!(b.top, 70.0);

    assert!(list.on_drag_end(&key("B"), 100));
    let b = list.tick(150)[1].clone();
    assert_eq!(b.target, 50.0);
    assert_eq!(b.top, 60.0);
    assert!(!b.is_active);

    let b = list.tick(200)[1].clone();
    assert_eq!(b.top, 50.0);
    assert!(!list.is_animating(200));
}

#[test]
fn late_moves_after_end_do_not_animate() {
    let mut list = AnimatedList::new(measured_abc(), linear(100), 0);
    list.on_drag_start(&key("A"), 0.0, 0);
    list.on_drag_end(&key("A"), 0);
    assert!(!list.on_drag_move(&key("A"), 300.0, 10));
    assert!(list.tick(10).iter().all(|f| f.target == f.top));
}

#[test]
fn measurements_completing_coverage_animate_from_the_fallback() {
    let items = ["A", "B"].map(|n| Item::from(n.to_string()));
    let mut list = AnimatedList::new(ListController::new(items).unwrap(), linear(100), 0);
    list.on_height_measured(&key("A"), 40.0, 0).unwrap();
    assert_eq!(list.tick(0)[1].top, 0.0);

    list.on_height_measured(&key("B"), 10.0, 0).unwrap();
    let b = list.tick(50)[1].clone();
    assert_eq!(b.target, 40.0);
    assert_eq!(b.top, 20.0);
}

#[test]
fn invalid_height_surfaces_and_keeps_frames() {
    let mut list = AnimatedList::new(measured_abc(), linear(100), 0);
    assert!(list.on_height_measured(&key("A"), -3.0, 0).is_err());
    assert!(list.on_heights_measured([(key("A"), f32::NAN)], 0).is_err());
    let tops: Vec<_> = list.tick(10).iter().map(|f| f.top).collect();
    assert_eq!(tops, [0.0, 50.0, 80.0]);
}

#[test]
fn preview_hook_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let mut list = AnimatedList::new(measured_abc(), linear(100), 0)
        .with_drag_preview_hook(move || {
            seen.fetch_add(1, Ordering::Relaxed);
        });

    assert!(!list.on_drag_start(&key("Z"), 0.0, 0));
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    list.on_drag_start(&key("A"), 0.0, 0);
    list.on_drag_end(&key("A"), 0);
    list.on_drag_start(&key("B"), 0.0, 0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn set_items_forgets_removed_ids() {
    let mut list = AnimatedList::new(measured_abc(), linear(100), 0);
    list.set_items(["C", "A"].map(|n| Item::from(n.to_string())), 0)
        .unwrap();
    assert_eq!(list.animator().len(), 2);
    assert!(list.animator().tween(&key("B")).is_none());

    let frames = list.tick(100);
    let got: Vec<_> = frames.iter().map(|f| (f.id.as_str(), f.top)).collect();
    assert_eq!(got, [("C", 0.0), ("A", 40.0)]);
}

#[test]
fn rejected_set_items_keeps_animation_state() {
    let mut list = AnimatedList::new(measured_abc(), linear(100), 0);
    let dup = ["A", "A"].map(|n| Item::from(n.to_string()));
    assert!(list.set_items(dup, 0).is_err());
    assert_eq!(list.animator().len(), 3);
    assert_eq!(list.list().len(), 3);
}
