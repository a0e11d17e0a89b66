use draglist::{Item, ListController};
use draglist_adapter::{AnimatedList, AnimatorOptions, Easing};

fn main() {
    // Example: a frame loop driving the animated list while a drag happens.
    //
    // An adapter would:
    // - forward measurement and pointer events with the current clock
    // - call tick(now_ms) every frame and draw each frame's `top` as a transform
    // - draw the active item above the others (z_index)
    let controller =
        ListController::new(["a", "b", "c", "d"].map(Item::from)).expect("ids are unique");
    let options = AnimatorOptions::default()
        .with_duration_ms(160)
        .with_easing(Easing::EaseOutCubic);
    let mut list = AnimatedList::new(controller, options, 0)
        .with_drag_preview_hook(|| println!("drag preview suppressed"));

    list.on_heights_measured([("a", 40.0), ("b", 60.0), ("c", 30.0), ("d", 50.0)], 0)
        .expect("valid heights");

    let mut now_ms = 0u64;
    let mut pointer_y = 100.0f32;
    list.on_drag_start(&"b", pointer_y, now_ms);
    for step in 0..30 {
        now_ms += 16;
        if step < 10 {
            pointer_y += 7.0;
            list.on_drag_move(&"b", pointer_y, now_ms);
        } else if step == 10 {
            list.on_drag_end(&"b", now_ms);
        }

        let frames = list.tick(now_ms);
        if step % 5 == 0 {
            let row: Vec<String> = frames
                .iter()
                .map(|f| format!("{}:{:.1}->{:.1}(z{})", f.id, f.top, f.target, f.z_index()))
                .collect();
            println!("t={now_ms:>3} {}", row.join(" "));
        }
    }

    println!("settled={}", !list.is_animating(now_ms));
}
