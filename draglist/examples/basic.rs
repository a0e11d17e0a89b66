// Example: measure three items, drag the middle one, release it.
use draglist::{Item, ListController};

fn print_targets(label: &str, c: &ListController<&'static str>) {
    let row: Vec<String> = c
        .targets()
        .iter()
        .map(|t| format!("{}={}{}", t.id, t.top, if t.is_active { "*" } else { "" }))
        .collect();
    println!("{label:>12}: {}", row.join(" "));
}

fn main() {
    let mut c = ListController::new(["A", "B", "C"].map(Item::from)).expect("ids are unique");
    print_targets("unmeasured", &c);

    // The render layer reports heights as boxes settle; nothing moves until all are known.
    c.on_height_measured(&"A", 50.0).expect("valid height");
    c.on_height_measured(&"C", 40.0).expect("valid height");
    print_targets("partial", &c);
    c.on_height_measured(&"B", 30.0).expect("valid height");
    print_targets("measured", &c);

    c.on_drag_start(&"B", 200.0);
    c.on_drag_move(&"B", 230.0);
    c.on_drag_move(&"B", 220.0);
    print_targets("dragging", &c);

    c.on_drag_end(&"B");
    // A pointer event racing the end is a no-op.
    c.on_drag_move(&"B", 400.0);
    print_targets("released", &c);
}
