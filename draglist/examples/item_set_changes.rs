// Example: reorder, grow and shrink the item set while keeping measurements by id.
use draglist::{Item, ListController, ListOptions};

fn main() {
    let items = (0..5u32).map(|i| Item::new(i, format!("row {i}")));
    let mut c = ListController::with_options(
        items,
        ListOptions::new()
            .with_gap(8.0)
            .with_on_change(Some(|c: &ListController<u32, String>| {
                println!("changed: total_height={}", c.total_height());
            })),
    )
    .expect("ids are unique");

    c.batch_update(|c| {
        for i in 0..5u32 {
            c.on_height_measured(&i, 20.0 + i as f32 * 10.0)
                .expect("valid height");
        }
    });

    // A pure reorder relays out immediately: every id is already measured.
    c.set_items((0..5u32).rev().map(|i| Item::new(i, format!("row {i}"))))
        .expect("ids are unique");
    println!("reordered: {:?}", c.targets());

    // A new id keeps the previous layout in effect until it is measured.
    c.set_items((0..6u32).map(|i| Item::new(i, format!("row {i}"))))
        .expect("ids are unique");
    println!("covered={} targets={:?}", c.is_covered(), c.targets());
    c.on_height_measured(&5, 12.0).expect("valid height");
    println!("covered={} targets={:?}", c.is_covered(), c.targets());

    let err = c
        .set_items([Item::new(1, String::new()), Item::new(1, String::new())])
        .unwrap_err();
    println!("rejected: {err}");
}
