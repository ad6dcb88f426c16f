//! Frame demo: Lay out a small dialog twice and print the resulting bounds.
//!
//! Run with `RUST_LOG=cursor_layout=trace` to see push/pop events.

use cursor_layout::{ElementId, LayoutManager, LayoutType, Margin, Placement, Size};
use tracing_subscriber::EnvFilter;

const DIALOG: ElementId = ElementId(0);
const TITLE: ElementId = ElementId(1);
const BODY: ElementId = ElementId(2);
const BUTTONS: ElementId = ElementId(3);
const OK: ElementId = ElementId(4);
const CANCEL: ElementId = ElementId(5);
const BADGE: ElementId = ElementId(6);

fn frame(layout: &mut LayoutManager) -> Result<(), cursor_layout::LayoutError> {
    layout.begin_frame();

    layout.push_layout(LayoutType::Vertical, DIALOG);
    layout.set_group_padding(2.0, 2.0, 2.0, 2.0);
    layout.set_group_gravity(0.5, 0.0);

    layout.place(TITLE, Size::new(120.0, 16.0));
    layout.place_with(BODY, Size::new(200.0, 60.0), &Placement::new().margin(Margin::uniform(4.0)));

    layout.push_layout(LayoutType::Horizontal, BUTTONS);
    layout.place(OK, Size::new(48.0, 20.0));
    layout.place(CANCEL, Size::new(64.0, 20.0));
    layout.end_layout();

    layout.push_layout(LayoutType::Overlay, BADGE);
    layout.set_group_size(24.0, 24.0);
    layout.end_layout();

    layout.end_layout();
    let root = layout.end_frame()?;
    println!("root: {root:?}");
    Ok(())
}

fn main() -> Result<(), cursor_layout::LayoutError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut layout = LayoutManager::new();
    layout.set_viewport(640.0, 480.0);

    println!("Frame 1 (nothing known yet)");
    println!("===========================");
    frame(&mut layout)?;
    print_bounds(&layout);
    println!();

    println!("Frame 2 (centered against last frame's sizes)");
    println!("=============================================");
    frame(&mut layout)?;
    print_bounds(&layout);
    println!();

    println!("{}", layout.dump());
    Ok(())
}

fn print_bounds(layout: &LayoutManager) {
    for (name, id) in [
        ("dialog", DIALOG),
        ("title", TITLE),
        ("body", BODY),
        ("buttons", BUTTONS),
        ("ok", OK),
        ("cancel", CANCEL),
        ("badge", BADGE),
    ] {
        match layout.lookup(id) {
            Some(bound) => println!("{name:>8}: {bound:?}"),
            None => println!("{name:>8}: <not laid out>"),
        }
    }
}
