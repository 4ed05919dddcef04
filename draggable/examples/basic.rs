// Example: a headless gesture clamped to the viewport, rendered by printing.
use draggable::{
    BoundingRect, DragOptions, DragTracker, Geometry, Point, PointerEvent, PointerPhase, Size,
    css_translate,
};

fn main() {
    let layout = BoundingRect::new(700.0, 40.0, 240.0, 120.0);
    let viewport = Size::new(1024.0, 768.0);
    let mut t = DragTracker::new(DragOptions::new().with_clamp_to_viewport(true));

    // Two gestures; the second tries to push the box past the right edge.
    for (start, end) in [
        (Point::new(720.0, 60.0), Point::new(760.0, 90.0)),
        (Point::new(780.0, 90.0), Point::new(1400.0, 90.0)),
    ] {
        let geometry = Geometry {
            target: Some(layout.translate(t.delta())),
            viewport,
        };
        t.handle_event(&PointerEvent::mouse(PointerPhase::Start, start), &geometry);
        println!("limits={:?}", t.limits());

        let mid = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        for at in [mid, end] {
            t.handle_event(&PointerEvent::mouse(PointerPhase::Move, at), &geometry);
            println!("  move -> {}", css_translate(t.delta()));
        }
        t.handle_event(&PointerEvent::mouse(PointerPhase::End, end), &geometry);
        println!("committed={:?} props={:?}", t.committed(), t.target_props());
    }

    t.reset();
    println!("after reset: {}", css_translate(t.delta()));
}
