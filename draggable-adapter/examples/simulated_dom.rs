// Example: a minimal host that logs every listener and style write the controller makes.
use draggable::{BoundingRect, ClampRect, DragOptions, Point, PointerEvent, PointerPhase, Size};
use draggable_adapter::{Controller, EventKind, Host, ListenerTarget, StyleProperty};

#[derive(Default)]
struct LoggingHost {
    offset: Point,
}

impl Host for LoggingHost {
    type Element = &'static str;

    fn bounding_rect(&self, element: &&'static str) -> BoundingRect {
        let layout = match *element {
            "card" => BoundingRect::new(40.0, 40.0, 200.0, 120.0),
            _ => BoundingRect::new(200.0, 130.0, 30.0, 20.0),
        };
        layout.translate(self.offset)
    }

    fn viewport_size(&self) -> Size {
        Size::new(800.0, 600.0)
    }

    fn add_listeners(&mut self, target: ListenerTarget<'_, &'static str>, events: &[EventKind]) {
        let names: Vec<_> = events.iter().map(|k| k.as_str()).collect();
        println!("add {target:?} {names:?}");
    }

    fn remove_listeners(
        &mut self,
        target: ListenerTarget<'_, &'static str>,
        events: &[EventKind],
    ) {
        let names: Vec<_> = events.iter().map(|k| k.as_str()).collect();
        println!("remove {target:?} {names:?}");
    }

    fn set_style(&mut self, element: &&'static str, property: StyleProperty, value: &str) {
        println!("  {element}.style.{} = {value:?}", property.css_name());
        if *element == "card" && property == StyleProperty::Transform {
            let inner = value.trim_start_matches("translate(").trim_end_matches(')');
            if let Some((x, y)) = inner.split_once(", ") {
                let px = |s: &str| s.trim_end_matches("px").parse().unwrap_or(0.0);
                self.offset = Point::new(px(x), px(y));
            }
        }
    }
}

fn main() {
    // A container box the card must stay inside, e.g. measured by a resize observer.
    let container = ClampRect::new(20.0, 20.0, 620.0, 420.0);
    let options = DragOptions::new()
        .with_visual_feedback(true)
        .with_clamp_rect(Some(container));

    let mut c = Controller::new(LoggingHost::default(), options);
    c.bind_target(Some("card"));
    c.bind_handle(Some("grip"));
    c.attach();

    c.dispatch(&PointerEvent::mouse(PointerPhase::Start, Point::new(210.0, 140.0)));
    c.dispatch(&PointerEvent::mouse(PointerPhase::Move, Point::new(900.0, 140.0)));
    let done = c.dispatch(&PointerEvent::mouse(PointerPhase::End, Point::new(900.0, 140.0)));
    println!("released: {done:?}, prevent_default={}", done.should_prevent_default());

    // The container shrank; the next gesture is clamped against the new box.
    c.configure(options.with_clamp_rect(Some(ClampRect::new(20.0, 20.0, 400.0, 420.0))));
    let touch = [Point::new(500.0, 140.0)];
    c.dispatch(&PointerEvent::touch(PointerPhase::Start, &touch, &touch));
    c.dispatch(&PointerEvent::touch(PointerPhase::End, &[], &touch));
    println!("state: {:?}", c.state());

    c.detach();
}
