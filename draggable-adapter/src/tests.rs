use crate::*;

use draggable::{
    BoundingRect, ClampRect, DragOptions, Point, PointerEvent, PointerPhase, Size, Transition,
};
use std::collections::HashMap;
use std::string::String;
use std::vec::Vec;

const VIEWPORT: Size = Size::new(1024.0, 768.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum El {
    Main,
    Handle,
    Other,
}

/// An in-memory document: laid-out boxes, inline styles, and registered listeners.
///
/// `bounding_rect` reports the layout box shifted by the element's inline `transform`, so clamp
/// behavior can be observed the way a browser would report it.
#[derive(Debug)]
struct FakeDom {
    viewport: Size,
    layout: HashMap<El, BoundingRect>,
    styles: HashMap<(El, StyleProperty), String>,
    // `None` is the document.
    listeners: Vec<(Option<El>, EventKind)>,
}

impl FakeDom {
    fn new() -> Self {
        let mut layout = HashMap::new();
        layout.insert(El::Main, BoundingRect::new(11.0, 11.0, 320.0, 180.0));
        layout.insert(El::Handle, BoundingRect::new(300.0, 160.0, 20.0, 20.0));
        layout.insert(El::Other, BoundingRect::new(0.0, 0.0, 10.0, 10.0));
        Self {
            viewport: VIEWPORT,
            layout,
            styles: HashMap::new(),
            listeners: Vec::new(),
        }
    }

    fn with_main(mut self, rect: BoundingRect) -> Self {
        self.layout.insert(El::Main, rect);
        self
    }

    fn style(&self, el: El, property: StyleProperty) -> &str {
        self.styles
            .get(&(el, property))
            .map_or("", String::as_str)
    }

    fn listener_count(&self, on: Option<El>) -> usize {
        self.listeners.iter().filter(|(t, _)| *t == on).count()
    }

    fn offset(&self, el: El) -> Point {
        parse_translate(self.style(el, StyleProperty::Transform)).unwrap_or(Point::ZERO)
    }
}

fn parse_translate(s: &str) -> Option<Point> {
    let inner = s.strip_prefix("translate(")?.strip_suffix(')')?;
    let (x, y) = inner.split_once(", ")?;
    Some(Point::new(
        x.strip_suffix("px")?.parse().ok()?,
        y.strip_suffix("px")?.parse().ok()?,
    ))
}

fn listener_owner(target: ListenerTarget<'_, El>) -> Option<El> {
    match target {
        ListenerTarget::Element(el) => Some(*el),
        ListenerTarget::Document => None,
    }
}

impl Host for FakeDom {
    type Element = El;

    fn bounding_rect(&self, element: &El) -> BoundingRect {
        let layout = self.layout.get(element).copied().unwrap_or_default();
        layout.translate(self.offset(*element))
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn add_listeners(&mut self, target: ListenerTarget<'_, El>, events: &[EventKind]) {
        let on = listener_owner(target);
        for &kind in events {
            self.listeners.push((on, kind));
        }
    }

    fn remove_listeners(&mut self, target: ListenerTarget<'_, El>, events: &[EventKind]) {
        let on = listener_owner(target);
        for &kind in events {
            if let Some(i) = self.listeners.iter().position(|l| *l == (on, kind)) {
                self.listeners.remove(i);
            }
        }
    }

    fn set_style(&mut self, element: &El, property: StyleProperty, value: &str) {
        if value.is_empty() {
            self.styles.remove(&(*element, property));
        } else {
            self.styles.insert((*element, property), value.into());
        }
    }
}

fn mount(dom: &mut FakeDom, options: DragOptions) -> Controller<&mut FakeDom> {
    let mut c = Controller::new(dom, options);
    c.bind_target(Some(El::Main));
    c.bind_handle(Some(El::Handle));
    c.attach();
    c
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn press<H: Host>(c: &mut Controller<H>, at: Point) -> Transition {
    c.dispatch(&PointerEvent::mouse(PointerPhase::Start, at))
}

fn move_to<H: Host>(c: &mut Controller<H>, at: Point) -> Transition {
    c.dispatch(&PointerEvent::mouse(PointerPhase::Move, at))
}

fn release<H: Host>(c: &mut Controller<H>, at: Point) -> Transition {
    c.dispatch(&PointerEvent::mouse(PointerPhase::End, at))
}

fn drag<H: Host>(c: &mut Controller<H>, start: Point, by: Point) {
    press(c, start);
    move_to(c, start + by);
    release(c, start + by);
}

fn touch_drag<H: Host>(c: &mut Controller<H>, start: Point, by: Point) {
    let begin = [start];
    let end = [start + by];
    c.dispatch(&PointerEvent::touch(PointerPhase::Start, &begin, &begin));
    c.dispatch(&PointerEvent::touch(PointerPhase::Move, &end, &end));
    c.dispatch(&PointerEvent::touch(PointerPhase::End, &[], &end));
}

fn feedback() -> DragOptions {
    DragOptions::new().with_visual_feedback(true)
}

#[test]
fn target_is_not_grabbed_before_press() {
    let mut dom = FakeDom::new();
    let c = mount(&mut dom, DragOptions::default());
    assert_eq!(c.target_props().aria_grabbed, None);
    assert!(!c.is_dragging());
    assert_eq!(c.delta(), Point::ZERO);
}

#[test]
fn press_marks_target_grabbed_and_release_clears_it() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());

    assert_eq!(press(&mut c, p(0.0, 0.0)), Transition::Started);
    assert_eq!(c.target_props().aria_grabbed, Some(true));

    assert_eq!(release(&mut c, p(0.0, 0.0)), Transition::Released(Point::ZERO));
    assert_eq!(c.target_props().aria_grabbed, None);
}

#[test]
fn drag_reports_delta_and_accumulates() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, DragOptions::default());

    drag(&mut c, p(10.0, 10.0), p(5.0, 5.0));
    assert_eq!(c.delta(), p(5.0, 5.0));

    drag(&mut c, p(15.0, 15.0), p(5.0, 5.0));
    assert_eq!(c.delta(), p(10.0, 10.0));
}

#[test]
fn feedback_writes_transform_for_mouse_and_touch() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());
    drag(&mut c, p(3.0, 3.0), p(10.0, 15.0));
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(10px, 15px)"
    );

    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());
    touch_drag(&mut c, p(3.0, 3.0), p(10.0, 15.0));
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(10px, 15px)"
    );
    assert_eq!(c.delta(), p(10.0, 15.0));
}

#[test]
fn transform_is_written_on_every_move() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(0px, 0px)"
    );

    press(&mut c, p(0.0, 0.0));
    move_to(&mut c, p(4.0, 0.0));
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(4px, 0px)"
    );
    move_to(&mut c, p(4.5, -2.0));
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(4.5px, -2px)"
    );
}

#[test]
fn cursor_is_grab_when_idle_and_grabbing_while_dragging() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "grab");

    press(&mut c, p(1.0, 1.0));
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "grabbing");

    release(&mut c, p(1.0, 1.0));
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "grab");
}

#[test]
fn will_change_spans_the_gesture() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());
    assert_eq!(c.host().style(El::Main, StyleProperty::WillChange), "");

    press(&mut c, p(3.0, 3.0));
    assert_eq!(
        c.host().style(El::Main, StyleProperty::WillChange),
        "transform"
    );

    move_to(&mut c, p(13.0, 18.0));
    release(&mut c, p(13.0, 18.0));
    assert_eq!(c.host().style(El::Main, StyleProperty::WillChange), "");
}

#[test]
fn no_styles_are_written_without_feedback() {
    let mut dom = FakeDom::new();
    {
        let mut c = mount(&mut dom, DragOptions::default());
        drag(&mut c, p(3.0, 3.0), p(10.0, 15.0));
        assert_eq!(c.delta(), p(10.0, 15.0));
    }
    assert!(dom.styles.is_empty());
}

#[test]
fn viewport_clamp_stops_at_edge() {
    // Flush right: left = 1024 - 180.
    let mut dom = FakeDom::new().with_main(BoundingRect::new(844.0, 11.0, 180.0, 100.0));
    let mut c = mount(&mut dom, feedback().with_clamp_to_viewport(true));

    drag(&mut c, p(849.0, 16.0), p(5.0, 5.0));

    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(0px, 5px)"
    );
}

#[test]
fn viewport_clamp_holds_over_several_moves() {
    let mut dom = FakeDom::new().with_main(BoundingRect::new(794.0, 11.0, 180.0, 100.0));
    let mut c = mount(&mut dom, feedback().with_clamp_to_viewport(true));
    let start = p(799.0, 16.0);

    press(&mut c, start);
    for dx in [5.0, 15.0, 30.0, 55.0] {
        move_to(&mut c, start + p(dx, 1.0));
    }

    let r = c.host().bounding_rect(&El::Main);
    assert_eq!(r.left, VIEWPORT.width - r.width);
}

#[test]
fn viewport_clamp_holds_over_repeated_gestures() {
    let mut dom = FakeDom::new().with_main(BoundingRect::new(794.0, 11.0, 180.0, 100.0));
    let mut c = mount(&mut dom, feedback().with_clamp_to_viewport(true));
    let start = p(799.0, 16.0);

    drag(&mut c, start, p(15.0, 1.0));
    drag(&mut c, start + p(15.0, 1.0), p(50.0, 0.0));

    let r = c.host().bounding_rect(&El::Main);
    assert_eq!(r.left, VIEWPORT.width - r.width);
}

#[test]
fn rect_clamp_stops_at_rect_edges() {
    let rect = ClampRect::new(11.0, 5.0, VIEWPORT.width - 11.0, VIEWPORT.height - 13.0);
    let mut dom = FakeDom::new().with_main(BoundingRect::new(20.0, 11.0, 180.0, 100.0));
    let mut c = mount(&mut dom, feedback().with_clamp_rect(Some(rect)));

    drag(&mut c, p(25.0, 16.0), p(-50.0, -90.0));

    let r = c.host().bounding_rect(&El::Main);
    assert_eq!((r.left, r.top), (rect.left, rect.top));
}

#[test]
fn rect_clamp_holds_over_repeated_gestures() {
    let rect = ClampRect::new(11.0, 5.0, VIEWPORT.width - 11.0, VIEWPORT.height - 13.0);
    let mut dom = FakeDom::new().with_main(BoundingRect::new(794.0, 11.0, 180.0, 100.0));
    let mut c = mount(&mut dom, feedback().with_clamp_rect(Some(rect)));
    let start = p(799.0, 16.0);

    drag(&mut c, start, p(15.0, 1.0));
    drag(&mut c, start + p(15.0, 1.0), p(50.0, 0.0));

    let r = c.host().bounding_rect(&El::Main);
    assert_eq!(r.left, rect.right - r.width);
}

#[test]
fn state_snapshot_drives_render_callbacks() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback().with_clamp_to_viewport(true));

    drag(&mut c, Point::ZERO, p(5.0, 5.0));

    let state = c.state();
    assert_eq!(state.delta, p(5.0, 5.0));
    assert!(!state.dragging);
    assert_eq!(state.target_props().aria_grabbed, None);
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(5px, 5px)"
    );
}

#[test]
fn reset_zeroes_transform_and_next_drag_starts_from_origin() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());
    drag(&mut c, p(3.0, 5.0), p(15.0, 20.0));

    c.reset();
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(0px, 0px)"
    );

    drag(&mut c, p(3.0, 5.0), p(15.0, 20.0));
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(15px, 20px)"
    );
}

#[test]
fn document_listeners_exist_only_during_gesture() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, DragOptions::default());
    assert_eq!(c.host().listener_count(Some(El::Handle)), HANDLE_EVENTS.len());
    assert_eq!(c.host().listener_count(None), 0);

    press(&mut c, p(0.0, 0.0));
    assert_eq!(c.host().listener_count(None), GLOBAL_EVENTS.len());

    release(&mut c, p(0.0, 0.0));
    assert_eq!(c.host().listener_count(None), 0);
    assert_eq!(c.host().listener_count(Some(El::Handle)), HANDLE_EVENTS.len());
}

#[test]
fn events_after_release_are_ignored() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, DragOptions::default());

    assert_eq!(move_to(&mut c, p(9.0, 9.0)), Transition::Ignored);

    drag(&mut c, p(0.0, 0.0), p(5.0, 5.0));
    assert_eq!(move_to(&mut c, p(50.0, 50.0)), Transition::Ignored);
    assert_eq!(release(&mut c, p(50.0, 50.0)), Transition::Ignored);
    assert_eq!(c.delta(), p(5.0, 5.0));
}

#[test]
fn second_touch_during_gesture_is_ignored() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, DragOptions::default());
    press(&mut c, p(10.0, 10.0));

    let other = [p(300.0, 300.0)];
    let t = c.dispatch(&PointerEvent::touch(PointerPhase::Start, &other, &other));
    assert_eq!(t, Transition::Ignored);

    assert_eq!(release(&mut c, p(12.0, 11.0)), Transition::Released(p(2.0, 1.0)));
    assert_eq!(c.host().listener_count(None), 0);
}

#[test]
fn handle_falls_back_to_target() {
    let mut dom = FakeDom::new();
    let mut c = Controller::new(&mut dom, feedback());
    c.bind_target(Some(El::Main));
    c.attach();

    assert_eq!(c.host().listener_count(Some(El::Main)), HANDLE_EVENTS.len());
    assert_eq!(c.host().style(El::Main, StyleProperty::Cursor), "grab");

    drag(&mut c, p(0.0, 0.0), p(7.0, 8.0));
    assert_eq!(c.delta(), p(7.0, 8.0));
}

#[test]
fn rebinding_handle_moves_press_listeners() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());

    c.bind_handle(Some(El::Other));
    assert_eq!(c.host().listener_count(Some(El::Handle)), 0);
    assert_eq!(c.host().listener_count(Some(El::Other)), HANDLE_EVENTS.len());
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "");
    assert_eq!(c.host().style(El::Other, StyleProperty::Cursor), "grab");

    c.bind_handle(None);
    assert_eq!(c.host().listener_count(Some(El::Other)), 0);
    assert_eq!(c.host().listener_count(Some(El::Main)), HANDLE_EVENTS.len());
}

#[test]
fn unbound_refs_register_nothing() {
    let mut dom = FakeDom::new();
    let mut c = Controller::new(&mut dom, feedback());
    c.attach();

    assert!(c.host().listeners.is_empty());
    assert_eq!(press(&mut c, p(0.0, 0.0)), Transition::Ignored);
    assert!(!c.is_dragging());

    c.detach();
    c.detach();
    assert!(c.host().listeners.is_empty());

    c.attach();
    c.bind_target(Some(El::Main));
    assert_eq!(c.host().listener_count(Some(El::Main)), HANDLE_EVENTS.len());
}

#[test]
fn gesture_runs_unclamped_when_target_is_unbound_at_press() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback().with_clamp_to_viewport(true));
    c.bind_target(None);

    assert_eq!(press(&mut c, p(10.0, 10.0)), Transition::Started);
    assert_eq!(c.tracker().limits(), None);
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "grabbing");
    assert_eq!(c.host().style(El::Main, StyleProperty::WillChange), "");

    move_to(&mut c, p(-4990.0, 10.0));
    release(&mut c, p(-4990.0, 10.0));
    assert_eq!(c.delta(), p(-5000.0, 0.0));
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(0px, 0px)"
    );
}

#[test]
fn detach_mid_gesture_removes_every_listener() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, feedback());
    drag(&mut c, p(0.0, 0.0), p(4.0, 4.0));
    press(&mut c, p(0.0, 0.0));
    move_to(&mut c, p(30.0, 30.0));

    c.detach();
    assert!(c.host().listeners.is_empty());
    assert!(!c.is_attached());
    assert!(!c.is_dragging());
    assert_eq!(c.delta(), p(4.0, 4.0));
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "");
    assert_eq!(c.host().style(El::Main, StyleProperty::WillChange), "");

    assert_eq!(move_to(&mut c, p(60.0, 60.0)), Transition::Ignored);
}

#[test]
fn dropping_controller_mid_gesture_detaches() {
    let mut dom = FakeDom::new();
    {
        let mut c = mount(&mut dom, DragOptions::default());
        press(&mut c, p(0.0, 0.0));
        assert_eq!(c.host().listener_count(None), GLOBAL_EVENTS.len());
    }
    assert!(dom.listeners.is_empty());
}

#[test]
fn configure_applies_new_options_without_rebinding() {
    let rect = ClampRect::new(11.0, 5.0, VIEWPORT.width - 11.0, VIEWPORT.height - 13.0);
    let mut dom = FakeDom::new().with_main(BoundingRect::new(20.0, 11.0, 180.0, 100.0));
    let mut c = mount(&mut dom, DragOptions::default());

    c.configure(DragOptions::new().with_clamp_rect(Some(rect)));
    assert_eq!(c.host().listener_count(Some(El::Handle)), HANDLE_EVENTS.len());

    drag(&mut c, p(25.0, 16.0), p(-50.0, -90.0));
    assert_eq!(c.delta(), p(-9.0, -6.0));
}

#[test]
fn configure_toggles_visual_feedback() {
    let mut dom = FakeDom::new();
    let mut c = mount(&mut dom, DragOptions::default());
    drag(&mut c, p(0.0, 0.0), p(2.0, 3.0));
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "");

    c.configure(feedback());
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "grab");
    assert_eq!(
        c.host().style(El::Main, StyleProperty::Transform),
        "translate(2px, 3px)"
    );

    press(&mut c, p(0.0, 0.0));
    c.configure(DragOptions::default());
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "");
    assert_eq!(c.host().style(El::Main, StyleProperty::WillChange), "");
    release(&mut c, p(0.0, 0.0));
    assert_eq!(c.host().style(El::Handle, StyleProperty::Cursor), "");
}

#[test]
fn event_kinds_map_phases_and_passivity() {
    use draggable::PointerSource;

    assert_eq!(
        EventKind::new(PointerPhase::Start, PointerSource::Touch),
        EventKind::TouchStart
    );
    assert_eq!(EventKind::new(PointerPhase::End, PointerSource::Mouse).as_str(), "mouseup");
    assert!(EventKind::MouseMove.is_passive());
    assert!(EventKind::TouchMove.is_passive());
    assert!(!EventKind::TouchEnd.is_passive());
    assert!(GLOBAL_EVENTS.iter().all(|k| k.is_global()));
    assert!(HANDLE_EVENTS.iter().all(|k| !k.is_global()));
    assert_eq!(StyleProperty::WillChange.css_name(), "will-change");
}
