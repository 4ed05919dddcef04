use core::fmt;

use draggable::{
    BoundingRect, Cursor, DragOptions, DragState, DragTracker, Feedback, Measure, Point,
    PointerEvent, Size, TargetProps, Transition, WillChange, css_translate,
};

use crate::{
    ElementRef, EventKind, GLOBAL_EVENTS, HANDLE_EVENTS, Host, ListenerTarget, StyleProperty,
};

/// A framework-neutral controller that wraps a `draggable::DragTracker` and owns the listener
/// and style side effects around it.
///
/// Adapters drive it by:
/// - binding the target (and optionally a distinct handle) with `bind_target`/`bind_handle`
/// - calling `attach` on mount and `detach` on unmount (dropping the controller also detaches)
/// - forwarding every event from the listeners it registered to `dispatch`
/// - calling `configure` whenever the caller's options change
///
/// Listeners on the handle (or the target, if no handle is bound) live for as long as the
/// controller is attached. Document listeners exist only while a gesture is active.
pub struct Controller<H: Host> {
    host: H,
    tracker: DragTracker,
    target: ElementRef<H::Element>,
    handle: ElementRef<H::Element>,
    attached: bool,
    // Element carrying the press listeners (and the cursor, with feedback on).
    listening_on: Option<H::Element>,
    global_listeners: bool,
}

impl<H: Host> Controller<H> {
    pub fn new(host: H, options: DragOptions) -> Self {
        Self {
            host,
            tracker: DragTracker::new(options),
            target: ElementRef::new(),
            handle: ElementRef::new(),
            attached: false,
            listening_on: None,
            global_listeners: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    pub fn options(&self) -> &DragOptions {
        self.tracker.options()
    }

    pub fn target_ref(&self) -> &ElementRef<H::Element> {
        &self.target
    }

    pub fn handle_ref(&self) -> &ElementRef<H::Element> {
        &self.handle
    }

    /// Binds (or with `None`, unbinds) the element driven by the delta.
    pub fn bind_target(&mut self, element: Option<H::Element>) {
        match element {
            Some(element) => self.target.bind(element),
            None => self.target.unbind(),
        };
        self.sync_handle_listeners();
    }

    /// Binds (or with `None`, unbinds) a distinct press handle. Without one, presses are taken
    /// from the target.
    pub fn bind_handle(&mut self, element: Option<H::Element>) {
        match element {
            Some(element) => self.handle.bind(element),
            None => self.handle.unbind(),
        };
        self.sync_handle_listeners();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Registers the press listeners and applies the idle feedback.
    ///
    /// With neither a handle nor a target bound this registers nothing; binding one later
    /// registers the listeners then.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        adebug!("Controller::attach");
        self.attached = true;
        self.sync_handle_listeners();
        self.render_transform();
    }

    /// Removes every listener this controller registered and drops an active gesture without
    /// committing it. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if !self.attached && !self.global_listeners && self.listening_on.is_none() {
            return;
        }
        adebug!(dragging = self.tracker.is_dragging(), "Controller::detach");
        let was_dragging = self.tracker.is_dragging();
        self.attached = false;
        self.remove_global_listeners();
        self.tracker.abandon();
        if was_dragging {
            let delta = self.tracker.delta();
            if let Some(mut fx) = self.feedback() {
                fx.transform(delta);
                fx.will_change(WillChange::Auto);
            }
        }
        self.sync_handle_listeners();
    }

    /// Replaces the configuration.
    ///
    /// Handlers read options from the tracker on every event, so no listener re-registration is
    /// needed. Turning visual feedback on applies it for the current state; turning it off clears
    /// the cursor and `will-change` hint.
    pub fn configure(&mut self, options: DragOptions) {
        let was_enabled = self.tracker.options().apply_visual_feedback;
        self.tracker.set_options(options);
        match (was_enabled, options.apply_visual_feedback) {
            (false, true) => {
                let dragging = self.tracker.is_dragging();
                let delta = self.tracker.delta();
                if let Some(mut fx) = self.feedback() {
                    fx.cursor(Cursor::for_dragging(dragging));
                    fx.will_change(WillChange::for_dragging(dragging));
                    fx.transform(delta);
                }
            }
            (true, false) => {
                let mut fx = self.styles();
                fx.cursor(Cursor::Unset);
                fx.will_change(WillChange::Auto);
            }
            _ => {}
        }
    }

    /// Feeds a host event from one of the registered listeners.
    ///
    /// Events of a kind that has no registered listener right now are ignored, so a late move or
    /// release from an already finished gesture cannot touch the state.
    pub fn dispatch(&mut self, event: &PointerEvent<'_>) -> Transition {
        let kind = EventKind::new(event.phase(), event.source());
        let listening = if kind.is_global() {
            self.global_listeners
        } else {
            self.listening_on.is_some()
        };
        if !listening {
            atrace!(event = kind.as_str(), "no listener registered; event ignored");
            return Transition::Ignored;
        }

        let measure = HostMeasure {
            host: &self.host,
            target: self.target.get(),
        };
        let transition = self.tracker.handle_event(event, &measure);
        match transition {
            Transition::Ignored => {}
            Transition::Started => {
                self.add_global_listeners();
                if let Some(mut fx) = self.feedback() {
                    fx.will_change(WillChange::Transform);
                    fx.cursor(Cursor::Grabbing);
                }
            }
            Transition::Moved(delta) => {
                if let Some(mut fx) = self.feedback() {
                    fx.transform(delta);
                }
            }
            Transition::Released(delta) => {
                self.remove_global_listeners();
                if let Some(mut fx) = self.feedback() {
                    fx.transform(delta);
                    fx.will_change(WillChange::Auto);
                    fx.cursor(Cursor::Grab);
                }
            }
        }
        transition
    }

    /// Zeroes the live and committed offsets. Meant to be called while idle.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.render_transform();
    }

    pub fn delta(&self) -> Point {
        self.tracker.delta()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn target_props(&self) -> TargetProps {
        self.tracker.target_props()
    }

    pub fn state(&self) -> DragState {
        self.tracker.state()
    }

    fn sync_handle_listeners(&mut self) {
        let desired = if self.attached {
            self.handle.get().or(self.target.get()).cloned()
        } else {
            None
        };
        if desired == self.listening_on {
            return;
        }

        if self.listening_on.is_some() {
            if let Some(mut fx) = self.feedback() {
                fx.cursor(Cursor::Unset);
            }
        }
        if let Some(old) = self.listening_on.take() {
            self.host.remove_listeners(ListenerTarget::Element(&old), &HANDLE_EVENTS);
        }

        if let Some(new) = desired {
            atrace!("press listeners registered");
            self.host.add_listeners(ListenerTarget::Element(&new), &HANDLE_EVENTS);
            self.listening_on = Some(new);
            let dragging = self.tracker.is_dragging();
            if let Some(mut fx) = self.feedback() {
                fx.cursor(Cursor::for_dragging(dragging));
            }
        }
    }

    fn add_global_listeners(&mut self) {
        if self.global_listeners {
            return;
        }
        self.host.add_listeners(ListenerTarget::Document, &GLOBAL_EVENTS);
        self.global_listeners = true;
    }

    fn remove_global_listeners(&mut self) {
        if !self.global_listeners {
            return;
        }
        self.host.remove_listeners(ListenerTarget::Document, &GLOBAL_EVENTS);
        self.global_listeners = false;
    }

    fn render_transform(&mut self) {
        let delta = self.tracker.delta();
        if let Some(mut fx) = self.feedback() {
            fx.transform(delta);
        }
    }

    fn feedback(&mut self) -> Option<ElementStyles<'_, H>> {
        if !self.tracker.options().apply_visual_feedback {
            return None;
        }
        Some(self.styles())
    }

    fn styles(&mut self) -> ElementStyles<'_, H> {
        ElementStyles {
            host: &mut self.host,
            target: self.target.get(),
            handle: self.listening_on.as_ref(),
        }
    }
}

impl<H: Host> Drop for Controller<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: Host> fmt::Debug for Controller<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("tracker", &self.tracker)
            .field("attached", &self.attached)
            .field("target_bound", &self.target.is_bound())
            .field("handle_bound", &self.handle.is_bound())
            .field("global_listeners", &self.global_listeners)
            .finish_non_exhaustive()
    }
}

struct HostMeasure<'a, H: Host> {
    host: &'a H,
    target: Option<&'a H::Element>,
}

impl<H: Host> Measure for HostMeasure<'_, H> {
    fn target_rect(&self) -> Option<BoundingRect> {
        self.target.map(|target| self.host.bounding_rect(target))
    }

    fn viewport_size(&self) -> Size {
        self.host.viewport_size()
    }
}

/// Inline-style rendering of drag feedback: cursor on the handle, `will-change` and transform on
/// the target. Writes to an unbound element are skipped.
struct ElementStyles<'a, H: Host> {
    host: &'a mut H,
    target: Option<&'a H::Element>,
    handle: Option<&'a H::Element>,
}

impl<H: Host> Feedback for ElementStyles<'_, H> {
    fn cursor(&mut self, cursor: Cursor) {
        if let Some(handle) = self.handle {
            self.host.set_style(handle, StyleProperty::Cursor, cursor.as_css());
        }
    }

    fn will_change(&mut self, hint: WillChange) {
        if let Some(target) = self.target {
            self.host.set_style(target, StyleProperty::WillChange, hint.as_css());
        }
    }

    fn transform(&mut self, delta: Point) {
        if let Some(target) = self.target {
            self.host.set_style(target, StyleProperty::Transform, &css_translate(delta));
        }
    }
}
