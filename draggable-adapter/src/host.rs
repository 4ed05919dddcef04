use draggable::{BoundingRect, PointerPhase, PointerSource, Size};

/// Host event types the controller listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    MouseDown,
    TouchStart,
    MouseMove,
    TouchMove,
    MouseUp,
    TouchEnd,
}

/// Registered on the handle for the controller's whole attached lifetime.
pub const HANDLE_EVENTS: [EventKind; 2] = [EventKind::MouseDown, EventKind::TouchStart];

/// Registered on the document only while a gesture is active.
pub const GLOBAL_EVENTS: [EventKind; 4] = [
    EventKind::MouseMove,
    EventKind::TouchMove,
    EventKind::MouseUp,
    EventKind::TouchEnd,
];

impl EventKind {
    pub fn new(phase: PointerPhase, source: PointerSource) -> Self {
        match (phase, source) {
            (PointerPhase::Start, PointerSource::Mouse) => Self::MouseDown,
            (PointerPhase::Start, PointerSource::Touch) => Self::TouchStart,
            (PointerPhase::Move, PointerSource::Mouse) => Self::MouseMove,
            (PointerPhase::Move, PointerSource::Touch) => Self::TouchMove,
            (PointerPhase::End, PointerSource::Mouse) => Self::MouseUp,
            (PointerPhase::End, PointerSource::Touch) => Self::TouchEnd,
        }
    }

    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::TouchStart => "touchstart",
            Self::MouseMove => "mousemove",
            Self::TouchMove => "touchmove",
            Self::MouseUp => "mouseup",
            Self::TouchEnd => "touchend",
        }
    }

    /// Move listeners never call `preventDefault` and can be registered as passive.
    pub fn is_passive(self) -> bool {
        matches!(self, Self::MouseMove | Self::TouchMove)
    }

    pub fn is_global(self) -> bool {
        !matches!(self, Self::MouseDown | Self::TouchStart)
    }
}

/// Where a set of listeners is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget<'a, E> {
    Element(&'a E),
    Document,
}

/// Inline style properties the controller writes when visual feedback is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleProperty {
    Cursor,
    WillChange,
    Transform,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::WillChange => "will-change",
            Self::Transform => "transform",
        }
    }
}

/// The environment a [`crate::Controller`] drives.
///
/// A DOM binding implements this over real elements and `addEventListener`; the host is also
/// responsible for turning native events into [`draggable::PointerEvent`]s and handing them to
/// `Controller::dispatch`.
pub trait Host {
    type Element: Clone + PartialEq;

    /// The element's current `getBoundingClientRect`.
    fn bounding_rect(&self, element: &Self::Element) -> BoundingRect;

    /// The window's inner size.
    fn viewport_size(&self) -> Size;

    fn add_listeners(&mut self, target: ListenerTarget<'_, Self::Element>, events: &[EventKind]);

    fn remove_listeners(
        &mut self,
        target: ListenerTarget<'_, Self::Element>,
        events: &[EventKind],
    );

    /// Writes an inline style; an empty `value` clears the property.
    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str);
}

impl<H: Host + ?Sized> Host for &mut H {
    type Element = H::Element;

    fn bounding_rect(&self, element: &Self::Element) -> BoundingRect {
        (**self).bounding_rect(element)
    }

    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }

    fn add_listeners(&mut self, target: ListenerTarget<'_, Self::Element>, events: &[EventKind]) {
        (**self).add_listeners(target, events);
    }

    fn remove_listeners(
        &mut self,
        target: ListenerTarget<'_, Self::Element>,
        events: &[EventKind],
    ) {
        (**self).remove_listeners(target, events);
    }

    fn set_style(&mut self, element: &Self::Element, property: StyleProperty, value: &str) {
        (**self).set_style(element, property, value);
    }
}
