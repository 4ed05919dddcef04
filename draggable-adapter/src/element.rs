/// A bindable slot for a host element, analogous to a UI framework's element ref.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementRef<E> {
    current: Option<E>,
}

impl<E> Default for ElementRef<E> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<E> ElementRef<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bound(element: E) -> Self {
        Self {
            current: Some(element),
        }
    }

    /// Binds `element`, returning the previously bound one.
    pub fn bind(&mut self, element: E) -> Option<E> {
        self.current.replace(element)
    }

    pub fn unbind(&mut self) -> Option<E> {
        self.current.take()
    }

    pub fn get(&self) -> Option<&E> {
        self.current.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }
}
