//! The root application instance.

use crate::document::Mount;

/// One application, parameterized by its root component definition.
///
/// Construction only stores the root; nothing touches the document until
/// [`Application::mount`] consumes the instance.
#[derive(Debug)]
pub struct Application<C> {
    root: C,
}

impl<C> Application<C> {
    pub fn new(root: C) -> Self {
        Self { root }
    }

    /// The root component definition.
    pub fn root(&self) -> &C {
        &self.root
    }

    /// Render the root into `anchor`. The UI framework owns the tree from
    /// here on.
    pub fn mount<E>(self, anchor: E) -> C::Handle
    where
        C: Mount<E>,
    {
        self.root.mount(anchor)
    }
}
