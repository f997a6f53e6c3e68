//! Seams between the bootstrap and the environment it runs in.

use crate::anchor::AnchorSelector;
use crate::error::Result;
use crate::stylesheet::Stylesheet;

/// The host document an application is mounted into.
///
/// Implemented over `web_sys::Document` in the browser, and by in-memory
/// fakes in tests.
pub trait Document {
    /// Handle to an element in this document.
    type Element;

    /// Every node matching the anchor selector. The count includes nodes
    /// that are not usable as a mount point.
    fn query_anchor(&self, anchor: &AnchorSelector) -> Result<AnchorMatches<Self::Element>>;

    /// Whether a stylesheet with this id is already registered.
    fn has_stylesheet(&self, id: &str) -> bool;

    /// Append a stylesheet to the document's global presentation context.
    fn append_stylesheet(&self, sheet: &Stylesheet) -> Result<()>;

    /// Remove all children of an element.
    fn clear(&self, element: &Self::Element);
}

/// Result of querying the document for the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorMatches<E> {
    /// Number of nodes matching the selector.
    pub count: usize,
    /// The matching element, when there is exactly one and it can be
    /// mounted into.
    pub element: Option<E>,
}

impl<E> AnchorMatches<E> {
    pub fn none() -> Self {
        Self {
            count: 0,
            element: None,
        }
    }

    /// A single mountable match.
    pub fn one(element: E) -> Self {
        Self {
            count: 1,
            element: Some(element),
        }
    }

    /// `count` matches, none of which is handed back.
    pub fn unusable(count: usize) -> Self {
        Self {
            count,
            element: None,
        }
    }
}

/// A root component definition that can render itself into an element.
///
/// `E` is the element type of the document being mounted into.
pub trait Mount<E> {
    /// Whatever the UI framework hands back after mounting.
    type Handle;

    /// Called by the bootstrap right after the application instance wrapping
    /// this root is built, once styles are registered and before mounting.
    fn constructed(&self) {}

    fn mount(self, anchor: E) -> Self::Handle;
}
