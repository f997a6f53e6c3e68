//! In-memory document and root component for bootstrap tests.

#![allow(dead_code)]

use app_mount::{
    AnchorMatches, AnchorSelector, BootstrapError, Document, Mount, Result, StyleSource,
    Stylesheet,
};
use std::cell::RefCell;

/// An element in the fake body: an id, its child markup, and whether it is
/// an HTML element (as opposed to e.g. `<svg>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeElement {
    pub id: String,
    pub children: Vec<String>,
    pub html: bool,
}

#[derive(Debug, Default)]
struct State {
    body: Vec<FakeElement>,
    head: Vec<String>,
    reject_style: Option<String>,
}

/// Flat document: a head holding stylesheet ids and a body of elements.
///
/// # Examples
///
/// ```ignore
/// let doc = FakeDocument::with_body(&[("app", "Loading...")]);
/// assert_eq!(doc.children_of("app"), vec!["Loading..."]);
/// ```
#[derive(Debug, Default)]
pub struct FakeDocument {
    state: RefCell<State>,
}

impl FakeDocument {
    /// Document whose body holds the given `(id, content)` elements.
    pub fn with_body(elements: &[(&str, &str)]) -> Self {
        let body = elements
            .iter()
            .map(|(id, content)| FakeElement {
                id: id.to_string(),
                children: if content.is_empty() {
                    vec![]
                } else {
                    vec![content.to_string()]
                },
                html: true,
            })
            .collect();
        Self {
            state: RefCell::new(State {
                body,
                ..Default::default()
            }),
        }
    }

    /// Append a non-HTML element (think `<svg id="...">`).
    pub fn with_svg(self, id: &str) -> Self {
        self.state.borrow_mut().body.push(FakeElement {
            id: id.to_string(),
            children: vec![],
            html: false,
        });
        self
    }

    /// Make `append_stylesheet` fail for the given id.
    pub fn rejecting_style(self, id: &str) -> Self {
        self.state.borrow_mut().reject_style = Some(id.to_string());
        self
    }

    /// Pretend a stylesheet is already in the head.
    pub fn with_head(self, ids: &[&str]) -> Self {
        self.state
            .borrow_mut()
            .head
            .extend(ids.iter().map(|id| id.to_string()));
        self
    }

    pub fn body(&self) -> Vec<FakeElement> {
        self.state.borrow().body.clone()
    }

    pub fn head(&self) -> Vec<String> {
        self.state.borrow().head.clone()
    }

    /// Children of the first element with this id.
    pub fn children_of(&self, id: &str) -> Vec<String> {
        self.state
            .borrow()
            .body
            .iter()
            .find(|el| el.id == id)
            .map(|el| el.children.clone())
            .unwrap_or_default()
    }

    fn render_into(&self, index: usize, markup: &str) {
        self.state.borrow_mut().body[index]
            .children
            .push(markup.to_string());
    }
}

impl Document for FakeDocument {
    type Element = usize;

    fn query_anchor(&self, anchor: &AnchorSelector) -> Result<AnchorMatches<usize>> {
        let state = self.state.borrow();
        let matches: Vec<(usize, &FakeElement)> = state
            .body
            .iter()
            .enumerate()
            .filter(|(_, el)| el.id == anchor.id())
            .collect();

        Ok(match matches.as_slice() {
            [] => AnchorMatches::none(),
            [(index, el)] if el.html => AnchorMatches::one(*index),
            _ => AnchorMatches::unusable(matches.len()),
        })
    }

    fn has_stylesheet(&self, id: &str) -> bool {
        self.state.borrow().head.iter().any(|h| h == id)
    }

    fn append_stylesheet(&self, sheet: &Stylesheet) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.reject_style.as_deref() == Some(sheet.id()) {
            return Err(BootstrapError::Host(format!(
                "cannot insert stylesheet '{}'",
                sheet.id()
            )));
        }
        if let StyleSource::Href(url) = &sheet.source {
            if url.is_empty() {
                return Err(BootstrapError::Host("empty href".to_string()));
            }
        }
        state.head.push(sheet.id().to_string());
        Ok(())
    }

    fn clear(&self, element: &usize) {
        self.state.borrow_mut().body[*element].children.clear();
    }
}

/// What the root saw when it was constructed and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub anchor: usize,
    pub styles_at_construction: Vec<String>,
    pub styles_at_render: Vec<String>,
}

/// Root component that renders fixed markup into the anchor.
pub struct FakeRoot<'d> {
    pub document: &'d FakeDocument,
    pub markup: &'static str,
    constructed_with: RefCell<Option<Vec<String>>>,
}

impl<'d> FakeRoot<'d> {
    pub fn new(document: &'d FakeDocument, markup: &'static str) -> Self {
        Self {
            document,
            markup,
            constructed_with: RefCell::new(None),
        }
    }
}

impl Mount<usize> for FakeRoot<'_> {
    type Handle = Rendered;

    fn constructed(&self) {
        *self.constructed_with.borrow_mut() = Some(self.document.head());
    }

    fn mount(self, anchor: usize) -> Rendered {
        let styles_at_render = self.document.head();
        self.document.render_into(anchor, self.markup);
        Rendered {
            anchor,
            styles_at_construction: self
                .constructed_with
                .into_inner()
                .expect("mounted before construction"),
            styles_at_render,
        }
    }
}

/// The three stylesheets the application ships, in load order.
pub fn shell_styles() -> Vec<Stylesheet> {
    vec![
        Stylesheet::inline("main", "body { font-family: sans-serif; }"),
        Stylesheet::inline("reset", "* { margin: 0; padding: 0; }"),
        Stylesheet::inline("colors", ":root { --accent: #42b883; }"),
    ]
}
