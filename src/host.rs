//! Browser implementation of the bootstrap seams

use app_mount::{
    AnchorMatches, AnchorSelector, BootstrapError, Document, Mount, Result, StyleSource,
    Stylesheet,
};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Attribute marking stylesheets inserted by the bootstrap.
pub const STYLE_ATTR: &str = "data-app-style";

fn js_err(context: &str, err: JsValue) -> BootstrapError {
    let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
    BootstrapError::Host(format!("{}: {}", context, detail))
}

/// The page's `document`.
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn from_window() -> Result<Self> {
        let document = web_sys::window()
            .ok_or_else(|| BootstrapError::Host("no global window".to_string()))?
            .document()
            .ok_or_else(|| BootstrapError::Host("window has no document".to_string()))?;
        Ok(Self { document })
    }

    /// Text content of the element with this id, if any.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
    }

    fn head(&self) -> Result<web_sys::HtmlHeadElement> {
        self.document
            .head()
            .ok_or_else(|| BootstrapError::Host("document has no <head>".to_string()))
    }
}

impl Document for BrowserDocument {
    type Element = HtmlElement;

    fn query_anchor(&self, anchor: &AnchorSelector) -> Result<AnchorMatches<HtmlElement>> {
        let nodes = self
            .document
            .query_selector_all(&anchor.as_selector())
            .map_err(|e| js_err("querySelectorAll failed", e))?;

        // Every match counts toward uniqueness, mountable or not
        Ok(match nodes.length() {
            0 => AnchorMatches::none(),
            1 => match nodes.item(0).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                Some(el) => AnchorMatches::one(el),
                None => AnchorMatches::unusable(1),
            },
            count => AnchorMatches::unusable(count as usize),
        })
    }

    /// `id` has already passed `Stylesheet::validate`, so it is safe to
    /// embed in the attribute selector unescaped.
    fn has_stylesheet(&self, id: &str) -> bool {
        self.document
            .query_selector(&format!("[{}=\"{}\"]", STYLE_ATTR, id))
            .ok()
            .flatten()
            .is_some()
    }

    fn append_stylesheet(&self, sheet: &Stylesheet) -> Result<()> {
        let el = match &sheet.source {
            StyleSource::Inline(css) => {
                let el = self
                    .document
                    .create_element("style")
                    .map_err(|e| js_err("cannot create <style>", e))?;
                el.set_text_content(Some(&**css));
                el
            }
            StyleSource::Href(url) => {
                let el = self
                    .document
                    .create_element("link")
                    .map_err(|e| js_err("cannot create <link>", e))?;
                el.set_attribute("rel", "stylesheet")
                    .and_then(|_| el.set_attribute("href", url))
                    .map_err(|e| js_err("cannot set <link> attributes", e))?;
                el
            }
        };

        el.set_attribute(STYLE_ATTR, sheet.id())
            .map_err(|e| js_err("cannot tag stylesheet", e))?;
        self.head()?
            .append_child(&el)
            .map_err(|e| js_err("cannot append stylesheet", e))?;
        Ok(())
    }

    fn clear(&self, element: &HtmlElement) {
        element.replace_children_with_node_0();
    }
}

/// A Leptos root component, mounted with [`leptos::mount::mount_to`].
///
/// The rendered tree lives for the rest of the page; there is no unmount.
pub struct LeptosRoot<F>(pub F);

impl<F, N> Mount<HtmlElement> for LeptosRoot<F>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    type Handle = ();

    fn mount(self, anchor: HtmlElement) {
        leptos::mount::mount_to(anchor, self.0).forget();
    }
}
