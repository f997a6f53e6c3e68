//! Style resources registered before the application mounts.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::anchor::check_ident;
use crate::error::{BootstrapError, Result};

/// Where a stylesheet's rules come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum StyleSource {
    /// CSS text embedded at build time.
    Inline(Cow<'static, str>),
    /// URL of an external stylesheet.
    Href(Cow<'static, str>),
}

/// A named style resource.
///
/// The id is used to detect a stylesheet that is already present in the
/// document, so registering the same list twice adds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    pub id: Cow<'static, str>,
    pub source: StyleSource,
}

impl Stylesheet {
    /// Stylesheet with inline CSS text.
    pub const fn inline(id: &'static str, css: &'static str) -> Self {
        Self {
            id: Cow::Borrowed(id),
            source: StyleSource::Inline(Cow::Borrowed(css)),
        }
    }

    /// Stylesheet loaded from a URL.
    pub fn href(id: impl Into<Cow<'static, str>>, url: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: id.into(),
            source: StyleSource::Href(url.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The id ends up in an attribute selector, so it must be a plain
    /// identifier like an anchor id.
    pub fn validate(&self) -> Result<()> {
        check_ident(&self.id).map_err(|reason| {
            BootstrapError::InvalidStylesheet(format!("id '{}' {}", self.id, reason))
        })
    }
}
