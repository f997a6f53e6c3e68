//! Mount anchor selectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, Result};

/// Identifier of the default mount anchor.
pub const DEFAULT_ANCHOR_ID: &str = "app";

/// A validated `#id` selector naming the single element an application
/// mounts into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnchorSelector {
    id: String,
}

impl AnchorSelector {
    /// Parse a selector of the form `#id`.
    ///
    /// Only id selectors are accepted. Class, attribute and compound
    /// selectors could match more than one element by construction.
    pub fn parse(selector: &str) -> Result<Self> {
        let selector = selector.trim();
        let id = selector.strip_prefix('#').ok_or_else(|| {
            BootstrapError::InvalidSelector(format!("'{}' must start with '#'", selector))
        })?;

        check_ident(id).map_err(|reason| {
            BootstrapError::InvalidSelector(format!("'{}' {}", selector, reason))
        })?;

        Ok(Self { id: id.to_string() })
    }

    /// The element id, without the leading `#`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The selector text, suitable for `querySelectorAll`.
    pub fn as_selector(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Check that `id` is a CSS identifier `querySelectorAll` will accept
/// without escaping. Returns the reason on failure.
pub(crate) fn check_ident(id: &str) -> std::result::Result<(), String> {
    if id.is_empty() {
        return Err("has an empty id".to_string());
    }

    if let Some(bad) = id.chars().find(|c| !is_id_char(*c)) {
        return Err(format!("contains unsupported character '{}'", bad));
    }

    let digits_after = id.strip_prefix('-').unwrap_or(id);
    if digits_after.is_empty() {
        return Err("is a bare '-'".to_string());
    }
    if digits_after.starts_with(|c: char| c.is_ascii_digit()) {
        return Err("must not start with a digit".to_string());
    }

    Ok(())
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

impl Default for AnchorSelector {
    fn default() -> Self {
        Self {
            id: DEFAULT_ANCHOR_ID.to_string(),
        }
    }
}

impl fmt::Display for AnchorSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

impl std::str::FromStr for AnchorSelector {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AnchorSelector {
    type Error = BootstrapError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<AnchorSelector> for String {
    fn from(value: AnchorSelector) -> Self {
        value.as_selector()
    }
}
