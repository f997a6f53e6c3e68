//! Configuration for the bootstrap sequence.

use serde::{Deserialize, Serialize};

use crate::anchor::AnchorSelector;
use crate::error::Result;
use crate::stylesheet::Stylesheet;

/// Everything the bootstrap needs, resolved ahead of time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Element the application mounts into. Defaults to `#app`.
    pub anchor: AnchorSelector,

    /// Stylesheets registered, in order, before mounting.
    pub stylesheets: Vec<Stylesheet>,
}

/// Fields a host page may override at runtime.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Overrides {
    anchor: Option<AnchorSelector>,
    #[serde(default)]
    stylesheets: Vec<Stylesheet>,
}

impl BootstrapConfig {
    /// Parse a complete configuration from JSON. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every stylesheet id.
    pub fn validate(&self) -> Result<()> {
        self.stylesheets.iter().try_for_each(Stylesheet::validate)
    }

    /// Apply overrides from JSON on top of this configuration.
    ///
    /// `anchor` replaces the anchor; `stylesheets` are appended after the
    /// built-in ones.
    pub fn apply_overrides_json(mut self, json: &str) -> Result<Self> {
        let overrides: Overrides = serde_json::from_str(json)?;
        overrides
            .stylesheets
            .iter()
            .try_for_each(Stylesheet::validate)?;
        if let Some(anchor) = overrides.anchor {
            self.anchor = anchor;
        }
        self.stylesheets.extend(overrides.stylesheets);
        Ok(self)
    }

    /// Set the mount anchor.
    pub fn with_anchor(mut self, anchor: AnchorSelector) -> Self {
        self.anchor = anchor;
        self
    }

    /// Append one stylesheet.
    pub fn with_stylesheet(mut self, sheet: Stylesheet) -> Self {
        self.stylesheets.push(sheet);
        self
    }

    /// Append several stylesheets, keeping their order.
    pub fn with_stylesheets<I>(mut self, sheets: I) -> Self
    where
        I: IntoIterator<Item = Stylesheet>,
    {
        self.stylesheets.extend(sheets);
        self
    }
}
