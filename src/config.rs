//! Runtime configuration for the shell

use app_mount::BootstrapConfig;

use crate::styles;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_SCRIPT_ID: &str = "app-shell-config";

/// Built-in configuration: mount at `#app` with the bundled stylesheets.
pub fn base() -> BootstrapConfig {
    BootstrapConfig::default().with_stylesheets(styles::stylesheets())
}

/// Apply page-supplied overrides to `base`.
///
/// Blank or missing overrides leave `base` as is. Malformed overrides are
/// logged and ignored.
pub fn resolve(base: BootstrapConfig, overrides: Option<&str>) -> BootstrapConfig {
    let Some(json) = overrides.map(str::trim).filter(|s| !s.is_empty()) else {
        return base;
    };

    match base.clone().apply_overrides_json(json) {
        Ok(config) => {
            tracing::debug!(anchor = %config.anchor, "Applied page config overrides");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed #{}", CONFIG_SCRIPT_ID);
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_base_config() {
        let config = base();
        assert_eq!(config.anchor.to_string(), "#app");
        assert_eq!(config.stylesheets.len(), 3);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   \n"))]
    #[case(Some("{}"))]
    #[case(Some("not json"))]
    #[case(Some(r#"{"anchor": ".app"}"#))]
    fn test_resolve_keeps_base(#[case] overrides: Option<&str>) {
        assert_eq!(resolve(base(), overrides), base());
    }

    #[test]
    fn test_resolve_applies_anchor() {
        let config = resolve(base(), Some(r##"{"anchor": "#root"}"##));
        assert_eq!(config.anchor.id(), "root");
        assert_eq!(config.stylesheets, base().stylesheets);
    }
}
