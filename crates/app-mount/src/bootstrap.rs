//! The one-time bootstrap sequence: resolve anchor, register styles, mount.

use tracing::{debug, error, info};

use crate::anchor::AnchorSelector;
use crate::application::Application;
use crate::config::BootstrapConfig;
use crate::document::{Document, Mount};
use crate::error::{BootstrapError, Result};
use crate::guard::{MountGuard, GLOBAL_GUARD};

/// Returned by a successful bootstrap.
#[derive(Debug)]
pub struct MountHandle<H> {
    anchor: AnchorSelector,
    styles_registered: usize,
    inner: H,
}

impl<H> MountHandle<H> {
    /// Anchor the application was mounted into.
    pub fn anchor(&self) -> &AnchorSelector {
        &self.anchor
    }

    /// Stylesheets added to the document by this bootstrap. Sheets that
    /// were already present are not counted.
    pub fn styles_registered(&self) -> usize {
        self.styles_registered
    }

    /// The UI framework's own handle.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

/// Bootstrap sequence bound to one document and one configuration.
pub struct Bootstrap<'a, D: Document> {
    document: &'a D,
    config: BootstrapConfig,
    guard: &'a MountGuard,
}

impl<'a, D: Document> Bootstrap<'a, D> {
    /// Bootstrap against the process-wide guard.
    pub fn new(document: &'a D, config: BootstrapConfig) -> Self {
        Self {
            document,
            config,
            guard: &GLOBAL_GUARD,
        }
    }

    /// Use a specific guard instead of the process-wide one.
    pub fn with_guard(mut self, guard: &'a MountGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Run the sequence with `root` as the root component definition.
    ///
    /// A second run against a claimed guard fails with
    /// [`BootstrapError::AlreadyMounted`] before touching the document. Any
    /// other failure releases the guard.
    pub fn run<C>(self, root: C) -> Result<MountHandle<C::Handle>>
    where
        C: Mount<D::Element>,
    {
        self.guard.claim()?;

        match self.mount(root) {
            Ok(handle) => Ok(handle),
            Err(err) => {
                self.guard.release();
                Err(err)
            }
        }
    }

    fn mount<C>(&self, root: C) -> Result<MountHandle<C::Handle>>
    where
        C: Mount<D::Element>,
    {
        let anchor = self.resolve_anchor()?;
        let styles_registered = self.register_styles()?;

        let app = Application::new(root);
        app.root().constructed();
        debug!("Application constructed");

        self.document.clear(&anchor);
        let inner = app.mount(anchor);

        info!(
            anchor = %self.config.anchor,
            styles = styles_registered,
            "Application mounted"
        );

        Ok(MountHandle {
            anchor: self.config.anchor.clone(),
            styles_registered,
            inner,
        })
    }

    fn resolve_anchor(&self) -> Result<D::Element> {
        let selector = &self.config.anchor;
        let matches = self.document.query_anchor(selector)?;

        match (matches.count, matches.element) {
            (0, _) => Err(BootstrapError::AnchorNotFound(selector.to_string())),
            (1, Some(element)) => Ok(element),
            (1, None) => Err(BootstrapError::AnchorNotMountable(selector.to_string())),
            (count, _) => Err(BootstrapError::AnchorNotUnique {
                selector: selector.to_string(),
                count,
            }),
        }
    }

    fn register_styles(&self) -> Result<usize> {
        self.config.validate()?;

        let mut added = 0;
        for sheet in &self.config.stylesheets {
            if self.document.has_stylesheet(sheet.id()) {
                debug!(id = sheet.id(), "Stylesheet already registered, skipping");
                continue;
            }
            self.document.append_stylesheet(sheet)?;
            debug!(id = sheet.id(), "Registered stylesheet");
            added += 1;
        }
        Ok(added)
    }
}

/// Bootstrap `root` into `document` against the process-wide guard.
pub fn bootstrap<D, C>(
    document: &D,
    config: BootstrapConfig,
    root: C,
) -> Result<MountHandle<C::Handle>>
where
    D: Document,
    C: Mount<D::Element>,
{
    Bootstrap::new(document, config).run(root)
}

/// Surface a bootstrap failure on the error channel. No recovery is
/// attempted.
pub fn report(err: &BootstrapError) {
    error!(error = %err, "Application bootstrap failed");
}
