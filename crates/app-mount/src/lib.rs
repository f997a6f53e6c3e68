//! # app-mount
//!
//! Single-shot bootstrap for a browser application: resolve one mount
//! anchor, register the global stylesheets in order, then mount exactly one
//! application instance into the anchor.
//!
//! The crate knows nothing about a particular UI framework or about the
//! browser. The host supplies a [`Document`] and the root component
//! implements [`Mount`] for that document's element type.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use app_mount::{bootstrap, report, BootstrapConfig, Stylesheet};
//!
//! let config = BootstrapConfig::default()
//!     .with_stylesheet(Stylesheet::inline("main", include_str!("main.css")));
//!
//! if let Err(err) = bootstrap(&document, config, root) {
//!     report(&err);
//! }
//! ```
//!
//! ## Sequence
//!
//! ```text
//! claim guard ──► resolve #anchor ──► register styles ──► construct ──► clear anchor ──► mount
//!      │                 │                    │
//!      ▼                 ▼                    ▼
//! AlreadyMounted   AnchorNotFound /      InvalidStylesheet /
//!                  AnchorNotUnique /     Host error
//!                  AnchorNotMountable    (guard released)
//!                  (guard released)
//! ```

pub mod anchor;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod document;
pub mod error;
pub mod guard;
pub mod stylesheet;

pub use anchor::{AnchorSelector, DEFAULT_ANCHOR_ID};
pub use application::Application;
pub use bootstrap::{bootstrap, report, Bootstrap, MountHandle};
pub use config::BootstrapConfig;
pub use document::{AnchorMatches, Document, Mount};
pub use error::{BootstrapError, Result};
pub use guard::{MountGuard, GLOBAL_GUARD};
pub use stylesheet::{StyleSource, Stylesheet};
