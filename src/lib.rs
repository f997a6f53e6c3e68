//! App Shell - browser entry point
//!
//! Registers the global stylesheets and mounts the root component at `#app`,
//! exactly once per page.

pub mod components;
pub mod config;
pub mod host;
pub mod logging;
pub mod styles;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use components::Header;

/// Document title set by the root component.
pub const APP_TITLE: &str = "App Shell";

/// Root component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Header title=APP_TITLE subtitle="Mounted at #app" />
        <main class="shell-main">
            <p>"The application is running."</p>
        </main>
    }
}
