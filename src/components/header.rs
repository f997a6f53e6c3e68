//! Header component

use leptos::prelude::*;

/// Application header
#[component]
pub fn Header(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="shell-header">
            <div>
                <h1 class="shell-title">{title}</h1>
                {subtitle.map(|text| view! {
                    <p class="text-muted">{text}</p>
                })}
            </div>
        </header>
    }
}
