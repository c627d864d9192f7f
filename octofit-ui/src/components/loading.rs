//! Loading Component

use leptos::*;

/// Centered spinner with a status line
#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center my-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
            <p class="mt-3 text-muted">{message}</p>
        </div>
    }
}
