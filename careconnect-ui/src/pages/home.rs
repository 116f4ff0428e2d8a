//! Home Page
//!
//! Landing page shown at `/`.

use leptos::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <h1 class="text-3xl font-bold">"Welcome to the Project Client"</h1>
    }
}
