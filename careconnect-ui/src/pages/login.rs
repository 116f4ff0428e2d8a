//! Login Page
//!
//! Render-only: nothing is captured or submitted.

use leptos::*;

use super::signup::FormField;

#[component]
pub fn LogIn() -> impl IntoView {
    view! {
        <div class="max-w-lg space-y-4">
            <h1 class="text-3xl font-bold">"Please Login to Your Account."</h1>
            <FormField id="login-username" label="Username" kind="text" placeholder="Enter your full name" />
            <FormField id="login-password" label="Password" kind="password" placeholder="Enter your password" />
        </div>
    }
}
