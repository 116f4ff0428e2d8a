//! Sign-up Page
//!
//! Render-only: nothing is captured or submitted.

use leptos::*;

#[component]
pub fn SignUp() -> impl IntoView {
    view! {
        <div class="max-w-lg space-y-4">
            <h1 class="text-3xl font-bold">"Welcome to Careconnect."</h1>
            <FormField id="signup-username" label="Username" kind="text" placeholder="Enter your user name" />
            <FormField id="signup-first-name" label="First name" kind="text" placeholder="Enter your first name" />
            <FormField id="signup-last-name" label="Last name" kind="text" placeholder="Enter your last name" />
            <FormField id="signup-dob" label="Date of Birth" kind="date" placeholder="Enter your DOB" />
            <FormField id="signup-contact" label="Contact number" kind="text" placeholder="Enter your number" />
            <FormField id="signup-email" label="Email address" kind="email" placeholder="name@example.com" />
            <FormField id="signup-password" label="Password" kind="password" placeholder="Enter your password" />
        </div>
    }
}

/// Labelled input shared by the sign-up and login pages
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                id=id
                type=kind
                placeholder=placeholder
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
