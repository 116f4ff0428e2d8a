//! CareConnect Dashboard
//!
//! Appointment management frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Appointment list with edit and delete
//! - Calendar date picker for booking and rescheduling
//! - Sign-up and login forms (not yet connected to a backend)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Appointment state is the `careconnect` reducer held in a
//! signal; requests go to the CareConnect REST backend via gloo-net.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
