//! Backend access for the browser build.

pub mod client;

pub use client::{get_api_base, set_api_base, GlooBackend};
