//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod signup;
pub mod login;
pub mod appointments;

pub use home::Home;
pub use signup::SignUp;
pub use login::LogIn;
pub use appointments::Appointments;
