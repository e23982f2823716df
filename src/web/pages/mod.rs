//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod admin;
pub mod home;
pub mod watch;

pub use admin::{render_admin_page, render_delete_confirm_page};
pub use home::render_home_page;
pub use watch::render_watch_page;
