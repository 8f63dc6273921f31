//! UI module for handling user interactions and UI updates.
//!
//! Threading model: everything runs on the Slint event loop thread.
//! - `slint::spawn_local`: awaiting native dialogs (folder picker, save dialog, messages)
//! - `rayon::join`: decoding both export sources inside a single handler

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
