//! Helper functions to set ViewState properties in a grouped manner and to
//! report errors to the user.

use crate::error::AppError;
use crate::state::PanelSide;
use log::{error, info};
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};
use slint::ComponentHandle;

/// Publishes a panel's view and its highlighted list row.
pub fn set_panel_view(ui: &crate::AppWindow, side: PanelSide, view: crate::PanelView, row: i32) {
    let view_state = ui.global::<crate::ViewState>();
    match side {
        PanelSide::Left => {
            view_state.set_left_panel(view);
            view_state.set_left_index(row);
        }
        PanelSide::Right => {
            view_state.set_right_panel(view);
            view_state.set_right_index(row);
        }
    }
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}

pub fn set_status(ui: &crate::AppWindow, message: &str) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_error_message("".into());
    view_state.set_status_message(message.into());
}

/// Shows `err` in the status line and in a message dialog.
///
/// An empty folder is informational; everything else is a warning.
pub fn report_error(ui: &crate::AppWindow, prefix: &str, err: &AppError) {
    let level = match err {
        AppError::NoImagesFound(_) | AppError::MissingSelection => {
            info!("{}: {}", prefix, err);
            ui.global::<crate::ViewState>()
                .set_error_message(format!("{}: {}", prefix, err).into());
            MessageLevel::Info
        }
        _ => {
            set_error_with_prefix(ui, prefix, err.to_string());
            MessageLevel::Warning
        }
    };

    let title = prefix.to_string();
    let description = err.to_string();
    let _ = slint::spawn_local(async move {
        AsyncMessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(description)
            .set_buttons(MessageButtons::Ok)
            .show()
            .await;
    });
}
