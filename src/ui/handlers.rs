//! Event handlers for UI callbacks.
//!
//! Every handler runs on the UI thread. Dialogs are awaited inside
//! `slint::spawn_local`; all state changes end with a preview refresh.

use crate::file_utils::SortKey;
use crate::render::{BadgeFont, LabelFont, Orientation};
use crate::services::{export_service, render_export};
use crate::state::{AppState, LabelSlot, PanelSide};
use crate::ui::image_display::{refresh_panel, refresh_previews};
use crate::ui::state_helpers::{report_error, set_status};
use log::{debug, info, warn};
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

type SharedState = Rc<RefCell<AppState>>;

fn panel_side(index: i32) -> Option<PanelSide> {
    let side = PanelSide::from_index(index);
    if side.is_none() {
        warn!("Ignoring event for unknown panel {}", index);
    }
    side
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: SharedState) {
    setup_panel_handlers(ui, &state);
    setup_overlay_handlers(ui, &state);
    setup_export_handler(ui, &state);

    refresh_previews(ui, &mut state.borrow_mut());
}

fn setup_panel_handlers(ui: &crate::AppWindow, state: &SharedState) {
    let logic = ui.global::<crate::Logic>();

    // AsyncFileDialog has to run on the main thread, hence spawn_local.
    logic.on_load_folder({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |side| {
            let Some(side) = panel_side(side) else {
                return;
            };
            let ui_handle = ui_handle.clone();
            let state = state.clone();
            let _ = slint::spawn_local(async move {
                let Some(folder) = AsyncFileDialog::new()
                    .set_title("Choose a folder with images")
                    .pick_folder()
                    .await
                else {
                    debug!("Folder selection cancelled");
                    return;
                };
                let Some(ui) = ui_handle.upgrade() else {
                    return;
                };

                let result = state.borrow_mut().panel_mut(side).load_folder(folder.path());
                match result {
                    Ok(count) => {
                        info!("Loaded {} images from {}", count, folder.path().display());
                        set_status(&ui, &format!("{} images loaded", count));
                    }
                    Err(e) => report_error(&ui, "Load images", &e),
                }
                refresh_panel(&ui, &mut state.borrow_mut(), side);
            });
        }
    });

    logic.on_next_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |side| {
            let (Some(side), Some(ui)) = (panel_side(side), ui_handle.upgrade()) else {
                return;
            };
            let moved = state.borrow_mut().panel_mut(side).next().is_some();
            if moved {
                refresh_panel(&ui, &mut state.borrow_mut(), side);
            }
        }
    });

    logic.on_prev_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |side| {
            let (Some(side), Some(ui)) = (panel_side(side), ui_handle.upgrade()) else {
                return;
            };
            let moved = state.borrow_mut().panel_mut(side).previous().is_some();
            if moved {
                refresh_panel(&ui, &mut state.borrow_mut(), side);
            }
        }
    });

    logic.on_select_image({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |side, row| {
            let (Some(side), Some(ui)) = (panel_side(side), ui_handle.upgrade()) else {
                return;
            };
            let Ok(row) = usize::try_from(row) else {
                return;
            };
            let moved = state.borrow_mut().panel_mut(side).select(row);
            if moved {
                refresh_panel(&ui, &mut state.borrow_mut(), side);
            }
        }
    });

    logic.on_sort_changed({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |side, index| {
            let (Some(side), Some(ui)) = (panel_side(side), ui_handle.upgrade()) else {
                return;
            };
            let Some(key) = SortKey::from_index(index) else {
                warn!("Unknown sort order {}", index);
                return;
            };
            debug!("Sorting {:?} panel by {:?}", side, key);
            let mut state = state.borrow_mut();
            state.panel_mut(side).set_sort_key(key);
            refresh_panel(&ui, &mut state, side);
        }
    });
}

fn setup_overlay_handlers(ui: &crate::AppWindow, state: &SharedState) {
    let logic = ui.global::<crate::Logic>();

    // Each setter mutates the overlay settings, then both previews are redrawn.
    let on_change = {
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |update: &dyn Fn(&mut AppState)| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            update(&mut state);
            refresh_previews(&ui, &mut state);
        }
    };
    let on_change = Rc::new(on_change);

    logic.on_font_size_changed({
        let on_change = on_change.clone();
        move |size| on_change(&|state: &mut AppState| state.overlay.set_font_size(size as i64))
    });

    logic.on_embed_filenames_changed({
        let on_change = on_change.clone();
        move |embed| on_change(&|state: &mut AppState| state.overlay.set_embed_filenames(embed))
    });

    logic.on_orientation_changed({
        let on_change = on_change.clone();
        move |index| {
            let Some(orientation) = Orientation::from_index(index) else {
                warn!("Unknown orientation {}", index);
                return;
            };
            on_change(&|state: &mut AppState| state.overlay.set_orientation(orientation))
        }
    });

    logic.on_label_changed({
        let on_change = on_change.clone();
        move |side, slot, enabled, text| {
            let Some(side) = panel_side(side) else {
                return;
            };
            let Ok(slot) = usize::try_from(slot) else {
                return;
            };
            on_change(&|state: &mut AppState| {
                if !state
                    .overlay
                    .set_label(side, slot, LabelSlot::new(enabled, text.as_str()))
                {
                    warn!("Ignoring unknown label slot {}", slot);
                }
            })
        }
    });
}

fn setup_export_handler(ui: &crate::AppWindow, state: &SharedState) {
    ui.global::<crate::Logic>().on_save_combined({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            let request = state.borrow().export_request();
            let request = match request {
                Ok(request) => request,
                Err(e) => {
                    report_error(&ui, "Save combined", &e);
                    return;
                }
            };

            let font = LabelFont::system(request.font_size);
            let canvas = match render_export(&request, font.as_ref().map(|f| f as &dyn BadgeFont)) {
                Ok(canvas) => canvas,
                Err(e) => {
                    report_error(&ui, "Save combined", &e);
                    return;
                }
            };

            let default_name = export_service::default_export_name(Some(request.paths[0].as_path()));
            let ui_handle = ui_handle.clone();
            let _ = slint::spawn_local(async move {
                let Some(file) = AsyncFileDialog::new()
                    .set_title("Save combined image")
                    .set_file_name(default_name)
                    .add_filter("JPEG", &["jpg", "jpeg"])
                    .save_file()
                    .await
                else {
                    debug!("Save cancelled");
                    return;
                };

                let path = export_service::normalize_save_path(file.path().to_path_buf());
                let result = export_service::save_composite(canvas, &path);
                let Some(ui) = ui_handle.upgrade() else {
                    return;
                };
                match result {
                    Ok(()) => set_status(&ui, &format!("Saved {}", path.display())),
                    Err(e) => report_error(&ui, "Save combined", &e),
                }
            });
        }
    });
}
