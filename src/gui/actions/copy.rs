// src/gui/actions/copy.rs
use eframe::egui;
use crate::{ gui::app::App, file };

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.rows().is_empty() {
        app.status("Nothing to copy");
        log::debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    match file::to_export_string(export, app.rows()) {
        Ok(txt) => {
            log::info!("Copy: rows={} format={:?}", app.rows().len(), export.format);
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            log::error!("Copy: {e}");
            app.status(format!("Copy error: {e}"));
        }
    }
}
