// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{ actions, app::App },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");

            ui.separator();

            let delimited = export.format.delim().is_some();
            let before_headers = export.include_headers;
            ui.add_enabled(delimited, egui::Checkbox::new(&mut export.include_headers, "Include headers"));
            if export.include_headers != before_headers {
                log::info!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if export.format != prev_fmt {
            log::info!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            log::debug!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let has_rows = !app.rows().is_empty();
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
    ui.add_space(4.0);
}
