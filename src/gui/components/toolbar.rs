// src/gui/components/toolbar.rs
//
// Source controls (URL, table selector, number parsing) plus the Fetch
// button and the status line.

use eframe::egui;
use crate::{ gui::{ actions, app::App }, model::CoercionPolicy };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);

    egui::Grid::new("source_grid").num_columns(2).spacing([8.0, 4.0]).show(ui, |ui| {
        ui.label("URL:");
        let url = &mut app.state.options.fetch.url;
        if ui
            .add_enabled(
                !app.running,
                egui::TextEdit::singleline(url).desired_width(520.0).font(egui::TextStyle::Monospace),
            )
            .lost_focus()
        {
            log::debug!("UI: url → {url}");
        }
        ui.end_row();

        ui.label("Table:");
        let sel = &mut app.state.options.extract.selector;
        if ui
            .add_enabled(
                !app.running,
                egui::TextEdit::singleline(sel).desired_width(260.0).font(egui::TextStyle::Monospace),
            )
            .lost_focus()
        {
            log::debug!("UI: selector → {sel}");
        }
        ui.end_row();
    });

    ui.horizontal(|ui| {
        let coercion = &mut app.state.options.extract.coercion;
        let mut numeric = *coercion == CoercionPolicy::Numeric;
        if ui
            .checkbox(&mut numeric, "Parse numbers")
            .on_hover_text("Off: keep price, change and volume exactly as the page prints them")
            .changed()
        {
            *coercion = if numeric { CoercionPolicy::Numeric } else { CoercionPolicy::Preserve };
            log::info!("UI: coercion → {:?} (applies to the next fetch)", coercion);
        }

        ui.checkbox(&mut app.state.gui.show_chart, "Show chart");

        ui.separator();

        let fetch = egui::Button::new(egui::RichText::new("FETCH").strong());
        if ui.add_enabled(!app.running, fetch).clicked() {
            let ctx = ui.ctx().clone();
            actions::scrape(app, &ctx);
        }
        if app.running {
            ui.spinner();
        }

        let status = app.status_text();
        if app.fetch_error.is_some() {
            ui.colored_label(ui.visuals().warn_fg_color, status);
        } else {
            ui.label(status);
        }
    });

    ui.add_space(4.0);
}
