// src/gui/components/top_gainer.rs
use eframe::egui::{ self, Color32, RichText };
use crate::{
    data::{ fmt_change, fmt_price, fmt_volume },
    gui::app::App,
    scrape::Notice,
};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.label(RichText::new("Top stock to watch").heading());

    let Some(report) = app.report.as_ref() else {
        let msg = if app.fetch_error.is_some() {
            "No stock data available at the moment."
        } else {
            "Press FETCH to load the market summary."
        };
        ui.weak(msg);
        return;
    };

    let Some(top) = report.top_gainer() else {
        let notice = report.notices.first().cloned().unwrap_or(Notice::NoGainers);
        ui.weak(notice.to_string());
        return;
    };

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&top.symbol).strong().size(18.0));
            ui.label(top.company.as_str());
            ui.separator();
            ui.label(format!("Price {}", fmt_price(&top.price)));
            ui.label(
                RichText::new(format!("Change {}", fmt_change(&top.change)))
                    .color(Color32::from_rgb(0x2E, 0xB8, 0x4B))
                    .strong(),
            );
            ui.label(format!("Volume {}", fmt_volume(&top.volume)));
        });
    });
}
