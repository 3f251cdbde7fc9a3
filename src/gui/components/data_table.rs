// src/gui/components/data_table.rs
//
// Draws the stock grid. Purely a view over `app.dataset`; the model rows
// are consulted only for styling (change sign, unparsed cells).

use eframe::egui::{ self, Align, Color32, Layout, RichText };
use egui_extras::{ Column, TableBuilder };

use crate::{
    data::{ CHANGE_COLUMN, NUMERIC_COLUMNS },
    gui::app::App,
    model::StockRow,
};

const WIDTHS: [f32; 5] = [90.0, 300.0, 100.0, 100.0, 120.0];
const GAIN: Color32 = Color32::from_rgb(0x2E, 0xB8, 0x4B);
const LOSS: Color32 = Color32::from_rgb(0xDC, 0x43, 0x43);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let ds = &app.dataset;
    let headers = ds.headers.clone().unwrap_or_default();
    let cols = headers.len();

    if ds.is_empty() {
        ui.weak("No stock data available at the moment.");
        return;
    }

    let rows = app.rows();
    let top = app.report.as_ref().and_then(|r| r.top_gainer_index());

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        let w = WIDTHS.get(ci).copied().unwrap_or(80.0);
        let col = if ci + 1 == cols {
            Column::remainder().at_least(60.0).clip(true)
        } else {
            Column::initial(w).resizable(true).clip(true).at_least(20.0)
        };
        table = table.column(col);
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in headers.iter().enumerate() {
                header.col(|ui| {
                    let label = egui::Label::new(RichText::new(h).strong()).selectable(false);
                    if NUMERIC_COLUMNS.contains(&ci) {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    } else {
                        ui.add(label);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, ds.row_count(), |mut row| {
                let ri = row.index();
                row.set_selected(top == Some(ri));

                let model = rows.get(ri);
                let Some(cells) = ds.rows.get(ri) else { return };

                for (ci, cell) in cells.iter().enumerate().take(cols) {
                    row.col(|ui| {
                        let rt = style_cell(RichText::new(cell), model, ci);
                        if NUMERIC_COLUMNS.contains(&ci) {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        } else {
                            ui.label(rt);
                        }
                    });
                }
            });
        });
}

fn style_cell(rt: RichText, model: Option<&StockRow>, ci: usize) -> RichText {
    let Some(r) = model else { return rt };

    let raw = match ci {
        2 => r.price.is_raw(),
        3 => r.change.is_raw(),
        4 => r.volume.is_raw(),
        _ => false,
    };
    let mut rt = if raw { rt.italics() } else { rt };

    if ci == CHANGE_COLUMN {
        match r.change_value() {
            Some(c) if c > 0.0 => rt = rt.color(GAIN),
            Some(c) if c < 0.0 => rt = rt.color(LOSS),
            _ => {}
        }
    }
    rt
}
