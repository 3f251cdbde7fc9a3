// src/gui/components/bar_chart.rs
//
// One bar per company: height is price, fill is the change on the diverging
// scale from `chart::change_color`. Hover a bar for its numbers.

use eframe::egui::{ self, pos2, vec2, Color32, Rect, RichText, Sense, Stroke, StrokeKind };
use crate::gui::app::App;

const BAR_W: f32 = 12.0;
const GAP: f32 = 4.0;
const PAD: f32 = 6.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.label(RichText::new("Stock prices overview").strong());

    let series = &app.chart;
    if series.is_empty() {
        ui.weak("No prices to chart yet.");
        return;
    }

    egui::ScrollArea::horizontal().auto_shrink([false, false]).show(ui, |ui| {
        let height = ui.available_height().max(60.0);
        let width = (series.bars.len() as f32 * (BAR_W + GAP) + GAP).max(ui.available_width());
        let (rect, resp) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 2.0, ui.visuals().extreme_bg_color);

        let base = rect.bottom() - PAD;
        let plot_h = (rect.height() - 2.0 * PAD).max(1.0);
        let hover = resp.hover_pos();
        let mut hovered = None;

        for (i, bar) in series.bars.iter().enumerate() {
            let x = rect.left() + GAP + i as f32 * (BAR_W + GAP);
            let h = series.height_fraction(bar) * plot_h;
            let r = Rect::from_min_max(pos2(x, base - h), pos2(x + BAR_W, base));
            let [cr, cg, cb] = series.color_for(bar);
            painter.rect_filled(r, 1.0, Color32::from_rgb(cr, cg, cb));

            if let Some(p) = hover {
                if p.x >= x && p.x < x + BAR_W + GAP {
                    hovered = Some((i, r));
                }
            }
        }

        painter.line_segment(
            [pos2(rect.left(), base), pos2(rect.right(), base)],
            Stroke::new(1.0, ui.visuals().weak_text_color()),
        );

        if let Some((i, r)) = hovered {
            painter.rect_stroke(r, 1.0, Stroke::new(1.5, ui.visuals().strong_text_color()), StrokeKind::Outside);
            let bar = &series.bars[i];
            let change = match bar.change {
                Some(c) if c > 0.0 => format!("+{c:.2}"),
                Some(c) => format!("{c:.2}"),
                None => s!("n/a"),
            };
            resp.on_hover_text(format!("{}\nPrice {:.2}\nChange {}", bar.label, bar.price, change));
        }
    });
}
