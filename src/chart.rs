// src/chart.rs
//
// Chart-ready shape of a record set: one bar per company, height = price,
// color = change on a diverging red/grey/green scale. Both frontends draw
// from this (GUI painter, CLI text bars).

use crate::model::StockRow;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub price: f64,
    pub change: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarSeries {
    pub bars: Vec<Bar>,
    /// Tallest price, for scaling
    pub max_price: f64,
    /// Largest |change|, for the color scale
    pub max_abs_change: f64,
}

impl BarSeries {
    /// Rows without a numeric price are left out; order is kept.
    pub fn from_rows(rows: &[StockRow]) -> Self {
        let bars: Vec<Bar> = rows
            .iter()
            .filter_map(|r| {
                let price = r.price_value()?;
                let label = if r.company.is_empty() { r.symbol.clone() } else { r.company.clone() };
                Some(Bar { label, price, change: r.change_value() })
            })
            .collect();

        let max_price = bars.iter().map(|b| b.price).fold(0.0, f64::max);
        let max_abs_change = bars
            .iter()
            .filter_map(|b| b.change)
            .map(f64::abs)
            .fold(0.0, f64::max);

        Self { bars, max_price, max_abs_change }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar height as a fraction of the tallest bar, in 0..=1.
    pub fn height_fraction(&self, bar: &Bar) -> f32 {
        if self.max_price <= 0.0 { return 0.0; }
        (bar.price.max(0.0) / self.max_price) as f32
    }

    pub fn color_for(&self, bar: &Bar) -> [u8; 3] {
        change_color(bar.change, self.max_abs_change)
    }
}

const NEUTRAL: [u8; 3] = [0x9E, 0x9E, 0x9E];
const GAIN: [u8; 3] = [0x2E, 0xB8, 0x4B];
const LOSS: [u8; 3] = [0xDC, 0x43, 0x43];

/// Diverging color: grey at 0 (or unknown), full green/red at ±`max_abs`.
pub fn change_color(change: Option<f64>, max_abs: f64) -> [u8; 3] {
    let Some(c) = change else { return NEUTRAL };
    if max_abs <= 0.0 || c == 0.0 {
        return NEUTRAL;
    }
    let t = (c.abs() / max_abs).clamp(0.0, 1.0);
    let target = if c > 0.0 { GAIN } else { LOSS };
    lerp(NEUTRAL, target, t)
}

fn lerp(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Horizontal text bar for terminals: `width` cells at the tallest price.
pub fn text_bar(fraction: f32, width: usize) -> String {
    let n = (fraction.clamp(0.0, 1.0) * width as f32).round() as usize;
    "█".repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CoercionPolicy;

    fn row(company: &str, price: &str, change: &str) -> StockRow {
        let cells = vec![s!("SYM"), s!(company), s!(price), s!(change), s!("1")];
        StockRow::from_cells(&cells, CoercionPolicy::Numeric)
    }

    #[test]
    fn skips_rows_without_price_and_scales() {
        let rows = vec![row("A", "50", "1"), row("B", "-", "2"), row("C", "100", "-4")];
        let series = BarSeries::from_rows(&rows);
        assert_eq!(series.bars.len(), 2);
        assert_eq!(series.max_price, 100.0);
        assert_eq!(series.max_abs_change, 4.0);
        assert_eq!(series.height_fraction(&series.bars[0]), 0.5);
    }

    #[test]
    fn color_scale_is_diverging() {
        assert_eq!(change_color(None, 5.0), NEUTRAL);
        assert_eq!(change_color(Some(0.0), 5.0), NEUTRAL);
        assert_eq!(change_color(Some(5.0), 5.0), GAIN);
        assert_eq!(change_color(Some(-5.0), 5.0), LOSS);
        let half = change_color(Some(2.5), 5.0);
        assert!(half != NEUTRAL && half != GAIN);
    }

    #[test]
    fn text_bar_width() {
        assert_eq!(text_bar(1.0, 4).chars().count(), 4);
        assert_eq!(text_bar(0.0, 4), "");
    }
}
