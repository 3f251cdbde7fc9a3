// src/data.rs
//
// DataSet: the string grid the frontends render, copy and export.
// Built from StockRows; numeric cells are formatted for reading
// (fixed decimals, signed change, grouped volume), raw cells pass through.

use crate::config::consts::COLUMNS;
use crate::model::{ Cell, StockRow };

/// Column indexes holding numbers (right/center aligned in views).
pub const NUMERIC_COLUMNS: [usize; 3] = [2, 3, 4];
pub const CHANGE_COLUMN: usize = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn from_stock_rows(rows: &[StockRow]) -> Self {
        Self {
            headers: Some(COLUMNS.iter().map(|h| s!(*h)).collect()),
            rows: rows.iter().map(grid_row).collect(),
        }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

pub fn grid_row(r: &StockRow) -> Vec<String> {
    vec![
        r.symbol.clone(),
        r.company.clone(),
        fmt_price(&r.price),
        fmt_change(&r.change),
        fmt_volume(&r.volume),
    ]
}

pub fn fmt_price(c: &Cell<f64>) -> String {
    match c {
        Cell::Parsed(v) => format!("{v:.2}"),
        other => other.to_string(),
    }
}

pub fn fmt_change(c: &Cell<f64>) -> String {
    match c {
        Cell::Parsed(v) if *v > 0.0 => format!("+{v:.2}"),
        Cell::Parsed(v) => format!("{v:.2}"),
        other => other.to_string(),
    }
}

pub fn fmt_volume(c: &Cell<u64>) -> String {
    match c {
        Cell::Parsed(v) => group_thousands(*v),
        other => other.to_string(),
    }
}

fn group_thousands(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CoercionPolicy;

    #[test]
    fn grid_formats_numbers_and_keeps_raw() {
        let cells: Vec<String> = ["ABC", "ABC Corp", "100.5", "2.3", "1234567"]
            .iter().map(|s| s.to_string()).collect();
        let row = StockRow::from_cells(&cells, CoercionPolicy::Numeric);
        assert_eq!(grid_row(&row), vec!["ABC", "ABC Corp", "100.50", "+2.30", "1,234,567"]);

        let raw = StockRow::from_cells(&cells, CoercionPolicy::Preserve);
        assert_eq!(grid_row(&raw), vec!["ABC", "ABC Corp", "100.5", "2.3", "1234567"]);
    }

    #[test]
    fn grouping_edges() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
    }

    #[test]
    fn dataset_has_fixed_headers() {
        let ds = DataSet::from_stock_rows(&[]);
        assert_eq!(ds.header_count(), 5);
        assert!(ds.is_empty());
    }
}
