// src/model.rs
//
// StockRow: one ticker line of the market summary, built from the cell texts
// of a single <tr>. Numeric columns go through one typed-parsing step; a cell
// that does not parse keeps its text as `Cell::Raw` instead of becoming 0.

use std::fmt;

use serde::Serialize;

use crate::core::sanitize::{ parse_f64, parse_u64 };

/// How numeric-looking columns (price, change, volume) are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoercionPolicy {
    /// Strip thousands separators and parse; unparsable text is kept raw.
    #[default]
    Numeric,
    /// Keep the page text verbatim.
    Preserve,
}

/// Numeric types a cell can hold.
pub trait CellValue: Copy + fmt::Display {
    fn parse_cell(text: &str) -> Option<Self>;
    fn to_f64(self) -> f64;
}

impl CellValue for f64 {
    fn parse_cell(text: &str) -> Option<Self> { parse_f64(text) }
    fn to_f64(self) -> f64 { self }
}

impl CellValue for u64 {
    fn parse_cell(text: &str) -> Option<Self> { parse_u64(text) }
    fn to_f64(self) -> f64 { self as f64 }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell<T> {
    Parsed(T),
    /// Text kept as-is: the string-preserving policy, or a parse failure.
    Raw(String),
    /// The source row had no cell in this column.
    Missing,
}

impl<T: CellValue> Cell<T> {
    pub fn build(text: Option<&str>, policy: CoercionPolicy) -> Self {
        match (text, policy) {
            (None, _) => Cell::Missing,
            (Some(t), CoercionPolicy::Preserve) => Cell::Raw(s!(t)),
            (Some(t), CoercionPolicy::Numeric) => match T::parse_cell(t) {
                Some(v) => Cell::Parsed(v),
                None => Cell::Raw(s!(t)),
            },
        }
    }

    /// Numeric reading used by ranking and charting, whatever the policy was.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Parsed(v) => Some(v.to_f64()),
            Cell::Raw(t) => T::parse_cell(t).map(CellValue::to_f64),
            Cell::Missing => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Cell::Raw(_))
    }
}

impl<T: fmt::Display> fmt::Display for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Parsed(v) => write!(f, "{v}"),
            Cell::Raw(t) => f.write_str(t),
            Cell::Missing => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StockRow {
    pub symbol: String,
    pub company: String,
    pub price: Cell<f64>,
    pub change: Cell<f64>,
    pub volume: Cell<u64>,
}

impl StockRow {
    /// Build from cell texts in page order: symbol, company, price, change, volume.
    /// Extra trailing cells are ignored; absent ones become empty/`Missing`.
    pub fn from_cells(cells: &[String], policy: CoercionPolicy) -> Self {
        let text = |i: usize| cells.get(i).map(|c| c.as_str());
        Self {
            symbol: s!(text(0).unwrap_or_default()),
            company: s!(text(1).unwrap_or_default()),
            price: Cell::build(text(2), policy),
            change: Cell::build(text(3), policy),
            volume: Cell::build(text(4), policy),
        }
    }

    pub fn change_value(&self) -> Option<f64> {
        self.change.as_f64()
    }

    pub fn price_value(&self) -> Option<f64> {
        self.price.as_f64()
    }

    /// True when any numeric column fell back to raw text.
    pub fn has_raw_cells(&self) -> bool {
        self.price.is_raw() || self.change.is_raw() || self.volume.is_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numeric_policy_coerces_all_columns() {
        let row = StockRow::from_cells(
            &cells(&["ABC", "ABC Corp", "100.50", "2.30", "15,000"]),
            CoercionPolicy::Numeric,
        );
        assert_eq!(row.symbol, "ABC");
        assert_eq!(row.company, "ABC Corp");
        assert_eq!(row.price, Cell::Parsed(100.50));
        assert_eq!(row.change, Cell::Parsed(2.30));
        assert_eq!(row.volume, Cell::Parsed(15_000));
        assert!(!row.has_raw_cells());
    }

    #[test]
    fn preserve_policy_keeps_literal_text() {
        let row = StockRow::from_cells(
            &cells(&["ABC", "ABC Corp", "100.50", "2.30", "15,000"]),
            CoercionPolicy::Preserve,
        );
        assert_eq!(row.price, Cell::Raw(s!("100.50")));
        assert_eq!(row.change, Cell::Raw(s!("2.30")));
        assert_eq!(row.volume, Cell::Raw(s!("15,000")));
        // Still readable as numbers downstream
        assert_eq!(row.change_value(), Some(2.30));
        assert_eq!(row.volume.as_f64(), Some(15_000.0));
    }

    #[test]
    fn unparsable_cells_are_flagged_not_zeroed() {
        let row = StockRow::from_cells(
            &cells(&["XYZ", "XYZ Ltd", "-", "n/a", "1,2x"]),
            CoercionPolicy::Numeric,
        );
        assert_eq!(row.price, Cell::Raw(s!("-")));
        assert_eq!(row.change_value(), None);
        assert!(row.has_raw_cells());
    }

    #[test]
    fn short_rows_get_missing_cells() {
        let row = StockRow::from_cells(&cells(&["ONLY"]), CoercionPolicy::Numeric);
        assert_eq!(row.symbol, "ONLY");
        assert_eq!(row.company, "");
        assert_eq!(row.price, Cell::Missing);
        assert_eq!(row.volume, Cell::Missing);
    }

    #[test]
    fn cells_serialize_as_numbers_strings_or_null() {
        let row = StockRow::from_cells(
            &cells(&["ABC", "ABC Corp", "100.5", "x", ""]),
            CoercionPolicy::Numeric,
        );
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["price"], serde_json::json!(100.5));
        assert_eq!(json["change"], serde_json::json!("x"));
        assert_eq!(json["volume"], serde_json::json!(""));

        let short = StockRow::from_cells(&cells(&["ABC"]), CoercionPolicy::Numeric);
        let json = serde_json::to_value(&short).unwrap();
        assert!(json["price"].is_null());
    }
}
