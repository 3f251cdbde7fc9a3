// src/specs/market_summary.rs
//! Market-summary table located by a CSS selector.
//!
//! The default selector is `table.stock-table-class`; the live site has changed
//! its markup before, so the selector is a value (CLI flag, GUI field), not code.

use scraper::{ ElementRef, Html, Selector };

use super::TableSpec;
use crate::{ config::consts::DEFAULT_TABLE_SELECTOR, core::html, error::SpecError };

#[derive(Clone, Debug)]
pub struct SelectorTable {
    css: String,
    selector: Selector,
}

impl SelectorTable {
    pub fn new(css: &str) -> Result<Self, SpecError> {
        let css = css.trim();
        Ok(Self { css: s!(css), selector: html::selector(css)? })
    }

    /// The stock selector for the PSX market-summary page.
    pub fn market_summary() -> Self {
        Self::new(DEFAULT_TABLE_SELECTOR).expect("default table selector is valid")
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

impl TableSpec for SelectorTable {
    fn describe(&self) -> String {
        format!("table matching `{}`", self.css)
    }

    fn locate<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>> {
        doc.select(&self.selector).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <table class="other"><tr><td>noise</td></tr></table>
          <table class="stock-table-class">
            <tr><th>Symbol</th><th>Company</th><th>Price</th><th>Change</th><th>Volume</th></tr>
            <tr><td>ABC</td><td>ABC Corp</td><td>100.50</td><td>2.30</td><td>15,000</td></tr>
            <tr><td> XYZ </td><td>XYZ
                Ltd</td><td>9.10</td><td>-0.40</td><td>700</td></tr>
          </table>
        </body></html>"#;

    #[test]
    fn reads_the_matching_table_only() {
        let spec = SelectorTable::market_summary();
        let bundle = spec.extract(PAGE).unwrap();
        assert_eq!(bundle.rows.len(), 2);
        assert_eq!(bundle.rows[1], vec!["XYZ", "XYZ Ltd", "9.10", "-0.40", "700"]);
        assert_eq!(bundle.headers.unwrap()[0], "Symbol");
    }

    #[test]
    fn custom_selector_can_point_elsewhere() {
        let spec = SelectorTable::new("table.other").unwrap();
        let bundle = spec.extract(PAGE).unwrap();
        // The only row is the header row
        assert!(bundle.rows.is_empty());
        assert_eq!(bundle.headers, Some(vec![s!("noise")]));
    }

    #[test]
    fn invalid_selector_is_rejected() {
        assert!(SelectorTable::new("<<").is_err());
    }
}
