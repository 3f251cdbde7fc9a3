// src/specs/mod.rs
//! # Page specs
//!
//! Everything that knows *where the data lives in the HTML* sits here, behind
//! [`TableSpec`]. Fetching, ranking and presentation never look at markup, so a
//! changed site layout means swapping or reconfiguring a spec and nothing else.
//!
//! ## Conventions
//! - A spec locates exactly one table; "not found" is a normal outcome (`None`).
//! - Rows come back as trimmed, whitespace-collapsed cell texts in page order.
//! - The first row of the located table is the header row and never yields data.
//! - A data row needs at least one `<td>`; rows made only of `<th>` or nothing are skipped.
//! - Specs are pure: no networking, no logging of their own, testable against
//!   captured HTML fixtures.

use std::sync::LazyLock;

use scraper::{ ElementRef, Html, Selector };

use crate::core::html::text_of;

pub mod market_summary;

pub use market_summary::SelectorTable;

static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("tr selector is valid"));
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("td selector is valid"));
static TH_TD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th, td").expect("th/td selector is valid"));

/// Headers + data rows read from one table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableBundle {
    /// Texts of the header row, when the table had one
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

/// An extraction strategy: how to find the market table in a document.
pub trait TableSpec {
    /// Human-readable description for logs and notices.
    fn describe(&self) -> String;

    /// Find the table element, if the page has one.
    fn locate<'a>(&self, doc: &'a Html) -> Option<ElementRef<'a>>;

    /// Leading rows that are headers, not data.
    fn header_rows(&self) -> usize { 1 }

    /// Parse `html` and read the located table. `None` when no table matched.
    fn extract(&self, html: &str) -> Option<TableBundle> {
        let doc = Html::parse_document(html);
        let table = self.locate(&doc)?;
        Some(read_table(table, self.header_rows()))
    }
}

fn read_table(table: ElementRef<'_>, header_rows: usize) -> TableBundle {
    let mut bundle = TableBundle::default();

    for (idx, tr) in table.select(&TR).enumerate() {
        if idx < header_rows {
            if bundle.headers.is_none() {
                let hs: Vec<String> = tr.select(&TH_TD).map(text_of).collect();
                if !hs.is_empty() {
                    bundle.headers = Some(hs);
                }
            }
            continue;
        }

        let cells: Vec<String> = tr.select(&TD).map(text_of).collect();
        if cells.is_empty() {
            continue;
        }
        bundle.rows.push(cells);
    }

    bundle
}
