// src/scrape.rs
//
// The fetch → extract → build → rank pipeline. `build_report` is pure (HTML
// in, Report out); `collect` adds the network call. Neither touches the
// screen: frontends decide how to show a Report or a FetchError.

use std::fmt;

use log::{ info, warn };

use crate::{
    chart::BarSeries,
    config::options::FetchOptions,
    core::net::HttpSession,
    error::FetchError,
    model::{ CoercionPolicy, StockRow },
    progress::Progress,
    rank,
    specs::TableSpec,
};

/// Soft outcomes: the run completed, but there is something to tell the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The page had no table matching the spec.
    NoTableFound { spec: String },
    /// The table was there but held no data rows.
    EmptyTable,
    /// Rows were found, none with a positive change.
    NoGainers,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoTableFound { spec } => {
                write!(f, "No stock data was found (no {spec} on the page).")
            }
            Notice::EmptyTable => f.write_str("No stock data was found (the table is empty)."),
            Notice::NoGainers => f.write_str("No stock with positive price change found."),
        }
    }
}

/// Everything the presentation layer needs from one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    /// Header texts as the site printed them
    pub site_headers: Option<Vec<String>>,
    pub rows: Vec<StockRow>,
    top_gainer: Option<usize>,
    pub notices: Vec<Notice>,
}

impl Report {
    pub fn top_gainer(&self) -> Option<&StockRow> {
        self.top_gainer.and_then(|i| self.rows.get(i))
    }

    pub fn top_gainer_index(&self) -> Option<usize> {
        self.top_gainer
    }

    pub fn chart(&self) -> BarSeries {
        BarSeries::from_rows(&self.rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_notice(&self, notice: &Notice) -> bool {
        self.notices.contains(notice)
    }
}

/// Extract, build and rank from an already-fetched page.
pub fn build_report(html: &str, spec: &dyn TableSpec, policy: CoercionPolicy) -> Report {
    let Some(bundle) = spec.extract(html) else {
        warn!("Extract: {} not found", spec.describe());
        return Report {
            notices: vec![Notice::NoTableFound { spec: spec.describe() }],
            ..Report::default()
        };
    };

    let rows: Vec<StockRow> = bundle
        .rows
        .iter()
        .map(|cells| StockRow::from_cells(cells, policy))
        .collect();

    let flagged = rows.iter().filter(|r| r.has_raw_cells()).count();
    info!("Extract: rows={} raw_cells_in={} policy={:?}", rows.len(), flagged, policy);

    let mut notices = Vec::new();
    let top_gainer = rank::top_gainer_index(&rows);

    if rows.is_empty() {
        notices.push(Notice::EmptyTable);
    } else if top_gainer.is_none() {
        notices.push(Notice::NoGainers);
    }

    if let Some(i) = top_gainer {
        info!("Rank: top gainer {} ({})", rows[i].symbol, rows[i].change);
    }

    Report { site_headers: bundle.headers, rows, top_gainer, notices }
}

/// Fetch the page and build a Report. A `FetchError` means "no data available".
pub fn collect(
    fetch: &FetchOptions,
    spec: &dyn TableSpec,
    policy: CoercionPolicy,
    progress: &mut dyn Progress,
) -> Result<Report, FetchError> {
    progress.begin(&fetch.url);

    let result = match HttpSession::new(fetch) {
        Ok(session) => session
            .get_text(&fetch.url, progress)
            .map(|html| build_report(&html, spec, policy)),
        Err(e) => Err(e),
    };

    match &result {
        Ok(report) => progress.log(&format!("Fetched {} row(s)", report.rows.len())),
        Err(e) => progress.log(&format!("Error fetching data: {e}")),
    }
    progress.finish();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::SelectorTable;

    fn page(rows: &str) -> String {
        format!(
            "<table class='stock-table-class'>\
             <tr><th>Symbol</th><th>Company</th><th>Price</th><th>Change</th><th>Volume</th></tr>\
             {rows}</table>"
        )
    }

    #[test]
    fn report_carries_rows_and_top() {
        let html = page(
            "<tr><td>A</td><td>A Co</td><td>1</td><td>0.5</td><td>10</td></tr>\
             <tr><td>B</td><td>B Co</td><td>2</td><td>1.5</td><td>20</td></tr>",
        );
        let report = build_report(&html, &SelectorTable::market_summary(), CoercionPolicy::Numeric);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.top_gainer().map(|r| r.symbol.as_str()), Some("B"));
        assert!(report.notices.is_empty());
        assert_eq!(report.chart().bars.len(), 2);
    }

    #[test]
    fn missing_table_is_a_notice_not_an_error() {
        let report = build_report("<p>maintenance</p>", &SelectorTable::market_summary(), CoercionPolicy::Numeric);
        assert!(report.is_empty());
        assert!(matches!(report.notices.as_slice(), [Notice::NoTableFound { .. }]));
    }

    #[test]
    fn no_gainers_is_distinct_from_empty() {
        let html = page("<tr><td>A</td><td>A Co</td><td>1</td><td>-0.5</td><td>10</td></tr>");
        let report = build_report(&html, &SelectorTable::market_summary(), CoercionPolicy::Numeric);
        assert_eq!(report.rows.len(), 1);
        assert!(report.top_gainer().is_none());
        assert!(report.has_notice(&Notice::NoGainers));

        let empty = build_report(&page(""), &SelectorTable::market_summary(), CoercionPolicy::Numeric);
        assert!(empty.has_notice(&Notice::EmptyTable));
        assert!(!empty.has_notice(&Notice::NoGainers));
    }
}
