// src/core/html.rs
//
// Small helpers over `scraper` shared by the page specs.

use scraper::{ ElementRef, Selector };

use super::sanitize::normalize_ws;
use crate::error::SpecError;

/// Parse a CSS selector, keeping the text of the failure for the user.
pub fn selector(css: &str) -> Result<Selector, SpecError> {
    Selector::parse(css).map_err(|e| SpecError::InvalidSelector {
        selector: s!(css),
        reason: e.to_string(),
    })
}

/// Visible text of an element, entities decoded and whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_is_flattened_and_trimmed() {
        let doc = Html::parse_fragment(
            "<table><tr><td>\n  <a href='#'>ABC</a>&nbsp;&amp; Co\n</td></tr></table>",
        );
        let td = selector("td").unwrap();
        let cell = doc.select(&td).next().unwrap();
        assert_eq!(text_of(cell), "ABC & Co");
    }

    #[test]
    fn bad_selector_is_reported() {
        let err = selector("table..[").unwrap_err();
        assert!(err.to_string().contains("table..["));
    }
}
