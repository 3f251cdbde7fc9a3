// src/rank.rs
//
// Top gainer: the row with the largest strictly positive change.
// Equal changes keep the earliest row.

use crate::model::StockRow;

/// Index of the top gainer in `rows`, or `None` when nothing went up.
pub fn top_gainer_index(rows: &[StockRow]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, row) in rows.iter().enumerate() {
        let Some(change) = row.change_value() else { continue };
        if change <= 0.0 {
            continue;
        }
        match best {
            Some((_, top)) if change <= top => {}
            _ => best = Some((i, change)),
        }
    }

    best.map(|(i, _)| i)
}

pub fn top_gainer(rows: &[StockRow]) -> Option<&StockRow> {
    top_gainer_index(rows).map(|i| &rows[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CoercionPolicy;

    fn row(symbol: &str, change: &str) -> StockRow {
        let cells = vec![s!(symbol), s!(symbol), s!("10"), s!(change), s!("100")];
        StockRow::from_cells(&cells, CoercionPolicy::Numeric)
    }

    #[test]
    fn ties_keep_first_in_order() {
        let rows = vec![row("A", "1.2"), row("B", "-0.5"), row("C", "3.4"), row("D", "3.4")];
        assert_eq!(top_gainer(&rows).map(|r| r.symbol.as_str()), Some("C"));
    }

    #[test]
    fn zero_and_negative_never_win() {
        let rows = vec![row("A", "0"), row("B", "-1.0"), row("C", "0.00")];
        assert!(top_gainer(&rows).is_none());
    }

    #[test]
    fn unparsable_change_is_skipped() {
        let rows = vec![row("A", "n/a"), row("B", "0.5")];
        assert_eq!(top_gainer_index(&rows), Some(1));
    }

    #[test]
    fn empty_input_has_no_gainer() {
        assert!(top_gainer(&[]).is_none());
    }
}
