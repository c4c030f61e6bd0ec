//! Merging of the two trailing alternate-measurement columns.

use smoky_model::Table;
use tracing::debug;

use crate::error::Result;
use crate::sentinel::is_sentinel;

/// Outcome of merging the last two columns into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Column that now holds the merged values.
    pub kept: String,
    /// Column removed from the schema.
    pub dropped: String,
    /// Rows where the kept column was sentinel and took the dropped column's value.
    pub filled_from_fallback: usize,
}

/// Merge the second-to-last column (A) with the last column (B).
///
/// Only applies to tables with at least three columns: a key column plus two
/// data columns. Each row keeps A's value unless A is sentinel, in which case
/// B's value is taken as-is, even when B is sentinel too. B is then removed
/// from the schema and every row. Returns `None` when the table is too narrow.
pub fn reconcile_last_columns(table: &mut Table) -> Result<Option<Reconciliation>> {
    let width = table.width();
    if width < 3 {
        return Ok(None);
    }
    let (a, b) = (width - 2, width - 1);

    let mut filled_from_fallback = 0usize;
    for row in table.rows_mut() {
        if is_sentinel(&row[a]) {
            row[a] = row[b].clone();
            filled_from_fallback += 1;
        }
    }

    let dropped = table.remove_column(b)?;
    let kept = table.headers()[a].clone();
    debug!(
        kept = %kept,
        dropped = %dropped,
        filled_from_fallback,
        "reconciled trailing columns"
    );
    Ok(Some(Reconciliation {
        kept,
        dropped,
        filled_from_fallback,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_prefers_first_column_unless_sentinel() {
        let mut t = table(
            &["date", "a", "b"],
            &[
                &["d1", "-999", "5"],
                &["d2", "3", "-999"],
                &["d3", "-999", "-999"],
                &["d4", "7", "8"],
            ],
        );

        let outcome = reconcile_last_columns(&mut t).unwrap().unwrap();

        assert_eq!(outcome.kept, "a");
        assert_eq!(outcome.dropped, "b");
        assert_eq!(outcome.filled_from_fallback, 2);
        assert_eq!(t.headers(), ["date", "a"]);
        let merged: Vec<&str> = t.column_values(1).collect();
        assert_eq!(merged, vec!["5", "3", "-999", "7"]);
    }

    #[test]
    fn test_fallback_keeps_original_text() {
        let mut t = table(&["date", "a", "b"], &[&["d1", " -999.0 ", " -999 "]]);

        reconcile_last_columns(&mut t).unwrap();

        assert_eq!(t.rows()[0][1], " -999 ");
    }

    #[test]
    fn test_only_last_two_columns_merge() {
        let mut t = table(
            &["date", "x", "a", "b"],
            &[&["d1", "-999", "-999", "2"]],
        );

        reconcile_last_columns(&mut t).unwrap();

        assert_eq!(t.headers(), ["date", "x", "a"]);
        assert_eq!(t.rows()[0], vec!["d1", "-999", "2"]);
    }

    #[test]
    fn test_narrow_tables_untouched() {
        let mut one = table(&["date"], &[&["d1"]]);
        let mut two = table(&["date", "a"], &[&["d1", "-999"]]);

        assert!(reconcile_last_columns(&mut one).unwrap().is_none());
        assert!(reconcile_last_columns(&mut two).unwrap().is_none());
        assert_eq!(one.width(), 1);
        assert_eq!(two.width(), 2);
    }
}
