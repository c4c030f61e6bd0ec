//! Removal of rows that carry no data.

use smoky_model::Table;
use tracing::debug;

use crate::sentinel::is_sentinel;

/// Row counts before and after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub kept: usize,
}

impl FilterStats {
    pub fn dropped(self) -> usize {
        self.total - self.kept
    }
}

/// Drop every row whose non-key cells are all sentinel.
///
/// The first column is the key and is never inspected. A table with only the
/// key column is left as it is. Kept rows retain their original text.
pub fn drop_sentinel_rows(table: &mut Table) -> FilterStats {
    let total = table.height();
    if table.width() > 1 {
        table.retain_rows(|row| !row[1..].iter().all(|cell| is_sentinel(cell)));
    }
    let stats = FilterStats {
        total,
        kept: table.height(),
    };
    debug!(
        total = stats.total,
        kept = stats.kept,
        "dropped sentinel-only rows"
    );
    stats
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
    fn test_key_only_table_is_identity() {
        let mut t = table(&["date"], &[&["-999"], &["d2"]]);
        let before = t.clone();

        let stats = drop_sentinel_rows(&mut t);

        assert_eq!(stats, FilterStats { total: 2, kept: 2 });
        assert_eq!(t, before);
    }

    #[test]
    fn test_single_data_column() {
        let mut t = table(
            &["date", "v"],
            &[&["d1", "-999"], &["d2", "4"], &["d3", " -999.0"], &["d4", ""]],
        );

        let stats = drop_sentinel_rows(&mut t);

        assert_eq!(stats.kept, 2);
        assert_eq!(stats.dropped(), 2);
        let keys: Vec<&str> = t.column_values(0).collect();
        assert_eq!(keys, vec!["d2", "d4"]);
    }

    #[test]
    fn test_row_kept_when_any_data_cell_present() {
        let mut t = table(
            &["date", "a", "b"],
            &[&["d1", "-999", "1"], &["d2", "-999", "-999"]],
        );

        let stats = drop_sentinel_rows(&mut t);

        assert_eq!(stats, FilterStats { total: 2, kept: 1 });
        assert_eq!(t.rows()[0], vec!["d1", "-999", "1"]);
    }

    #[test]
    fn test_sentinel_key_does_not_matter() {
        let mut t = table(&["date", "v"], &[&["-999", "2"]]);

        drop_sentinel_rows(&mut t);

        assert_eq!(t.height(), 1);
    }
}
