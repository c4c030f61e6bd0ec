use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use smoky_cli::types::{CleanOutcome, FlattenOutcome};

pub fn print_clean_summary(outcome: &CleanOutcome) {
    println!("{}", outcome.report_line());
}

pub fn print_flatten_summary(outcome: &FlattenOutcome) {
    let document = &outcome.document;
    println!(
        "Wrote flattened JSON to {} ({} years, {} layers)",
        outcome.output.display(),
        document.years.len(),
        document.layers.len()
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("List"),
        header_cell("Entries"),
        header_cell("Years"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("years"),
        Cell::new(document.years.len()),
        Cell::new(year_span(document.years.iter().map(|record| record.year))),
        source_cell(outcome.totals_found),
    ]);
    table.add_row(vec![
        Cell::new("layers"),
        Cell::new(document.layers.len()),
        Cell::new(year_span(document.layers.iter().map(|record| record.year))),
        source_cell(outcome.species_found),
    ]);
    println!("{table}");

    let species = document.species_names();
    if !species.is_empty() {
        println!("Species: {}", species.join(", "));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn year_span(years: impl Iterator<Item = u32>) -> String {
    let mut span: Option<(u32, u32)> = None;
    for year in years {
        span = Some(match span {
            None => (year, year),
            Some((low, high)) => (low.min(year), high.max(year)),
        });
    }
    match span {
        None => "-".to_string(),
        Some((low, high)) if low == high => low.to_string(),
        Some((low, high)) => format!("{low}-{high}"),
    }
}

fn source_cell(found: bool) -> Cell {
    if found {
        Cell::new("loaded").fg(Color::Green)
    } else {
        Cell::new("missing").fg(Color::Yellow)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_span() {
        assert_eq!(year_span(std::iter::empty()), "-");
        assert_eq!(year_span([2020].into_iter()), "2020");
        assert_eq!(year_span([2021, 2019, 2020].into_iter()), "2019-2021");
    }
}
