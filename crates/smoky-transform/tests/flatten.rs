//! Integration tests for biodiversity record flattening.

use serde_json::json;
use smoky_transform::flatten;

fn species(year: &str, counts: &[(&str, i64)]) -> (String, Vec<(String, serde_json::Value)>) {
    (
        year.to_string(),
        counts
            .iter()
            .map(|(name, count)| ((*name).to_string(), json!(count)))
            .collect(),
    )
}

#[test]
fn totals_and_species_are_flattened_independently() {
    let totals = vec![
        ("2020".to_string(), json!(10)),
        ("2021".to_string(), json!(5)),
    ];
    let layers = vec![species("2020", &[("fox", 3), ("owl", 7)])];

    let document = flatten(totals, layers).expect("flatten");
    let value = serde_json::to_value(&document).expect("serialize");

    assert_eq!(
        value,
        json!({
            "years": [
                {"Year": 2020, "Total Animals Spotted": 10},
                {"Year": 2021, "Total Animals Spotted": 5}
            ],
            "layers": [
                {"Year": 2020, "fox": 3, "owl": 7}
            ]
        })
    );
}

#[test]
fn missing_totals_leave_years_empty() {
    let layers = vec![
        species("2019", &[("bear", 1)]),
        species("2018", &[("deer", 4), ("elk", 2)]),
    ];

    let document = flatten(Vec::new(), layers).expect("flatten");

    assert!(document.years.is_empty());
    assert_eq!(document.layers.len(), 2);
    assert_eq!(document.layers[0].year, 2019);
    assert_eq!(document.layers[1].year, 2018);
    assert_eq!(document.species_names(), vec!["bear", "deer", "elk"]);
}

#[test]
fn duplicate_and_unmatched_years_are_kept() {
    let totals = vec![
        ("2020".to_string(), json!(1)),
        ("2020".to_string(), json!(2)),
    ];
    let layers = vec![species("2022", &[])];

    let document = flatten(totals, layers).expect("flatten");

    assert_eq!(document.years.len(), 2);
    assert_eq!(
        serde_json::to_value(&document.layers[0]).unwrap(),
        json!({"Year": 2022})
    );
}

#[test]
fn non_integer_counts_pass_through() {
    let totals = vec![("2020".to_string(), json!(2.5))];

    let document = flatten(totals, Vec::new()).expect("flatten");

    assert_eq!(document.years[0].total, json!(2.5));
}
