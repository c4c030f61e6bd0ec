//! Integration tests for flattened document output.

use serde_json::json;
use smoky_model::{FlattenedDocument, SpeciesRecord, YearRecord};
use smoky_output::{render_json, write_json_document};

fn sample_document() -> FlattenedDocument {
    FlattenedDocument {
        years: vec![
            YearRecord {
                year: 2020,
                total: json!(10),
            },
            YearRecord {
                year: 2021,
                total: json!(5),
            },
        ],
        layers: vec![SpeciesRecord {
            year: 2020,
            counts: vec![
                ("fox".to_string(), json!(3)),
                ("owl".to_string(), json!(7)),
            ],
        }],
    }
}

#[test]
fn rendered_document_uses_four_space_indent() {
    let rendered = render_json(&sample_document()).expect("render");

    insta::assert_snapshot!(rendered, @r#"
{
    "years": [
        {
            "Year": 2020,
            "Total Animals Spotted": 10
        },
        {
            "Year": 2021,
            "Total Animals Spotted": 5
        }
    ],
    "layers": [
        {
            "Year": 2020,
            "fox": 3,
            "owl": 7
        }
    ]
}
"#);
}

#[test]
fn written_document_parses_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("data/biodiversityWormDataFinal.json");

    write_json_document(&sample_document(), &path).expect("write");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(!text.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).expect("parse");
    assert_eq!(value["years"][1], json!({"Year": 2021, "Total Animals Spotted": 5}));
    assert_eq!(value["layers"][0]["owl"], json!(7));
}
