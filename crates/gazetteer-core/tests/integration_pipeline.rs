//! End-to-end tests for the conversion, reformat and analysis pipelines.
//!
//! Every test works in its own temporary data directory laid out the way the
//! CLI expects it (`CM.txt`, `CM.csv`, `CM.json`).

use gazetteer_core::loader;
use gazetteer_core::model::{Elevation, LocationRecord};
use gazetteer_core::value::Number;
use gazetteer_core::{GazetteerConfig, GazetteerError, Layout};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn row(columns: &[(usize, &str)]) -> String {
    let mut cells = vec![""; 19];
    for (index, value) in columns {
        cells[*index] = value;
    }
    cells.join("\t")
}

fn yaounde() -> String {
    row(&[
        (0, "2230217"),
        (1, "Yaoundé"),
        (3, "Yaounde,Jaunde"),
        (4, "3.866667"),
        (5, "11.516667"),
        (6, "P"),
        (7, "PPLC"),
        (8, "CM"),
        (10, "02"),
        (14, "2440462"),
        (17, "Africa/Douala"),
        (18, "2023-01-01"),
    ])
}

fn extract() -> String {
    [
        yaounde(),
        row(&[
            (0, "2232593"),
            (1, "Douala"),
            (2, "Duala"),
            (4, "4.04827"),
            (5, "9.70428"),
            (6, "P"),
            (7, "PPLA"),
            (8, "CM"),
            (10, "05"),
            (14, "2768436"),
            (16, "13"),
            (17, "Africa/Douala"),
        ]),
        row(&[
            (0, "2233410"),
            (1, "Mont Cameroun"),
            (4, "4.2033"),
            (5, "9.1706"),
            (6, "T"),
            (7, "MT"),
            (10, "09"),
            (16, "4095"),
        ]),
        String::new(),
        row(&[(1, "No identifier")]),
        row(&[
            (0, "8260115"),
            (1, "Akwa"),
            (4, "4.05"),
            (5, "9.7"),
            (6, "P"),
            (7, "PPLX"),
            (8, "CM"),
            (10, "05"),
        ]),
    ]
    .join("\n")
        + "\n"
}

fn data_dir() -> (TempDir, GazetteerConfig) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("CM.txt"), extract()).unwrap();
    let config = GazetteerConfig::with_data_dir(dir.path());
    (dir, config)
}

fn read_json(config: &GazetteerConfig) -> Value {
    serde_json::from_str(&fs::read_to_string(config.paths.output()).unwrap()).unwrap()
}

#[test]
fn positional_conversion_writes_sparse_corpus() {
    let (_dir, config) = data_dir();

    let outcome = loader::convert(&config, Layout::PositionalV1).unwrap();
    assert_eq!(outcome.run.processed, 5);
    assert_eq!(outcome.run.dropped, 1);
    assert_eq!(outcome.run.errors, 0);
    assert_eq!(outcome.stats.total_locations, 4);
    assert_eq!(outcome.stats.cities, 2);
    assert_eq!(outcome.stats.neighborhoods, 1);

    let doc = read_json(&config);
    assert_eq!(doc["metadata"]["total_locations"], json!(4));
    assert_eq!(doc["metadata"]["country"], json!("Cameroon"));
    assert_eq!(
        doc["locations"][0],
        json!({
            "id": "2230217",
            "names": {
                "primary": "Yaoundé",
                "alternatives": ["Yaounde", "Jaunde"],
                "all": ["Yaoundé", "Yaounde", "Jaunde"],
            },
            "coordinates": { "latitude": 3.866667, "longitude": 11.516667 },
            "feature": {
                "type": "P",
                "code": "PPLC",
                "type_label": "Populated place",
                "code_label": "Capital of a political entity",
            },
            "country": { "code": "CM" },
            "administrative": { "level_1": "02" },
            "population": 2440462,
            "timezone": "Africa/Douala",
            "metadata": { "modification_date": "2023-01-01" },
        })
    );

    // Mountain: no country, no population, elevation only.
    let mountain = &doc["locations"][2];
    assert!(mountain.get("country").is_none());
    assert!(mountain.get("population").is_none());
    assert_eq!(mountain["elevation"], json!({ "meters": 4095 }));
}

#[test]
fn reformat_then_named_conversion_matches_positional() {
    let (_dir, config) = data_dir();

    let direct = loader::convert(&config, Layout::PositionalV1).unwrap();

    let formatted = loader::reformat(&config).unwrap();
    assert_eq!(formatted.run.processed, 5);
    assert!(formatted.output_bytes > 0);

    let via_csv = loader::convert(&config, Layout::NamedV2).unwrap();
    // The CSV path keeps the row without an id.
    assert_eq!(via_csv.run.processed, 5);
    assert_eq!(via_csv.run.dropped, 0);

    // The CSV path reads every elevation as a float.
    let float_elevation = |record: &LocationRecord| {
        let mut record = record.clone();
        record.elevation = record.elevation.map(|e| Elevation {
            meters: Number::Float(e.meters.as_f64()),
        });
        record
    };
    let with_ids: Vec<_> = via_csv
        .corpus
        .locations()
        .iter()
        .filter(|l| !l.id.is_empty())
        .map(float_elevation)
        .collect();
    let expected: Vec<_> = direct.corpus.locations().iter().map(float_elevation).collect();
    assert_eq!(with_ids, expected);
}

#[test]
fn swapped_elevation_is_recovered_from_csv_only() {
    let dir = TempDir::new().unwrap();
    let config = GazetteerConfig::with_data_dir(dir.path());
    fs::write(
        config.paths.named(),
        "id,name_primary,elevation,modification_date\n\
         1,Foumban,0,1100\n\
         2,Kousseri,0,2019-05-04\n",
    )
    .unwrap();

    let outcome = loader::convert(&config, Layout::NamedV2).unwrap();
    let locations = outcome.corpus.locations();

    assert_eq!(locations[0].elevation.map(|e| e.meters.as_f64()), Some(1100.0));
    assert_eq!(locations[0].metadata.modification_date, None);
    assert_eq!(locations[1].elevation.map(|e| e.meters.as_f64()), Some(0.0));
    assert_eq!(
        locations[1].metadata.modification_date.as_deref(),
        Some("2019-05-04")
    );
}

#[test]
fn analysis_reads_back_what_conversion_wrote() {
    let (_dir, mut config) = data_dir();
    let converted = loader::convert(&config, Layout::PositionalV1).unwrap();

    let analysis = loader::analyze(&config).unwrap();
    assert_eq!(analysis.stats, converted.stats);
    assert_eq!(analysis.corpus.metadata, converted.corpus.metadata);
    assert_eq!(analysis.stats.regions.get("05"), Some(&2));

    assert!(!analysis.stats.assess(&config.thresholds).is_complete);
    config.thresholds.min_locations = 4;
    let assessment = analysis.stats.assess(&config.thresholds);
    assert!(assessment.is_complete);
    assert!(assessment.ready);
}

#[test]
fn analysis_tolerates_loosely_typed_records() {
    let dir = TempDir::new().unwrap();
    let config = GazetteerConfig::with_data_dir(dir.path());
    fs::write(
        config.paths.output(),
        r#"{
  "metadata": { "source": "scripts", "total_locations": 3, "generated_at": null },
  "locations": [
    {
      "id": "1",
      "names": { "primary": "Bafia", "alternate": 2 },
      "coordinates": { "latitude": 4.75, "longitude": 11.23 },
      "feature": { "type": "P", "code": "PPLA" },
      "administrative": { "level_1": "02" },
      "population": 12.5,
      "elevation": { "meters": "n/a" }
    },
    { "id": "2", "feature": { "code": "PPLX" }, "coordinates": { "latitude": 4 } },
    "not a record"
  ]
}"#,
    )
    .unwrap();

    let analysis = loader::analyze(&config).unwrap();
    let stats = &analysis.stats;
    assert_eq!(stats.total_locations, 2);
    assert_eq!(stats.cities, 1);
    assert_eq!(stats.neighborhoods, 1);
    assert_eq!(stats.with_coordinates, 1);
    assert_eq!(stats.with_primary_name, 1);
    assert_eq!(stats.with_population, 0);
    assert_eq!(stats.with_elevation, 0);
    assert_eq!(stats.regions.get("00"), Some(&1));
    assert_eq!(analysis.corpus.metadata.total_locations, 3);
}

#[test]
fn missing_input_leaves_previous_corpus_alone() {
    let dir = TempDir::new().unwrap();
    let config = GazetteerConfig::with_data_dir(dir.path());
    fs::write(config.paths.output(), "previous").unwrap();

    let err = loader::convert(&config, Layout::PositionalV1).unwrap_err();
    assert!(matches!(err, GazetteerError::NotFound(ref msg) if msg.contains("CM.txt")));
    assert_eq!(fs::read_to_string(config.paths.output()).unwrap(), "previous");

    let err = loader::convert(&config, Layout::NamedV2).unwrap_err();
    assert!(matches!(err, GazetteerError::NotFound(_)));
}

#[test]
fn undecodable_rows_are_counted() {
    let (dir, config) = data_dir();
    let mut bytes = extract().into_bytes();
    bytes.extend_from_slice(b"999\t\xc3\x28broken\n");
    fs::write(dir.path().join("CM.txt"), bytes).unwrap();

    let outcome = loader::convert(&config, Layout::PositionalV1).unwrap();
    assert_eq!(outcome.run.errors, 1);
    assert_eq!(outcome.stats.total_locations, 4);
}
