//! Integration tests for the terralens CLI commands.
//!
//! Each test writes GeoJSON and rule fixtures to a temp directory, runs a
//! command the way `main` would, and reparses the output file.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use terralens_cli::cli::{ClassifyArgs, FilterArgs, MergeArgs};
use terralens_cli::commands::{execute_classify, execute_filter, execute_merge};
use terralens_cli::{CliError, Formatter};

const DATASET: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"name": "Zone A", "timestamp": "2023-05-01", "temperature_2m": 5},
            "geometry": {"type": "Point", "coordinates": [78.501, 17.435]}
        },
        {
            "type": "Feature",
            "properties": {"name": "Zone B", "timestamp": "2024-01-01", "temperature_2m": 15},
            "geometry": {"type": "Point", "coordinates": [78.510, 17.440]}
        },
        {
            "type": "Feature",
            "properties": {"name": "Zone C", "timestamp": "2023-01-15", "temperature_2m": "abc"},
            "geometry": {"type": "Point", "coordinates": [78.520, 17.445]}
        }
    ]
}"#;

const RULES_TOML: &str = r#"
field = "temperature_2m"

[[rules]]
operator = "<"
value = 10.0
color = "red"

[[rules]]
operator = ">="
value = 10.0
color = "green"
"#;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read_features(path: &Path) -> Vec<geojson::Feature> {
    let raw = fs::read_to_string(path).unwrap();
    match raw.parse::<geojson::GeoJson>().unwrap() {
        geojson::GeoJson::FeatureCollection(fc) => fc.features,
        other => panic!("Expected FeatureCollection, got {:?}", other),
    }
}

fn property<'a>(feature: &'a geojson::Feature, key: &str) -> &'a str {
    feature
        .properties
        .as_ref()
        .unwrap()
        .get(key)
        .unwrap()
        .as_str()
        .unwrap()
}

#[test]
fn test_filter_command_writes_subset() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "data.geojson", DATASET);
    let output = dir.path().join("filtered.geojson");

    execute_filter(
        FilterArgs {
            input,
            cutoff: "2023-06-01".to_string(),
            output: Some(output.clone()),
        },
        &Formatter::new(false),
    )
    .unwrap();

    let features = read_features(&output);
    assert_eq!(features.len(), 2);
    assert_eq!(property(&features[0], "name"), "Zone A");
    assert_eq!(property(&features[1], "name"), "Zone C");
}

#[test]
fn test_filter_rejects_malformed_cutoff() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "data.geojson", DATASET);

    let result = execute_filter(
        FilterArgs {
            input,
            cutoff: "June 2023".to_string(),
            output: None,
        },
        &Formatter::new(false),
    );

    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_classify_command_styles_features() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "data.geojson", DATASET);
    let rules = write_fixture(&dir, "rules.toml", RULES_TOML);
    let output = dir.path().join("styled.geojson");

    execute_classify(
        ClassifyArgs {
            input,
            rules,
            cutoff: None,
            summary: false,
            output: Some(output.clone()),
        },
        &Formatter::new(false),
    )
    .unwrap();

    let features = read_features(&output);
    assert_eq!(features.len(), 3);
    assert_eq!(property(&features[0], "color"), "red");
    assert_eq!(property(&features[1], "color"), "green");
    assert_eq!(property(&features[2], "color"), "gray");
}

#[test]
fn test_classify_with_cutoff_filters_first() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "data.geojson", DATASET);
    let rules = write_fixture(&dir, "rules.toml", RULES_TOML);
    let output = dir.path().join("styled.geojson");

    execute_classify(
        ClassifyArgs {
            input,
            rules,
            cutoff: Some("2023-06-01".to_string()),
            summary: false,
            output: Some(output.clone()),
        },
        &Formatter::new(false),
    )
    .unwrap();

    let features = read_features(&output);
    assert_eq!(features.len(), 2);
}

#[test]
fn test_classify_rejects_bad_rules_file() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir, "data.geojson", DATASET);
    let rules = write_fixture(&dir, "rules.toml", "operator = [broken");

    let result = execute_classify(
        ClassifyArgs {
            input,
            rules,
            cutoff: None,
            summary: false,
            output: None,
        },
        &Formatter::new(false),
    );

    assert!(matches!(result, Err(CliError::Toml(_))));
}

#[test]
fn test_merge_command_concatenates_groups() {
    let dir = TempDir::new().unwrap();
    let drawn_a = write_fixture(
        &dir,
        "drawn_a.geojson",
        r#"{"type": "Feature", "properties": {"name": "d1"},
            "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}}"#,
    );
    let drawn_b = write_fixture(
        &dir,
        "drawn_b.geojson",
        r#"{"type": "Feature", "properties": {"name": "d2"},
            "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}}"#,
    );
    let imported = write_fixture(&dir, "imported.geojson", DATASET);
    let output = dir.path().join("shapes.geojson");

    execute_merge(
        MergeArgs {
            drawn: vec![drawn_a, drawn_b],
            import: Some(imported),
            output: Some(output.clone()),
        },
        &Formatter::new(false),
    )
    .unwrap();

    let features = read_features(&output);
    assert_eq!(features.len(), 5);
    // Drawn shapes first, in file order, then the imported set
    assert_eq!(property(&features[0], "name"), "d1");
    assert_eq!(property(&features[1], "name"), "d2");
    assert_eq!(property(&features[2], "name"), "Zone A");
}

#[test]
fn test_merge_rejects_invalid_import() {
    let dir = TempDir::new().unwrap();
    let imported = write_fixture(&dir, "imported.geojson", "{not geojson");

    let result = execute_merge(
        MergeArgs {
            drawn: vec![],
            import: Some(imported),
            output: None,
        },
        &Formatter::new(false),
    );

    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}
