//! Threshold-rule classification

use geojson::{Feature, FeatureCollection};
use serde_json::Value;
use terralens_domain::color::{DEFAULT_COLOR, UNCLASSIFIABLE_COLOR};
use terralens_domain::DataSourceConfig;
use tracing::debug;

/// Compute the display color for one feature
///
/// - No config: the default color (`blue`)
/// - Configured field absent or non-numeric: the unclassifiable color
///   (`gray`), without consulting any rule
/// - Otherwise the color of the first rule (in list order) whose
///   comparison holds against the parsed value, or the default color when
///   none matches
///
/// The returned slice borrows from the config (or is a static fallback),
/// so per-feature calls at render time allocate nothing.
pub fn classify<'a>(feature: &Feature, config: Option<&'a DataSourceConfig>) -> &'a str {
    let Some(config) = config else {
        return DEFAULT_COLOR;
    };

    let raw = feature
        .properties
        .as_ref()
        .and_then(|props| props.get(&config.field));

    let Some(value) = raw.and_then(numeric_value) else {
        debug!(field = %config.field, "field missing or non-numeric, using fallback color");
        return UNCLASSIFIABLE_COLOR;
    };

    for rule in &config.rules {
        if rule.matches(value) {
            return &rule.color;
        }
    }

    DEFAULT_COLOR
}

/// Classify every feature in a collection, in order
pub fn classify_collection<'a>(
    collection: &FeatureCollection,
    config: Option<&'a DataSourceConfig>,
) -> Vec<&'a str> {
    collection
        .features
        .iter()
        .map(|feature| classify(feature, config))
        .collect()
}

/// Return a new collection with each feature's computed color written into
/// a `color` property
///
/// The input is untouched; this is the host's hook for render styling and
/// styled export.
pub fn apply_colors(
    collection: &FeatureCollection,
    config: Option<&DataSourceConfig>,
) -> FeatureCollection {
    let features = collection
        .features
        .iter()
        .map(|feature| {
            let color = classify(feature, config).to_string();
            let mut feature = feature.clone();
            feature
                .properties
                .get_or_insert_with(serde_json::Map::new)
                .insert("color".to_string(), Value::String(color));
            feature
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Numeric interpretation of a property value
///
/// JSON numbers are taken as-is; strings get a strict trimmed `f64` parse.
/// Everything else (bool, null, array, object, NaN) is unclassifiable.
fn numeric_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use terralens_domain::{RuleOperator, ThresholdRule};

    fn feature_with(field: &str, value: serde_json::Value) -> Feature {
        let mut properties = serde_json::Map::new();
        properties.insert(field.to_string(), value);
        Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    fn temp_config() -> DataSourceConfig {
        DataSourceConfig::new(
            "temperature_2m",
            vec![
                ThresholdRule::new(RuleOperator::Lt, 10.0, "red"),
                ThresholdRule::new(RuleOperator::Ge, 10.0, "green"),
            ],
        )
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let config = temp_config();
        assert_eq!(
            classify(&feature_with("temperature_2m", json!(5)), Some(&config)),
            "red"
        );
        assert_eq!(
            classify(&feature_with("temperature_2m", json!(15)), Some(&config)),
            "green"
        );
    }

    #[test]
    fn test_rule_order_is_tiebreak() {
        // Two rules with identical operator/value but different colors:
        // strictly first-match-wins, no deduplication
        let config = DataSourceConfig::new(
            "v",
            vec![
                ThresholdRule::new(RuleOperator::Ge, 0.0, "first"),
                ThresholdRule::new(RuleOperator::Ge, 0.0, "second"),
            ],
        );
        assert_eq!(classify(&feature_with("v", json!(1)), Some(&config)), "first");
    }

    #[test]
    fn test_no_config_is_default_color() {
        assert_eq!(classify(&feature_with("v", json!(5)), None), "blue");
    }

    #[test]
    fn test_non_numeric_is_fallback_color() {
        let config = temp_config();
        assert_eq!(
            classify(&feature_with("temperature_2m", json!("abc")), Some(&config)),
            "gray"
        );
        assert_eq!(
            classify(&feature_with("temperature_2m", json!("")), Some(&config)),
            "gray"
        );
        assert_eq!(
            classify(&feature_with("temperature_2m", json!(true)), Some(&config)),
            "gray"
        );
        assert_eq!(
            classify(&feature_with("temperature_2m", json!(null)), Some(&config)),
            "gray"
        );
    }

    #[test]
    fn test_missing_field_is_fallback_color() {
        let config = temp_config();
        assert_eq!(
            classify(&feature_with("humidity", json!(50)), Some(&config)),
            "gray"
        );

        let no_properties = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };
        assert_eq!(classify(&no_properties, Some(&config)), "gray");
    }

    #[test]
    fn test_fallback_beats_catch_all_rule() {
        // Even a rule that matches everything is never consulted for an
        // unparseable value
        let config = DataSourceConfig::new(
            "v",
            vec![ThresholdRule::new(RuleOperator::Ge, f64::MIN, "everything")],
        );
        assert_eq!(classify(&feature_with("v", json!("abc")), Some(&config)), "gray");
    }

    #[test]
    fn test_no_matching_rule_is_default_color() {
        let config = DataSourceConfig::new(
            "v",
            vec![ThresholdRule::new(RuleOperator::Lt, 0.0, "red")],
        );
        assert_eq!(classify(&feature_with("v", json!(5)), Some(&config)), "blue");
    }

    #[test]
    fn test_numeric_string_values_parse() {
        let config = temp_config();
        assert_eq!(
            classify(&feature_with("temperature_2m", json!("5.5")), Some(&config)),
            "red"
        );
        assert_eq!(
            classify(&feature_with("temperature_2m", json!(" 12 ")), Some(&config)),
            "green"
        );
    }

    #[test]
    fn test_exact_equality_no_epsilon() {
        let config = DataSourceConfig::new(
            "v",
            vec![ThresholdRule::new(RuleOperator::Eq, 10.0, "exact")],
        );
        assert_eq!(classify(&feature_with("v", json!(10.0)), Some(&config)), "exact");
        assert_eq!(
            classify(&feature_with("v", json!(10.0000001)), Some(&config)),
            "blue"
        );
    }

    #[test]
    fn test_classify_collection_order() {
        let config = temp_config();
        let collection = FeatureCollection {
            bbox: None,
            features: vec![
                feature_with("temperature_2m", json!(5)),
                feature_with("temperature_2m", json!(15)),
                feature_with("temperature_2m", json!("abc")),
            ],
            foreign_members: None,
        };

        assert_eq!(
            classify_collection(&collection, Some(&config)),
            vec!["red", "green", "gray"]
        );
    }

    #[test]
    fn test_apply_colors_writes_property() {
        let config = temp_config();
        let collection = FeatureCollection {
            bbox: None,
            features: vec![feature_with("temperature_2m", json!(5))],
            foreign_members: None,
        };

        let styled = apply_colors(&collection, Some(&config));
        let color = styled.features[0]
            .properties
            .as_ref()
            .unwrap()
            .get("color")
            .unwrap();
        assert_eq!(color, &json!("red"));

        // Source collection untouched
        assert!(collection.features[0]
            .properties
            .as_ref()
            .unwrap()
            .get("color")
            .is_none());
    }
}
