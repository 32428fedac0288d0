use std::fs;

use pantry_recipes::config::{ConfigError, SuggestionConfig, DEFAULT_MEALDB_BASE_URL};
use tempfile::tempdir;

#[test]
fn defaults_match_v0() {
    let config = SuggestionConfig::default();

    assert_eq!(config, SuggestionConfig::v0());
    assert_eq!(config.max_keywords, 3);
    assert_eq!(config.max_suggestions, 6);
    assert_eq!(config.per_keyword_limit, 6);
    assert_eq!(config.urgency.urgent_within_days, 2);
    assert_eq!(config.urgency.soon_within_days, 5);
    assert_eq!(config.mealdb.base_url, DEFAULT_MEALDB_BASE_URL);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_document_is_all_defaults() {
    assert_eq!(SuggestionConfig::from_toml_str("").unwrap(), SuggestionConfig::v0());
}

#[test]
fn partial_document_overrides_only_given_fields() {
    let config = SuggestionConfig::from_toml_str(
        r#"
        max_suggestions = 10

        [urgency]
        soon_within_days = 7

        [mealdb]
        timeout_secs = 3
        "#,
    )
    .unwrap();

    assert_eq!(config.max_suggestions, 10);
    assert_eq!(config.max_keywords, 3);
    assert_eq!(config.urgency.urgent_within_days, 2);
    assert_eq!(config.urgency.soon_within_days, 7);
    assert_eq!(config.mealdb.timeout_secs, 3);
    assert_eq!(config.mealdb.base_url, DEFAULT_MEALDB_BASE_URL);
}

#[test]
fn invalid_values_rejected() {
    let zero = SuggestionConfig::from_toml_str("max_keywords = 0");
    assert!(matches!(zero, Err(ConfigError::ValidationError(_))));

    let inverted = SuggestionConfig::from_toml_str(
        r#"
        [urgency]
        urgent_within_days = 6
        soon_within_days = 5
        "#,
    );
    assert!(matches!(inverted, Err(ConfigError::ValidationError(_))));

    let no_timeout = SuggestionConfig::from_toml_str("[mealdb]\ntimeout_secs = 0");
    assert!(matches!(no_timeout, Err(ConfigError::ValidationError(_))));

    let garbage = SuggestionConfig::from_toml_str("max_keywords = \"three\"");
    assert!(matches!(garbage, Err(ConfigError::ParseError { .. })));
}

#[test]
fn load_from_file_and_missing_file() {
    let dir = tempdir().unwrap();

    let missing = SuggestionConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(missing, SuggestionConfig::v0());

    let path = dir.path().join("pantry.toml");
    fs::write(&path, "per_keyword_limit = 4\n").unwrap();
    let loaded = SuggestionConfig::load_from(&path).unwrap();
    assert_eq!(loaded.per_keyword_limit, 4);
}

#[test]
fn roundtrips_through_toml() {
    let config = SuggestionConfig::v0();
    let text = toml::to_string_pretty(&config).unwrap();

    assert_eq!(SuggestionConfig::from_toml_str(&text).unwrap(), config);
}
