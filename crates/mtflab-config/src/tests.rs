//! Tests for analysis configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        initial_list = [4, 3, 2, 1, 0]
        random_seed = 42

        [[sequences]]
        name = "sawtooth"
        requests = [4, 3, 2, 1, 0, 1, 2, 3, 4]

        [search]
        length = 20
    "#;

    let config = AnalysisConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.initial_list, vec![4, 3, 2, 1, 0]);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.sequences.len(), 1);
    assert_eq!(config.sequences[0].name, "sawtooth");
    assert_eq!(config.search_length(), Some(20));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        initial_list: [0, 1, 2]
        random_seed: 42
        sequences:
          - name: front
            requests: [0, 0, 0]
        search:
          length: 15
    "#;

    let config = AnalysisConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.initial_list, vec![0, 1, 2]);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.search_length(), Some(15));
}

#[test]
fn test_minimal_toml() {
    let config = AnalysisConfig::from_toml_str("initial_list = [0, 1]").unwrap();
    assert_eq!(config.random_seed, None);
    assert!(config.sequences.is_empty());
    assert_eq!(config.search_length(), None);
}

#[test]
fn test_builder() {
    let config = AnalysisConfig::new()
        .with_initial_list(vec![0, 1, 2])
        .with_sequence("pairs", vec![0, 1, 0, 1])
        .with_search_length(12)
        .with_random_seed(123);

    assert_eq!(config.initial_list, vec![0, 1, 2]);
    assert_eq!(config.sequences.len(), 1);
    assert_eq!(config.search_length(), Some(12));
    assert_eq!(config.random_seed, Some(123));
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_scenario() {
    let config = AnalysisConfig::default();
    assert_eq!(config.initial_list, vec![0, 1, 2, 3, 4]);
    assert_eq!(config.search_length(), Some(20));
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_empty_initial_list() {
    let config = AnalysisConfig::new().with_initial_list(Vec::new());
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_duplicate_elements() {
    let config = AnalysisConfig::new().with_initial_list(vec![0, 1, 1]);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("repeats element 1"));
}

#[test]
fn test_validate_rejects_stray_sequence_element() {
    let config = AnalysisConfig::new().with_sequence("stray", vec![0, 9]);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("element 9"));
}

#[test]
fn test_initial_state() {
    let state = AnalysisConfig::default().initial_state().unwrap();
    assert_eq!(state.elements(), &[0, 1, 2, 3, 4]);
}
