use super::*;

use crate::schema::Config;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_zero_limits() {
    let mut config = Config::default();
    config.engine.default_max_nodes = 0;
    config.engine.default_query_max = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "engine.default_max_nodes"));
    assert!(result.errors.iter().any(|e| e.path == "engine.default_query_max"));
}

#[test]
fn test_validate_zero_safety_multiple() {
    let mut config = Config::default();
    config.engine.safety_multiple = 0;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "engine.safety_multiple"));
}

#[test]
fn test_validate_large_limits_warn() {
    let mut config = Config::default();
    config.engine.default_max_nodes = 1_000_000;
    config.engine.safety_multiple = 5_000;

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn test_validate_default_fields() {
    let mut config = Config::default();
    config.engine.default_fields = vec!["sid".to_string(), "textSnippet".to_string()];
    assert!(ConfigValidator::validate(&config).unwrap().is_valid());

    config.engine.default_fields.push("colour".to_string());
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors[0].message.contains("colour"));
}

#[test]
fn test_validate_empty_frame_id() {
    let mut config = Config::default();
    config.provider.frame_id = "  ".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "provider.frame_id"));
}

#[test]
fn test_validate_empty_tree_path() {
    let mut config = Config::default();
    config.provider.tree_path = Some(String::new());

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "provider.tree_path"));
}

#[test]
fn test_validate_log_levels() {
    let mut config = Config::default();
    for level in ["trace", "DEBUG", "warn", "axsid_core=debug,info"] {
        config.logging.level = level.to_string();
        assert!(ConfigValidator::validate(&config).unwrap().is_valid(), "{}", level);
    }

    config.logging.level = "loud".to_string();
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "logging.level"));
}

#[test]
fn test_validate_log_dir_is_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut config = Config::default();
    config.logging.dir = Some(file.path().to_path_buf());

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "logging.dir"));
}

#[test]
fn test_into_error() {
    let mut config = Config::default();
    config.engine.snippet_max_chars = 0;

    let err = ConfigValidator::validate(&config).unwrap().into_error().unwrap();
    assert!(err.to_string().contains("engine.snippet_max_chars"));

    let ok = ConfigValidator::validate(&Config::default()).unwrap();
    assert!(ok.into_error().is_none());
}

#[test]
fn test_validation_result_default() {
    let result = ValidationResult::default();
    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validation_warning_new() {
    let warning = ValidationWarning::new("engine.safety_multiple", "very high");
    assert_eq!(warning.path, "engine.safety_multiple");
    assert_eq!(warning.message, "very high");
}

#[test]
fn test_validate_bounds_path() {
    let mut config = Config::default();
    config.provider.bounds_path = Some("  ".to_string());
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.errors.iter().any(|e| e.path == "provider.bounds_path"));

    config.provider.bounds_path = Some("/tmp/bounds.json".to_string());
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "provider.bounds_path"));

    config.provider.format = TreeFormat::Cdp;
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.warnings.iter().all(|w| w.path != "provider.bounds_path"));
}
