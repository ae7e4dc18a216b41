#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized config JSON parsing tests
// ============================================================================

#[test_case(r#"{"log_level": "info"}"#, "info")]
#[test_case(r#"{"log_level": "debug"}"#, "debug")]
#[test_case(r#"{"log_level": "trace"}"#, "trace")]
#[test_case(r#"{}"#, "info")]
fn GeneratorConfig___log_level_json___parses_correctly(json: &str, expected_level: &str) {
    let config = GeneratorConfig::from_json(json.as_bytes()).unwrap();
    assert_eq!(config.log_level, expected_level);
}

#[test_case(r#"{"known_modules": []}"#, 0)]
#[test_case(r#"{"known_modules": ["strings"]}"#, 1)]
#[test_case(r#"{"known_modules": ["strings", "hybroid/ast", "hybroid/tokens"]}"#, 3)]
fn GeneratorConfig___known_modules_json___parses_correctly(json: &str, expected_len: usize) {
    let config = GeneratorConfig::from_json(json.as_bytes()).unwrap();
    assert_eq!(config.known_modules.len(), expected_len);
}

// ============================================================================
// Parameterized validation tests
// ============================================================================

#[test_case(r#"{"alert_id_prefix": ""}"#)]
#[test_case(r#"{"libraries": [{"name": "", "slug": "x"}]}"#)]
#[test_case(r#"{"known_modules": [""]}"#)]
fn GeneratorConfig___invalid_json___fails_validation(json: &str) {
    let config = GeneratorConfig::from_json(json.as_bytes()).unwrap();
    assert!(config.validate().is_err());
}
