//! Integration tests

use assertenv::lookup::{from_map, with_files};
use assertenv::{
    EnvSchema, Enum, FieldKind, HostPort, Int, IntList, Options, RequiredEnum, RequiredHostPort,
    RequiredInt, RequiredIntList, RequiredText, RequiredTextList, RequiredUrl, Text, TextList,
    Url, ValidationError, Validator, ValueError,
};
use serial_test::serial;
use std::env;

#[derive(Debug, Default, EnvSchema)]
struct Required {
    #[env(name = "BEEP")]
    pub beep: RequiredText,
}

#[derive(Debug, Default, EnvSchema)]
struct WithFallback {
    #[env(name = "BEEP")]
    pub beep: RequiredText,

    #[env(name = "BRRT", default = "fallback value")]
    pub brrt: RequiredText,
}

#[derive(Debug, Default, EnvSchema)]
struct WithSeparator {
    #[env(name = "BZZT", separator = ":")]
    pub bzzt: TextList,
}

#[derive(Debug, Default, EnvSchema)]
struct Untagged {
    #[env(name = "BEEP")]
    pub beep: Text,

    pub boop: Text,
}

#[derive(Debug, Default, EnvSchema)]
struct Unsupported {
    #[env(name = "NAME")]
    pub name: Text,

    #[env(name = "RETRIES")]
    pub retries: u32,
}

#[derive(Debug, Default, serde::Serialize, EnvSchema)]
#[env(prefix = "APP_")]
struct Everything {
    #[env(name = "WORKERS", default = 4)]
    pub workers: Int,

    #[env(name = "PORT")]
    pub port: RequiredInt,

    #[env(name = "NAME")]
    pub name: Text,

    #[env(name = "DATABASE_URL")]
    pub database_url: RequiredUrl,

    #[env(name = "CALLBACK_URL")]
    pub callback_url: Url,

    #[env(name = "LOG_FORMAT", enum = "json,pretty")]
    pub log_format: Enum,

    #[env(name = "MODE", values = "dev,staging,prod", default = "dev")]
    pub mode: RequiredEnum,

    #[env(name = "TAGS")]
    pub tags: TextList,

    #[env(name = "ORIGINS", separator = " ")]
    pub origins: RequiredTextList,

    #[env(name = "SHARDS", separator = ";")]
    pub shards: IntList,

    #[env(name = "RETRY_DELAYS")]
    pub retry_delays: RequiredIntList,

    #[env(name = "METRICS")]
    pub metrics: HostPort,

    #[env(name = "LISTEN")]
    pub listen: RequiredHostPort,
}

fn everything_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("APP_PORT", "8080"),
        ("APP_DATABASE_URL", "postgres://db.internal:5432/app"),
        ("APP_ORIGINS", "https://a.example https://b.example"),
        ("APP_RETRY_DELAYS", "100,200,400"),
        ("APP_LISTEN", "[::1]:8080"),
    ]
}

#[test]
fn test_required_empty_fails() {
    let result = Required::from_lookup(from_map([("BEEP", "")]));

    match result {
        Err(ValidationError::Value { field, key, source }) => {
            assert_eq!(field, "beep");
            assert_eq!(key, "BEEP");
            assert_eq!(source, ValueError::UnexpectedEmptyValue);
        }
        other => panic!("Expected UnexpectedEmptyValue, got {other:?}"),
    }
}

#[test]
fn test_fallback_used_for_missing_key() {
    let config = WithFallback::from_lookup(from_map([("BEEP", "hello world")])).unwrap();
    assert_eq!(config.beep, "hello world");
    assert_eq!(config.brrt, "fallback value");
}

#[test]
fn test_fallback_used_for_empty_value() {
    let config =
        WithFallback::from_lookup(from_map([("BEEP", "hello world"), ("BRRT", "")])).unwrap();
    assert_eq!(config.brrt, "fallback value");
}

#[test]
fn test_custom_separator() {
    let config = WithSeparator::from_lookup(from_map([("BZZT", "bee:goes:buzz")])).unwrap();
    assert_eq!(config.bzzt.as_slice(), ["bee", "goes", "buzz"]);
    assert_eq!(config.bzzt.to_string(), "bee,goes,buzz");
}

#[test]
fn test_untagged_field_fails_regardless_of_lookup() {
    let lookup = |_: &str| "anything".to_string();
    let err = Untagged::from_lookup(lookup).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UntaggedField {
            field: "boop".to_string()
        }
    );
}

#[test]
fn test_unsupported_type_fails() {
    let err = Unsupported::from_lookup(from_map([("NAME", "x"), ("RETRIES", "3")])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownFieldType {
            field: "retries".to_string(),
            type_name: "u32".to_string(),
        }
    );
}

#[test]
fn test_generated_schema() {
    let schema = Everything::schema();
    assert_eq!(schema.len(), 13);

    let kinds: Vec<_> = schema.fields().iter().filter_map(|f| f.kind()).collect();
    assert_eq!(kinds[0], FieldKind::Int);
    assert_eq!(kinds[12], FieldKind::RequiredHostPort);

    let mode = &schema.fields()[6];
    assert_eq!(mode.name(), "mode");
    assert_eq!(mode.meta().key.as_deref(), Some("APP_MODE"));
    assert_eq!(mode.meta().fallback.as_deref(), Some("dev"));
}

#[test]
fn test_everything_minimal() {
    let config = Everything::from_lookup(from_map(everything_env())).unwrap();

    assert_eq!(config.workers, 4);
    assert_eq!(config.port, 8080);
    assert_eq!(config.name, "");
    assert_eq!(config.database_url, "postgres://db.internal:5432/app");
    assert_eq!(config.callback_url, "");
    assert_eq!(config.log_format, "");
    assert_eq!(config.mode, "dev");
    assert!(config.tags.is_empty());
    assert_eq!(
        config.origins.as_slice(),
        ["https://a.example", "https://b.example"]
    );
    assert!(config.shards.is_empty());
    assert_eq!(config.retry_delays.as_slice(), [100, 200, 400]);
    assert_eq!(config.metrics, HostPort::default());
    assert_eq!(config.listen.host(), "::1");
    assert_eq!(config.listen.port(), "8080");
}

#[test]
fn test_everything_full() {
    let mut env = everything_env();
    env.extend([
        ("APP_WORKERS", "16"),
        ("APP_NAME", "billing"),
        ("APP_CALLBACK_URL", "https://Hooks.Example.com"),
        ("APP_LOG_FORMAT", "json"),
        ("APP_MODE", "prod"),
        ("APP_TAGS", "a,,b"),
        ("APP_SHARDS", "1;2;3"),
        ("APP_METRICS", "0.0.0.0:9090"),
    ]);
    let config = Everything::from_lookup(from_map(env)).unwrap();

    assert_eq!(config.workers, 16);
    assert_eq!(config.name, "billing");
    assert_eq!(config.callback_url, "https://hooks.example.com");
    assert_eq!(config.log_format, "json");
    assert_eq!(config.mode, "prod");
    assert_eq!(config.tags.as_slice(), ["a", "", "b"]);
    assert_eq!(config.shards.as_slice(), [1, 2, 3]);
    assert_eq!(config.metrics.to_string(), "0.0.0.0:9090");
}

#[test]
fn test_everything_first_error_wins() {
    let mut env = everything_env();
    env.extend([("APP_LOG_FORMAT", "JSON"), ("APP_SHARDS", "1;;3")]);
    let err = Everything::from_lookup(from_map(env)).unwrap_err();

    assert_eq!(err.field(), "log_format");
    assert!(matches!(
        err.value_error(),
        Some(ValueError::InvalidEnumValue { value, .. }) if value == "JSON"
    ));
}

#[test]
fn test_everything_invalid_values() {
    let cases = [
        ("APP_PORT", "eighty", "port"),
        ("APP_DATABASE_URL", "db.internal:5432", "database_url"),
        ("APP_RETRY_DELAYS", "100,,400", "retry_delays"),
        ("APP_LISTEN", "localhost", "listen"),
        ("APP_MODE", "test", "mode"),
    ];

    for (key, value, field) in cases {
        let mut env = everything_env();
        env.retain(|(k, _)| *k != key);
        env.push((key, value));

        let err = Everything::from_lookup(from_map(env)).unwrap_err();
        assert_eq!(err.field(), field, "{key}={value}");
    }
}

#[test]
fn test_everything_serializes() {
    let config = Everything::from_lookup(from_map(everything_env())).unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["port"], 8080);
    assert_eq!(json["retry_delays"], serde_json::json!([100, 200, 400]));
    assert_eq!(json["listen"], "[::1]:8080");
}

#[test]
fn test_validator_keeps_target_on_failure() {
    let mut config = WithFallback {
        beep: RequiredText::new("previous"),
        ..WithFallback::default()
    };
    let options = Options::new().lookup(|_: &str| String::new());

    let result = Validator::with_options(&mut config, options).validate();
    assert!(result.is_err());
    assert_eq!(config.beep, "previous");
}

#[test]
#[serial]
fn test_from_env() {
    env::set_var("BEEP", "from process");
    env::remove_var("BRRT");

    let config = WithFallback::from_env().unwrap();
    assert_eq!(config.beep, "from process");
    assert_eq!(config.brrt, "fallback value");

    env::remove_var("BEEP");
}

#[test]
#[serial]
fn test_validator_from_env() {
    env::set_var("BZZT", "x:y");

    let mut config = WithSeparator::default();
    Validator::new(&mut config).validate().unwrap();
    assert_eq!(config.bzzt.len(), 2);

    env::remove_var("BZZT");
}

#[test]
#[serial]
fn test_file_based_secret() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "super_secret_key").unwrap();

    env::remove_var("BEEP");
    env::set_var("BEEP_FILE", temp_file.path());

    let config = Required::from_lookup(with_files(assertenv::lookup::process_env)).unwrap();
    assert_eq!(config.beep, "super_secret_key");

    env::remove_var("BEEP_FILE");
}
