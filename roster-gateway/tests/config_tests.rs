use pretty_assertions::assert_eq;
use roster_gateway::{
    gateway_from_config, Convention, GatewayConfig, GatewayError, DEFAULT_BUFFER_CAPACITY,
};
use std::io::Write;

#[test]
fn default_config() {
    let config = GatewayConfig::default();
    assert_eq!(config.convention, Convention::NativeBuffer);
    assert_eq!(config.buffer_capacity, 1024);
    assert_eq!(DEFAULT_BUFFER_CAPACITY, 1024);
    assert!(config.validate().is_ok());
}

#[test]
fn convention_uses_kebab_case() {
    assert_eq!(
        serde_json::to_string(&Convention::CallerBuffer).unwrap(),
        r#""caller-buffer""#
    );
    assert_eq!(Convention::NativeBuffer.as_str(), "native-buffer");
}

#[test]
fn partial_json_takes_defaults() {
    let config: GatewayConfig = serde_json::from_str(r#"{"convention":"caller-buffer"}"#).unwrap();
    assert_eq!(
        config,
        GatewayConfig {
            convention: Convention::CallerBuffer,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    );
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"convention":"caller-buffer","buffer_capacity":4096}}"#).unwrap();
    let config = GatewayConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.convention, Convention::CallerBuffer);
    assert_eq!(config.buffer_capacity, 4096);
}

#[test]
fn file_with_zero_capacity_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"buffer_capacity":0}}"#).unwrap();
    let err = GatewayConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, GatewayError::InvalidConfig(_)));
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    let err = GatewayConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, GatewayError::Serialization(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GatewayConfig::from_json_file(&dir.path().join("gateway.json")).unwrap_err();
    assert!(matches!(err, GatewayError::Io(_)));
}

#[test]
fn unknown_convention_is_rejected() {
    let result: Result<GatewayConfig, _> = serde_json::from_str(r#"{"convention":"shared-memory"}"#);
    assert!(result.is_err());
}

#[test]
fn gateway_from_config_validates_capacity() {
    let config = GatewayConfig {
        convention: Convention::NativeBuffer,
        buffer_capacity: 0,
    };
    assert!(gateway_from_config(&config).is_err());
}
