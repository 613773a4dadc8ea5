//! Configuration loading

use std::io::Write;
use tempfile::NamedTempFile;
use tracker_gateway::config::LogFormat;
use tracker_gateway::{Config, GatewayError};

#[tokio::test]
async fn test_full_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
server:
  host: "127.0.0.1"
  port: 8088
  max_body_size: 65536
  cors:
    allowed_origins: ["https://tracker.example.com"]
storage:
  database:
    url: "postgresql://tracker:secret@db/tracker"
    max_connections: 20
    transient_error_codes: ["40P01", "40001"]
auth:
  subject_header: "x-client-subject"
batch:
  max_attempts: 4
  base_delay_ms: 50
  max_batch_size: 200
logging:
  level: "info,tracker_gateway=debug"
  format: json
"#,
    )
    .unwrap();

    let config = Config::from_file(file.path()).await.unwrap();

    assert_eq!(config.server().address(), "127.0.0.1:8088");
    assert_eq!(config.storage().database.max_connections, 20);
    assert_eq!(config.auth().subject_header, "x-client-subject");
    assert_eq!(config.batch().max_attempts, 4);
    assert_eq!(config.logging().format, LogFormat::Json);

    let retry = config.batch().retry_config();
    assert_eq!(retry.base_delay.as_millis(), 50);
    assert_eq!(retry.max_jitter.as_millis(), 50);
}

#[tokio::test]
async fn test_cors_wildcard_with_credentials_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        b"server:\n  cors:\n    allowed_origins: [\"*\"]\n    allow_credentials: true\n",
    )
    .unwrap();

    let err = Config::from_file(file.path()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Config(msg) if msg.starts_with("Server config error")));
}

#[tokio::test]
async fn test_unparseable_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"server: [not, a, map]\n").unwrap();

    assert!(matches!(
        Config::from_file(file.path()).await,
        Err(GatewayError::Config(_))
    ));
}

#[tokio::test]
async fn test_missing_file_is_error_for_from_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::from_file(dir.path().join("gateway.yaml")).await.is_err());
}

#[tokio::test]
async fn test_shipped_example_config_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/gateway.example.yaml");
    let config = Config::from_file(path).await.unwrap();

    assert_eq!(config.server().port, 3000);
    assert!(config.auth().enabled);
    assert!(config.auth().fallback_subject.is_none());
    assert_eq!(config.batch().max_attempts, 3);
    assert_eq!(config.batch().max_batch_size, 500);
    assert_eq!(
        config.storage().database.transient_error_codes,
        vec!["40P01", "40001", "1205"]
    );
}
