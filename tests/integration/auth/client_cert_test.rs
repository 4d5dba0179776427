//! Integration tests for TLS client certificate authentication

use crate::integration::MockComodoServer;
use comodo_ca_client::{ComodoClient, ComodoError};
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a throwaway certificate and key, returning their paths
fn write_identity(dir: &TempDir) -> (PathBuf, PathBuf) {
    let certified = rcgen::generate_simple_self_signed(vec!["client.example.com".to_string()])
        .expect("Failed to generate identity");
    let cert_path = dir.path().join("client.crt");
    let key_path = dir.path().join("client.key");
    std::fs::write(&cert_path, certified.cert.pem()).expect("write cert");
    std::fs::write(&key_path, certified.key_pair.serialize_pem()).expect("write key");
    (cert_path, key_path)
}

#[tokio::test]
async fn test_client_cert_configured() {
    let mock = MockComodoServer::start().await;
    mock.mock_cert_types(&[(224, "PlatinumSSL Certificate")]).await;

    let dir = tempfile::tempdir().expect("tempdir");
    let (cert_path, key_path) = write_identity(&dir);

    let config = mock
        .config_builder()
        .client_cert_auth(true)
        .client_public_certificate(&cert_path)
        .client_private_key(&key_path)
        .build()
        .expect("Valid config");
    assert!(config.client_cert.is_some());

    let client = ComodoClient::new(config)
        .await
        .expect("Client creation failed");
    let result = client.get_cert_types().await.expect("get_cert_types failed");
    assert!(result.is_success());
}

#[tokio::test]
async fn test_paths_ignored_when_disabled() {
    let mock = MockComodoServer::start().await;

    let config = mock
        .config_builder()
        .client_public_certificate("/nonexistent/client.crt")
        .client_private_key("/nonexistent/client.key")
        .build()
        .expect("Valid config");
    assert!(config.client_cert.is_none());

    ComodoClient::new(config)
        .await
        .expect("Client creation failed");
}

#[tokio::test]
async fn test_missing_identity_files() {
    let mock = MockComodoServer::start().await;

    let config = mock
        .config_builder()
        .client_cert_auth(true)
        .client_public_certificate("/nonexistent/client.crt")
        .client_private_key("/nonexistent/client.key")
        .build()
        .expect("Valid config");

    let err = ComodoClient::new(config).await.unwrap_err();
    assert!(matches!(err, ComodoError::Io(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_key_file_without_key() {
    let mock = MockComodoServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");
    let (cert_path, _) = write_identity(&dir);

    let config = mock
        .config_builder()
        .client_cert_auth(true)
        .client_public_certificate(&cert_path)
        .client_private_key(&cert_path)
        .build()
        .expect("Valid config");

    let err = ComodoClient::new(config).await.unwrap_err();
    assert!(matches!(err, ComodoError::InvalidPem(_)), "unexpected error: {err:?}");
}

#[test]
fn test_enabled_without_paths_is_rejected() {
    let err = comodo_ca_client::ComodoClientConfig::builder()
        .api_url("https://hard.cert-manager.com/private/ws/EPKIManagerSSL?wsdl")
        .expect("Valid URL")
        .customer_login_uri("acme")
        .login("api-user")
        .org_id(1)
        .password("password")
        .secret_key("secret")
        .client_cert_auth(true)
        .build()
        .unwrap_err();

    assert!(matches!(err, ComodoError::Config(_)));
    assert!(err.to_string().contains("client_public_certificate"));
}
