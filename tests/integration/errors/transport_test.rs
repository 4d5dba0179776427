//! Integration tests for HTTP-level failures

use crate::integration::{MockComodoServer, PATH_SERVICE};
use comodo_ca_client::{ComodoClient, ComodoError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_unauthorized() {
    let mock = MockComodoServer::start().await;
    mock.mock_http_error(401, "Unauthorized").await;

    let client = mock.client().await;
    let err = client.get_cert_types().await.unwrap_err();

    assert!(matches!(err, ComodoError::AuthenticationRejected { status: 401 }));
}

#[tokio::test]
async fn test_server_error() {
    let mock = MockComodoServer::start().await;
    mock.mock_http_error(503, "Service Unavailable").await;

    let client = mock.client().await;
    let err = client.collect(1, "X509 PEM Bundle").await.unwrap_err();

    match err {
        ComodoError::ServerError { status, ref message } => {
            assert_eq!(status, 503);
            assert!(message.contains("Service Unavailable"));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_wsdl_forbidden() {
    let mock = MockComodoServer::start_bare().await;
    Mock::given(method("GET"))
        .and(path(PATH_SERVICE))
        .respond_with(ResponseTemplate::new(403))
        .mount(mock.inner())
        .await;

    let config = mock.config_builder().build().expect("Valid config");
    let err = ComodoClient::new(config).await.unwrap_err();

    assert!(matches!(err, ComodoError::AuthenticationRejected { status: 403 }));
}

#[tokio::test]
async fn test_wsdl_not_found() {
    let mock = MockComodoServer::start_bare().await;

    let config = mock.config_builder().build().expect("Valid config");
    let err = ComodoClient::new(config).await.unwrap_err();

    assert!(matches!(err, ComodoError::ServerError { status: 404, .. }));
}

#[tokio::test]
async fn test_connection_refused() {
    let config = comodo_ca_client::ComodoClientConfig::builder()
        .api_url("http://127.0.0.1:1/ws/EPKIManagerSSL?wsdl")
        .expect("Valid URL")
        .customer_login_uri("acme")
        .login("api-user")
        .org_id(1)
        .password("password")
        .secret_key("secret")
        .build()
        .expect("Valid config");

    let err = ComodoClient::new(config).await.unwrap_err();
    assert!(matches!(err, ComodoError::Http(_)));
    assert!(err.is_transport());
}
