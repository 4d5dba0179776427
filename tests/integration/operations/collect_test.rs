//! Integration tests for collect / poll

use crate::integration::{MockComodoServer, CERTIFICATE_PEM};
use comodo_ca_client::{ComodoError, FormatType, IssuanceState, Outcome};

#[tokio::test]
async fn test_collect_attached_certificate() {
    let mock = MockComodoServer::start().await;
    mock.mock_collect(2, Some(CERTIFICATE_PEM)).await;

    let client = mock.client().await;
    let result = client
        .collect(123456, "X509 PEM Bundle")
        .await
        .expect("collect failed");

    assert_eq!(result.outcome(), Outcome::Success);
    let collected = result.data().expect("collected");
    assert_eq!(collected.certificate.as_deref(), Some(CERTIFICATE_PEM));
    assert_eq!(collected.certificate_id, 123456);
    assert_eq!(collected.state, IssuanceState::Attached);
}

#[tokio::test]
async fn test_poll_still_processing() {
    let mock = MockComodoServer::start().await;
    mock.mock_collect(0, None).await;

    let client = mock.client().await;
    let result = client
        .poll("X509 PEM Bundle", 123456)
        .await
        .expect("poll failed");

    assert_eq!(result.outcome(), Outcome::Pending);
    assert!(!result.is_success());
    assert!(!result.is_error());
    assert_eq!(result.status().message, "Certificate being processed by Comodo");
    let collected = result.data().expect("pending carries the id");
    assert_eq!(collected.certificate_id, 123456);
    assert!(collected.certificate.is_none());
}

#[tokio::test]
async fn test_collect_format_code_on_the_wire() {
    let mock = MockComodoServer::start().await;
    mock.mock_collect(0, None).await;

    let client = mock.client().await;
    client
        .collect_format(99, FormatType::Pkcs7DerBundle)
        .await
        .expect("collect failed");

    let requests = mock.inner().received_requests().await.expect("recording");
    let body = requests
        .iter()
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .find(|body| body.contains("<tns:collect>"))
        .expect("collect request");
    assert!(body.contains("<id>99</id>"));
    assert!(body.contains("<formatType>4</formatType>"));
}

#[tokio::test]
async fn test_collect_error_status() {
    let mock = MockComodoServer::start().await;
    mock.mock_collect(-40, None).await;

    let client = mock.client().await;
    let result = client
        .collect(1, "X509 PEM Bundle")
        .await
        .expect("collect failed");

    assert!(result.is_error());
    assert_eq!(result.status().message, "Invalid ID");
    assert!(result.data().is_none());
}

#[tokio::test]
async fn test_collect_unknown_format() {
    let mock = MockComodoServer::start().await;

    let client = mock.client().await;
    let err = client.collect(1, "DER").await.unwrap_err();

    assert!(matches!(err, ComodoError::UnknownFormatType(_)));
}
