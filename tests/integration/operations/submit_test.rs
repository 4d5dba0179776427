// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for submit (getCustomerCertTypes + enroll)

use crate::integration::MockComodoServer;
use comodo_ca_client::{ComodoError, SubmissionRequest};

const CSR: &str = "-----BEGIN CERTIFICATE REQUEST-----\n\
MIIBVTCB/QIBADAbMRkwFwYDVQQDDBB0ZXN0LmV4YW1wbGUuY29t\n\
-----END CERTIFICATE REQUEST-----\n";

fn platinum() -> SubmissionRequest {
    SubmissionRequest::new("PlatinumSSL Certificate", CSR, "foo,bar", 3)
        .server_type("Apache/ModSSL")
}

#[tokio::test]
async fn test_submit_returns_tracking_id() {
    let mock = MockComodoServer::start().await;
    mock.mock_cert_types(&[(224, "PlatinumSSL Certificate"), (225, "InstantSSL Certificate")])
        .await;
    mock.mock_enroll(123456).await;

    let client = mock.client().await;
    let result = client.submit(&platinum()).await.expect("submit failed");

    assert!(result.is_success(), "unexpected status: {:?}", result.status());
    assert_eq!(result.data().expect("enrollment").certificate_id, 123456);
}

#[tokio::test]
async fn test_enroll_parameters() {
    let mock = MockComodoServer::start().await;
    mock.mock_cert_types(&[(224, "PlatinumSSL Certificate")]).await;
    mock.mock_enroll(123456).await;

    let client = mock.client().await;
    client
        .submit(&platinum().subject_alt_names("www.example.com"))
        .await
        .expect("submit failed");

    let requests = mock.inner().received_requests().await.expect("recording");
    let enroll = requests
        .iter()
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .find(|body| body.contains("<tns:enroll>"))
        .expect("enroll request");

    assert!(enroll.contains("<orgId>1234</orgId>"));
    assert!(enroll.contains("<secretKey>secret</secretKey>"));
    assert!(enroll.contains("<phrase>foo,bar</phrase>"));
    assert!(enroll.contains("<subjAltNames>www.example.com</subjAltNames>"));
    assert!(enroll.contains("<certType><id>224</id><name>PlatinumSSL Certificate</name>"));
    assert!(enroll.contains("<numberServers>1</numberServers>"));
    assert!(enroll.contains("<serverType>2</serverType>"));
    assert!(enroll.contains("<term>3</term>"));
    assert!(enroll.contains("<comments></comments>") || enroll.contains("<comments/>"));
}

#[tokio::test]
async fn test_unknown_cert_type_does_not_enroll() {
    let mock = MockComodoServer::start().await;
    mock.mock_cert_types(&[(225, "InstantSSL Certificate")]).await;
    mock.mock_operation_expect("enroll", "1", Some(0)).await;

    let client = mock.client().await;
    let err = client.submit(&platinum()).await.unwrap_err();

    assert!(matches!(err, ComodoError::UnknownCertType(_)));
}

#[tokio::test]
async fn test_unknown_server_type() {
    let mock = MockComodoServer::start().await;
    mock.mock_operation_expect("getCustomerCertTypes", "<statusCode>0</statusCode>", Some(0))
        .await;

    let client = mock.client().await;
    let request = platinum().server_type("Apache");
    let err = client.submit(&request).await.unwrap_err();

    assert!(matches!(err, ComodoError::UnknownServerType(ref label) if label == "Apache"));
}

#[tokio::test]
async fn test_rejected_csr() {
    let mock = MockComodoServer::start().await;
    mock.mock_cert_types(&[(224, "PlatinumSSL Certificate")]).await;
    mock.mock_enroll(-10).await;

    let client = mock.client().await;
    let result = client.submit(&platinum()).await.expect("submit failed");

    assert!(result.is_error());
    assert_eq!(result.status().code, -10);
    assert_eq!(result.status().message, "The CSR cannot be decoded!");
    assert!(result.data().is_none());
}
