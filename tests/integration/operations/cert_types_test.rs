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

//! Integration tests for getCustomerCertTypes

use crate::integration::MockComodoServer;
use comodo_ca_client::Outcome;

#[tokio::test]
async fn test_two_cert_types() {
    let mock = MockComodoServer::start().await;
    mock.mock_cert_types(&[(224, "PlatinumSSL Certificate"), (225, "InstantSSL Certificate")])
        .await;

    let client = mock.client().await;
    let result = client.get_cert_types().await.expect("get_cert_types failed");

    assert_eq!(result.outcome(), Outcome::Success);
    assert_eq!(result.status().code, 0);
    let catalog = result.data().expect("catalog");
    assert_eq!(catalog.len(), 2);

    let platinum = catalog.find("PlatinumSSL Certificate").expect("PlatinumSSL");
    assert_eq!(platinum.id, 224);
    assert_eq!(platinum.terms, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_request_carries_auth_block() {
    let mock = MockComodoServer::start().await;
    mock.mock_cert_types(&[]).await;

    let client = mock.client().await;
    client.get_cert_types().await.expect("get_cert_types failed");

    let requests = mock.inner().received_requests().await.expect("recording");
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("operation request");
    let body = String::from_utf8_lossy(&post.body);

    assert!(body.contains("<authData><login>api-user</login><password>password</password><customerLoginUri>acme</customerLoginUri></authData>"));
    assert!(body.contains("xmlns:tns=\"http://ssl.ws.epki.comodo.com/\""));
    assert_eq!(
        post.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/xml; charset=utf-8")
    );
}

#[tokio::test]
async fn test_invalid_credentials() {
    let mock = MockComodoServer::start().await;
    mock.mock_operation("getCustomerCertTypes", "<statusCode>-100</statusCode>")
        .await;

    let client = mock.client().await;
    let result = client.get_cert_types().await.expect("get_cert_types failed");

    assert!(result.is_error());
    assert_eq!(result.status().code, -100);
    assert_eq!(
        result.status().message,
        "Invalid authentication data for customer"
    );
    assert!(result.data().is_none());
}
