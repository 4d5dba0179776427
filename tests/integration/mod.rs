//! Integration test utilities and helpers
//!
//! This module provides a mock Comodo SSL web service: it serves a WSDL
//! and answers SOAP operations with canned envelopes.

#![allow(dead_code)]

use comodo_ca_client::{ComodoClient, ComodoClientConfig, ComodoClientConfigBuilder};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Service path, as on Certificate Manager.
pub const PATH_SERVICE: &str = "/ws/EPKIManagerSSL";

/// Target namespace advertised by the mock WSDL.
pub const NAMESPACE: &str = "http://ssl.ws.epki.comodo.com/";

/// Content type of SOAP 1.1 messages.
pub const CONTENT_TYPE_SOAP: &str = "text/xml; charset=utf-8";

/// A PEM certificate as the service would return it.
pub const CERTIFICATE_PEM: &str = "-----BEGIN CERTIFICATE-----\n\
MIIBszCCAVmgAwIBAgIUQ2VydGlmaWNhdGUgZm9yIHRlc3RpbmcwCgYIKoZIzj0EAwIw\n\
-----END CERTIFICATE-----\n";

/// Mock Comodo SSL service for integration tests
pub struct MockComodoServer {
    server: MockServer,
}

impl MockComodoServer {
    /// Start a mock server that serves the WSDL
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let mock = Self { server };
        mock.mock_wsdl().await;
        mock
    }

    /// Start a mock server without a WSDL
    pub async fn start_bare() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// The WSDL URL to configure the client with
    pub fn api_url(&self) -> String {
        format!("{}{}?wsdl", self.server.uri(), PATH_SERVICE)
    }

    /// Get a reference to the inner MockServer for custom mocking
    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    /// A configuration builder pointing at this server
    pub fn config_builder(&self) -> ComodoClientConfigBuilder {
        ComodoClientConfig::builder()
            .api_url(self.api_url())
            .expect("Valid URL")
            .customer_login_uri("acme")
            .login("api-user")
            .org_id(1234)
            .password("password")
            .secret_key("secret")
    }

    /// A connected client without client certificate authentication
    pub async fn client(&self) -> ComodoClient {
        let config = self.config_builder().build().expect("Valid config");
        ComodoClient::new(config)
            .await
            .expect("Client creation failed")
    }

    async fn mock_wsdl(&self) {
        Mock::given(method("GET"))
            .and(path(PATH_SERVICE))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(wsdl(&format!("{}{}", self.server.uri(), PATH_SERVICE)))
                    .insert_header("Content-Type", CONTENT_TYPE_SOAP),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer `operation` with `return_xml` as the `<return>` content
    pub async fn mock_operation(&self, operation: &str, return_xml: &str) {
        self.mock_operation_expect(operation, return_xml, None).await;
    }

    /// Same as `mock_operation`, verifying the call count when the server drops
    pub async fn mock_operation_expect(
        &self,
        operation: &str,
        return_xml: &str,
        times: Option<u64>,
    ) {
        let mut mock = Mock::given(method("POST"))
            .and(path(PATH_SERVICE))
            .and(body_string_contains(format!("<tns:{operation}>")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(response(operation, return_xml))
                    .insert_header("Content-Type", CONTENT_TYPE_SOAP),
            );
        if let Some(times) = times {
            mock = mock.expect(times);
        }
        mock.mount(&self.server).await;
    }

    /// `getCustomerCertTypes` with status 0 and the given types
    pub async fn mock_cert_types(&self, types: &[(i64, &str)]) {
        let mut body = String::from("<statusCode>0</statusCode>");
        for (id, name) in types {
            body.push_str(&cert_type(*id, name));
        }
        self.mock_operation("getCustomerCertTypes", &body).await;
    }

    /// `enroll` returning `value`
    pub async fn mock_enroll(&self, value: i64) {
        self.mock_operation("enroll", &value.to_string()).await;
    }

    /// `collect` with `status`, attaching `certificate` when given
    pub async fn mock_collect(&self, status: i32, certificate: Option<&str>) {
        let mut body = format!("<statusCode>{status}</statusCode>");
        if let Some(certificate) = certificate {
            body.push_str(&format!(
                "<SSL><renewID>renew-1</renewID><certificate>{certificate}</certificate></SSL>"
            ));
        }
        self.mock_operation("collect", &body).await;
    }

    /// `revoke` returning `status`
    pub async fn mock_revoke(&self, status: i32) {
        self.mock_operation("revoke", &status.to_string()).await;
    }

    /// Answer every operation POST with a SOAP fault
    pub async fn mock_fault(&self, code: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path(PATH_SERVICE))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_string(fault(code, message))
                    .insert_header("Content-Type", CONTENT_TYPE_SOAP),
            )
            .mount(&self.server)
            .await;
    }

    /// Answer every operation POST with `status` and a plain-text body
    pub async fn mock_http_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(PATH_SERVICE))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_string(body)
                    .insert_header("Content-Type", "text/plain"),
            )
            .mount(&self.server)
            .await;
    }
}

/// A `types` element as returned by `getCustomerCertTypes`
pub fn cert_type(id: i64, name: &str) -> String {
    format!(
        "<types><id>{id}</id><name>{name}</name><terms>1</terms><terms>2</terms><terms>3</terms></types>"
    )
}

/// Minimal WSDL advertising `address`
pub fn wsdl(address: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"
             xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
             xmlns:tns="{NAMESPACE}"
             targetNamespace="{NAMESPACE}"
             name="EPKIManagerSSLService">
  <service name="EPKIManagerSSLService">
    <port name="EPKIManagerSSLPort" binding="tns:EPKIManagerSSLPortBinding">
      <soap:address location="{address}"/>
    </port>
  </service>
</definitions>"#
    )
}

/// Response envelope for `operation`
pub fn response(operation: &str, return_xml: &str) -> String {
    format!(
        r#"<?xml version="1.0" ?><S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/"><S:Body><ns2:{operation}Response xmlns:ns2="{NAMESPACE}"><return>{return_xml}</return></ns2:{operation}Response></S:Body></S:Envelope>"#
    )
}

/// Fault envelope
pub fn fault(code: &str, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" ?><S:Envelope xmlns:S="http://schemas.xmlsoap.org/soap/envelope/"><S:Body><S:Fault><faultcode>{code}</faultcode><faultstring>{message}</faultstring></S:Fault></S:Body></S:Envelope>"#
    )
}
