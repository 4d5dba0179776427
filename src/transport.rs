//! Transport/session binding to the remote SOAP endpoint.
//!
//! The [`Transport`] trait is the RPC boundary the facade is written
//! against: invoke a named remote operation with parameters and get back
//! the raw `return` element. [`SoapTransport`] is the production
//! implementation over `reqwest`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

use crate::config::ComodoClientConfig;
use crate::error::{ComodoError, Result};
use crate::soap::{self, Param, ServiceDescriptor, XmlNode};
use crate::tls::build_http_client;

/// Content type for SOAP 1.1 requests.
const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Generic "invoke named remote operation" capability.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Invoke `operation` with `params` and return the response's `return`
    /// element.
    ///
    /// # Errors
    ///
    /// Any failure at the RPC boundary: network, TLS, HTTP status, SOAP
    /// fault, or an envelope that cannot be read.
    async fn invoke(&self, operation: &str, params: Vec<Param>) -> Result<XmlNode>;
}

/// SOAP-over-HTTPS transport with a cookie-carrying session.
#[derive(Debug, Clone)]
pub struct SoapTransport {
    http: reqwest::Client,
    service: ServiceDescriptor,
}

impl SoapTransport {
    /// Fetch the service's WSDL and bind to the endpoint it advertises.
    ///
    /// The WSDL is fetched without the client identity; the identity (when
    /// configured) is presented on every operation request afterwards.
    pub async fn connect(config: &ComodoClientConfig) -> Result<Self> {
        let discovery = build_http_client(config, false)?;
        let service = discover(&discovery, &config.api_url).await?;
        tracing::debug!(
            "Bound to {} (namespace {})",
            service.endpoint,
            service.namespace
        );

        let http = if config.client_cert.is_some() {
            build_http_client(config, true)?
        } else {
            discovery
        };

        Ok(Self { http, service })
    }

    /// The service this transport is bound to.
    pub fn service(&self) -> &ServiceDescriptor {
        &self.service
    }
}

#[async_trait]
impl Transport for SoapTransport {
    async fn invoke(&self, operation: &str, params: Vec<Param>) -> Result<XmlNode> {
        let envelope = soap::encode_request(&self.service.namespace, operation, &params);
        tracing::debug!("POST {} ({})", self.service.endpoint, operation);

        let response = self
            .http
            .post(self.service.endpoint.clone())
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .header("SOAPAction", "\"\"")
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match soap::parse_response(&body, operation) {
            Ok(ret) if status.is_success() => Ok(ret),
            Err(fault @ ComodoError::SoapFault { .. }) => Err(fault),
            Err(err) if status.is_success() => Err(err),
            _ if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN => {
                Err(ComodoError::AuthenticationRejected {
                    status: status.as_u16(),
                })
            }
            _ => Err(ComodoError::server_error(status.as_u16(), body)),
        }
    }
}

/// GET the WSDL and read the endpoint address and namespace from it.
async fn discover(http: &reqwest::Client, wsdl_url: &Url) -> Result<ServiceDescriptor> {
    tracing::debug!("GET {}", wsdl_url);

    let response = http.get(wsdl_url.clone()).send().await?;
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ComodoError::AuthenticationRejected {
            status: status.as_u16(),
        });
    }

    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ComodoError::server_error(status.as_u16(), message));
    }

    let body = response.text().await?;
    soap::parse_wsdl(&body, wsdl_url)
}
