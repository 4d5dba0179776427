//! Error types for the Comodo CA client.
//!
//! Errors fall into two families. Transport errors cover everything that
//! went wrong between this process and the remote service (network, TLS,
//! HTTP status, SOAP faults, unreadable envelopes). Usage errors are caught
//! locally before a remote call that depends on them is made.
//!
//! Remote business errors (a non-success `statusCode` from the service) are
//! not errors at this level: they are returned as a
//! [`ServiceResult`](crate::types::ServiceResult) with an error outcome.

use thiserror::Error;

/// Result type alias using [`ComodoError`].
pub type Result<T> = std::result::Result<T, ComodoError>;

/// Errors that can occur while talking to the Comodo SSL web service.
#[derive(Debug, Error)]
pub enum ComodoError {
    /// TLS configuration error (client identity, HTTP client setup).
    #[error("TLS error: {0}")]
    Tls(String),

    /// HTTP request or response error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status and no SOAP fault.
    #[error("Server error {status}: {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The service rejected the transport-level credentials (HTTP 401/403).
    #[error("Authentication rejected by server (HTTP {status})")]
    AuthenticationRejected {
        /// HTTP status code.
        status: u16,
    },

    /// The service returned a SOAP fault.
    #[error("SOAP fault {code}: {message}")]
    SoapFault {
        /// `faultcode` element.
        code: String,
        /// `faultstring` element.
        message: String,
    },

    /// The response envelope parsed but did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The response body was not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid PEM data in the client identity.
    #[error("Invalid PEM data: {0}")]
    InvalidPem(String),

    /// I/O error (reading client certificate files, config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The certificate type name is not in the account's catalog.
    #[error("Unknown certificate type: '{0}'")]
    UnknownCertType(String),

    /// The server type label is not one the service defines.
    #[error("Unknown server type: '{0}'")]
    UnknownServerType(String),

    /// The format type label is not one the service defines.
    #[error("Unknown format type: '{0}'")]
    UnknownFormatType(String),
}

impl ComodoError {
    /// Create a TLS error with the given message.
    pub fn tls(msg: impl Into<String>) -> Self {
        Self::Tls(msg.into())
    }

    /// Create a server error with status and message.
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// Create a SOAP fault error.
    pub fn soap_fault(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SoapFault {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a malformed response error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Create an XML error.
    pub fn xml(msg: impl Into<String>) -> Self {
        Self::Xml(msg.into())
    }

    /// Create an invalid PEM error.
    pub fn invalid_pem(msg: impl Into<String>) -> Self {
        Self::InvalidPem(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if the failure happened at the RPC boundary.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Tls(_)
                | Self::Http(_)
                | Self::ServerError { .. }
                | Self::AuthenticationRejected { .. }
                | Self::SoapFault { .. }
                | Self::MalformedResponse(_)
                | Self::Xml(_)
                | Self::InvalidPem(_)
                | Self::Io(_)
        )
    }

    /// Returns true if the caller supplied something the client could reject
    /// without contacting the service.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::Url(_)
                | Self::UnknownCertType(_)
                | Self::UnknownServerType(_)
                | Self::UnknownFormatType(_)
        )
    }
}
