//! Comodo SSL web service operations.
//!
//! Each submodule builds the parameters for one remote operation and
//! classifies its raw `return` element into a
//! [`ServiceResult`](crate::types::ServiceResult). The public API is exposed
//! through [`ComodoClient`](crate::ComodoClient).

pub mod cert_types;
pub mod collect;
pub mod enroll;
pub mod revoke;

use crate::config::ComodoClientConfig;
use crate::error::{ComodoError, Result};
use crate::soap::{Param, XmlNode};

/// Remote operation names.
pub mod names {
    /// List certificate types.
    pub const GET_CUSTOMER_CERT_TYPES: &str = "getCustomerCertTypes";
    /// Submit a CSR.
    pub const ENROLL: &str = "enroll";
    /// Collect an issued certificate.
    pub const COLLECT: &str = "collect";
    /// Revoke a certificate.
    pub const REVOKE: &str = "revoke";
}

/// The `authData` block carried by every request.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthData {
    login: String,
    password: String,
    customer_login_uri: String,
}

impl std::fmt::Debug for AuthData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthData")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("customer_login_uri", &self.customer_login_uri)
            .finish()
    }
}

impl AuthData {
    /// Build the block from the client configuration.
    pub fn from_config(config: &ComodoClientConfig) -> Self {
        Self {
            login: config.login.clone(),
            password: config.password.clone(),
            customer_login_uri: config.customer_login_uri.clone(),
        }
    }

    /// The block as an operation parameter.
    pub fn to_param(&self) -> Param {
        Param::structure(
            "authData",
            vec![
                Param::text("login", self.login.as_str()),
                Param::text("password", self.password.as_str()),
                Param::text("customerLoginUri", self.customer_login_uri.as_str()),
            ],
        )
    }
}

/// Read the `statusCode` child of a structured return.
pub(crate) fn status_code(ret: &XmlNode) -> Result<i32> {
    let node = ret
        .child("statusCode")
        .ok_or_else(|| ComodoError::malformed("response has no statusCode"))?;
    to_i32(node.as_i64()?)
}

pub(crate) fn to_i32(value: i64) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| ComodoError::malformed(format!("status code {value} out of range")))
}
