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

//! Configuration types for the Comodo CA client.
//!
//! [`ComodoClientConfig`] holds the account credentials and transport
//! settings. It is validated once, by [`ComodoClientConfigBuilder::build`],
//! and is immutable afterwards.

mod expand;
mod file;

pub use expand::expand_variables;
pub use file::{ClientCertSection, ConfigFile};

use std::path::PathBuf;

use url::Url;

use crate::error::{ComodoError, Result};

/// Environment variable names read by [`ComodoClientConfig::from_env`].
pub mod env {
    /// WSDL URL of the SSL web service.
    pub const API_URL: &str = "COMODO_API_URL";
    /// Customer login URI.
    pub const CUSTOMER_LOGIN_URI: &str = "CUSTOMER_LOGIN_URI";
    /// API user login.
    pub const LOGIN: &str = "LOGIN";
    /// Organization id.
    pub const ORG_ID: &str = "ORG_ID";
    /// API user password.
    pub const PASSWORD: &str = "PASSWORD";
    /// API secret key.
    pub const SECRET_KEY: &str = "SECRET_KEY";
    /// Client certificate path; enables client certificate authentication.
    pub const CLIENT_CERT: &str = "COMODO_CLIENT_CERT";
    /// Client private key path.
    pub const CLIENT_KEY: &str = "COMODO_CLIENT_KEY";
}

/// Configuration for a [`ComodoClient`](crate::ComodoClient).
#[derive(Clone)]
pub struct ComodoClientConfig {
    /// Full URL of the service WSDL
    /// (e.g. `https://hard.cert-manager.com/private/ws/EPKIManagerSSL?wsdl`).
    pub api_url: Url,

    /// Customer login URI. If the Certificate Manager web UI lives at
    /// `https://hard.cert-manager.com/customer/foo/`, this is `foo`.
    pub customer_login_uri: String,

    /// API user login.
    pub login: String,

    /// Organization id the certificates are requested for.
    pub org_id: i64,

    /// API user password.
    pub password: String,

    /// API secret key.
    pub secret_key: String,

    /// Client certificate for mutual TLS, when enabled.
    pub client_cert: Option<ClientCertificate>,
}

impl std::fmt::Debug for ComodoClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComodoClientConfig")
            .field("api_url", &self.api_url)
            .field("customer_login_uri", &self.customer_login_uri)
            .field("login", &self.login)
            .field("org_id", &self.org_id)
            .field("password", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("client_cert", &self.client_cert)
            .finish()
    }
}

impl ComodoClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ComodoClientConfigBuilder {
        ComodoClientConfigBuilder::new()
    }

    /// Build a configuration from the process environment.
    ///
    /// See [`env`] for the variable names. Client certificate authentication
    /// is enabled when `COMODO_CLIENT_CERT` is set.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let mut builder = Self::builder();
        if let Some(url) = var(env::API_URL) {
            builder = builder.api_url(url)?;
        }
        if let Some(uri) = var(env::CUSTOMER_LOGIN_URI) {
            builder = builder.customer_login_uri(uri);
        }
        if let Some(login) = var(env::LOGIN) {
            builder = builder.login(login);
        }
        if let Some(org_id) = var(env::ORG_ID) {
            let org_id = org_id
                .parse::<i64>()
                .map_err(|_| ComodoError::config(format!("{} must be an integer", env::ORG_ID)))?;
            builder = builder.org_id(org_id);
        }
        if let Some(password) = var(env::PASSWORD) {
            builder = builder.password(password);
        }
        if let Some(secret_key) = var(env::SECRET_KEY) {
            builder = builder.secret_key(secret_key);
        }
        if let Some(cert) = var(env::CLIENT_CERT) {
            builder = builder.client_cert_auth(true).client_public_certificate(cert);
        }
        if let Some(key) = var(env::CLIENT_KEY) {
            builder = builder.client_private_key(key);
        }

        builder.build()
    }
}

/// Builder for [`ComodoClientConfig`].
#[derive(Debug, Default)]
pub struct ComodoClientConfigBuilder {
    api_url: Option<Url>,
    customer_login_uri: Option<String>,
    login: Option<String>,
    org_id: Option<i64>,
    password: Option<String>,
    secret_key: Option<String>,
    client_cert_auth: bool,
    client_public_certificate: Option<PathBuf>,
    client_private_key: Option<PathBuf>,
}

impl ComodoClientConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the WSDL URL of the service.
    pub fn api_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.api_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Set the customer login URI.
    pub fn customer_login_uri(mut self, uri: impl Into<String>) -> Self {
        self.customer_login_uri = Some(uri.into());
        self
    }

    /// Set the API user login.
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Set the organization id.
    pub fn org_id(mut self, org_id: i64) -> Self {
        self.org_id = Some(org_id);
        self
    }

    /// Set the API user password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the API secret key.
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Enable or disable client certificate authentication.
    pub fn client_cert_auth(mut self, enabled: bool) -> Self {
        self.client_cert_auth = enabled;
        self
    }

    /// Path to the PEM client certificate.
    pub fn client_public_certificate(mut self, path: impl Into<PathBuf>) -> Self {
        self.client_public_certificate = Some(path.into());
        self
    }

    /// Path to the PEM client private key.
    pub fn client_private_key(mut self, path: impl Into<PathBuf>) -> Self {
        self.client_private_key = Some(path.into());
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ComodoError::Config`] naming every missing field. The
    /// client certificate and key paths are required only when client
    /// certificate authentication is enabled.
    pub fn build(self) -> Result<ComodoClientConfig> {
        let mut missing = Vec::new();

        if self.api_url.is_none() {
            missing.push("api_url");
        }
        let customer_login_uri = required(self.customer_login_uri, "customer_login_uri", &mut missing);
        let login = required(self.login, "login", &mut missing);
        let password = required(self.password, "password", &mut missing);
        let secret_key = required(self.secret_key, "secret_key", &mut missing);
        if self.org_id.is_none() {
            missing.push("org_id");
        }

        let client_cert = if self.client_cert_auth {
            if self.client_public_certificate.is_none() {
                missing.push("client_public_certificate");
            }
            if self.client_private_key.is_none() {
                missing.push("client_private_key");
            }
            match (self.client_public_certificate, self.client_private_key) {
                (Some(cert_path), Some(key_path)) => Some(ClientCertificate {
                    cert_path,
                    key_path,
                }),
                _ => None,
            }
        } else {
            None
        };

        match (self.api_url, self.org_id) {
            (Some(api_url), Some(org_id)) if missing.is_empty() => Ok(ComodoClientConfig {
                api_url,
                customer_login_uri,
                login,
                org_id,
                password,
                secret_key,
                client_cert,
            }),
            _ => Err(ComodoError::config(format!(
                "missing required settings: {}",
                missing.join(", ")
            ))),
        }
    }
}

fn required(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

/// Paths to the PEM client certificate and key used for mutual TLS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCertificate {
    /// Certificate (chain) file.
    pub cert_path: PathBuf,
    /// Private key file.
    pub key_path: PathBuf,
}
