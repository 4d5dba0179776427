// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)

//! TOML configuration file.
//!
//! ```toml
//! api_url = "https://hard.cert-manager.com/private/ws/EPKIManagerSSL?wsdl"
//! customer_login_uri = "acme"
//! login = "api-user"
//! org_id = 1234
//! password = "${COMODO_PASSWORD}"
//! secret_key = "${COMODO_SECRET_KEY}"
//!
//! [client_cert]
//! enabled = true
//! certificate = "/etc/pki/tls/certs/comodo_client.crt"
//! private_key = "/etc/pki/tls/private/comodo_client.key"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::expand::expand_variables;
use super::{ComodoClientConfig, ComodoClientConfigBuilder};
use crate::error::{ComodoError, Result};

/// On-disk form of [`ComodoClientConfig`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// WSDL URL.
    pub api_url: String,
    /// Customer login URI.
    pub customer_login_uri: String,
    /// API user login.
    pub login: String,
    /// Organization id.
    pub org_id: i64,
    /// API user password; `${VAR}` references are expanded.
    pub password: String,
    /// API secret key; `${VAR}` references are expanded.
    pub secret_key: String,
    /// Mutual TLS settings.
    #[serde(default)]
    pub client_cert: ClientCertSection,
}

/// `[client_cert]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientCertSection {
    /// Present the client certificate on every request.
    #[serde(default)]
    pub enabled: bool,
    /// PEM certificate path.
    pub certificate: Option<PathBuf>,
    /// PEM private key path.
    pub private_key: Option<PathBuf>,
}

impl ConfigFile {
    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| ComodoError::config(format!("Invalid TOML: {e}")))
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Expand variables and validate into a [`ComodoClientConfig`].
    pub fn into_config(self) -> Result<ComodoClientConfig> {
        let expand_path = |p: PathBuf| -> Result<PathBuf> {
            Ok(PathBuf::from(expand_variables(&p.to_string_lossy())?))
        };

        let mut builder = ComodoClientConfigBuilder::new()
            .api_url(expand_variables(&self.api_url)?)?
            .customer_login_uri(expand_variables(&self.customer_login_uri)?)
            .login(expand_variables(&self.login)?)
            .org_id(self.org_id)
            .password(expand_variables(&self.password)?)
            .secret_key(expand_variables(&self.secret_key)?)
            .client_cert_auth(self.client_cert.enabled);

        if let Some(cert) = self.client_cert.certificate {
            builder = builder.client_public_certificate(expand_path(cert)?);
        }
        if let Some(key) = self.client_cert.private_key {
            builder = builder.client_private_key(expand_path(key)?);
        }

        builder.build()
    }
}
