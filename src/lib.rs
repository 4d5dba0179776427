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

//! # comodo-ca-client
//!
//! A client for the Comodo Certificate Manager SSL web service
//! (`EPKIManagerSSL`), the SOAP API used to request, collect and revoke
//! SSL certificates.
//!
//! The service reports outcomes as integer status codes whose meaning
//! depends on the operation. This library classifies every response into a
//! [`ServiceResult`] whose status is success, pending or error, with a
//! human-readable message, so callers can branch without knowing the codes.
//!
//! ## Features
//!
//! - **Async-first design** using Tokio
//! - **Four lifecycle operations**: list certificate types, submit, collect (poll), revoke
//! - **TLS client authentication** with a PEM certificate and key
//! - **TOML configuration** with `${VAR}` expansion, or environment variables
//! - **`comodo-ca` command line tool** (feature `cli`)
//!
//! ## Quick Start
//!
//! ```no_run
//! use comodo_ca_client::{ComodoClient, ComodoClientConfig, SubmissionRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ComodoClientConfig::builder()
//!         .api_url("https://hard.cert-manager.com/private/ws/EPKIManagerSSL?wsdl")?
//!         .customer_login_uri("acme")
//!         .login("api-user")
//!         .org_id(1234)
//!         .password("password")
//!         .secret_key("secret")
//!         .build()?;
//!
//!     let client = ComodoClient::new(config).await?;
//!
//!     let csr = std::fs::read_to_string("server.csr")?;
//!     let request = SubmissionRequest::new("PlatinumSSL Certificate", csr, "revoke-me", 1)
//!         .server_type("Apache/ModSSL");
//!
//!     let submitted = client.submit(&request).await?;
//!     let Some(enrollment) = submitted.data() else {
//!         eprintln!("Rejected: {}", submitted.status().message);
//!         return Ok(());
//!     };
//!
//!     let collected = client
//!         .collect(enrollment.certificate_id, "X509 PEM Bundle")
//!         .await?;
//!     if collected.is_pending() {
//!         println!("Not issued yet, try again later");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Cargo Features
//!
//! - `cli` (default): Builds the `comodo-ca` binary

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod operations;
pub mod soap;
pub mod status;
pub mod tls;
pub mod transport;
pub mod types;

// Re-export main types at crate root for convenience
pub use client::ComodoClient;
pub use config::{ClientCertificate, ComodoClientConfig, ComodoClientConfigBuilder, ConfigFile};
pub use error::{ComodoError, Result};
pub use transport::{SoapTransport, Transport};
pub use types::{
    CertTypeCatalog, CertificateType, Collected, Enrollment, FormatType, IssuanceState, Outcome,
    ServerType, ServiceResult, Status, SubmissionRequest,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("comodo-ca-client/", env!("CARGO_PKG_VERSION"));
