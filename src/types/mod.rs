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

//! Request and result types.
//!
//! Every facade operation returns a [`ServiceResult`]: a [`Status`] that is
//! always present, plus an operation-specific payload.

pub mod formats;

pub use formats::{FormatType, ServerType};

use crate::error::{ComodoError, Result};
use crate::soap::XmlNode;
use crate::status;

/// Outcome classification of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The operation completed.
    Success,
    /// The service has not finished; call again later.
    Pending,
    /// The service reported a business error.
    Error,
}

impl Outcome {
    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified status of a remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Outcome bucket.
    pub outcome: Outcome,
    /// Raw status code as returned by the service.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
}

/// Uniform result of every facade operation.
///
/// `data` is present on success. A pending `collect` carries the
/// certificate id so the caller can poll again. An error never carries data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResult<T> {
    status: Status,
    data: Option<T>,
}

impl<T> ServiceResult<T> {
    /// Successful result with a payload.
    pub fn success(code: i32, message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status {
                outcome: Outcome::Success,
                code,
                message: message.into(),
            },
            data: Some(data),
        }
    }

    /// Successful result without a payload.
    pub fn success_without_data(code: i32, message: impl Into<String>) -> Self {
        Self {
            status: Status {
                outcome: Outcome::Success,
                code,
                message: message.into(),
            },
            data: None,
        }
    }

    /// Pending result.
    pub fn pending(code: i32, message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status {
                outcome: Outcome::Pending,
                code,
                message: message.into(),
            },
            data: Some(data),
        }
    }

    /// Error result, with the message decoded from the status table.
    pub fn error(code: i32) -> Self {
        Self {
            status: Status {
                outcome: Outcome::Error,
                code,
                message: status::describe(code),
            },
            data: None,
        }
    }

    /// The classified status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The payload, if any.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the result and return the payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Outcome shorthand.
    pub fn outcome(&self) -> Outcome {
        self.status.outcome
    }

    /// Returns true on success.
    pub fn is_success(&self) -> bool {
        self.status.outcome == Outcome::Success
    }

    /// Returns true if the caller should retry later.
    pub fn is_pending(&self) -> bool {
        self.status.outcome == Outcome::Pending
    }

    /// Returns true on a remote business error.
    pub fn is_error(&self) -> bool {
        self.status.outcome == Outcome::Error
    }

    /// Re-type an error result for another operation. Success and pending
    /// results are handed back unchanged in `Err`.
    pub fn into_error<U>(self) -> std::result::Result<ServiceResult<U>, Self> {
        match self.status.outcome {
            Outcome::Error => Ok(ServiceResult {
                status: self.status,
                data: None,
            }),
            Outcome::Success | Outcome::Pending => Err(self),
        }
    }
}

/// A certificate product the account may request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateType {
    /// Internal identifier.
    pub id: i64,
    /// Display name, e.g. `PlatinumSSL Certificate`.
    pub name: String,
    /// Valid terms in years.
    pub terms: Vec<u32>,
    /// The descriptor exactly as the service returned it. `enroll` requires
    /// it back verbatim.
    pub descriptor: XmlNode,
}

impl CertificateType {
    /// Read a `types` element from `getCustomerCertTypes`.
    pub fn from_node(node: &XmlNode) -> Result<Self> {
        let id = node
            .child("id")
            .ok_or_else(|| ComodoError::malformed("certificate type has no id"))?
            .as_i64()?;
        let name = node
            .child_text("name")
            .ok_or_else(|| ComodoError::malformed("certificate type has no name"))?
            .to_string();
        let terms = node
            .children_named("terms")
            .map(|t| {
                t.text.trim().parse::<u32>().map_err(|_| {
                    ComodoError::malformed(format!("invalid term '{}' for '{}'", t.text, name))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id,
            name,
            terms,
            descriptor: node.clone(),
        })
    }
}

/// Certificate types available to the account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertTypeCatalog {
    types: Vec<CertificateType>,
}

impl CertTypeCatalog {
    /// Create a catalog from a list of types.
    pub fn new(types: Vec<CertificateType>) -> Self {
        Self { types }
    }

    /// Find a type by its display name.
    pub fn find(&self, name: &str) -> Option<&CertificateType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Number of types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the account has no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over the types.
    pub fn iter(&self) -> impl Iterator<Item = &CertificateType> {
        self.types.iter()
    }

}

/// Payload of a successful `submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enrollment {
    /// Tracking id used to collect or revoke the certificate.
    pub certificate_id: i64,
}

/// Where a submitted certificate is in its issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuanceState {
    /// The certificate is attached to the response.
    Attached,
    /// The service is still processing the request.
    Processing,
}

impl IssuanceState {
    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attached => "attached",
            Self::Processing => "processing",
        }
    }
}

/// Payload of `collect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    /// Tracking id that was collected.
    pub certificate_id: i64,
    /// Certificate text in the requested format; `None` while processing.
    pub certificate: Option<String>,
    /// Issuance state.
    pub state: IssuanceState,
}

/// A certificate signing request to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    /// Certificate type display name, resolved against the catalog.
    pub cert_type_name: String,
    /// PEM CSR.
    pub csr: String,
    /// Passphrase that authorizes revocation later.
    pub revoke_password: String,
    /// Term in years.
    pub term: u32,
    /// Subject alternative names separated by commas.
    pub subject_alt_names: String,
    /// Server type label, see [`ServerType`].
    pub server_type: String,
}

impl SubmissionRequest {
    /// Create a request with no SANs and server type `OTHER`.
    pub fn new(
        cert_type_name: impl Into<String>,
        csr: impl Into<String>,
        revoke_password: impl Into<String>,
        term: u32,
    ) -> Self {
        Self {
            cert_type_name: cert_type_name.into(),
            csr: csr.into(),
            revoke_password: revoke_password.into(),
            term,
            subject_alt_names: String::new(),
            server_type: ServerType::Other.label().to_string(),
        }
    }

    /// Set the subject alternative names (comma separated).
    pub fn subject_alt_names(mut self, sans: impl Into<String>) -> Self {
        self.subject_alt_names = sans.into();
        self
    }

    /// Set the server type label.
    pub fn server_type(mut self, label: impl Into<String>) -> Self {
        self.server_type = label.into();
        self
    }
}
