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

//! `enroll`: submit a certificate signing request.

use super::{to_i32, AuthData};
use crate::error::Result;
use crate::soap::{Param, XmlNode};
use crate::status;
use crate::types::{CertificateType, Enrollment, ServerType, ServiceResult, SubmissionRequest};

/// Number of server licenses requested with every enrollment.
pub const NUMBER_SERVERS: i64 = 1;

/// Account-level values `enroll` needs besides the auth block.
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    /// Organization id.
    pub org_id: i64,
    /// API secret key.
    pub secret_key: &'a str,
}

/// Parameters for `enroll`, in the order the service declares them.
pub fn request(
    auth: &AuthData,
    account: Account<'_>,
    submission: &SubmissionRequest,
    cert_type: &CertificateType,
    server_type: ServerType,
) -> Vec<Param> {
    vec![
        auth.to_param(),
        Param::int("orgId", account.org_id),
        Param::text("secretKey", account.secret_key),
        Param::text("csr", submission.csr.as_str()),
        Param::text("phrase", submission.revoke_password.as_str()),
        Param::text("subjAltNames", submission.subject_alt_names.as_str()),
        Param::node("certType", cert_type.descriptor.clone()),
        Param::int("numberServers", NUMBER_SERVERS),
        Param::int("serverType", server_type.code()),
        Param::int("term", submission.term),
        Param::text("comments", ""),
    ]
}

/// Classify the response: a positive integer is the new tracking id, anything
/// else a status code.
pub fn classify(ret: &XmlNode) -> Result<ServiceResult<Enrollment>> {
    let value = ret.as_i64()?;
    if value > 0 {
        return Ok(ServiceResult::success(
            status::SUCCESSFUL,
            status::SUCCESS_MESSAGE,
            Enrollment {
                certificate_id: value,
            },
        ));
    }
    Ok(ServiceResult::error(to_i32(value)?))
}
