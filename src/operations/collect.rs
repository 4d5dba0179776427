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

//! `collect`: fetch an issued certificate.
//!
//! `statusCode` 2 means the certificate is attached under `SSL/certificate`.
//! `statusCode` 0 means the request is still being processed and is reported
//! as [`Outcome::Pending`](crate::types::Outcome::Pending), never as an error.

use super::{status_code, AuthData};
use crate::error::{ComodoError, Result};
use crate::soap::{Param, XmlNode};
use crate::status;
use crate::types::{Collected, FormatType, IssuanceState, ServiceResult};

/// Parameters for `collect`.
pub fn request(auth: &AuthData, certificate_id: i64, format: FormatType) -> Vec<Param> {
    vec![
        auth.to_param(),
        Param::int("id", certificate_id),
        Param::int("formatType", format.code()),
    ]
}

/// Classify the response for `certificate_id`.
pub fn classify(ret: &XmlNode, certificate_id: i64) -> Result<ServiceResult<Collected>> {
    let code = status_code(ret)?;
    match code {
        status::CERTIFICATES_ATTACHED => {
            let certificate = ret
                .child("SSL")
                .and_then(|ssl| ssl.child_text("certificate"))
                .ok_or_else(|| {
                    ComodoError::malformed("attached response carries no SSL/certificate")
                })?
                .to_string();
            Ok(ServiceResult::success(
                code,
                status::describe(code),
                Collected {
                    certificate_id,
                    certificate: Some(certificate),
                    state: IssuanceState::Attached,
                },
            ))
        }
        status::SUCCESSFUL => Ok(ServiceResult::pending(
            code,
            status::PROCESSING_MESSAGE,
            Collected {
                certificate_id,
                certificate: None,
                state: IssuanceState::Processing,
            },
        )),
        other => Ok(ServiceResult::error(other)),
    }
}
