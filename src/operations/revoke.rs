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

//! `revoke`: revoke an issued certificate.

use super::{to_i32, AuthData};
use crate::error::Result;
use crate::soap::{Param, XmlNode};
use crate::status;
use crate::types::ServiceResult;

/// Parameters for `revoke`. The reason may be empty; its length is checked
/// by the service.
pub fn request(auth: &AuthData, certificate_id: i64, reason: &str) -> Vec<Param> {
    vec![
        auth.to_param(),
        Param::int("id", certificate_id),
        Param::text("reason", reason),
    ]
}

/// Classify the response. `revoke` returns a bare status code.
pub fn classify(ret: &XmlNode) -> Result<ServiceResult<()>> {
    let code = to_i32(ret.as_i64()?)?;
    if code == status::SUCCESSFUL {
        Ok(ServiceResult::success_without_data(
            code,
            status::SUCCESS_MESSAGE,
        ))
    } else {
        Ok(ServiceResult::error(code))
    }
}
