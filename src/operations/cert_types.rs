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

//! `getCustomerCertTypes`: list the certificate types available to the account.

use super::{status_code, AuthData};
use crate::error::Result;
use crate::soap::{Param, XmlNode};
use crate::status;
use crate::types::{CertTypeCatalog, CertificateType, ServiceResult};

/// Parameters for `getCustomerCertTypes`.
pub fn request(auth: &AuthData) -> Vec<Param> {
    vec![auth.to_param()]
}

/// Classify the response: `statusCode` 0 is success, anything else an error.
pub fn classify(ret: &XmlNode) -> Result<ServiceResult<CertTypeCatalog>> {
    let code = status_code(ret)?;
    if code != status::SUCCESSFUL {
        return Ok(ServiceResult::error(code));
    }

    let types = ret
        .children_named("types")
        .map(CertificateType::from_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(ServiceResult::success(
        code,
        status::SUCCESS_MESSAGE,
        CertTypeCatalog::new(types),
    ))
}
