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

//! Remote status codes and their messages.
//!
//! The service reuses the same integer space across operations: `0` is
//! "success" for `getCustomerCertTypes` and `revoke` but "still processing"
//! for `collect`. Classification into success/pending/error therefore lives
//! in each operation; this table only supplies the message for the error
//! branch (and for success statuses that echo a code).

/// `statusCode` for a successful call.
pub const SUCCESSFUL: i32 = 0;

/// `statusCode` returned by `collect` when the certificate is available.
pub const CERTIFICATE_AVAILABLE: i32 = 1;

/// `statusCode` returned by `collect` when the certificate is attached.
pub const CERTIFICATES_ATTACHED: i32 = 2;

/// Message for status 0 in the table: a `collect` still being processed.
pub const PROCESSING_MESSAGE: &str = "Certificate being processed by Comodo";

/// Message reported by operations that completed. The service has no
/// status code of its own for this, so it is never looked up in the table.
pub const SUCCESS_MESSAGE: &str = "Successful";

/// Every status code the service documents, with its message.
pub const STATUS_CODES: &[(i32, &str)] = &[
    (1, "Certificate available"),
    (2, "Certificates Attached"),
    (0, PROCESSING_MESSAGE),
    (-10, "The CSR cannot be decoded!"),
    (-11, "The CSR uses an unsupported algorithm!"),
    (-12, "The CSR has an invalid signature!"),
    (-13, "The CSR uses an unsupported key size!"),
    (-14, "An unknown error occurred!"),
    (-16, "Permission denied!"),
    (-20, "The certificate request has been rejected!"),
    (-21, "The certificate has been revoked!"),
    (-22, "Still awaiting payment!"),
    (-31, "The email is not a valid email."),
    (-32, "The two phrase should be the same!"),
    (-33, "The Comodo certificate type is invalid!"),
    (-34, "The secret key is invalid!"),
    (-35, "The server type is invalid!"),
    (-36, "The term is invalid for customer type!"),
    (-40, "Invalid ID"),
    (-100, "Invalid authentication data for customer"),
    (-101, "Invalid authentication data for customer Organization"),
    (-110, "Domain is not allowed for customer"),
    (-111, "Domain is not allowed for customer Organization"),
    (-120, "Customer configuration is not allowed the requested action"),
];

/// Look up the documented message for `code`.
pub fn lookup(code: i32) -> Option<&'static str> {
    STATUS_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, message)| *message)
}

/// Message for `code`, falling back to a generic one for undocumented codes.
pub fn describe(code: i32) -> String {
    match lookup(code) {
        Some(message) => message.to_string(),
        None => {
            tracing::warn!(code, "Unrecognized status code from Comodo");
            unrecognized(code)
        }
    }
}

fn unrecognized(code: i32) -> String {
    format!("Unrecognized remote status code: {code}")
}
