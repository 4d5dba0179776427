// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 U.S. Federal Government (in countries where recognized)

//! Environment variable expansion for configuration values.

use crate::error::{ComodoError, Result};

/// Expand `${NAME}` references from the process environment.
///
/// Unknown variables are left unchanged so a missing secret shows up
/// verbatim in the resulting validation error rather than as an empty
/// string. An unterminated `${` is an error.
///
/// # Examples
///
/// ```
/// use comodo_ca_client::config::expand_variables;
///
/// let value = expand_variables("plain value").unwrap();
/// assert_eq!(value, "plain value");
/// ```
pub fn expand_variables(input: &str) -> Result<String> {
    expand_with(input, |name| std::env::var(name).ok())
}

fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find('}').ok_or_else(|| {
            ComodoError::config(format!("unterminated variable reference in '{input}'"))
        })?;
        let name = &after[..end];

        match lookup(name) {
            Some(value) => result.push_str(&value),
            None => {
                result.push_str("${");
                result.push_str(name);
                result.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}
