// Copyright (C) 2025 The Telint Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fmt, sync::LazyLock};

use log::trace;
use regex::Regex;
use serde::Serialize;

use super::{
    errors::InvalidInputError,
    helper_constants::{EXTENSION_PATTERN, INTERNATIONAL_PREFIXES, PLUS_SIGN},
};

static EXTENSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXTENSION_PATTERN).expect("Invalid constant pattern!"));

/// ASCII digits, optionally preceded by a single `+`. Nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedNumber(String);

impl NormalizedNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_plus(&self) -> bool {
        self.0.starts_with('+')
    }

    /// The digits without the leading `+`.
    pub fn digits(&self) -> &str {
        self.0.strip_prefix('+').unwrap_or(&self.0)
    }

    pub fn digit_count(&self) -> usize {
        self.digits().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extension digits taken from a trailing `ext`, `ex`, `x` or `#` label.
/// Empty when the input has none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Extension(String);

impl Extension {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fails on empty or whitespace-only input.
pub fn ensure_not_empty(raw: &str) -> Result<(), InvalidInputError> {
    if raw.trim().is_empty() {
        return Err(InvalidInputError::Empty);
    }
    Ok(())
}

/// Deletes every character except ASCII digits and a `+` that comes before
/// the first digit. Only the first such `+` survives.
pub fn normalize(raw: &str) -> Result<NormalizedNumber, InvalidInputError> {
    ensure_not_empty(raw)?;
    Ok(normalize_chars(raw))
}

fn normalize_chars(raw: &str) -> NormalizedNumber {
    let mut normalized = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            normalized.push(c);
        } else if c == '+' && normalized.is_empty() {
            normalized.push(c);
        }
    }
    NormalizedNumber(normalized)
}

/// Extension digits at the end of `raw`, matched case-insensitively.
pub fn extract_extension(raw: &str) -> Extension {
    split_extension(raw).1
}

/// Splits `raw` into the text before the extension label and the extension.
pub fn split_extension(raw: &str) -> (&str, Extension) {
    let trimmed = raw.trim_end();
    match EXTENSION_REGEX.captures(trimmed) {
        Some(captures) => {
            let (Some(whole), Some(digits)) = (captures.get(0), captures.get(1)) else {
                return (trimmed, Extension::default());
            };
            trace!("Found extension {} in {}", digits.as_str(), raw);
            (&trimmed[..whole.start()], Extension(digits.as_str().to_owned()))
        }
        None => (trimmed, Extension::default()),
    }
}

/// Replaces a leading international dialing prefix (`00`, `011`, `810`) with
/// `+`. The prefixes are tried in that order and only the first match is
/// replaced.
pub fn strip_international_prefix(number: NormalizedNumber) -> NormalizedNumber {
    for prefix in INTERNATIONAL_PREFIXES {
        if let Some(rest) = number.0.strip_prefix(prefix) {
            return NormalizedNumber(fast_cat::concat_str!(PLUS_SIGN, rest));
        }
    }
    number
}

/// Validates `raw`, then normalizes the part before any extension.
pub fn parse(raw: &str) -> Result<(NormalizedNumber, Extension), InvalidInputError> {
    ensure_not_empty(raw)?;
    let (number, extension) = split_extension(raw);
    Ok((normalize_chars(number), extension))
}
