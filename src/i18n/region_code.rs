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

use std::fmt;

use serde::Serialize;

/// Region code such as `US` or `FR`, always stored uppercase.
///
/// An unknown region is modelled as `Option<RegionCode>::None`, never as a
/// placeholder value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RegionCode(String);

impl RegionCode {
    /// Trims and uppercases `code`. Returns `None` for blank input.
    pub fn parse(code: &str) -> Option<Self> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RegionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::RegionCode;

    #[test]
    fn parse_uppercases_and_trims() {
        assert_eq!(RegionCode::parse(" us ").unwrap().as_str(), "US");
        assert_eq!(RegionCode::parse("Fr").unwrap().to_string(), "FR");
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(RegionCode::parse("").is_none());
        assert!(RegionCode::parse("   ").is_none());
    }
}
