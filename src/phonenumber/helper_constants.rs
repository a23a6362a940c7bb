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

use super::helper_types::NationalRule;

// Bounds on the digit count (ignoring `+`) of a plausible number.
pub const MIN_DIGITS: usize = 7;
pub const MAX_DIGITS: usize = 15;

pub const PLUS_SIGN: &'static str = "+";
pub const RFC3966_PREFIX: &'static str = "tel:";
pub const DEFAULT_EXTN_PREFIX: &'static str = " ext";

/// Grouping used when a region has no pattern of its own.
pub const DEFAULT_GROUPING: &'static [usize] = &[3, 3, 4];

/// International dialing prefixes replaced by `+`. Checked in order, the first
/// match wins.
pub const INTERNATIONAL_PREFIXES: &'static [&'static str] = &["00", "011", "810"];

/// Longest calling code tried when inferring a region.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 4;

// Leading two digits of the last ten digits, see `classify`.
pub const MOBILE_PREFIXES: &'static [&'static str] = &["70", "77", "78", "79", "55", "50"];
pub const LANDLINE_PREFIXES: &'static [&'static str] = &["20", "30", "40"];

// Extension label followed by digits at the very end of the input.
pub const EXTENSION_PATTERN: &'static str = r"(?i)(?:ext|ex|x|#)\s*([0-9]+)$";

pub const NATIONAL_RULES: &'static [NationalRule] = &[
    NationalRule {
        region: "US",
        calling_code: "1",
        pattern: &[3, 3, 4],
        national_prefix: "1",
        trunk_prefix: "1",
    },
    NationalRule {
        region: "UK",
        calling_code: "44",
        pattern: &[4, 3, 4],
        national_prefix: "0",
        trunk_prefix: "0",
    },
    // ISO code for the same plan as UK
    NationalRule {
        region: "GB",
        calling_code: "44",
        pattern: &[4, 3, 4],
        national_prefix: "0",
        trunk_prefix: "0",
    },
    NationalRule {
        region: "FR",
        calling_code: "33",
        pattern: &[3, 3, 3, 3],
        national_prefix: "0",
        trunk_prefix: "0",
    },
];
