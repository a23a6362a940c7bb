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

use crate::i18n::RegionCode;

use super::{
    PhoneType,
    helper_constants::{DEFAULT_GROUPING, LANDLINE_PREFIXES, MOBILE_PREFIXES, NATIONAL_RULES},
    helper_types::NationalRule,
};

/// Splits `digits` into chunks of the given lengths, left to right, joined by
/// `-`. Anything left after the last chunk forms one trailing group. An empty
/// pattern means [`DEFAULT_GROUPING`].
///
/// `group_digits("6505551234", &[3, 3, 4])` gives `650-555-1234`;
/// `group_digits("12345678901", &[3, 3])` gives `123-456-78901`.
pub fn group_digits(digits: &str, pattern: &[usize]) -> String {
    let pattern = if pattern.is_empty() { DEFAULT_GROUPING } else { pattern };

    let mut groups = Vec::with_capacity(pattern.len() + 1);
    let mut rest = digits;
    for &group_len in pattern {
        if rest.is_empty() {
            break;
        }
        let split_at = byte_offset(rest, group_len);
        let (group, tail) = rest.split_at(split_at);
        groups.push(group);
        rest = tail;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.join("-")
}

/// Byte index just past the first `chars` characters of `s`.
fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map(|(index, _)| index).unwrap_or(s.len())
}

/// Built-in formatting rule of `region`, if there is one.
pub fn national_rule_for(region: Option<&RegionCode>) -> Option<&'static NationalRule> {
    let region = region?;
    NATIONAL_RULES.iter().find(|rule| rule.region == region.as_str())
}

/// Guesses the line type from the first two of the last ten digits.
pub(super) fn classify_digits(digits: &str) -> PhoneType {
    let window_start = digits.len().saturating_sub(10);
    let Some(prefix) = digits.get(window_start..window_start + 2) else {
        return PhoneType::Unknown;
    };
    if MOBILE_PREFIXES.contains(&prefix) {
        PhoneType::Mobile
    } else if LANDLINE_PREFIXES.contains(&prefix) {
        PhoneType::Landline
    } else {
        PhoneType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_ten_digits_three_three_four() {
        let grouped = group_digits("6505551234", &[3, 3, 4]);
        assert_eq!(grouped, "650-555-1234");
        assert_eq!(grouped.matches('-').count(), 2);
    }

    #[test]
    fn leftover_digits_form_trailing_group() {
        assert_eq!(group_digits("12345678901", &[3, 3]), "123-456-78901");
        assert_eq!(group_digits("123456789012", &[3, 3, 4]), "123-456-7890-12");
    }

    #[test]
    fn short_input_stops_early() {
        assert_eq!(group_digits("12345", &[3, 3, 4]), "123-45");
        assert_eq!(group_digits("", &[3, 3, 4]), "");
    }

    #[test]
    fn empty_pattern_uses_default() {
        assert_eq!(group_digits("5551234567", &[]), "555-123-4567");
    }

    #[test]
    fn rule_lookup() {
        let fr = RegionCode::parse("fr");
        assert_eq!(national_rule_for(fr.as_ref()).unwrap().calling_code, "33");
        assert!(national_rule_for(RegionCode::parse("DZ").as_ref()).is_none());
        assert!(national_rule_for(None).is_none());
    }

    #[test]
    fn classification_uses_last_ten_digits() {
        assert_eq!(classify_digits("2137701234567"), PhoneType::Mobile);
        assert_eq!(classify_digits("442079460958"), PhoneType::Landline);
        assert_eq!(classify_digits("16505551234"), PhoneType::Unknown);
        assert_eq!(classify_digits("5"), PhoneType::Unknown);
    }
}
