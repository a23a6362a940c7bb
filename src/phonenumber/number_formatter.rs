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

use log::trace;

use crate::{
    i18n::RegionCode,
    string_util::{strip_plus, strip_prefix_chars},
};

use super::{
    PhoneFormat,
    digit_normalizer::{self, Extension, NormalizedNumber},
    errors::{InvalidInputError, UnsupportedFormatError},
    helper_constants::{DEFAULT_EXTN_PREFIX, DEFAULT_GROUPING, PLUS_SIGN, RFC3966_PREFIX},
    helper_functions::{group_digits, national_rule_for},
    helper_types::NationalRule,
};

/// Renders one raw number in any of the [`PhoneFormat`] styles.
///
/// Works purely from the built-in national rules and never touches remote
/// metadata. When a style needs a country code that cannot be derived (no
/// `+`, and no rule for the region) the normalized digits are returned as
/// they are.
#[derive(Debug, Clone)]
pub struct NumFormatter {
    original: String,
    region: Option<RegionCode>,
    digits: NormalizedNumber,
    extension: Extension,
}

impl NumFormatter {
    /// `region` is uppercased; a blank region counts as none. International
    /// dialing prefixes such as `011` are turned into `+`.
    pub fn new(number: &str, region: Option<&str>) -> Result<Self, InvalidInputError> {
        let (digits, extension) = digit_normalizer::parse(number)?;
        let digits = digit_normalizer::strip_international_prefix(digits);
        trace!("Formatter input {:?} normalized to {}", number, digits);
        Ok(Self {
            original: number.trim().to_owned(),
            region: region.and_then(RegionCode::parse),
            digits,
            extension,
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn digits(&self) -> &NormalizedNumber {
        &self.digits
    }

    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    pub fn region(&self) -> Option<&RegionCode> {
        self.region.as_ref()
    }

    pub fn format(&self, style: PhoneFormat) -> String {
        // RFC3966 is exactly the dashed output behind `tel:`, extension included
        if let PhoneFormat::RFC3966 = style {
            let dashed = self.format(PhoneFormat::Dashed);
            return fast_cat::concat_str!(RFC3966_PREFIX, &dashed);
        }

        let rendered = match style {
            PhoneFormat::E164 => self.format_e164(),
            PhoneFormat::International => self.format_international(),
            PhoneFormat::National | PhoneFormat::Local => self.format_national(),
            PhoneFormat::Dashed | PhoneFormat::RFC3966 => self.format_delimited("-"),
            PhoneFormat::Dot => self.format_delimited("."),
            PhoneFormat::Parentheses => self.format_parentheses(),
            PhoneFormat::Spaces => self.format_delimited(" "),
        };

        match rendered {
            Some(mut formatted) => {
                if !self.extension.is_empty() {
                    formatted.push_str(DEFAULT_EXTN_PREFIX);
                    formatted.push_str(self.extension.as_str());
                }
                formatted
            }
            None => self.digits.as_str().to_owned(),
        }
    }

    /// Formats with a style given by name, e.g. `"dashed"`.
    pub fn format_named(&self, style: &str) -> Result<String, UnsupportedFormatError> {
        Ok(self.format(PhoneFormat::parse(style)?))
    }

    fn rule(&self) -> Option<&'static NationalRule> {
        national_rule_for(self.region.as_ref())
    }

    /// `+` numbers as they are; otherwise the region's calling code followed
    /// by the digits with the national prefix stripped (character-class
    /// strip, see [`strip_prefix_chars`]).
    fn format_e164(&self) -> Option<String> {
        if self.digits.has_plus() {
            return Some(self.digits.as_str().to_owned());
        }
        let rule = self.rule()?;
        let national = strip_prefix_chars(self.digits.as_str(), rule.national_prefix);
        Some(fast_cat::concat_str!(PLUS_SIGN, rule.calling_code, national))
    }

    fn format_international(&self) -> Option<String> {
        let e164 = self.format_e164()?;
        let (code, national) = split_calling_code_guess(&e164);
        let grouped = group_digits(national, DEFAULT_GROUPING);
        Some(fast_cat::concat_str!(PLUS_SIGN, code, " ", &grouped))
    }

    /// Same split as the international style, with `delimiter` between the
    /// code and every group.
    fn format_delimited(&self, delimiter: &str) -> Option<String> {
        let e164 = self.format_e164()?;
        let (code, national) = split_calling_code_guess(&e164);
        let grouped = group_digits(national, DEFAULT_GROUPING).replace('-', delimiter);
        Some(fast_cat::concat_str!(PLUS_SIGN, code, delimiter, &grouped))
    }

    fn format_national(&self) -> Option<String> {
        let rule = self.rule()?;
        Some(group_digits(self.national_number(rule), rule.pattern))
    }

    /// `+CC (AREA) LOCAL`, falling back to the international style when there
    /// is no rule or the number is longer than the rule's pattern.
    fn format_parentheses(&self) -> Option<String> {
        let Some(rule) = self.rule() else {
            return self.format_international();
        };
        let national = self.national_number(rule);
        if national.len() > rule.pattern_length() {
            return self.format_international();
        }

        let (area_code, local) = national.split_at(rule.area_code_length().min(national.len()));
        let grouped_local = group_digits(local, rule.pattern.get(1..).unwrap_or_default());
        Some(fast_cat::concat_str!(
            PLUS_SIGN,
            rule.calling_code,
            " (",
            area_code,
            ") ",
            &grouped_local
        ))
    }

    /// Digits with the calling code and then the national prefix stripped,
    /// both as character classes. A leading `+` is not a member of either
    /// class, so `+` numbers come back whole.
    fn national_number(&self, rule: &NationalRule) -> &str {
        let without_code = strip_prefix_chars(self.digits.as_str(), rule.calling_code);
        strip_prefix_chars(without_code, rule.national_prefix)
    }
}

/// Splits an E.164 string into a calling code guess (the two digits after
/// `+`, or fewer if that is all there is) and the rest.
fn split_calling_code_guess(e164: &str) -> (&str, &str) {
    let body = strip_plus(e164);
    let code_len = body.len().min(2);
    body.split_at(code_len)
}
