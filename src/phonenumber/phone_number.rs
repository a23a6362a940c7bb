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

use log::debug;

use crate::{
    i18n::RegionCode,
    metadata::{CountryInfo, MetadataService, METADATA_SERVICE},
};

use super::{
    PhoneType,
    digit_normalizer::{self, Extension, NormalizedNumber},
    errors::InvalidInputError,
    helper_constants::{MAX_DIGITS, MIN_DIGITS},
    helper_functions::classify_digits,
    region_resolver::RegionResolver,
    report::PhoneNumberReport,
};

/// A normalized number with its region and country details.
///
/// Metadata problems never make construction fail; they only leave the
/// region, country name or calling code empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    number: NormalizedNumber,
    extension: Extension,
    region: Option<RegionCode>,
    country: Option<CountryInfo>,
}

impl PhoneNumber {
    /// Parses `number` against the process-wide [`METADATA_SERVICE`], which
    /// is loaded on first use.
    ///
    /// An explicit `region` is uppercased and used as is; otherwise the region
    /// is inferred from the calling code of a `+` number.
    pub fn new(number: &str, region: Option<&str>) -> Result<Self, InvalidInputError> {
        // bad input must not trigger the metadata download
        digit_normalizer::ensure_not_empty(number)?;
        Self::with_service(&METADATA_SERVICE, number, region)
    }

    /// Like [`PhoneNumber::new`] but against an explicit metadata service.
    pub fn with_service(
        service: &MetadataService,
        number: &str,
        region: Option<&str>,
    ) -> Result<Self, InvalidInputError> {
        let (number, extension) = digit_normalizer::parse(number)?;
        let region = match region.and_then(RegionCode::parse) {
            Some(region) => Some(region),
            None => RegionResolver::new(service.calling_codes()).resolve(&number),
        };
        let country = region
            .as_ref()
            .and_then(|region| service.country_info(region))
            .cloned();

        debug!("Parsed {} with region {:?}", number, region);
        Ok(Self { number, extension, region, country })
    }

    pub fn number(&self) -> &NormalizedNumber {
        &self.number
    }

    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    pub fn region(&self) -> Option<&RegionCode> {
        self.region.as_ref()
    }

    /// Between 7 and 15 digits, `+` not counted.
    pub fn is_valid(&self) -> bool {
        (MIN_DIGITS..=MAX_DIGITS).contains(&self.number.digit_count())
    }

    /// Best-effort line type. Always [`PhoneType::Unknown`] for invalid
    /// numbers and numbers without a region.
    pub fn number_type(&self) -> PhoneType {
        if !self.is_valid() || self.region.is_none() {
            return PhoneType::Unknown;
        }
        classify_digits(self.number.digits())
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country.as_ref().map(|country| country.name.as_str())
    }

    pub fn calling_code(&self) -> Option<&str> {
        self.country.as_ref().map(|country| country.calling_code.as_str())
    }

    pub fn get_report(&self) -> PhoneNumberReport {
        PhoneNumberReport {
            number: self.number.as_str().to_owned(),
            region: self.region.clone(),
            is_valid: self.is_valid(),
            number_type: self.number_type(),
            country_name: self.country_name().map(str::to_owned),
            calling_code: self.calling_code().map(str::to_owned),
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "PhoneNumber({}, {})", self.number, region),
            None => write!(f, "PhoneNumber({}, unknown)", self.number),
        }
    }
}
