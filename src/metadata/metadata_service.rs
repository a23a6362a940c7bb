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

use log::debug;
use serde_json::Value;

use crate::i18n::RegionCode;

use super::{
    CallingCodeTable, CountryInfo, MetadataConfig, MetadataSource, COUNTRY_DATA_KEY,
    PHONE_METADATA_KEY,
};

/// Read-only metadata shared by every phone number: the calling-code table
/// and the raw numbering-plan document.
///
/// Nothing is mutated after construction, so one instance can be shared
/// freely between threads. [`crate::METADATA_SERVICE`] is the lazily built
/// process-wide instance; pass an explicit one to
/// [`crate::PhoneNumber::with_service`] to avoid it.
#[derive(Debug, Default)]
pub struct MetadataService {
    countries: CallingCodeTable,
    phone_metadata: Option<Value>,
}

impl MetadataService {
    /// Loads metadata with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MetadataConfig::default())
    }

    pub fn with_config(config: MetadataConfig) -> Self {
        Self::load(&MetadataSource::new(config))
    }

    /// Fetches both documents from `source`. Either may be missing; a failure
    /// of one does not affect the other.
    pub fn load(source: &MetadataSource) -> Self {
        let config = source.config();

        let countries = source
            .fetch(&config.country_data_url, COUNTRY_DATA_KEY)
            .map(|records| CallingCodeTable::from_country_records(&records))
            .unwrap_or_default();
        let phone_metadata = source.fetch(&config.phone_metadata_url, PHONE_METADATA_KEY);

        debug!(
            "Metadata loaded: {} countries, phone metadata {}",
            countries.len(),
            if phone_metadata.is_some() { "present" } else { "absent" }
        );
        Self { countries, phone_metadata }
    }

    /// Service over a ready-made table, without any network or disk access.
    pub fn from_table(countries: CallingCodeTable) -> Self {
        Self { countries, phone_metadata: None }
    }

    pub fn calling_codes(&self) -> &CallingCodeTable {
        &self.countries
    }

    pub fn country_info(&self, region: &RegionCode) -> Option<&CountryInfo> {
        self.countries.get(region)
    }

    pub fn phone_metadata(&self) -> Option<&Value> {
        self.phone_metadata.as_ref()
    }
}
