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

use std::collections::HashMap;

use log::{trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::i18n::RegionCode;

/// Display name and calling code of one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    pub name: String,
    /// As published, usually with a leading `+` (e.g. `+33`).
    pub calling_code: String,
}

impl CountryInfo {
    pub fn new(name: impl Into<String>, calling_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calling_code: calling_code.into(),
        }
    }

    /// Calling code with every `+` removed.
    pub fn calling_code_digits(&self) -> String {
        self.calling_code.replace('+', "")
    }
}

/// Mapping from region code to [`CountryInfo`].
///
/// Iteration follows the order in which regions were first seen in the source
/// data; region inference relies on that order to break ties.
#[derive(Debug, Clone, Default)]
pub struct CallingCodeTable {
    entries: Vec<(RegionCode, CountryInfo)>,
    index: HashMap<RegionCode, usize>,
}

#[derive(Deserialize)]
struct CountryRecord {
    cca2: Option<String>,
    name: Option<CountryName>,
    idd: Option<Idd>,
}

#[derive(Deserialize)]
struct CountryName {
    common: Option<String>,
}

#[derive(Deserialize)]
struct Idd {
    root: Option<String>,
    suffixes: Option<Vec<String>>,
}

impl CallingCodeTable {
    /// Builds the table from a JSON array of country records.
    ///
    /// The calling code is `idd.root` followed by the first of
    /// `idd.suffixes`. Records without a `cca2` or `name.common` are skipped.
    pub fn from_country_records(records: &Value) -> Self {
        let Some(records) = records.as_array() else {
            warn!("Country metadata is not a JSON array, ignoring it");
            return Self::default();
        };

        let mut table = Self::default();
        for record in records {
            let record = match CountryRecord::deserialize(record) {
                Ok(record) => record,
                Err(err) => {
                    trace!("Skipping malformed country record: {}", err);
                    continue;
                }
            };
            let Some(region) = record.cca2.as_deref().and_then(RegionCode::parse) else {
                trace!("Skipping country record without cca2");
                continue;
            };
            let Some(name) = record.name.and_then(|name| name.common).filter(|n| !n.is_empty()) else {
                trace!("Skipping country record {} without a common name", region);
                continue;
            };

            let mut calling_code = String::new();
            if let Some(idd) = record.idd {
                calling_code.push_str(idd.root.as_deref().unwrap_or_default());
                if let Some(suffix) = idd.suffixes.as_ref().and_then(|s| s.first()) {
                    calling_code.push_str(suffix);
                }
            }
            table.insert(region, CountryInfo { name, calling_code });
        }
        table
    }

    /// A later entry for the same region replaces the earlier one but keeps
    /// its position.
    fn insert(&mut self, region: RegionCode, info: CountryInfo) {
        if let Some(&position) = self.index.get(&region) {
            self.entries[position].1 = info;
        } else {
            self.index.insert(region.clone(), self.entries.len());
            self.entries.push((region, info));
        }
    }

    pub fn get(&self, region: &RegionCode) -> Option<&CountryInfo> {
        self.index.get(region).map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RegionCode, &CountryInfo)> {
        self.entries.iter().map(|(region, info)| (region, info))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(RegionCode, CountryInfo)> for CallingCodeTable {
    fn from_iter<I: IntoIterator<Item = (RegionCode, CountryInfo)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (region, info) in iter {
            table.insert(region, info);
        }
        table
    }
}
