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

use serde::Serialize;

use crate::i18n::RegionCode;

use super::PhoneType;

/// Snapshot of everything known about a number. Serializes to
/// `{"number", "region", "is_valid", "type", "country_name", "calling_code"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumberReport {
    pub number: String,
    pub region: Option<RegionCode>,
    pub is_valid: bool,
    #[serde(rename = "type")]
    pub number_type: PhoneType,
    pub country_name: Option<String>,
    pub calling_code: Option<String>,
}
