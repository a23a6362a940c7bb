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

use crate::{i18n::RegionCode, metadata::CallingCodeTable};

use super::{digit_normalizer::NormalizedNumber, helper_constants::MAX_LENGTH_COUNTRY_CODE};

/// Infers a region from the calling code at the front of a `+` number.
pub struct RegionResolver<'a> {
    table: &'a CallingCodeTable,
}

impl<'a> RegionResolver<'a> {
    pub fn new(table: &'a CallingCodeTable) -> Self {
        Self { table }
    }

    /// Tries the first 1, 2, 3 and 4 digits after the `+`, in that order, and
    /// returns the first region (in table order) whose calling code equals
    /// the candidate. Shorter codes therefore win: with `A -> 1` and
    /// `B -> 14`, `+14255551234` resolves to `A`.
    ///
    /// Numbers without a `+` never resolve.
    pub fn resolve(&self, number: &NormalizedNumber) -> Option<RegionCode> {
        if !number.has_plus() {
            return None;
        }
        let digits = number.digits();

        for length in 1..=MAX_LENGTH_COUNTRY_CODE {
            let Some(candidate) = digits.get(..length) else {
                break;
            };
            let found = self
                .table
                .iter()
                .find(|(_, info)| info.calling_code_digits() == candidate);
            if let Some((region, _)) = found {
                trace!("Calling code {} resolves to {}", candidate, region);
                return Some(region.clone());
            }
        }
        trace!("No calling code matches {}", number);
        None
    }
}
