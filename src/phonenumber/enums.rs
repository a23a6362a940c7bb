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

use std::str::FromStr;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use super::errors::UnsupportedFormatError;

/// Presentation styles understood by [`crate::NumFormatter`].
///
/// Examples are for `01 42 68 53 00` with region `FR`. The national styles
/// strip nothing from a number that already starts with `+`, so
/// `+33 1 42 68 53 00` renders as `+33-142-685-300` in `NATIONAL`.
#[derive(Debug, Display, EnumIter, EnumString, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum PhoneFormat {
    /// `+` and digits only: `+33142685300`.
    #[strum(serialize = "E164")]
    E164,
    /// Two-digit code guess, then 3-3-4 groups: `+33 142-685-300`.
    #[strum(serialize = "INTERNATIONAL")]
    International,
    /// Region pattern without calling code or trunk prefix: `142-685-300`.
    #[strum(serialize = "NATIONAL")]
    National,
    /// `+33-142-685-300`.
    #[strum(serialize = "DASHED")]
    Dashed,
    /// `+33.142.685.300`.
    #[strum(serialize = "DOT")]
    Dot,
    /// Area code in parentheses: `+33 (142) 685-300`.
    #[strum(serialize = "PARENTHESES")]
    Parentheses,
    /// `+33 142 685 300`.
    #[strum(serialize = "SPACES")]
    Spaces,
    /// `tel:` followed by the dashed style: `tel:+33-142-685-300`.
    #[strum(serialize = "RFC3966")]
    RFC3966,
    /// Like national, meant for local dialing: `142-685-300`.
    #[strum(serialize = "LOCAL")]
    Local,
}

impl PhoneFormat {
    /// Looks a style up by name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self, UnsupportedFormatError> {
        Self::from_str(name.trim()).map_err(|_| UnsupportedFormatError(name.to_owned()))
    }
}

/// Coarse line type guessed from the leading local digits.
///
/// Best effort only: the guess comes from a small fixed prefix table, not
/// from numbering-plan data.
#[derive(Debug, Display, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PhoneType {
    Mobile,
    Landline,
    Unknown,
}
