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

/// Built-in formatting rule for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NationalRule {
    pub region: &'static str,
    /// Calling code digits, without `+`.
    pub calling_code: &'static str,
    /// Group lengths of the national number, in order.
    pub pattern: &'static [usize],
    /// Digits stripped (as a character class) from the front of the number.
    pub national_prefix: &'static str,
    pub trunk_prefix: &'static str,
}

impl NationalRule {
    /// Length of the first group, 3 when the pattern is empty.
    pub fn area_code_length(&self) -> usize {
        self.pattern.first().copied().unwrap_or(3)
    }

    /// How many digits the whole pattern covers.
    pub fn pattern_length(&self) -> usize {
        self.pattern.iter().sum()
    }
}
