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

/// Strips every leading character of `s` that occurs anywhere in `chars`.
///
/// This is a character-class strip, not a literal prefix strip:
/// `strip_prefix_chars("4420", "44")` and `strip_prefix_chars("4420", "4")`
/// both give `"20"`, and `strip_prefix_chars("112", "12")` gives `""`.
/// An empty `chars` strips nothing.
pub fn strip_prefix_chars<'a>(s: &'a str, chars: &str) -> &'a str {
    s.trim_start_matches(|c: char| chars.contains(c))
}

/// Drops a single leading `+`, if any.
pub fn strip_plus(s: &str) -> &str {
    s.strip_prefix('+').unwrap_or(s)
}
