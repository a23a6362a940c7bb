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

use thiserror::Error;

/// Failures inside the content cache. These never reach the facade: reads
/// turn them into a cache miss and writes into a `false` result.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache entry could not be (de)serialized: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache entry is corrupted: {0}")]
    Corrupted(String),

    /// The entry is intact but holds data of another shape than requested.
    #[error("cache entry has an unexpected type: {0}")]
    Mismatch(#[source] serde_json::Error),
}
