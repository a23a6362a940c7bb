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

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Seconds since the unix epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// A stored payload together with the moment it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    /// Unix time in seconds.
    pub timestamp: u64,
}

impl<T> CacheEntry<T> {
    /// Wraps `data` stamped with the current time.
    pub fn new(data: T) -> Self {
        Self::with_timestamp(data, unix_now())
    }

    pub fn with_timestamp(data: T, timestamp: u64) -> Self {
        Self { data, timestamp }
    }

    /// An entry is expired once strictly more than `ttl` has passed since it
    /// was written.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        unix_now().saturating_sub(self.timestamp) > ttl.as_secs()
    }
}
