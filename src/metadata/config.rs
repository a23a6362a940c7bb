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

use std::{path::PathBuf, time::Duration};

pub const COUNTRY_DATA_URL: &'static str =
    "https://raw.githubusercontent.com/mledoze/countries/master/countries.json";
pub const PHONE_METADATA_URL: &'static str =
    "https://cdn.jsdelivr.net/gh/jackocnr/intl-tel-input@master/build/js/data.json";

pub const COUNTRY_DATA_KEY: &'static str = "country_data";
pub const PHONE_METADATA_KEY: &'static str = "phone_metadata";

pub const CACHE_DIR_NAME: &'static str = ".telint_cache";
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &'static str = "telint-metadata-fetcher/1.0";

/// Whether a fresh cache entry may be served without touching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CachePolicy {
    /// Serve a non-expired cache entry; download only on a miss or expiry.
    #[default]
    CacheFirst,
    /// Always try the network first; the cache is only a fallback.
    NetworkFirst,
}

/// Returns `~/.telint_cache`, or `.telint_cache` in the working directory
/// when no home directory can be determined.
pub fn default_cache_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(CACHE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(CACHE_DIR_NAME))
}

/// Where metadata comes from and how it is cached.
#[derive(Debug, Clone)]
pub struct MetadataConfig {
    pub cache_dir: PathBuf,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub policy: CachePolicy,
    /// JSON array of country records (`cca2`, `name.common`, `idd`).
    pub country_data_url: String,
    /// Phone numbering-plan metadata, kept as raw JSON.
    pub phone_metadata_url: String,
    pub user_agent: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            policy: CachePolicy::default(),
            country_data_url: COUNTRY_DATA_URL.to_owned(),
            phone_metadata_url: PHONE_METADATA_URL.to_owned(),
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl MetadataConfig {
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_urls(
        mut self,
        country_data_url: impl Into<String>,
        phone_metadata_url: impl Into<String>,
    ) -> Self {
        self.country_data_url = country_data_url.into();
        self.phone_metadata_url = phone_metadata_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_fixed_sources() {
        let config = MetadataConfig::default();
        assert_eq!(config.cache_ttl, Duration::from_secs(86_400));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.policy, CachePolicy::CacheFirst);
        assert_eq!(config.country_data_url, COUNTRY_DATA_URL);
        assert!(config.cache_dir.ends_with(CACHE_DIR_NAME));
    }

    #[test]
    fn builder_overrides() {
        let config = MetadataConfig::default()
            .with_cache_dir("/tmp/telint")
            .with_policy(CachePolicy::NetworkFirst)
            .with_request_timeout(Duration::from_secs(1));
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/telint"));
        assert_eq!(config.policy, CachePolicy::NetworkFirst);
        assert_eq!(config.request_timeout, Duration::from_secs(1));
    }
}
