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

use log::{debug, warn};
use serde_json::Value;

use crate::{cache::ContentCache, interfaces::Transport};

use super::{CachePolicy, FetchError, HttpTransport, MetadataConfig, http_transport::OfflineTransport};

/// Downloads JSON metadata through a [`Transport`], backed by a
/// [`ContentCache`].
pub struct MetadataSource {
    config: MetadataConfig,
    cache: ContentCache,
    transport: Box<dyn Transport>,
}

impl MetadataSource {
    /// Source that downloads over HTTP. If no HTTP client can be built the
    /// source still works, serving whatever the cache holds.
    pub fn new(config: MetadataConfig) -> Self {
        let transport = HttpTransport::new(&config.user_agent);
        match transport {
            Ok(transport) => Self::with_transport(config, transport),
            Err(err) => {
                warn!("Could not build the HTTP client, using cached metadata only: {}", err);
                Self::with_transport(config, OfflineTransport)
            }
        }
    }

    pub fn with_transport(config: MetadataConfig, transport: impl Transport + 'static) -> Self {
        let cache = ContentCache::new(config.cache_dir.clone(), config.cache_ttl);
        Self {
            config,
            cache,
            transport: Box::new(transport),
        }
    }

    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Returns the JSON document at `url`, or `None` when neither the network
    /// nor the cache can provide it.
    ///
    /// Under [`CachePolicy::CacheFirst`] a non-expired entry under `cache_key`
    /// is returned without any network access. A successful download replaces
    /// the cache entry. A failed one falls back to whatever the cache holds,
    /// however old.
    pub fn fetch(&self, url: &str, cache_key: &str) -> Option<Value> {
        if self.config.policy == CachePolicy::CacheFirst {
            if let Some(entry) = self.cache.get_entry::<Value>(cache_key) {
                if !entry.is_expired(self.cache.ttl()) {
                    debug!("Using cached {}", cache_key);
                    return Some(entry.data);
                }
                debug!("Cached {} is expired", cache_key);
            }
        }

        match self.download(url) {
            Ok(value) => {
                self.cache.set(cache_key, &value);
                Some(value)
            }
            Err(err) => {
                warn!("Failed to download {}: {}", url, err);
                let stale = self.cache.get(cache_key);
                if stale.is_some() {
                    warn!("Falling back to cached {}", cache_key);
                }
                stale
            }
        }
    }

    fn download(&self, url: &str) -> Result<Value, FetchError> {
        let body = self.transport.get(url, self.config.request_timeout)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
