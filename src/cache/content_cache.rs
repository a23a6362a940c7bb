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

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use log::{debug, trace, warn};
use serde::{de::{DeserializeOwned, IgnoredAny}, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::{CacheEntry, CacheError};

/// Key-addressed store of timestamped payloads, one gzip-compressed JSON file
/// per key.
///
/// Writes and deletions are serialized through a per-instance lock. Reads take
/// no lock: a file removed underneath a reader simply reads as a miss.
#[derive(Debug)]
pub struct ContentCache {
    cache_dir: PathBuf,
    ttl: Duration,
    lock: Mutex<()>,
}

impl ContentCache {
    /// Opens a cache rooted at `cache_dir`, creating the directory if needed.
    ///
    /// Failing to create the directory is not fatal: every later write will
    /// report `false` and every read will miss.
    pub fn new(cache_dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        let cache_dir = cache_dir.into();
        if let Err(err) = fs::create_dir_all(&cache_dir) {
            warn!("Could not create cache directory {}: {}", cache_dir.display(), err);
        }
        Self {
            cache_dir,
            ttl,
            lock: Mutex::new(()),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// File that holds the entry for `key`: the hex SHA-256 of the key.
    pub fn cache_path(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        let hash = hasher.finalize();
        self.cache_dir.join(format!("{hash:x}.cache"))
    }

    /// Returns the payload stored under `key`, expired or not.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_entry(key).map(|entry| entry.data)
    }

    /// Like [`ContentCache::get`] but keeps the write timestamp.
    ///
    /// An entry that cannot be decoded is deleted and reported as absent. An
    /// intact entry whose data does not fit `T` is reported as absent and
    /// kept.
    pub fn get_entry<T: DeserializeOwned>(&self, key: &str) -> Option<CacheEntry<T>> {
        let path = self.cache_path(key);
        match read_entry(&path) {
            Ok(Some(entry)) => {
                trace!("Cache hit for {}", key);
                Some(entry)
            }
            Ok(None) => {
                trace!("Cache miss for {}", key);
                None
            }
            Err(err @ (CacheError::Io(_) | CacheError::Mismatch(_))) => {
                warn!("Failed to read cache entry {}: {}", key, err);
                None
            }
            Err(err) => {
                warn!("Failed to load cache entry {}: {}", key, err);
                self.discard(&path);
                None
            }
        }
    }

    /// Stores `value` under `key` stamped with the current time.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        self.set_entry(key, &CacheEntry::new(value))
    }

    /// Stores a complete entry, timestamp included. Returns `false` if the
    /// entry could not be written; the cache is then left as it was.
    pub fn set_entry<T: Serialize>(&self, key: &str, entry: &CacheEntry<T>) -> bool {
        match self.try_set_entry(key, entry) {
            Ok(()) => {
                debug!("Saved cache entry {}", key);
                true
            }
            Err(err) => {
                warn!("Failed to save cache entry {}: {}", key, err);
                false
            }
        }
    }

    /// `true` when `key` has no readable entry or its entry is older than the
    /// configured TTL.
    pub fn is_expired(&self, key: &str) -> bool {
        match read_entry::<IgnoredAny>(&self.cache_path(key)) {
            Ok(Some(entry)) => entry.is_expired(self.ttl),
            _ => true,
        }
    }

    /// Deletes the entry for `key`. Returns `true` if there is no entry left.
    pub fn remove(&self, key: &str) -> bool {
        self.discard(&self.cache_path(key))
    }

    fn try_set_entry<T: Serialize>(&self, key: &str, entry: &CacheEntry<T>) -> Result<(), CacheError> {
        let json = serde_json::to_vec(entry)?;
        let mut encoder = GzEncoder::new(Vec::with_capacity(json.len() / 2), Compression::default());
        encoder.write_all(&json)?;
        let compressed = encoder.finish()?;

        let path = self.cache_path(key);
        let temp_path = path.with_extension("cache.tmp");

        let _guard = self.lock();
        // the directory may have been removed since construction
        fs::create_dir_all(&self.cache_dir)?;
        fs::write(&temp_path, &compressed)?;
        if let Err(err) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }

    fn discard(&self, path: &Path) -> bool {
        let _guard = self.lock();
        match fs::remove_file(path) {
            Ok(()) => {
                debug!("Removed cache file {}", path.display());
                true
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => {
                warn!("Failed to remove cache file {}: {}", path.display(), err);
                false
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// `Ok(None)` when there is no file for the entry.
fn read_entry<T: DeserializeOwned>(path: &Path) -> Result<Option<CacheEntry<T>>, CacheError> {
    let compressed = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let mut json = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(|err| CacheError::Corrupted(err.to_string()))?;

    // envelope errors mean a broken file, data errors only a wrong `T`
    let entry: CacheEntry<Value> = serde_json::from_slice(&json)?;
    let data = T::deserialize(entry.data).map_err(CacheError::Mismatch)?;
    Ok(Some(CacheEntry::with_timestamp(data, entry.timestamp)))
}
