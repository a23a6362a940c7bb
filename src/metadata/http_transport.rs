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

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::interfaces::Transport;

use super::FetchError;

/// Blocking HTTP GET transport over one reused client.
///
/// Must not be used from inside an async runtime; the blocking client spins
/// up its own.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the client that every request goes through.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).timeout(timeout).send()?;
        let status = response.status();
        debug!("{} responded with {}", url, status);
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.bytes()?.to_vec())
    }
}

/// Stands in when no HTTP client could be built: every download fails, so
/// metadata comes from the cache alone.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OfflineTransport;

impl Transport for OfflineTransport {
    fn get(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Unavailable(url.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::USER_AGENT;

    #[test]
    fn client_builds_without_touching_the_network() {
        assert!(HttpTransport::new(USER_AGENT).is_ok());
    }

    #[test]
    fn offline_transport_never_downloads() {
        let err = OfflineTransport
            .get("https://metadata.test/countries.json", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(url) if url.ends_with("countries.json")));
    }
}
