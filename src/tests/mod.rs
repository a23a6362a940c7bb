mod phone_number_tests;

use std::{
    collections::HashMap,
    path::Path,
    sync::{
        Arc, Once,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use serde_json::json;

use crate::{FetchError, MetadataConfig, Transport};

pub(crate) const COUNTRY_URL: &str = "https://metadata.test/countries.json";
pub(crate) const PHONE_URL: &str = "https://metadata.test/phone.json";

static LOGGER: Once = Once::new();

pub(crate) fn init_logger() {
    LOGGER.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

/// In-memory transport: serves canned bodies by url and fails for any other
/// url. Clones share the call counter.
#[derive(Clone, Default)]
pub(crate) struct StaticTransport {
    responses: HashMap<String, Vec<u8>>,
    calls: Arc<AtomicUsize>,
}

impl StaticTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_response(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.to_owned(), body.into());
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for StaticTransport {
    fn get(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable(url.to_owned()))
    }
}

pub(crate) fn countries_json() -> Vec<u8> {
    let records = json!([
        {"cca2": "US", "name": {"common": "United States"}, "idd": {"root": "+1", "suffixes": []}},
        {"cca2": "FR", "name": {"common": "France"}, "idd": {"root": "+3", "suffixes": ["3"]}},
        {"cca2": "GB", "name": {"common": "United Kingdom"}, "idd": {"root": "+4", "suffixes": ["4"]}},
        {"cca2": "DZ", "name": {"common": "Algeria"}, "idd": {"root": "+2", "suffixes": ["13"]}},
        {"cca2": "AQ", "name": {"common": "Antarctica"}, "idd": {}},
        {"name": {"common": "Broken"}},
    ]);
    serde_json::to_vec(&records).unwrap()
}

pub(crate) fn phone_json() -> Vec<u8> {
    br#"[["Algeria", "dz", "213"], ["France", "fr", "33"]]"#.to_vec()
}

pub(crate) fn test_config(cache_dir: &Path) -> MetadataConfig {
    MetadataConfig::default()
        .with_cache_dir(cache_dir)
        .with_urls(COUNTRY_URL, PHONE_URL)
}
