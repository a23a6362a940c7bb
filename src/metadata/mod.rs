mod calling_code_table;
mod config;
pub mod errors;
mod http_transport;
mod metadata_service;
mod metadata_source;

use std::sync::LazyLock;

pub use calling_code_table::{CallingCodeTable, CountryInfo};
pub use config::{
    default_cache_dir, CachePolicy, MetadataConfig, COUNTRY_DATA_KEY, COUNTRY_DATA_URL,
    DEFAULT_CACHE_TTL, DEFAULT_REQUEST_TIMEOUT, PHONE_METADATA_KEY, PHONE_METADATA_URL,
    USER_AGENT,
};
pub use errors::FetchError;
pub use http_transport::HttpTransport;
pub use metadata_service::MetadataService;
pub use metadata_source::MetadataSource;

/// Process-wide metadata, downloaded (or read from cache) on first access.
///
/// Concurrent first use blocks on a single initialization, so the two metadata
/// downloads happen at most once per process.
pub static METADATA_SERVICE: LazyLock<MetadataService> = LazyLock::new(MetadataService::new);
