use std::time::Duration;

use crate::metadata::FetchError;

/// Transport used to download remote metadata, isolated behind a trait so the
/// HTTP client can be swapped out (an in-memory double in tests, for example).
pub trait Transport: Send + Sync {
    /// Performs a GET for `url` and returns the whole response body.
    /// Implementations must give up after `timeout`.
    fn get(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError>;
}
