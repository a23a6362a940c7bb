mod cache_entry;
mod content_cache;
pub mod errors;

pub use cache_entry::{unix_now, CacheEntry};
pub use content_cache::ContentCache;
pub use errors::CacheError;
