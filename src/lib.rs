mod interfaces;
mod string_util;
pub mod i18n;
pub mod cache;
pub mod metadata;
pub mod phonenumber;

#[cfg(test)]
mod tests;

pub use interfaces::Transport;
pub use i18n::RegionCode;
pub use cache::{CacheEntry, ContentCache};
pub use metadata::{
    CachePolicy, CallingCodeTable, CountryInfo, FetchError, HttpTransport, MetadataConfig,
    MetadataService, MetadataSource, METADATA_SERVICE,
};
pub use phonenumber::{
    errors::{InvalidInputError, UnsupportedFormatError},
    NumFormatter, PhoneFormat, PhoneNumber, PhoneNumberReport, PhoneType,
};
