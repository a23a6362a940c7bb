mod helper_constants;
mod helper_functions;
mod helper_types;
pub mod digit_normalizer;
pub mod enums;
pub mod errors;
mod number_formatter;
mod phone_number;
pub mod region_resolver;
mod report;

pub use digit_normalizer::{Extension, NormalizedNumber};
pub use enums::{PhoneFormat, PhoneType};
pub use helper_functions::{group_digits, national_rule_for};
pub use helper_types::NationalRule;
pub use number_formatter::NumFormatter;
pub use phone_number::PhoneNumber;
pub use region_resolver::RegionResolver;
pub use report::PhoneNumberReport;
