pub mod builtin;
pub mod remote;

pub use builtin::{BUILTIN_PASSPORTS, fallback_dataset};
pub use remote::{HttpCsvSource, parse_csv};
