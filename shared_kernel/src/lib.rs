pub mod configuration;
pub mod date_time;
pub mod non_empty_string;
pub mod tracing;

pub use non_empty_string::NonEmptyStringError;
